//!
//! The aggregated measurement record.
//!

pub mod error;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::aggregator::category::Category;

use self::error::Error;

///
/// The measurements of each category in the order they were reported.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// UID-based measurements.
    pub map: Vec<i128>,
    /// Array-based measurements.
    pub array: Vec<i128>,
    /// Vector-based measurements.
    pub vector: Vec<i128>,
}

impl ResultRecord {
    ///
    /// Appends a measurement to the sequence of `category`.
    ///
    pub fn push(&mut self, category: Category, value: i128) {
        self.get_mut(category).push(value);
    }

    ///
    /// Returns the measurements of `category`.
    ///
    pub fn get(&self, category: Category) -> &[i128] {
        match category {
            Category::Map => self.map.as_slice(),
            Category::Array => self.array.as_slice(),
            Category::Vector => self.vector.as_slice(),
        }
    }

    ///
    /// Returns the total number of measurements.
    ///
    pub fn len(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|category| self.get(category).len())
            .sum()
    }

    ///
    /// Whether no measurements have been collected.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Writes the record as JSON, replacing the file if it exists.
    ///
    pub fn write_to_file(&self, path: &Path) -> Result<(), Error> {
        let content = serde_json::to_string_pretty(self).expect("Always valid");
        std::fs::write(path, content).map_err(|error| Error::Writing {
            error,
            path: path.to_path_buf(),
        })
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<i128> {
        match category {
            Category::Map => &mut self.map,
            Category::Array => &mut self.array,
            Category::Vector => &mut self.vector,
        }
    }
}

impl TryFrom<&Path> for ResultRecord {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
            error,
            path: path.to_path_buf(),
        })
    }
}
