//!
//! The command argument template.
//!

use std::str::FromStr;

use regex::Regex;

use crate::invoker::arguments::InvocationArguments;
use crate::invoker::command::error::Error;

///
/// A named value substituted into a template.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The graph input path.
    Graph,
    /// The repetition count.
    Reps,
}

impl Placeholder {
    /// All recognized placeholders.
    pub const ALL: [Self; 2] = [Self::Graph, Self::Reps];
}

impl FromStr for Placeholder {
    type Err = String;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "graph" => Ok(Self::Graph),
            "reps" => Ok(Self::Reps),
            name => Err(name.to_owned()),
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Graph => write!(f, "graph"),
            Self::Reps => write!(f, "reps"),
        }
    }
}

///
/// A template segment.
///
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Copied as is.
    Literal(String),
    /// Replaced with an invocation argument.
    Placeholder(Placeholder),
}

///
/// A single command token with `$name`, `${name}` placeholders and `$$` escapes.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// The parsed segments.
    segments: Vec<Segment>,
}

impl Template {
    ///
    /// Returns the placeholders in order of appearance.
    ///
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(*placeholder),
            Segment::Literal(_) => None,
        })
    }

    ///
    /// Returns the text if the template has no placeholders.
    ///
    pub fn literal(&self) -> Option<String> {
        let mut result = String::new();
        for segment in self.segments.iter() {
            match segment {
                Segment::Literal(literal) => result.push_str(literal),
                Segment::Placeholder(_) => return None,
            }
        }
        Some(result)
    }

    ///
    /// Substitutes the invocation arguments into the template.
    ///
    pub fn substitute(&self, arguments: &InvocationArguments) -> String {
        let mut result = String::new();
        for segment in self.segments.iter() {
            match segment {
                Segment::Literal(literal) => result.push_str(literal),
                Segment::Placeholder(placeholder) => result.push_str(arguments.get(*placeholder)),
            }
        }
        result
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let regex = Regex::new(
            r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\}|(?P<invalid>))",
        )
        .expect("Always valid");

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;
        for captures in regex.captures_iter(string) {
            let whole = captures.get(0).expect("Always exists");
            literal.push_str(&string[last..whole.start()]);
            last = whole.end();

            if captures.name("escaped").is_some() {
                literal.push('$');
                continue;
            }
            let name = match captures.name("named").or_else(|| captures.name("braced")) {
                Some(name) => name.as_str(),
                None => {
                    return Err(Error::InvalidPlaceholder {
                        template: string.to_owned(),
                        position: whole.start(),
                    })
                }
            };
            let placeholder =
                Placeholder::from_str(name).map_err(|name| Error::UnknownPlaceholder {
                    template: string.to_owned(),
                    name,
                })?;

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(placeholder));
        }
        literal.push_str(&string[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Placeholder;
    use super::Template;
    use crate::invoker::arguments::InvocationArguments;
    use crate::invoker::command::error::Error;

    #[test]
    fn substitute_named_and_braced() {
        let template = Template::from_str("--input=${graph}.pb:$reps").expect("Valid template");
        let arguments = InvocationArguments::new("graphs/grid", "5");

        assert_eq!(template.substitute(&arguments), "--input=graphs/grid.pb:5");
        assert_eq!(
            template.placeholders().collect::<Vec<_>>(),
            vec![Placeholder::Graph, Placeholder::Reps]
        );
    }

    #[test]
    fn escaped_dollar_is_literal() {
        let template = Template::from_str("$$graph").expect("Valid template");

        assert_eq!(template.literal(), Some("$graph".to_owned()));
    }

    #[test]
    fn error_unknown_placeholder() {
        let result = Template::from_str("$graphs");

        assert_eq!(
            result,
            Err(Error::UnknownPlaceholder {
                template: "$graphs".to_owned(),
                name: "graphs".to_owned(),
            })
        );
    }

    #[test]
    fn error_dangling_dollar() {
        assert_eq!(
            Template::from_str("reps$"),
            Err(Error::InvalidPlaceholder {
                template: "reps$".to_owned(),
                position: 4,
            })
        );
        assert!(matches!(
            Template::from_str("${graph"),
            Err(Error::InvalidPlaceholder { position: 0, .. })
        ));
    }
}
