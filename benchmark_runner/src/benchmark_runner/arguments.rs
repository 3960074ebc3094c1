//!
//! The benchmark runner arguments.
//!

use clap::Parser;

///
/// The benchmark runner arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// The graph input passed to the measurement program.
    pub graph_path: String,

    /// The repetition count passed to the measurement program.
    pub repetitions: String,
}
