//! Line filtering by include/exclude word patterns
//!
//! Every word is compiled into an unanchored regular expression. A line is
//! checked against both sets independently:
//!
//! ```text
//! -i ERROR,FATAL            Only lines mentioning ERROR or FATAL
//! -e DEBUG,VERBOSE          Every line except DEBUG/VERBOSE ones
//! -i Activity -e DEBUG      Non-DEBUG lines, plus DEBUG lines mentioning Activity
//! ```
//!
//! Words are separated by literal commas without escaping, see [`split_words`].

pub mod error;
pub mod matcher;
pub mod pattern;

pub use error::PatternError;
pub use matcher::{Decision, DuplicatePolicy, LineFilter};
pub use pattern::{PatternSet, split_words};
