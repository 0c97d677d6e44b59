pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod lexer;
pub mod stats;

pub use document::{Decoding, Document};
pub use error::{Error, Result};
pub use lexer::WordClass;
pub use stats::{compute_term_stats, Analysis, Analyzer, FrequencyTable, Report, ResultSet, TermStat};
