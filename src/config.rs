//! Defaults and command-line options shared by the `cli` and `web` binaries.

use crate::document::Decoding;
use crate::lexer::WordClass;
use crate::stats::Analyzer;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Number of ranked terms returned when no limit is given.
pub const DEFAULT_LIMIT: usize = 50;
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

/// Options controlling a single analysis.
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Maximum number of ranked terms to return
    #[arg(short, long, default_value_t = DEFAULT_LIMIT,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: usize,

    /// Treat any Unicode letter or digit as a word character instead of ASCII only
    #[arg(long, default_value_t = false)]
    pub unicode: bool,

    /// Reject documents that are not valid UTF-8 instead of replacing bad bytes
    #[arg(long, default_value_t = false)]
    pub strict_utf8: bool,
}

impl AnalysisArgs {
    pub fn analyzer(&self) -> Analyzer {
        Analyzer {
            limit: self.limit,
            word_class: if self.unicode {
                WordClass::Unicode
            } else {
                WordClass::Ascii
            },
            decoding: if self.strict_utf8 {
                Decoding::Strict
            } else {
                Decoding::Lossy
            },
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "web", about = "Upload a document and rank its terms")]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Largest accepted upload in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Directory served under /static
    #[arg(long, default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

#[derive(Parser, Debug)]
#[command(name = "cli", about = "Rank the terms of local documents")]
pub struct CliArgs {
    /// Documents to analyze (.txt, .pdf, .epub or any text file); prompts when omitted
    pub files: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}
