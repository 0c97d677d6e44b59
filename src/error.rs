use std::io;
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The document bytes are not valid UTF-8 and strict decoding was requested.
    #[error("document is not valid UTF-8: {0}")]
    Decode(#[from] Utf8Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Text extraction from a PDF or EPUB container failed.
    #[error("failed to extract text from {filename}: {reason}")]
    Extract { filename: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
