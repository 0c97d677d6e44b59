use crate::error::{Error, Result};
use epub::doc::EpubDoc;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// How raw bytes are turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoding {
    /// Invalid UTF-8 is an error.
    Strict,
    /// Invalid sequences become U+FFFD, which normalizes to a separator.
    #[default]
    Lossy,
}

/// One uploaded or loaded file. Owned by a single request.
#[derive(Debug)]
pub struct Document {
    pub filename: String,
    pub raw_contents: Vec<u8>,
}

impl Document {
    pub fn new(filename: impl Into<String>, raw_contents: Vec<u8>) -> Self {
        Document {
            filename: filename.into(),
            raw_contents,
        }
    }

    /// Loads a document from disk. PDF and EPUB files are text-extracted,
    /// anything else is read as raw bytes.
    pub fn from_path(path: &Path) -> Result<Self> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let lower = filename.to_lowercase();
        tracing::debug!(filename = %filename, "reading document");
        if lower.ends_with(".pdf") {
            process_pdf(path, filename)
        } else if lower.ends_with(".epub") {
            process_epub(path, filename)
        } else {
            process_txt(path, filename)
        }
    }

    pub fn text(&self, decoding: Decoding) -> Result<Cow<'_, str>> {
        decode(&self.raw_contents, decoding)
    }
}

pub fn decode(bytes: &[u8], decoding: Decoding) -> Result<Cow<'_, str>> {
    match decoding {
        Decoding::Strict => Ok(Cow::Borrowed(std::str::from_utf8(bytes)?)),
        Decoding::Lossy => Ok(String::from_utf8_lossy(bytes)),
    }
}

fn process_pdf(path: &Path, filename: String) -> Result<Document> {
    let text = pdf_extract::extract_text(path).map_err(|e| Error::Extract {
        filename: filename.clone(),
        reason: e.to_string(),
    })?;
    Ok(Document::new(filename, text.into_bytes()))
}

fn process_epub(path: &Path, filename: String) -> Result<Document> {
    let mut doc = EpubDoc::new(path).map_err(|e| Error::Extract {
        filename: filename.clone(),
        reason: e.to_string(),
    })?;
    let mut content = String::new();
    loop {
        if let Some((chapter, _mime)) = doc.get_current_str() {
            content.push_str(&html_to_text(&chapter, &filename)?);
            content.push('\n');
        }
        if !doc.go_next() {
            break;
        }
    }
    Ok(Document::new(filename, content.into_bytes()))
}

fn process_txt(path: &Path, filename: String) -> Result<Document> {
    let raw_contents = fs::read(path)?;
    Ok(Document::new(filename, raw_contents))
}

/// Column width handed to html2text. Words longer than this are wrapped
/// mid-word, so it is far wider than any real token.
const HTML_WRAP_WIDTH: usize = 4096;

/// Renders an XHTML chapter to plain text, decoding entities and dropping
/// comments and style/script bodies.
fn html_to_text(xhtml: &str, filename: &str) -> Result<String> {
    html2text::config::plain()
        .string_from_read(xhtml.as_bytes(), HTML_WRAP_WIDTH)
        .map_err(|e| Error::Extract {
            filename: filename.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_decoding_rejects_invalid_utf8() {
        let doc = Document::new("bad.txt", vec![b'o', b'k', 0xff, b' ', b'x']);
        assert!(matches!(doc.text(Decoding::Strict), Err(Error::Decode(_))));
    }

    #[test]
    fn lossy_decoding_replaces_invalid_utf8() {
        let doc = Document::new("bad.txt", vec![b'o', b'k', 0xff, b'x']);
        assert_eq!(doc.text(Decoding::Lossy).unwrap(), "ok\u{fffd}x");
    }

    #[test]
    fn valid_utf8_is_borrowed_in_strict_mode() {
        let bytes = "plain text".as_bytes();
        assert!(matches!(decode(bytes, Decoding::Strict), Ok(Cow::Borrowed("plain text"))));
    }

    #[test]
    fn chapters_are_rendered_without_markup() {
        let xhtml = "<html><head><style>p { color: red }</style></head><body>\
                     <p>Tom &amp; Jerry&#8217;s <!-- a > b --> tale</p></body></html>";
        let text = html_to_text(xhtml, "book.epub").unwrap();
        assert_eq!(
            crate::lexer::terms(&text, crate::lexer::WordClass::Ascii),
            vec!["tom", "jerry", "s", "tale"]
        );
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("term-stats-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn corrupt_pdf_is_an_extract_error() {
        let dir = scratch_dir("pdf");
        let path = dir.join("broken.pdf");
        fs::write(&path, "this is not a pdf").unwrap();

        let err = Document::from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Extract { ref filename, .. } if filename == "broken.pdf"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn corrupt_epub_is_an_extract_error() {
        let dir = scratch_dir("epub");
        let path = dir.join("Broken.EPUB");
        fs::write(&path, "not a zip archive").unwrap();

        let err = Document::from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Extract { ref filename, .. } if filename == "Broken.EPUB"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn from_path_reads_plain_files() {
        let dir = scratch_dir("txt");
        let path = dir.join("notes.md");
        fs::write(&path, "a a b").unwrap();

        let doc = Document::from_path(&path).unwrap();
        assert_eq!(doc.filename, "notes.md");
        assert_eq!(doc.raw_contents, b"a a b");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn from_path_reports_missing_files() {
        let err = Document::from_path(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
