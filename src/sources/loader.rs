//! Text source implementations
//!
//! Local files, the embedded sample, and (with the `http` feature) remote
//! documents such as Project Gutenberg texts.

use super::{SAMPLE_TEXT, TextSource};
use std::fs;
use std::io;
use std::path::PathBuf;

/// The sample corpus compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl TextSource for EmbeddedSource {
    fn fetch(&self) -> io::Result<String> {
        Ok(SAMPLE_TEXT.to_string())
    }

    fn describe(&self) -> String {
        "embedded sample".to_string()
    }
}

/// Literal text given on the command line
#[derive(Debug, Clone)]
pub struct InlineSource(pub String);

impl TextSource for InlineSource {
    fn fetch(&self) -> io::Result<String> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "inline text".to_string()
    }
}

/// A local text file
///
/// # Examples
/// ```no_run
/// use vigenere_cracker::sources::{FileSource, TextSource};
///
/// let text = FileSource::new("data/sample_english.txt").fetch().unwrap();
/// println!("Loaded {} characters", text.len());
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn fetch(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A document fetched over HTTP(S)
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct UrlSource {
    url: String,
}

#[cfg(feature = "http")]
impl UrlSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "http")]
impl TextSource for UrlSource {
    fn fetch(&self) -> io::Result<String> {
        use std::io::Read;

        let response = ureq::get(&self.url)
            .set("User-Agent", concat!("vigenere_cracker/", env!("CARGO_PKG_VERSION")))
            .call()
            .map_err(|e| io::Error::other(format!("Failed to fetch {}: {e}", self.url)))?;

        let mut text = String::new();
        response.into_reader().read_to_string(&mut text)?;
        Ok(text)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
