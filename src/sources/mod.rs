//! Text sources
//!
//! Where raw text comes from. The cipher and cracker never see these; they
//! take the fetched string and do their own alphabet filtering.

mod embedded;
pub mod loader;

pub use embedded::SAMPLE_TEXT;
#[cfg(feature = "http")]
pub use loader::UrlSource;
pub use loader::{EmbeddedSource, FileSource, InlineSource};

use std::io;

/// An opaque provider of raw text
pub trait TextSource {
    /// Fetch the full text
    ///
    /// # Errors
    /// Returns an I/O error if the text cannot be read or downloaded.
    fn fetch(&self) -> io::Result<String>;

    /// Short human-readable origin, for reports
    fn describe(&self) -> String;
}

/// Pick a source from a command-line spec
///
/// - `"sample"`: the embedded corpus
/// - `http://…` / `https://…`: remote document (needs the `http` feature)
/// - anything else: a local file path
///
/// # Errors
/// Returns `io::ErrorKind::Unsupported` for a URL when built without `http`.
pub fn source_from_spec(spec: &str) -> io::Result<Box<dyn TextSource>> {
    if spec == "sample" {
        return Ok(Box::new(EmbeddedSource));
    }

    if spec.starts_with("http://") || spec.starts_with("https://") {
        #[cfg(feature = "http")]
        return Ok(Box::new(UrlSource::new(spec)));

        #[cfg(not(feature = "http"))]
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("Cannot fetch {spec}: rebuild with `--features http`"),
        ));
    }

    Ok(Box::new(FileSource::new(spec)))
}
