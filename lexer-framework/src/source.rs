use common_framework::LexerError;
use std::path::{Path, PathBuf};

/// Where a lexer gets its text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Text(String),
    File(PathBuf),
}

impl Source {
    /// Builds a source from optional text and file arguments.
    /// Exactly one of them must be supplied.
    pub fn from_parts(text: Option<String>, file: Option<PathBuf>) -> Result<Self, LexerError> {
        match (text, file) {
            (Some(text), None) => Ok(Source::Text(text)),
            (None, Some(file)) => Ok(Source::File(file)),
            _ => Err(LexerError::InvalidSource),
        }
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Source::Text(value.to_string())
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Source::Text(value)
    }
}

/// Loads the raw bytes behind a file path.
///
/// The lexer never touches the filesystem itself; file-backed construction
/// goes through an implementation of this trait.
pub trait SourceLoader {
    fn load(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_exactly_one() {
        assert_eq!(
            Source::from_parts(Some("abc".into()), None).unwrap(),
            Source::Text("abc".into())
        );
        assert_eq!(
            Source::from_parts(None, Some("a.txt".into())).unwrap(),
            Source::File("a.txt".into())
        );
        assert!(matches!(
            Source::from_parts(None, None),
            Err(LexerError::InvalidSource)
        ));
        assert!(matches!(
            Source::from_parts(Some("abc".into()), Some("a.txt".into())),
            Err(LexerError::InvalidSource)
        ));
    }
}
