//! Planned output of a generation run.

use std::fmt;
use std::path::{Path, PathBuf};

/// A single planned unit of output, prior to being materialized on disk.
///
/// Paths are relative to the directory the generator runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputNode {
    /// Directory to ensure, including missing ancestors
    Directory { path: PathBuf },
    /// File to create or overwrite
    File { path: PathBuf, content: String },
}

impl OutputNode {
    /// Creates a directory node.
    pub fn directory<P: Into<PathBuf>>(path: P) -> Self {
        Self::Directory { path: path.into() }
    }

    /// Creates a file node.
    pub fn file<P: Into<PathBuf>, S: Into<String>>(path: P, content: S) -> Self {
        Self::File { path: path.into(), content: content.into() }
    }

    /// Relative path of the node.
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory { path } | Self::File { path, .. } => path,
        }
    }

    /// Whether the node is a file to write.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Content of a file node, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content, .. } => Some(content),
            Self::Directory { .. } => None,
        }
    }
}

impl fmt::Display for OutputNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory { path } => write!(f, "directory: '{}'", path.display()),
            Self::File { path, .. } => write!(f, "file: '{}'", path.display()),
        }
    }
}

/// Serializes a JSON-shaped file body, pretty printed with a trailing newline.
pub fn to_json<T: serde::Serialize>(value: &T) -> crate::error::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_node_display() {
        let dir = OutputNode::directory("app/app-backend");
        assert_eq!(format!("{dir}"), "directory: 'app/app-backend'");

        let file = OutputNode::file("app/manifest.json", "{}");
        assert_eq!(format!("{file}"), "file: 'app/manifest.json'");
        assert_eq!(file.content(), Some("{}"));
        assert!(dir.content().is_none());
    }
}
