//! Materializes a generation plan on disk.
//! Directories and files are applied one at a time in plan order; the first
//! failure aborts the run and anything already written stays in place.

use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::plan::OutputNode;

/// File system operations the processor needs.
pub trait Filesystem {
    /// Creates `path` and all missing ancestors; a no-op if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Creates or overwrites the file at `path` with UTF-8 `content`.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Production file system backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(Error::IoError)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(Error::IoError)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// What happened to a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The directory was created
    CreateDirectory,
    /// The directory was already present
    ExistingDirectory,
    /// The file did not exist and was written
    CreateFile,
    /// An existing file was replaced
    OverwriteFile,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Action::CreateDirectory => "Created directory",
            Action::ExistingDirectory => "Directory exists",
            Action::CreateFile => "Created file",
            Action::OverwriteFile => "Overwritten file",
        };
        f.write_str(action)
    }
}

/// Outcome of applying one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedNode {
    /// What was done
    pub action: Action,
    /// Path the node was applied to, resolved against the output root
    pub target: PathBuf,
}

impl fmt::Display for ProcessedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}'", self.action, self.target.display())
    }
}

/// Applies plan nodes below an output root.
pub struct Processor<'a> {
    fs: &'a dyn Filesystem,
    output_root: PathBuf,
}

impl<'a> Processor<'a> {
    /// Creates a processor writing through `fs` below `output_root`.
    pub fn new<P: Into<PathBuf>>(fs: &'a dyn Filesystem, output_root: P) -> Self {
        Self { fs, output_root: output_root.into() }
    }

    /// Resolves a plan path against the output root.
    pub fn resolve_target_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.output_root.join(path)
        }
    }

    /// Applies a single node.
    ///
    /// A file whose parent directory is missing is still written: the parent
    /// is ensured first.
    pub fn process(&self, node: &OutputNode) -> Result<ProcessedNode> {
        let target = self.resolve_target_path(node.path());
        let existed = self.fs.exists(&target);

        let action = match node {
            OutputNode::Directory { .. } => {
                debug!("Ensuring directory: {}", target.display());
                self.fs.create_dir_all(&target)?;
                if existed {
                    Action::ExistingDirectory
                } else {
                    Action::CreateDirectory
                }
            }
            OutputNode::File { content, .. } => {
                if let Some(parent) = target.parent() {
                    self.fs.create_dir_all(parent)?;
                }
                debug!("Writing file: {}", target.display());
                self.fs.write_file(&target, content)?;
                if existed {
                    Action::OverwriteFile
                } else {
                    Action::CreateFile
                }
            }
        };

        Ok(ProcessedNode { action, target })
    }

    /// Applies every node in order, echoing one confirmation line per node.
    ///
    /// # Errors
    /// * The first file system error, after which no further node is applied
    pub fn apply(&self, nodes: &[OutputNode]) -> Result<Vec<ProcessedNode>> {
        let mut processed = Vec::with_capacity(nodes.len());
        for node in nodes {
            let result = self.process(node)?;
            println!("{result}");
            processed.push(result);
        }
        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_path() {
        let processor = Processor::new(&LocalFilesystem, "/tmp/out");

        assert_eq!(
            processor.resolve_target_path(Path::new("app/manifest.json")),
            PathBuf::from("/tmp/out/app/manifest.json")
        );
        assert_eq!(processor.resolve_target_path(Path::new("/abs")), PathBuf::from("/abs"));
    }

    #[test]
    fn test_processed_node_display() {
        let node = ProcessedNode { action: Action::CreateFile, target: PathBuf::from("app/README.md") };
        assert_eq!(node.to_string(), "Created file: 'app/README.md'");
    }
}
