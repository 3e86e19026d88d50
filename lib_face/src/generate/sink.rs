use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error};

use super::GenerateError;
use crate::constants::FILE_EXT;

/// Destination for finished images, keyed by their output label.
pub trait OutputSink {
    fn emit(&mut self, label: &str, data: &[u8]) -> io::Result<()>;
}

/// Writes each image to `<root>/<label>.png`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Uses an existing directory as is.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates `root` if needed and removes the `*.png` files a previous run
    /// left directly inside it. Subdirectories and other files are kept.
    ///
    /// Fails when `root` is one of `inputs`, since clearing it would delete
    /// the sprites being read.
    pub fn prepare(root: impl Into<PathBuf>, inputs: &[&Path]) -> Result<Self, GenerateError> {
        let root = root.into();
        fs::create_dir_all(&root)?;

        let canonical = fs::canonicalize(&root)?;
        for input in inputs {
            if fs::canonicalize(input).is_ok_and(|input| input == canonical) {
                error!(
                    "Output directory {} is also input {}",
                    root.display(),
                    input.display()
                );
                return Err(GenerateError::OutputIsInput { dir: root });
            }
        }

        let mut removed = 0;
        for entry in fs::read_dir(&root)? {
            let path = entry?.path();
            let is_png = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXT));
            if is_png && path.is_file() {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        debug!(
            "Prepared {}: removed {} previous images",
            root.display(),
            removed
        );
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, label: &str) -> PathBuf {
        self.root.join(format!("{label}.{FILE_EXT}"))
    }
}

impl OutputSink for DirectorySink {
    fn emit(&mut self, label: &str, data: &[u8]) -> io::Result<()> {
        let path = self.path_for(label);
        fs::write(&path, data)?;
        debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}

/// Keeps every emitted image in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub outputs: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.outputs.iter().map(|(label, _)| label.as_str())
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, label: &str, data: &[u8]) -> io::Result<()> {
        self.outputs.push((label.to_owned(), data.to_vec()));
        Ok(())
    }
}
