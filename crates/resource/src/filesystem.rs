//! Filesystem-backed image provider.
//!
//! Image references are resolved relative to a base directory (normally the
//! directory holding the markdown file). References that are absolute, carry
//! a URL scheme, or climb out of the base directory are treated as missing.

use log::debug;
use quire_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    /// A provider rooted at the directory containing `file`.
    pub fn beside<P: AsRef<Path>>(file: P) -> Self {
        let dir = file
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::new(dir)
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, reference: &str) -> Option<PathBuf> {
        if reference.contains("://") || reference.starts_with("data:") {
            return None;
        }
        let relative = Path::new(reference);
        if relative.is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(relative);
        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        // Not on disk (yet): refuse any parent traversal outright.
        if relative.components().any(|c| matches!(c, Component::ParentDir)) {
            return None;
        }
        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve(path).ok_or_else(|| {
            debug!("Refusing to resolve image reference '{}' outside {:?}", path, self.base_path);
            ResourceError::NotFound(format!("{} (outside resource root)", path))
        })?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
