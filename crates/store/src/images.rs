//! Resolution of local product image names.
//!
//! Catalog records may name a bundled image (`"imageRes": "arroz"`). A
//! resolver turns the name into an [`ImageHandle`]; a name that does not
//! resolve simply leaves the product without a local image.

use std::path::{Path, PathBuf};

use apa_core::ImageHandle;

/// Extensions tried, in order, when looking up an image by name.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Maps image names to handles.
pub trait ImageResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<ImageHandle>;
}

/// Resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageResolver for NoImages {
    fn resolve(&self, _name: &str) -> Option<ImageHandle> {
        None
    }
}

/// Looks for `<dir>/<name>.<ext>` on disk.
#[derive(Debug, Clone)]
pub struct ImageDir {
    dir: PathBuf,
}

impl ImageDir {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImageResolver for ImageDir {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        // Names are bare resource identifiers, never paths.
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return None;
        }

        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
            .map(ImageHandle::new)
    }
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> Option<ImageHandle> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        self(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_image_dir_finds_first_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("arroz.jpg"), b"jpg").unwrap();
        fs::write(dir.path().join("arroz.webp"), b"webp").unwrap();

        let handle = ImageDir::new(dir.path()).resolve("arroz").unwrap();
        assert_eq!(handle.path(), dir.path().join("arroz.jpg"));
    }

    #[test]
    fn test_image_dir_missing() {
        let dir = TempDir::new().unwrap();
        assert!(ImageDir::new(dir.path()).resolve("leche").is_none());
    }

    #[test]
    fn test_image_dir_rejects_paths() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x.png"), b"png").unwrap();
        let resolver = ImageDir::new(dir.path().join("sub"));
        assert!(resolver.resolve("../x").is_none());
        assert!(resolver.resolve("").is_none());
    }

    #[test]
    fn test_no_images() {
        assert!(NoImages.resolve("arroz").is_none());
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |name: &str| (name == "pan").then(|| ImageHandle::new("pan.png"));
        assert!(resolver.resolve("pan").is_some());
        assert!(resolver.resolve("sal").is_none());
    }
}
