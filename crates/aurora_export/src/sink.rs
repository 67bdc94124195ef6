//! Image sinks: where finished rasters are handed off

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::targets::Target;
use crate::Result;

/// Accepts finished images for their targets
pub trait ImageSink {
    fn accept(&mut self, image: &RgbImage, target: &Target) -> Result<()>;
}

/// Writes PNG files under a root directory
#[derive(Debug, Clone)]
pub struct PngDirSink {
    root: PathBuf,
}

impl PngDirSink {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of `target` under this sink
    pub fn path_for(&self, target: &Target) -> PathBuf {
        self.root.join(&target.path)
    }
}

impl ImageSink for PngDirSink {
    fn accept(&mut self, image: &RgbImage, target: &Target) -> Result<()> {
        let path = self.path_for(target);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        image.save_with_format(&path, ImageFormat::Png)?;
        info!(
            "{}x{} -> {}",
            image.width(),
            image.height(),
            path.display()
        );
        Ok(())
    }
}

/// Keeps images in memory, in the order they arrived
#[derive(Debug, Default)]
pub struct MemorySink {
    pub images: Vec<(Target, RgbImage)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&RgbImage> {
        let path = path.as_ref();
        self.images
            .iter()
            .find(|(t, _)| t.path == path)
            .map(|(_, img)| img)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageSink for MemorySink {
    fn accept(&mut self, image: &RgbImage, target: &Target) -> Result<()> {
        self.images.push((target.clone(), image.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_lookup() {
        let mut sink = MemorySink::new();
        let target = Target::square("web/favicon.png", 2);
        sink.accept(&RgbImage::new(2, 2), &target).unwrap();
        assert_eq!(sink.len(), 1);
        assert!(sink.get("web/favicon.png").is_some());
        assert!(sink.get("web/other.png").is_none());
    }

    #[test]
    fn test_png_sink_creates_directories() {
        let root = std::env::temp_dir().join(format!("aurora-sink-{}", std::process::id()));
        let mut sink = PngDirSink::new(&root);
        let target = Target::square("nested/dir/icon.png", 4);
        sink.accept(&RgbImage::new(4, 4), &target).unwrap();

        let written = image::open(sink.path_for(&target)).unwrap();
        assert_eq!((written.width(), written.height()), (4, 4));
        std::fs::remove_dir_all(&root).unwrap();
    }
}
