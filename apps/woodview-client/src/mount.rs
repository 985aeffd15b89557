use anyhow::Context;
use std::path::{Path, PathBuf};

/// The render target: a file the SVG document is written to on each redraw.
///
/// Creation is the startup check — a mount that cannot be written means the
/// application cannot render and must abort initialization.
pub struct SvgMount {
    path: PathBuf,
}

impl SvgMount {
    pub fn create(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        std::fs::write(&path, "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>\n")
            .with_context(|| format!("no mount at {}", path.display()))?;
        Ok(Self { path })
    }

    /// Replace the mounted document with fresh markup.
    pub fn present(&self, markup: &str) -> std::io::Result<()> {
        std::fs::write(&self.path, markup)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_writes_an_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let mount = SvgMount::create(dir.path().join("mount.svg")).unwrap();
        let contents = std::fs::read_to_string(mount.path()).unwrap();
        assert!(contents.starts_with("<svg"));
    }

    #[test]
    fn missing_mount_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = SvgMount::create(dir.path().join("nope").join("mount.svg"));
        assert!(result.is_err());
    }

    #[test]
    fn present_replaces_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let mount = SvgMount::create(dir.path().join("mount.svg")).unwrap();
        mount.present("<svg>a</svg>").unwrap();
        mount.present("<svg>b</svg>").unwrap();
        assert_eq!(std::fs::read_to_string(mount.path()).unwrap(), "<svg>b</svg>");
    }
}
