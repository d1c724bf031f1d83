//! Sprite catalog: maps sprite names to atlas regions.

use crate::error::GenError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// A rectangular region in the sprite atlas.
///
/// Handles are owned by the catalog and immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteHandle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// On-disk atlas descriptor: `{ frames: [ { filename, frame: {x,y,w,h} } ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasFile {
    pub frames: Vec<AtlasFrame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasFrame {
    pub filename: String,
    pub frame: SpriteHandle,
}

/// Name -> handle table built from a sprite atlas.
///
/// Read-only after construction; may be shared across concurrent generation
/// calls through [`SharedCatalog`].
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    sprites: HashMap<String, SpriteHandle>,
}

impl SpriteCatalog {
    /// Build the lookup table from a parsed atlas.
    ///
    /// The file extension is stripped from each frame's filename to form the
    /// lookup key. Duplicate keys keep the last entry.
    pub fn from_atlas(atlas: AtlasFile) -> Self {
        let mut sprites = HashMap::with_capacity(atlas.frames.len());
        for frame in atlas.frames {
            sprites.insert(strip_extension(&frame.filename).to_string(), frame.frame);
        }
        Self { sprites }
    }

    pub fn load_from_string(content: &str) -> Result<Self, GenError> {
        let atlas: AtlasFile = if content.trim_start().starts_with('{') {
            serde_json::from_str(content)
                .map_err(|e| GenError::Parse(format!("JSON parse error: {}", e)))?
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| GenError::Parse(format!("YAML parse error: {}", e)))?
        };
        Ok(Self::from_atlas(atlas))
    }

    /// Load an atlas descriptor from disk (JSON or YAML).
    ///
    /// This is the only asynchronous operation in the crate; everything
    /// downstream of a loaded catalog runs to completion synchronously.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::load_from_string(&content)
    }

    /// Resolve a sprite name to its handle.
    ///
    /// The query is extension-stripped the same way keys are, so "tree" and
    /// "tree.png" resolve to the same handle.
    pub fn resolve(&self, name: &str) -> Result<SpriteHandle, GenError> {
        self.sprites
            .get(strip_extension(name))
            .copied()
            .ok_or_else(|| GenError::UnknownSprite(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Shared slot holding the catalog once loading completes.
///
/// Readers that arrive before [`install`](Self::install) get
/// `CatalogNotReady`; after installation the catalog is read-only and safe to
/// share across concurrent generation calls.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<OnceLock<SpriteCatalog>>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the loaded catalog. Returns false if one was already installed.
    pub fn install(&self, catalog: SpriteCatalog) -> bool {
        self.inner.set(catalog).is_ok()
    }

    pub fn get(&self) -> Result<&SpriteCatalog, GenError> {
        self.inner.get().ok_or(GenError::CatalogNotReady)
    }

    pub fn is_ready(&self) -> bool {
        self.inner.get().is_some()
    }
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_atlas() -> AtlasFile {
        AtlasFile {
            frames: vec![
                AtlasFrame {
                    filename: "tree.png".to_string(),
                    frame: SpriteHandle { x: 0.0, y: 0.0, w: 132.0, h: 192.0 },
                },
                AtlasFrame {
                    filename: "rock.png".to_string(),
                    frame: SpriteHandle { x: 132.0, y: 0.0, w: 80.0, h: 60.0 },
                },
            ],
        }
    }

    #[test]
    fn test_resolve_known_sprite() {
        let catalog = SpriteCatalog::from_atlas(test_atlas());

        let handle = catalog.resolve("tree").unwrap();
        assert_eq!(handle.w, 132.0);
        assert_eq!(handle.h, 192.0);
    }

    #[test]
    fn test_resolve_with_extension() {
        let catalog = SpriteCatalog::from_atlas(test_atlas());

        // Queries keep working whether or not the extension is included
        let bare = catalog.resolve("rock").unwrap();
        let with_ext = catalog.resolve("rock.png").unwrap();
        assert_eq!(bare, with_ext);
    }

    #[test]
    fn test_resolve_unknown_sprite() {
        let catalog = SpriteCatalog::from_atlas(test_atlas());

        let err = catalog.resolve("cactus").unwrap_err();
        assert!(matches!(err, GenError::UnknownSprite(name) if name == "cactus"));
    }

    #[test]
    fn test_duplicate_filenames_keep_last() {
        let atlas = AtlasFile {
            frames: vec![
                AtlasFrame {
                    filename: "tree.png".to_string(),
                    frame: SpriteHandle { x: 0.0, y: 0.0, w: 10.0, h: 10.0 },
                },
                AtlasFrame {
                    filename: "tree.jpg".to_string(),
                    frame: SpriteHandle { x: 50.0, y: 0.0, w: 20.0, h: 20.0 },
                },
            ],
        };

        let catalog = SpriteCatalog::from_atlas(atlas);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve("tree").unwrap().w, 20.0);
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("tree.png"), "tree");
        assert_eq!(strip_extension("tree"), "tree");
        assert_eq!(strip_extension("a.b.c"), "a.b");
        assert_eq!(strip_extension(".hidden"), ".hidden");
    }

    #[test]
    fn test_load_from_json_string() {
        let json = r#"{ "frames": [ { "filename": "cone.png", "frame": { "x": 1, "y": 2, "w": 3, "h": 4 } } ] }"#;
        let catalog = SpriteCatalog::load_from_string(json).unwrap();
        assert_eq!(catalog.resolve("cone").unwrap().h, 4.0);
    }

    #[test]
    fn test_load_from_yaml_string() {
        let yaml = "frames:\n  - filename: cone.png\n    frame: { x: 1, y: 2, w: 3, h: 4 }\n";
        let catalog = SpriteCatalog::load_from_string(yaml).unwrap();
        assert_eq!(catalog.resolve("cone").unwrap().w, 3.0);
    }

    #[test]
    fn test_load_invalid_content() {
        let err = SpriteCatalog::load_from_string("{ not json").unwrap_err();
        assert!(matches!(err, GenError::Parse(_)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.json");
        std::fs::write(
            &path,
            r#"{ "frames": [ { "filename": "barrier.png", "frame": { "x": 0, "y": 0, "w": 24, "h": 24 } } ] }"#,
        )
        .unwrap();

        let catalog = SpriteCatalog::load_from_file(&path).await.unwrap();
        assert!(catalog.resolve("barrier").is_ok());
    }

    #[test]
    fn test_shared_catalog_readiness() {
        let shared = SharedCatalog::new();
        assert!(!shared.is_ready());
        assert!(matches!(shared.get(), Err(GenError::CatalogNotReady)));

        assert!(shared.install(SpriteCatalog::from_atlas(test_atlas())));
        assert!(shared.is_ready());
        assert_eq!(shared.get().unwrap().len(), 2);

        // Second install is rejected, first catalog stays visible
        assert!(!shared.install(SpriteCatalog::from_atlas(AtlasFile { frames: vec![] })));
        assert_eq!(shared.get().unwrap().len(), 2);
    }

    #[test]
    fn test_shared_catalog_clones_see_install() {
        let shared = SharedCatalog::new();
        let reader = shared.clone();
        shared.install(SpriteCatalog::from_atlas(test_atlas()));
        assert!(reader.is_ready());
    }
}
