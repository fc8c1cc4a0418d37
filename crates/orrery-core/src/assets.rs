use serde::{Deserialize, Serialize};

use crate::bodies::BODIES;
use crate::scene::SKYBOX_TEXTURE;

/// Asset manifest telling the host exactly what to fetch: the body textures
/// (in texture-slot order), the skybox image, the audio track, and the
/// label dataset URL. Serialized to JSON once at init and read by the
/// loader on the TypeScript side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Texture list; index == the `texture_slot` in render instances.
    pub textures: Vec<TextureDescriptor>,
    /// Skybox image path.
    pub skybox: String,
    /// Background audio track.
    pub audio: AudioDescriptor,
    /// URL of the name → description JSON document.
    pub labels_url: String,
}

/// One texture to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Body name the texture belongs to.
    pub name: String,
    /// Relative path to the image file.
    pub path: String,
}

/// The background music track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDescriptor {
    pub path: String,
    pub volume: f32,
    pub looped: bool,
}

impl AssetManifest {
    /// Build the manifest from the static body table.
    pub fn new() -> Self {
        let textures = BODIES
            .iter()
            .map(|b| TextureDescriptor {
                name: b.name.to_string(),
                path: format!("/textures/{}", b.texture),
            })
            .collect();
        Self {
            textures,
            skybox: format!("/textures/{SKYBOX_TEXTURE}"),
            audio: AudioDescriptor {
                path: "/audio/space_theme.mp3".to_string(),
                volume: 0.5,
                looped: true,
            },
            labels_url: "/planet-info.json".to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::new()
    }
}
