pub mod assets;
pub mod bodies;
pub mod camera;
pub mod events;
pub mod input;
pub mod labels;
pub mod picking;
pub mod playback;
pub mod registry;
pub mod render;
pub mod rng;
pub mod scene;
pub mod sim;

// Re-export key types at crate root for convenience
pub use assets::AssetManifest;
pub use bodies::{BodyDescriptor, BODIES, BODY_COUNT};
pub use camera::{CameraUniform, OrbitCamera};
pub use events::UiEvent;
pub use input::{InputEvent, InputQueue};
pub use labels::LabelDataset;
pub use picking::{pick, Hit, Ray};
pub use playback::{AudioUnlock, Playback};
pub use registry::{BodyRegistry, BodyState, Decoration};
pub use render::{build_render_buffer, BloomSettings, RenderBuffer, RenderInstance};
pub use rng::Rng;
pub use scene::{AmbientLight, Skybox, Starfield};
pub use sim::{Orrery, SimConfig};
