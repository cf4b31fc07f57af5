pub mod agent;
pub mod color;
pub mod confetti;
pub mod config;
pub mod constants;
pub mod content;
pub mod decoration;
pub mod garden;
pub mod heart;
pub mod interaction;
pub mod music;
pub mod proximity;
pub mod reveal;
pub mod scene;
pub mod state;

pub use agent::{AgentConfig, AgentPose};
pub use confetti::{ConfettiBurst, ConfettiPiece};
pub use config::{ConfigError, DeviceClass, ScaleEasing, SceneConfig};
pub use decoration::{BloomChange, BloomParams, Decoration, DecorationConfig, DecorationKind};
pub use interaction::{Celebration, InteractionState, Phase, RejectOutcome, RejectTrigger};
pub use music::{MusicCommand, MusicToggle};
pub use proximity::ProximityStore;
pub use reveal::RevealSequencer;
pub use scene::{EntityKind, EntityTransform, Scene, TickReport};
pub use state::{Camera, SpriteInstance};

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
