//! Top-level controller tying agents, decorations and the interaction flow together.
//!
//! The host drives everything through [`Scene::tick`] once per animation
//! frame and forwards DOM events to the `set_*`/action methods. Within a tick
//! agents move and publish their positions before any decoration reads them,
//! so blooming always reflects the current frame.

use crate::agent::{default_butterflies, AgentConfig, AgentPose};
use crate::color::{rgb_from_hex, rgba_from_hex};
use crate::confetti::{ConfettiBurst, ConfettiPiece};
use crate::config::{ConfigError, DeviceClass, SceneConfig};
use crate::constants::*;
use crate::decoration::{BloomChange, BloomParams, Decoration, DecorationKind};
use crate::garden::{self, SparkleField};
use crate::heart::{CursorTrail, MainHeart};
use crate::interaction::{InteractionState, Phase, RejectOutcome, RejectTrigger};
use crate::music::{MusicCommand, MusicToggle};
use crate::proximity::ProximityStore;
use crate::reveal::RevealSequencer;
use crate::state::Camera;
use glam::{Vec2, Vec3, Vec4};
use rand::prelude::*;

const STREAM_GARDEN: u64 = 0;
const STREAM_REJECT: u64 = 1;
const STREAM_CONFETTI: u64 = 2;
const STREAM_SPARKLES: u64 = 3;

/// Independent RNG stream `stream` derived from one base seed.
pub fn derive_rng(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntityKind {
    MainHeart,
    Butterfly { wing_flap: f32 },
    Flower { petal_count: u8, petal_spin: f32 },
    GardenHeart,
    BloomSparkle,
    AmbientSparkle,
    CursorHeart,
}

/// One drawable for the current frame, in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityTransform {
    pub kind: EntityKind,
    pub position: Vec3,
    /// Euler angles (x, y, z) in radians.
    pub rotation: Vec3,
    pub scale: f32,
    pub color: Vec4,
    /// 1.0 while blooming, used for the emissive boost.
    pub glow: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The letter became visible on this tick.
    pub letter_revealed: bool,
    pub blooming: usize,
    pub bloom_started: usize,
    pub bloom_ended: usize,
}

pub struct Scene {
    device: DeviceClass,
    viewport_px: Vec2,
    pointer_ndc: Vec2,
    now_sec: f64,
    last_tick: Option<f64>,
    agents: Vec<AgentConfig>,
    agent_poses: Vec<AgentPose>,
    store: ProximityStore,
    decorations: Vec<Decoration>,
    bloom: BloomParams,
    sparkles: SparkleField,
    interaction: InteractionState,
    reveal: RevealSequencer,
    confetti: ConfettiBurst,
    confetti_rng: StdRng,
    main_heart: MainHeart,
    trail: CursorTrail,
    music: MusicToggle,
}

impl Scene {
    pub fn new(config: SceneConfig, device: DeviceClass) -> Result<Self, ConfigError> {
        config.validate()?;
        let agents = default_butterflies();
        let layout = garden::generate(
            config.garden_size,
            &mut derive_rng(config.seed, STREAM_GARDEN),
        );
        let flowers = layout
            .iter()
            .filter(|d| matches!(d.kind, DecorationKind::Flower { .. }))
            .count();
        log::info!(
            "[garden] seed={} decorations={} flowers={} hearts={}",
            config.seed,
            layout.len(),
            flowers,
            layout.len() - flowers
        );
        let sparkles = SparkleField::new(
            AMBIENT_SPARKLE_COUNT,
            AMBIENT_SPARKLE_EXTENT,
            &mut derive_rng(config.seed, STREAM_SPARKLES),
        );
        let agent_poses = agents.iter().map(|a| a.pose_at(0.0)).collect();
        Ok(Self {
            device,
            viewport_px: Vec2::new(1280.0, 720.0),
            pointer_ndc: Vec2::ZERO,
            now_sec: 0.0,
            last_tick: None,
            store: ProximityStore::new(agents.len()),
            agent_poses,
            agents,
            decorations: layout.into_iter().map(Decoration::new).collect(),
            bloom: BloomParams {
                radius: config.bloom_radius,
                flower_multiplier: config.flower_bloom_multiplier,
                heart_multiplier: config.heart_bloom_multiplier,
                easing: config.scale_easing,
            },
            sparkles,
            interaction: InteractionState::new(
                config.rejection_messages,
                derive_rng(config.seed, STREAM_REJECT),
            ),
            reveal: RevealSequencer::new(config.reveal_delay_sec),
            confetti: ConfettiBurst::default(),
            confetti_rng: derive_rng(config.seed, STREAM_CONFETTI),
            main_heart: MainHeart::new(),
            trail: CursorTrail::default(),
            music: MusicToggle::default(),
        })
    }

    // --- accessors ---

    #[inline]
    pub fn device(&self) -> DeviceClass {
        self.device
    }
    #[inline]
    pub fn phase(&self) -> Phase {
        self.interaction.phase()
    }
    #[inline]
    pub fn rejection_index(&self) -> usize {
        self.interaction.rejection_index()
    }
    pub fn no_label(&self) -> &str {
        self.interaction.label()
    }
    #[inline]
    pub fn yes_growth(&self) -> f32 {
        self.interaction.yes_growth()
    }
    #[inline]
    pub fn no_offset(&self) -> Vec2 {
        self.interaction.no_offset()
    }
    #[inline]
    pub fn is_letter_visible(&self) -> bool {
        self.reveal.is_visible()
    }
    #[inline]
    pub fn is_music_playing(&self) -> bool {
        self.music.is_playing()
    }
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }
    pub fn proximity(&self) -> &ProximityStore {
        &self.store
    }
    pub fn confetti(&self) -> impl Iterator<Item = ConfettiPiece> + '_ {
        self.confetti.pieces()
    }

    pub fn camera(&self) -> Camera {
        let aspect = self.viewport_px.x / self.viewport_px.y.max(1.0);
        Camera::for_device(self.device, aspect)
    }

    pub fn pointer_world(&self) -> Vec3 {
        self.camera().pointer_to_world(self.pointer_ndc)
    }

    // --- host input ---

    pub fn set_device_class(&mut self, device: DeviceClass) {
        if device != self.device {
            log::info!("[resize] device class {:?} -> {:?}", self.device, device);
            self.device = device;
        }
    }

    /// Record the CSS pixel size of the page and reclassify the device.
    pub fn set_viewport(&mut self, width_px: f32, height_px: f32) {
        self.viewport_px = Vec2::new(width_px.max(1.0), height_px.max(1.0));
        self.set_device_class(DeviceClass::from_viewport_width(width_px as f64));
    }

    /// Pointer in normalized device coordinates (x right, y up, -1..1).
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer_ndc = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    pub fn reject(&mut self, trigger: RejectTrigger) -> Option<RejectOutcome> {
        self.interaction.reject(trigger, self.device)
    }

    /// Accept. The first call fires confetti and schedules the letter; later
    /// calls do nothing and return false.
    pub fn confirm(&mut self) -> bool {
        let Some(celebration) = self.interaction.confirm(self.device) else {
            return false;
        };
        self.confetti
            .fire(&celebration, self.viewport_px, &mut self.confetti_rng);
        self.reveal.schedule(self.now_sec);
        true
    }

    pub fn dismiss_letter(&mut self) {
        self.reveal.dismiss();
    }

    pub fn toggle_music(&mut self) -> MusicCommand {
        self.music.toggle()
    }

    // --- frame ---

    /// Advance to `elapsed_sec` and push every drawable into `out`.
    ///
    /// A clock that goes backwards is held at the last value seen.
    pub fn tick(&mut self, elapsed_sec: f64, out: &mut Vec<EntityTransform>) -> TickReport {
        let now = match self.last_tick {
            Some(last) if elapsed_sec < last => {
                log::trace!("[tick] clock went back {:.4}s; holding", last - elapsed_sec);
                last
            }
            _ => elapsed_sec,
        };
        let dt = (now - self.last_tick.unwrap_or(now)) as f32;
        self.last_tick = Some(now);
        self.now_sec = now;
        let t = now as f32;
        let mut report = TickReport::default();

        // Agents first so decorations read this frame's positions.
        for (agent, pose) in self.agents.iter().zip(self.agent_poses.iter_mut()) {
            *pose = agent.pose_at(t);
            self.store.write(agent.id, pose.position);
        }

        for d in &mut self.decorations {
            match d.update(t, dt, &self.store, &self.bloom) {
                Some(BloomChange::Started) => {
                    report.bloom_started += 1;
                    log::trace!("[bloom] decoration {} started", d.config.id);
                }
                Some(BloomChange::Ended) => {
                    report.bloom_ended += 1;
                    log::trace!("[bloom] decoration {} ended", d.config.id);
                }
                None => {}
            }
            if d.is_blooming() {
                report.blooming += 1;
            }
        }

        let pointer = self.pointer_world().truncate();
        let heart = self
            .main_heart
            .update(t, pointer, self.interaction.phase(), self.device);
        self.trail.step(pointer);
        self.confetti.step();
        report.letter_revealed = self.reveal.poll(now);

        out.clear();
        out.reserve(1 + self.agents.len() + self.decorations.len() * 2 + self.sparkles.len());
        out.push(EntityTransform {
            kind: EntityKind::MainHeart,
            position: heart.position,
            rotation: heart.rotation,
            scale: heart.scale,
            color: heart.color_rgb.extend(1.0),
            glow: 0.0,
        });
        for (agent, pose) in self.agents.iter().zip(&self.agent_poses) {
            out.push(EntityTransform {
                kind: EntityKind::Butterfly {
                    wing_flap: pose.wing_flap,
                },
                position: pose.position,
                rotation: Vec3::new(0.0, pose.heading, 0.0),
                scale: 1.0,
                color: agent.color_rgb.extend(1.0),
                glow: 0.0,
            });
        }
        for d in &self.decorations {
            let pose = d.pose();
            let glow = if d.is_blooming() { 1.0 } else { 0.0 };
            let kind = match d.config.kind {
                DecorationKind::Flower { petal_count } => EntityKind::Flower {
                    petal_count,
                    petal_spin: pose.petal_spin,
                },
                DecorationKind::Heart => EntityKind::GardenHeart,
            };
            out.push(EntityTransform {
                kind,
                position: pose.position,
                rotation: pose.rotation,
                scale: pose.scale,
                color: d.config.color_rgb.extend(1.0),
                glow,
            });
            if d.is_blooming() {
                let color = match d.config.kind {
                    DecorationKind::Flower { .. } => rgb_from_hex(FLOWER_SPARKLE_COLOR),
                    DecorationKind::Heart => d.config.color_rgb,
                };
                out.push(EntityTransform {
                    kind: EntityKind::BloomSparkle,
                    position: d.sparkle_position(),
                    rotation: Vec3::ZERO,
                    scale: pose.scale,
                    color: color.extend(1.0),
                    glow,
                });
            }
        }
        for s in self.sparkles.states(t) {
            out.push(EntityTransform {
                kind: EntityKind::AmbientSparkle,
                position: s.position,
                rotation: Vec3::ZERO,
                scale: s.size,
                color: rgba_from_hex(AMBIENT_SPARKLE_COLOR, s.opacity),
                glow: 0.0,
            });
        }
        for p in self.trail.poses(t) {
            out.push(EntityTransform {
                kind: EntityKind::CursorHeart,
                position: p.position,
                rotation: p.rotation,
                scale: p.scale,
                color: p.color_rgb.extend(1.0),
                glow: 0.0,
            });
        }
        report
    }
}
