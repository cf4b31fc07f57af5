// Shared visual and interaction tuning constants used by the scene and the web frontend.

// Proximity bloom
pub const BLOOM_RADIUS: f32 = 2.0; // world units between a decoration and a butterfly
pub const FLOWER_BLOOM_MULTIPLIER: f32 = 1.5;
pub const HEART_BLOOM_MULTIPLIER: f32 = 1.6;
pub const SCALE_EASE_PER_TICK: f32 = 0.1; // fraction of the remaining gap closed each tick
pub const EASE_REFERENCE_HZ: f32 = 60.0; // tick rate the per-tick factor was tuned for
pub const PETAL_SPIN_IDLE: f32 = 0.008; // radians per tick
pub const PETAL_SPIN_BLOOMING: f32 = 0.06;

// Decoration sway
pub const FLOWER_SWAY_Z: f32 = 0.1;
pub const FLOWER_SWAY_X: f32 = 0.05;
pub const HEART_BOB_HEIGHT: f32 = 0.1;
pub const HEART_SWAY_Y: f32 = 0.3;
pub const FLOWER_SPARKLE_OFFSET: f32 = 0.35; // local units above the stem base
pub const HEART_SPARKLE_OFFSET: f32 = 0.2;

// Butterfly motion
pub const WING_FLAP_FREQUENCY: f32 = 15.0;
pub const WING_FLAP_AMPLITUDE: f32 = 0.8;

// Garden layout
pub const GARDEN_SIZE: usize = 300;
pub const GARDEN_HEART_PROBABILITY: f64 = 0.25;
pub const GARDEN_HALF_WIDTH: f32 = 15.0;
pub const GARDEN_Z_NEAR: f32 = -1.0;
pub const GARDEN_Z_DEPTH: f32 = 12.0;
pub const GARDEN_Y_FLOOR: f32 = -4.8;
pub const GARDEN_Y_SPAN: f32 = 2.5;
pub const GARDEN_SCALE_MIN: f32 = 0.2;
pub const GARDEN_SCALE_SPAN: f32 = 0.5;
pub const GARDEN_DELAY_MAX: f32 = 10.0;
pub const PETALS_MIN: u8 = 5;
pub const PETALS_MAX: u8 = 8;

// Ambient sparkles
pub const AMBIENT_SPARKLE_COUNT: usize = 120;
pub const AMBIENT_SPARKLE_EXTENT: f32 = 20.0;
pub const AMBIENT_SPARKLE_SPEED: f32 = 0.4;

// Viewport classes
pub const NARROW_VIEWPORT_MAX_WIDTH_PX: f64 = 768.0; // widths strictly below are narrow

// Reject control
pub const REJECT_BOUNDS_NARROW_PX: f32 = 80.0;
pub const REJECT_BOUNDS_WIDE_PX: f32 = 250.0;
pub const REJECT_BOUNDS_Y_RATIO: f32 = 0.6;
pub const YES_GROWTH_BASE: f32 = 1.0;
pub const YES_GROWTH_STEP_NARROW: f32 = 0.15;
pub const YES_GROWTH_STEP_WIDE: f32 = 0.3;
pub const YES_GROWTH_MAX: f32 = 3.5;

// Celebration
pub const CONFETTI_COUNT_NARROW: usize = 80;
pub const CONFETTI_COUNT_WIDE: usize = 150;
pub const CONFETTI_COLORS: [u32; 4] = [0xff0000, 0xff69b4, 0xffffff, 0xffd700];
pub const CONFETTI_SPREAD_DEG: f32 = 70.0;
pub const CONFETTI_ANGLE_DEG: f32 = 90.0;
pub const CONFETTI_ORIGIN: [f32; 2] = [0.5, 0.6]; // normalized viewport coordinates
pub const CONFETTI_START_VELOCITY: f32 = 45.0; // px per tick
pub const CONFETTI_DECAY: f32 = 0.9;
pub const CONFETTI_GRAVITY: f32 = 3.0; // px per tick
pub const CONFETTI_LIFETIME_TICKS: u32 = 200;

// Reveal
pub const REVEAL_DELAY_SEC: f64 = 0.8;

// Main heart
pub const MAIN_HEART_SCALE_ASKING_NARROW: f32 = 0.8;
pub const MAIN_HEART_SCALE_ASKING_WIDE: f32 = 0.75;
pub const MAIN_HEART_SCALE_ACCEPTED_NARROW: f32 = 1.6;
pub const MAIN_HEART_SCALE_ACCEPTED_WIDE: f32 = 1.4;
pub const MAIN_HEART_COLOR_ASKING: u32 = 0xff4d6d;
pub const MAIN_HEART_COLOR_ACCEPTED: u32 = 0xff1a4a;
pub const MAIN_HEART_SPIN_PER_TICK: f32 = 0.005;
pub const MAIN_HEART_PROXIMITY_RANGE: f32 = 5.0;

// Cursor trail
pub const CURSOR_HEART_COUNT: usize = 10;
pub const CURSOR_HEART_Z: f32 = 1.5;
pub const CURSOR_HEART_SCALE: f32 = 0.08;
pub const CURSOR_HEART_COLORS: [u32; 2] = [0xffb3c1, 0xff85a1];

// Camera
pub const CAMERA_Z_NARROW: f32 = 12.0;
pub const CAMERA_Z_WIDE: f32 = 8.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;

// Palettes
pub const GARDEN_COLORS: [u32; 13] = [
    0xffb3c1, 0xffc8dd, 0xcdb4db, 0xfcf6bd, 0xff99c8, 0xffafcc, 0xffc8dd, 0xbde0fe, 0xa2d2ff,
    0xe2e2e2, 0xd8f3dc, 0x95d5b2, 0xffccd5,
];
pub const HEART_COLORS: [u32; 5] = [0x8338ec, 0x3a86ff, 0xff006e, 0xfb5607, 0xffbe0b];
pub const FLOWER_SPARKLE_COLOR: u32 = 0xffffff;
pub const AMBIENT_SPARKLE_COLOR: u32 = 0xffb3c1;
pub const BACKGROUND_COLOR: u32 = 0xfff1f2;

// Butterflies: (color, base position, speed, range, phase delay)
pub const BUTTERFLIES: [(u32, [f32; 3], f32, f32, f32); 4] = [
    (0xffd700, [-5.0, 2.0, -2.0], 1.2, 3.0, 0.0),
    (0x87ceeb, [4.0, 3.0, -1.0], 0.8, 4.0, 2.0),
    (0xff69b4, [0.0, 4.0, -4.0], 1.0, 2.5, 5.0),
    (0xdda0dd, [-3.0, -1.0, -3.0], 0.9, 3.5, 10.0),
];

