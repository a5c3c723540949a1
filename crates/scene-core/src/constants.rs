// Shared scene tuning constants used by the core and the web frontend.

// Surface sizing
pub const MIN_BACKING_WIDTH: u32 = 320;
pub const MIN_BACKING_HEIGHT: u32 = 200;
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Pointer
pub const POINTER_MIN_ELAPSED_MS: f64 = 1.0; // avoids a zero divisor between samples
pub const POINTER_SPEED_SCALE: f64 = 0.6; // px/ms that maps to full speed

// Text
pub const MIN_FONT_PX: u32 = 10;

// SE: self encryption
pub const SE_REDARKEN_PROBABILITY: f64 = 0.02;
pub const SE_REDARKEN_ALPHA: f64 = 0.25;
pub const SE_ERASE_BASE_RADIUS: f64 = 10.0;
pub const SE_ERASE_SPEED_RADIUS: f64 = 40.0; // extra radius at full pointer speed
pub const SE_SPECK_COUNT: usize = 80;
pub const SE_FONT_HEIGHT_RATIO: f64 = 0.08;
pub const SE_LINE_HEIGHT_RATIO: f64 = 0.09;
pub const SE_TEXT_CENTER_Y_RATIO: f64 = 0.45;
pub const SE_TEXT_MAX_WIDTH_RATIO: f64 = 0.78;
pub const SE_TEXT_LINES: [&str; 2] = [
    "What I keep is not a secret — it is structure.",
    "Encryption is not hiding; it compiles a stance.",
];

// SELF: delay mirror
pub const TRAIL_CAPACITY: usize = 60;
pub const TRAIL_HEAD_RADIUS: f64 = 4.0;
pub const TRAIL_RADIUS_STEP: f64 = 0.05; // shrink per trail index
pub const TRAIL_MAX_ALPHA: f64 = 0.9;
pub const MIRROR_FADE_ALPHA: f64 = 0.2;

// MEM: linear particles + time
pub const MEM_PHASE_STEP: f64 = 0.01;
pub const MEM_HUE_SWING: f64 = 30.0;
pub const MEM_HUE_BASE: f64 = 300.0;
pub const MEM_HUE_BASE_ALT: f64 = 200.0;
pub const MEM_HUE_SPREAD: f64 = 40.0; // second gradient stop offset
pub const MEM_LIFE_STEP: f64 = 0.06; // ~16 visible frames
pub const MEM_MIN_LENGTH: f64 = 20.0;
pub const MEM_MAX_LENGTH: f64 = 80.0;
pub const MEM_MAX_EXTRA_GLYPHS: f64 = 8.0;
pub const MEM_SHATTER_PROBABILITY: f64 = 0.2;
pub const MEM_SHATTER_POINTS: usize = 8;
pub const MEM_SHATTER_RADIUS: f64 = 12.0;

// GATE: color hatch
pub const GATE_HUE_RATE: f64 = 0.0002 * 160.0; // degrees per ms
pub const GATE_HUE_OFFSET: f64 = 180.0;
pub const GATE_HATCH_PITCH: f64 = 16.0;
pub const GATE_SPARK_COUNT: usize = 12;
pub const GATE_SPARK_RADIUS: f64 = 30.0;
pub const GATE_SPARK_SIZE: f64 = 2.0;
pub const GATE_EDGE_INSET: f64 = 4.0;
pub const GATE_EDGE_WIDTH: f64 = 8.0;

// Shared interaction
pub const DEFAULT_HATCH_ANGLE_DEG: f64 = 30.0;
pub const TONE_TOGGLE_KEY: &str = "a";
