// Frame timing constants
pub const FRAME_TICK_MS: u64 = 16;
pub const MAX_FRAME_DELTA_MS: u64 = 100;

// Event polling intervals for the main loop
pub const MENU_POLL_MS: u64 = 50;
pub const GAME_POLL_MS: u64 = 15;

// Input constants
// Terminals report key autorepeat, not hold state; each Right-arrow event
// opens a hold window this many frames long, refreshed by the next repeat.
pub const MOVE_HOLD_FRAMES: u32 = 10;

// Run animation constants
pub const RUN_ANIM_FRAMES: u32 = 2;
pub const RUN_ANIM_INTERVAL: u64 = 8;

// World dimensions (world units)
pub const VIEW_WIDTH: f64 = 626.0;
pub const VIEW_HEIGHT: f64 = 352.0;
pub const BACKGROUND_TILE_WIDTH: f64 = 626.0;

// Character start position
pub const RABBIT_START_X: f64 = 30.0;

// Course layout constants
pub const BOX_COUNT: usize = 15;
pub const CARROT_COUNT: usize = 15;
pub const BOX_FIRST_X: f64 = 300.0;
pub const CARROT_FIRST_X: f64 = 400.0;
pub const COURSE_SPACING: f64 = 200.0;
pub const BOX_Y: f64 = 245.0;
pub const CARROT_Y: f64 = 245.0;
pub const ENDPOINT_Y: f64 = 180.0;
