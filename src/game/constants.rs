pub const TICK_MS: u64 = 16;
pub const TURN_STEP: f64 = 0.07;
pub const PICKUP_RADIUS: f64 = 4.0;
pub const APPLE_SIZE: f64 = 10.0;
pub const TRAIL_BASE_LENGTH: f64 = 40.0;
pub const TRAIL_GROWTH_PER_POINT: usize = 1;
pub const SEED_CONTROL_OFFSET: f64 = 1.0;
pub const SEED_END_OFFSET: f64 = 2.0;
pub const DEFAULT_CANVAS_WIDTH: f64 = 1280.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 720.0;
pub const MAX_SPAWN_ATTEMPTS: usize = 32;
pub const EVENT_QUEUE_CAPACITY: usize = 1024;
