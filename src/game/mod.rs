pub mod clock;
pub mod collision;
pub mod constants;
pub mod food;
pub mod input;
pub mod journey;
pub mod math;
pub mod motion;
pub mod session;
pub mod state;
pub mod trail;
pub mod types;
