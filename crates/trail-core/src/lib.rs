pub mod config;
pub mod constants;
pub mod engine;
pub mod flicker;
pub mod smoothing;
pub mod spline;
pub mod trail;

pub use config::*;
pub use constants::*;
pub use engine::*;
pub use flicker::*;
pub use spline::*;
pub use trail::*;
