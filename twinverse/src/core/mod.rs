mod assign;
mod classifier;
mod config;
pub mod geometry;
pub mod stacking;
mod tile;
mod window;

pub use assign::*;
pub use classifier::*;
pub use config::*;
pub use tile::*;
pub use window::*;
