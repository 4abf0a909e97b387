pub mod config;
pub mod geometry;
pub mod stat;

pub use config::*;
pub use geometry::*;
pub use stat::*;
