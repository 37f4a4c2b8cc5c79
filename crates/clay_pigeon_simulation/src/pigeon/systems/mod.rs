//! Clay pigeon systems (FixedUpdate)

pub mod hit;
pub mod launch;
pub mod lifespan;
pub mod tumble;

pub use hit::*;
pub use launch::*;
pub use lifespan::*;
pub use tumble::*;
