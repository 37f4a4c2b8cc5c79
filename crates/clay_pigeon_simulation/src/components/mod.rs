//! ECS Components тарелки
//!
//! - pigeon: состояние цели (ClayPigeon, HitGuard, PigeonPhase, Tumble)
//! - body: mesh/collision state, эффекты разрушения, таймер жизни

pub mod body;
pub mod pigeon;

pub use body::*;
pub use pigeon::*;
