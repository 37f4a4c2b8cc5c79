//! Projectile motion
//!
//! Замена motion-integration компонента движка: velocity + gravity,
//! clamp по max_speed, без отскоков, вращение НЕ следует за velocity
//! (вращением управляет Tumble).

pub mod projectile;

pub use projectile::{
    integrate_projectile_motion, sync_velocity_to_rapier, ProjectileMotion, ProjectileMotionPlugin,
};
