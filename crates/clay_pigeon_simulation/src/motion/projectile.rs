//! Projectile motion компонент + системы интеграции
//!
//! Архитектура (как у kinematic контроллера):
//! - Rapier только для коллизий (RigidBody::KinematicPositionBased)
//! - Velocity интегрируем сами в FixedUpdate
//! - Rapier Velocity зеркалирует нашу velocity для host collision queries

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

use crate::config::ENGINE_GRAVITY;
use crate::pigeon::PigeonSet;

/// Состояние projectile motion
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ProjectileMotion {
    /// cm/s
    pub velocity: Vec3,
    /// Множитель ENGINE_GRAVITY
    pub gravity_scale: f32,
    /// Ограничение модуля скорости (0 = без ограничения)
    pub max_speed: f32,
}

impl Default for ProjectileMotion {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO, // initial speed 0, задаётся в Launch
            gravity_scale: 1.0,
            max_speed: 5000.0,
        }
    }
}

impl ProjectileMotion {
    pub fn new(max_speed: f32) -> Self {
        Self {
            max_speed,
            ..default()
        }
    }

    pub fn acceleration(&self) -> Vec3 {
        Vec3::new(0.0, ENGINE_GRAVITY * self.gravity_scale, 0.0)
    }

    /// Один шаг интеграции. Возвращает смещение за `delta_secs`.
    ///
    /// move = v0 * dt + 0.5 * a * dt², затем v = v0 + a * dt (clamp по max_speed)
    pub fn step(&mut self, delta_secs: f32) -> Vec3 {
        let acceleration = self.acceleration();
        let displacement = self.velocity * delta_secs + 0.5 * acceleration * delta_secs * delta_secs;

        self.velocity = self.clamp_speed(self.velocity + acceleration * delta_secs);

        displacement
    }

    pub fn clamp_speed(&self, velocity: Vec3) -> Vec3 {
        if self.max_speed > 0.0 {
            velocity.clamp_length_max(self.max_speed)
        } else {
            velocity
        }
    }
}

/// Система: velocity → Transform.translation
///
/// Работает в FixedUpdate (60Hz).
pub fn integrate_projectile_motion(
    mut query: Query<(&mut ProjectileMotion, &mut Transform)>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();
    if delta <= 0.0 {
        return;
    }

    for (mut motion, mut transform) in query.iter_mut() {
        transform.translation += motion.step(delta);
    }
}

/// Система: ProjectileMotion.velocity → Rapier Velocity.linvel
pub fn sync_velocity_to_rapier(mut query: Query<(&ProjectileMotion, &mut Velocity)>) {
    for (motion, mut rapier_velocity) in query.iter_mut() {
        rapier_velocity.linvel = motion.velocity;
    }
}

/// Plugin projectile motion
///
/// Системы в PigeonSet::Motion (после обработки launch/hit intents).
pub struct ProjectileMotionPlugin;

impl Plugin for ProjectileMotionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ProjectileMotion>().add_systems(
            FixedUpdate,
            (integrate_projectile_motion, sync_velocity_to_rapier)
                .chain()
                .in_set(PigeonSet::Motion),
        );
    }
}
