//! Mesh/collision state, эффекты разрушения, таймер жизни

use bevy::prelude::*;

/// Состояние visual mesh + коллизии (то, что хост применяет к своей ноде)
///
/// Rapier Collider живёт рядом на той же entity; `collision_enabled = false`
/// дублируется вставкой ColliderDisabled.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PigeonBody {
    pub visible: bool,
    /// Query + physics коллизия
    pub collision_enabled: bool,
    /// BLOCK на всех каналах
    pub blocks_all_channels: bool,
    /// Встроенная физика выключена, движение ведёт ProjectileMotion
    pub simulate_physics: bool,
}

impl Default for PigeonBody {
    fn default() -> Self {
        Self {
            visible: true,
            collision_enabled: true,
            blocks_all_channels: true,
            simulate_physics: false,
        }
    }
}

impl PigeonBody {
    /// Выключить коллизию и спрятать mesh (сразу, до удаления entity)
    pub fn shut_down(&mut self) {
        self.collision_enabled = false;
        self.visible = false;
    }
}

/// Ассеты one-shot эффектов разрушения. None = эффект пропускается.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct DestructionEffects {
    pub particles: Option<String>,
    pub sound: Option<String>,
}

/// Таймер самоуничтожения
///
/// Armed при spawn на lifespan_secs, перевзводится на DESTROY_DELAY_SECS
/// при RequestDestruction. `None` (или lifespan <= 0) — живёт бесконечно.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Lifespan {
    #[reflect(ignore)]
    pub timer: Option<Timer>,
}

impl Lifespan {
    /// Перевзвести таймер (как SetLifeSpan в движке: заменяет предыдущий)
    pub fn arm(&mut self, secs: f32) {
        self.timer = (secs > 0.0).then(|| Timer::from_seconds(secs, TimerMode::Once));
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn remaining_secs(&self) -> Option<f32> {
        self.timer.as_ref().map(|t| t.remaining_secs())
    }

    /// Returns true когда таймер истёк
    pub fn tick(&mut self, delta: std::time::Duration) -> bool {
        match self.timer.as_mut() {
            Some(timer) => timer.tick(delta).finished(),
            None => false,
        }
    }
}
