//! Hit: PigeonHitNotification → hit transition → эффекты → RequestDestruction

use bevy::prelude::*;
use bevy_rapier3d::prelude::ColliderDisabled;

use crate::components::{ClayPigeon, DestructionEffects, HitOutcome, Lifespan, PigeonBody};
use crate::config::DESTROY_DELAY_SECS;
use crate::logger;
use crate::pigeon::{OneShotEffect, PigeonHitNotification, PigeonScored};

/// System: обработка попаданий
///
/// 1. ClayPigeon::register_hit (HitGuard решает, игнорировать ли повтор)
/// 2. PigeonScored для game mode
/// 3. One-shot particles / sound, если ассеты заданы
/// 4. RequestDestruction
pub fn process_hit_notifications(
    mut commands: Commands,
    mut hit_events: EventReader<PigeonHitNotification>,
    mut pigeons: Query<(
        &mut ClayPigeon,
        &mut PigeonBody,
        &mut Lifespan,
        &DestructionEffects,
        &Transform,
    )>,
    mut effect_events: EventWriter<OneShotEffect>,
    mut scored_events: EventWriter<PigeonScored>,
) {
    for hit in hit_events.read() {
        let Ok((mut pigeon, mut body, mut lifespan, effects, transform)) = pigeons.get_mut(hit.pigeon)
        else {
            logger::log_warning(&format!(
                "PigeonHitNotification: {:?} is not a live clay pigeon",
                hit.pigeon
            ));
            continue;
        };

        let HitOutcome::Triggered { first } = pigeon.register_hit() else {
            continue;
        };

        logger::log_info(&format!(
            "Clay pigeon {:?} HIT! Score: {}{}",
            hit.pigeon,
            pigeon.score_value,
            if first { "" } else { " (repeat)" }
        ));

        scored_events.write(PigeonScored {
            pigeon: hit.pigeon,
            score_value: pigeon.score_value,
        });

        if let Some(particles) = effects.particles.as_deref() {
            effect_events.write(OneShotEffect::particles(hit.pigeon, particles, transform));
        }
        if let Some(sound) = effects.sound.as_deref() {
            effect_events.write(OneShotEffect::sound(hit.pigeon, sound, transform));
        }

        request_destruction(
            &mut commands,
            hit.pigeon,
            &mut pigeon,
            &mut body,
            &mut lifespan,
        );
    }
}

/// RequestDestruction
///
/// Коллизия и mesh выключаются сразу, entity удаляется через DESTROY_DELAY_SECS
/// (эффекты успевают отыграть). Повторный вызов перевзводит задержку.
pub fn request_destruction(
    commands: &mut Commands,
    entity: Entity,
    pigeon: &mut ClayPigeon,
    body: &mut PigeonBody,
    lifespan: &mut Lifespan,
) {
    body.shut_down();
    commands.entity(entity).insert(ColliderDisabled);
    lifespan.arm(DESTROY_DELAY_SECS);
    pigeon.mark_pending_removal();
}
