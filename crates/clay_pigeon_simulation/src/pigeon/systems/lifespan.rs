//! OnSpawn таймер жизни + despawn по истечении

use bevy::prelude::*;

use crate::components::{ClayPigeon, Lifespan, PigeonPhase};
use crate::logger;
use crate::pigeon::{PigeonRemoved, RemovalReason};

/// System: взвести Lifespan у только что заспавненных тарелок
pub fn arm_lifespan_on_spawn(mut spawned: Query<(&ClayPigeon, &mut Lifespan), Added<ClayPigeon>>) {
    for (pigeon, mut lifespan) in spawned.iter_mut() {
        lifespan.arm(pigeon.lifespan_secs);
    }
}

/// System: деспавн тарелок с истёкшим Lifespan
///
/// PendingRemoval → Destroyed (после попадания), иначе TimedOut.
pub fn expire_pigeons(
    mut commands: Commands,
    mut pigeons: Query<(Entity, &mut ClayPigeon, &mut Lifespan)>,
    mut removed_events: EventWriter<PigeonRemoved>,
    time: Res<Time>,
) {
    for (entity, mut pigeon, mut lifespan) in pigeons.iter_mut() {
        if !lifespan.tick(time.delta()) {
            continue;
        }

        let reason = if pigeon.is_pending_removal() {
            RemovalReason::Destroyed
        } else {
            pigeon.phase = PigeonPhase::TimedOut;
            RemovalReason::TimedOut
        };

        logger::log(&format!(
            "Despawning clay pigeon {:?} ({:?}, alive {:.2}s)",
            entity, reason, pigeon.time_alive
        ));

        commands.entity(entity).despawn();
        removed_events.write(PigeonRemoved {
            pigeon: entity,
            reason,
        });
    }
}
