//! Launch: LaunchPigeon → ProjectileMotion.velocity + gravity scale

use bevy::prelude::*;

use crate::components::ClayPigeon;
use crate::logger;
use crate::motion::ProjectileMotion;
use crate::pigeon::{launch_velocity, LaunchPigeon};

/// System: обработка LaunchPigeon
///
/// Нет ProjectileMotion → запуск пропускается (только лог).
pub fn process_launch_requests(
    mut launch_events: EventReader<LaunchPigeon>,
    mut pigeons: Query<(&mut ClayPigeon, Option<&mut ProjectileMotion>)>,
) {
    for launch in launch_events.read() {
        let Ok((mut pigeon, motion)) = pigeons.get_mut(launch.pigeon) else {
            logger::log_warning(&format!(
                "LaunchPigeon: entity {:?} is not a clay pigeon",
                launch.pigeon
            ));
            continue;
        };

        let Some(mut motion) = motion else {
            logger::log_warning(&format!(
                "LaunchPigeon: {:?} has no ProjectileMotion, launch skipped",
                launch.pigeon
            ));
            continue;
        };

        let velocity = launch_velocity(launch.explicit_velocity, launch.direction, pigeon.launch_speed);
        motion.velocity = velocity;
        motion.gravity_scale = pigeon.gravity_scale;
        pigeon.mark_launched();

        logger::log(&format!(
            "Clay pigeon {:?} launched with velocity: {:?}",
            launch.pigeon, velocity
        ));
    }
}
