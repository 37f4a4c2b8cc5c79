//! Per-frame update: time_alive + вращение

use bevy::prelude::*;

use crate::components::{ClayPigeon, Tumble};

/// System: вращение тарелки в воздухе
///
/// time_alive накапливается всегда. Вращение — только пока не было попадания,
/// после hit ориентация замирает.
pub fn tumble_pigeons(
    mut pigeons: Query<(&mut ClayPigeon, &mut Tumble, &mut Transform)>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (mut pigeon, mut tumble, mut transform) in pigeons.iter_mut() {
        pigeon.time_alive += delta;

        if !pigeon.should_tumble() {
            continue;
        }

        tumble.advance(delta);
        transform.rotation = tumble.rotation();
    }
}
