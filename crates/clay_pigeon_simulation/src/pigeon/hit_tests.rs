//! Tests for launch/hit systems (без MinimalPlugins — только события и системы).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy_rapier3d::prelude::ColliderDisabled;

    use crate::components::{ClayPigeon, HitGuard, Lifespan, PigeonBody, PigeonPhase};
    use crate::config::ClayPigeonConfig;
    use crate::motion::ProjectileMotion;
    use crate::pigeon::{
        process_hit_notifications, process_launch_requests, spawn_clay_pigeon, EffectKind,
        LaunchPigeon, OneShotEffect, PigeonHitNotification, PigeonScored,
    };

    fn create_app() -> App {
        let mut app = App::new();
        app.add_event::<LaunchPigeon>()
            .add_event::<PigeonHitNotification>()
            .add_event::<OneShotEffect>()
            .add_event::<PigeonScored>()
            .add_systems(
                Update,
                (process_launch_requests, process_hit_notifications).chain(),
            );
        app
    }

    fn spawn(app: &mut App, config: &ClayPigeonConfig) -> Entity {
        let entity = spawn_clay_pigeon(
            &mut app.world_mut().commands(),
            Transform::from_xyz(0.0, 100.0, 0.0),
            config,
        );
        app.world_mut().flush();
        entity
    }

    fn config_with_effects(hit_guard: HitGuard) -> ClayPigeonConfig {
        ClayPigeonConfig {
            hit_guard,
            destruction_particles: Some("fx/clay_shatter".into()),
            destruction_sound: Some("sfx/clay_break".into()),
            ..default()
        }
    }

    fn drain<E: Event>(app: &mut App) -> Vec<E> {
        app.world_mut().resource_mut::<Events<E>>().drain().collect()
    }

    fn hit(app: &mut App, pigeon: Entity) {
        app.world_mut().send_event(PigeonHitNotification { pigeon });
        app.update();
    }

    #[test]
    fn test_launch_sets_motion_velocity_and_gravity() {
        let mut app = create_app();
        let config = ClayPigeonConfig {
            gravity_scale: 0.5,
            ..default()
        };
        let pigeon = spawn(&mut app, &config);

        app.world_mut()
            .send_event(LaunchPigeon::towards(pigeon, Vec3::new(0.0, 1.0, 1.0)));
        app.update();

        let motion = app.world().get::<ProjectileMotion>(pigeon).unwrap();
        assert!((motion.velocity.length() - 3000.0).abs() < 1e-2);
        assert_eq!(motion.gravity_scale, 0.5);
        assert_eq!(
            app.world().get::<ClayPigeon>(pigeon).unwrap().phase,
            PigeonPhase::Airborne
        );
    }

    #[test]
    fn test_launch_explicit_velocity_ignores_direction() {
        let mut app = create_app();
        let pigeon = spawn(&mut app, &ClayPigeonConfig::default());
        let explicit = Vec3::new(500.0, 1200.0, 0.0);

        app.world_mut().send_event(LaunchPigeon {
            pigeon,
            explicit_velocity: explicit,
            direction: Vec3::NEG_Z,
        });
        app.update();

        assert_eq!(
            app.world().get::<ProjectileMotion>(pigeon).unwrap().velocity,
            explicit
        );
    }

    #[test]
    fn test_launch_without_motion_component_is_skipped() {
        let mut app = create_app();
        let pigeon = app.world_mut().spawn(ClayPigeon::default()).id();

        app.world_mut()
            .send_event(LaunchPigeon::towards(pigeon, Vec3::Y));
        app.update();

        let state = app.world().get::<ClayPigeon>(pigeon).unwrap();
        assert_eq!(state.phase, PigeonPhase::Spawned);
        assert!(app.world().get::<ProjectileMotion>(pigeon).is_none());
    }

    #[test]
    fn test_guarded_double_hit_triggers_once() {
        let mut app = create_app();
        let pigeon = spawn(&mut app, &config_with_effects(HitGuard::Once));

        hit(&mut app, pigeon);
        hit(&mut app, pigeon);

        let effects = drain::<OneShotEffect>(&mut app);
        let scored = drain::<PigeonScored>(&mut app);

        assert_eq!(effects.len(), 2, "particles + sound exactly once");
        assert_eq!(effects[0].kind, EffectKind::Particles);
        assert_eq!(effects[1].kind, EffectKind::Sound);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].score_value, 10);
    }

    #[test]
    fn test_unguarded_double_hit_triggers_every_call() {
        let mut app = create_app();
        let pigeon = spawn(&mut app, &config_with_effects(HitGuard::EveryCall));

        hit(&mut app, pigeon);
        hit(&mut app, pigeon);

        let effects = drain::<OneShotEffect>(&mut app);
        let scored = drain::<PigeonScored>(&mut app);

        assert_eq!(effects.len(), 4);
        assert_eq!(scored.len(), 2);
        assert!(app.world().get::<ClayPigeon>(pigeon).unwrap().hit);
    }

    #[test]
    fn test_hit_without_assets_skips_effects() {
        let mut app = create_app();
        let pigeon = spawn(&mut app, &ClayPigeonConfig::default());

        hit(&mut app, pigeon);

        assert!(drain::<OneShotEffect>(&mut app).is_empty());
        assert_eq!(drain::<PigeonScored>(&mut app).len(), 1);
    }

    #[test]
    fn test_effects_spawn_at_current_pose() {
        let mut app = create_app();
        let pigeon = spawn(&mut app, &config_with_effects(HitGuard::Once));
        let pose = Transform::from_xyz(10.0, 250.0, -30.0)
            .with_rotation(Quat::from_rotation_y(1.0));
        *app.world_mut().get_mut::<Transform>(pigeon).unwrap() = pose;

        hit(&mut app, pigeon);

        for effect in drain::<OneShotEffect>(&mut app) {
            assert_eq!(effect.pigeon, pigeon);
            assert_eq!(effect.translation, pose.translation);
            assert_eq!(effect.rotation, pose.rotation);
            assert_eq!(effect.volume, 1.0);
            assert_eq!(effect.scale, Vec3::ONE);
        }
    }

    #[test]
    fn test_destruction_disables_collision_and_hides_mesh_immediately() {
        let mut app = create_app();
        let pigeon = spawn(&mut app, &ClayPigeonConfig::default());

        hit(&mut app, pigeon);

        let world = app.world();
        let body = world.get::<PigeonBody>(pigeon).unwrap();
        assert!(!body.visible);
        assert!(!body.collision_enabled);
        assert!(world.get::<ColliderDisabled>(pigeon).is_some());

        let state = world.get::<ClayPigeon>(pigeon).unwrap();
        assert_eq!(state.phase, PigeonPhase::PendingRemoval);

        // Delayed removal: 0.1s таймер вместо lifespan
        let remaining = world.get::<Lifespan>(pigeon).unwrap().remaining_secs().unwrap();
        assert!((remaining - 0.1).abs() < 1e-4, "remaining = {}", remaining);
    }

    #[test]
    fn test_hit_on_unknown_entity_is_ignored() {
        let mut app = create_app();
        let stranger = app.world_mut().spawn_empty().id();

        hit(&mut app, stranger);

        assert!(drain::<PigeonScored>(&mut app).is_empty());
    }
}
