//! Movement domain: fixed-step systems against real avian2d level geometry.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::asset::AssetPlugin;
use bevy::ecs::message::MessageReader;
use bevy::mesh::MeshPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;

use crate::content::LevelDef;
use crate::level::{LevelSpawned, TileGrid, spawn_level};
use crate::movement::bootstrap::spawn_player;
use crate::movement::controller::SQRT_2_OVER_2;
use crate::movement::systems::step_player;
use crate::movement::{
    JumpEdge, JumpSfxEvent, MovementInput, MovementState, MovementTuning, Player, RampContact,
};

const FIXED_HZ: f64 = 60.0;

#[derive(Debug, Clone, Copy)]
struct StepRecord {
    on_ground: bool,
    ramp: RampContact,
    /// Velocity handed to the solver by this step
    velocity: Vec2,
    y: f32,
}

#[derive(Resource, Debug, Default)]
struct StepLog(Vec<StepRecord>);

#[derive(Resource, Debug, Default)]
struct JumpSfxCount(usize);

fn record_step(
    mut log: ResMut<StepLog>,
    query: Query<(&Transform, &MovementState, &LinearVelocity), With<Player>>,
) {
    for (transform, state, velocity) in &query {
        log.0.push(StepRecord {
            on_ground: state.on_ground,
            ramp: state.ramp,
            velocity: velocity.0,
            y: transform.translation.y,
        });
    }
}

fn count_jump_sfx(mut events: MessageReader<JumpSfxEvent>, mut count: ResMut<JumpSfxCount>) {
    count.0 += events.read().count();
}

/// Headless app running one fixed step per update over the given rows.
fn level_app(rows: &[&str]) -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        AssetPlugin::default(),
        MeshPlugin,
        ScenePlugin,
        PhysicsPlugins::default(),
    ))
    .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
    .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / FIXED_HZ,
    )))
    .insert_resource(LevelDef {
        schema_version: 1,
        name: "test".to_string(),
        cell_size: 1.0,
        rows: rows.iter().map(|r| r.to_string()).collect(),
    })
    .init_resource::<TileGrid>()
    .init_resource::<MovementTuning>()
    .init_resource::<MovementInput>()
    .init_resource::<StepLog>()
    .init_resource::<JumpSfxCount>()
    .add_message::<JumpSfxEvent>()
    .add_systems(
        Startup,
        (
            spawn_level.in_set(LevelSpawned),
            spawn_player.after(LevelSpawned),
        ),
    )
    .add_systems(FixedUpdate, (step_player, record_step).chain())
    .add_systems(Update, count_jump_sfx);

    app.finish();
    app.cleanup();
    app
}

fn run(app: &mut App, updates: usize) {
    for _ in 0..updates {
        app.update();
    }
}

/// Let the player drop onto the floor, then start a fresh log.
fn settle(app: &mut App) {
    run(app, 30);
    let log = app.world_mut().resource_mut::<StepLog>().0.split_off(0);
    assert!(
        log.last().is_some_and(|record| record.on_ground),
        "player should rest on the floor: {:?}",
        log.last()
    );
}

fn flat_floor() -> App {
    let floor = "#".repeat(28);
    level_app(&["  P                         ", &floor])
}

#[test]
fn test_walking_on_tiled_floor_stays_grounded() {
    let mut app = flat_floor();
    settle(&mut app);

    app.world_mut().resource_mut::<MovementInput>().horizontal = 1.0;
    run(&mut app, 100);

    let log = &app.world().resource::<StepLog>().0;
    assert!(log.len() >= 90);
    for (i, record) in log.iter().enumerate() {
        assert!(record.on_ground, "airborne at step {i}: {record:?}");
        assert!(record.y < 1.65, "lifted off the floor at step {i}: {record:?}");
    }
}

#[test]
fn test_walking_onto_plus_45_ramp_projects_velocity() {
    let mut app = level_app(&["P    /      ", "############"]);
    settle(&mut app);

    app.world_mut().resource_mut::<MovementInput>().horizontal = 1.0;
    run(&mut app, 60);

    let speed = MovementTuning::default().player_speed;
    let expected = Vec2::splat(speed * SQRT_2_OVER_2);
    let log = &app.world().resource::<StepLog>().0;
    let on_ramp: Vec<_> = log
        .iter()
        .filter(|record| record.ramp == RampContact::Plus45)
        .collect();

    assert!(!on_ramp.is_empty(), "never touched the ramp");
    for record in on_ramp {
        assert!(record.on_ground);
        assert!(
            (record.velocity - expected).length() < 1e-4,
            "ramp velocity {:?}, expected {:?}",
            record.velocity,
            expected
        );
    }
}

#[test]
fn test_grounded_jump_writes_one_sound_event() {
    let mut app = flat_floor();
    settle(&mut app);

    app.world_mut()
        .resource_mut::<MovementInput>()
        .push_edge(JumpEdge::Performed);
    run(&mut app, 5);

    assert_eq!(app.world().resource::<JumpSfxCount>().0, 1);
    let log = &app.world().resource::<StepLog>().0;
    assert_eq!(
        log.first().map(|record| record.velocity.y),
        Some(MovementTuning::default().jump_force)
    );
}
