mod camera;
mod content;
mod level;
mod movement;
mod pickups;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ramp Runner".to_string(),
                resolution: WindowResolution::new(1280, 720),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
        .insert_resource(ClearColor(Color::srgb(0.12, 0.13, 0.17)))
        .add_plugins((
            content::ContentPlugin::default(),
            level::LevelPlugin,
            movement::MovementPlugin,
            pickups::PickupsPlugin,
            camera::CameraPlugin,
            ui::UiPlugin,
        ))
        .run();
}
