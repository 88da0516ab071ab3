//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{JumpEdge, MovementInput};

const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];

/// Runs once per frame before the fixed loop so queued edges reach the
/// next fixed step.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.horizontal = x;

    if keyboard.any_just_pressed(JUMP_KEYS) {
        input.push_edge(JumpEdge::Performed);
    }
    if keyboard.any_just_released(JUMP_KEYS) {
        input.push_edge(JumpEdge::Canceled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<MovementInput>()
            .add_systems(Update, read_input);
        app
    }

    #[test]
    fn test_opposite_keys_cancel_out() {
        let mut app = app();
        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.press(KeyCode::KeyA);
            keyboard.press(KeyCode::ArrowRight);
        }
        app.update();
        assert_eq!(app.world().resource::<MovementInput>().horizontal, 0.0);
    }

    #[test]
    fn test_jump_press_and_release_queue_edges() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);
        app.update();

        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.clear();
            keyboard.release(KeyCode::Space);
        }
        app.update();

        let input = app.world().resource::<MovementInput>();
        assert_eq!(input.jump_edges, vec![JumpEdge::Performed, JumpEdge::Canceled]);
    }
}
