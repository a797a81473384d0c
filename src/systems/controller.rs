use bevy::prelude::*;

use crate::resources::{Axis, AxisState};

const ROLL_RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const ROLL_LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const PITCH_DOWN: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const PITCH_UP: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const THROTTLE_UP: [KeyCode; 1] = [KeyCode::KeyE];
const THROTTLE_DOWN: [KeyCode; 1] = [KeyCode::KeyQ];

/// Digital axis from a pair of key groups: +1, -1, or 0 when both or neither are held
fn key_axis<const P: usize, const N: usize>(
    keyboard: &ButtonInput<KeyCode>,
    positive: [KeyCode; P],
    negative: [KeyCode; N],
) -> f64 {
    let mut value = 0.0;
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    value
}

/// System for polling the keyboard into the flight axes.
///
/// Roll is A/D or Left/Right, pitch is W/S or Up/Down (forward pushes the
/// nose down) and thrust is E/Q.
pub fn keyboard_axes_system(keyboard: Res<ButtonInput<KeyCode>>, mut axes: ResMut<AxisState>) {
    axes.set(
        Axis::Horizontal,
        key_axis(&keyboard, ROLL_RIGHT, ROLL_LEFT),
    );
    axes.set(Axis::Vertical, key_axis(&keyboard, PITCH_DOWN, PITCH_UP));
    axes.set(
        Axis::Thrust,
        key_axis(&keyboard, THROTTLE_UP, THROTTLE_DOWN),
    );
}
