use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    driver::StepDriver,
    objects::{ObjectId, SimEvent},
    resources::AxisState,
};

/// The object the Bevy host treats as the player
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerHandle(pub ObjectId);

/// Entity whose `Transform` mirrors the player body
#[derive(Component, Debug, Default)]
pub struct PlayerAircraftMarker;

#[derive(Component, Debug, Default)]
pub struct StatusText;

#[derive(Component, Debug, Default)]
pub struct GameOverText;

/// Driver events forwarded into Bevy
#[derive(Event, Debug, Clone)]
pub struct SimulationEvent(pub SimEvent);

pub fn driver_fixed_step_system(
    mut driver: ResMut<StepDriver>,
    axes: Res<AxisState>,
    mut events: EventWriter<SimulationEvent>,
) {
    driver.fixed_step(&*axes);
    for event in driver.drain_events() {
        events.send(SimulationEvent(event));
    }
}

pub fn driver_frame_system(
    mut driver: ResMut<StepDriver>,
    axes: Res<AxisState>,
    mut events: EventWriter<SimulationEvent>,
) {
    driver.frame(&*axes);
    for event in driver.drain_events() {
        events.send(SimulationEvent(event));
    }
}

pub fn log_simulation_events(mut events: EventReader<SimulationEvent>) {
    for SimulationEvent(event) in events.read() {
        info!("simulation event: {:?}", event);
    }
}

pub fn sync_player_transform_system(
    driver: Res<StepDriver>,
    player: Res<PlayerHandle>,
    mut query: Query<&mut Transform, With<PlayerAircraftMarker>>,
) {
    let Some(body) = driver.body(player.0) else {
        return;
    };
    for mut transform in query.iter_mut() {
        transform.translation = to_vec3(&body.position);
        transform.rotation = to_quat(&body.attitude);
    }
}

pub fn spawn_player_marker(mut commands: Commands) {
    commands.spawn((
        PlayerAircraftMarker,
        Transform::default(),
        Name::new("Player Aircraft"),
    ));
}

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        StatusText,
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
    commands.spawn((
        GameOverText,
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(45.0),
            left: Val::Percent(45.0),
            ..default()
        },
    ));
}

pub fn hud_text_system(
    driver: Res<StepDriver>,
    mut status: Query<&mut Text, (With<StatusText>, Without<GameOverText>)>,
    mut game_over: Query<&mut Text, (With<GameOverText>, Without<StatusText>)>,
) {
    let hud = driver.hud();
    for mut text in status.iter_mut() {
        text.0.clone_from(&hud.status);
    }
    if let Some(message) = &hud.game_over {
        for mut text in game_over.iter_mut() {
            text.0.clone_from(message);
        }
    }
}

// The simulation frame is left-handed with +z forward; Bevy is right-handed
// with -z forward. Both conversions mirror the z axis.

pub fn to_vec3(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, -v.z as f32)
}

/// Mirrored rotation, so that `to_quat(q) * to_vec3(v) == to_vec3(q * v)`
pub fn to_quat(q: &UnitQuaternion<f64>) -> Quat {
    Quat::from_xyzw(-q.i as f32, -q.j as f32, q.k as f32, q.w as f32)
}
