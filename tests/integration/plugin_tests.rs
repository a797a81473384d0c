use approx::assert_relative_eq;
use bevy::prelude::*;
use flyer_arcade::{
    resources::AxisState,
    systems::{to_quat, PlayerAircraftMarker},
    PlayerAircraft,
};

use crate::common::{create_test_sim_config, TestApp};

#[test]
fn test_fixed_update_ticks_the_driver() {
    let mut app = TestApp::new(create_test_sim_config());
    let before = app.driver().steps();

    app.run_fixed_steps(10);
    assert_eq!(app.driver().steps(), before + 10);
}

#[test]
fn test_fixed_timestep_matches_config() {
    let app = TestApp::new(create_test_sim_config());
    let fixed = app.app.world().resource::<Time<Fixed>>();
    assert_relative_eq!(fixed.timestep().as_secs_f64(), 1.0 / 50.0, epsilon = 1e-9);
}

#[test]
fn test_keyboard_throttle_and_roll() {
    let mut app = TestApp::new(create_test_sim_config());
    app.press(KeyCode::KeyE);
    app.press(KeyCode::KeyD);
    app.run_fixed_steps(3);

    assert_eq!(
        *app.app.world().resource::<AxisState>(),
        AxisState::new(1.0, 0.0, 1.0)
    );

    let player = app.player();
    let state = *app
        .driver()
        .get::<PlayerAircraft>(player.0)
        .unwrap()
        .state();
    assert_relative_eq!(state.thrust, 3.0);
    assert!(state.roll > 0.0);

    app.release(KeyCode::KeyE);
    app.press(KeyCode::KeyQ);
    app.run_fixed_steps(5);
    let thrust = app
        .driver()
        .get::<PlayerAircraft>(player.0)
        .unwrap()
        .state()
        .thrust;
    assert_eq!(thrust, 0.0);
}

#[test]
fn test_opposing_keys_cancel() {
    let mut app = TestApp::new(create_test_sim_config());
    app.press(KeyCode::KeyW);
    app.press(KeyCode::ArrowDown);
    app.run_fixed_steps(1);

    assert_eq!(app.app.world().resource::<AxisState>().vertical, 0.0);
}

#[test]
fn test_transform_mirrors_player_body() {
    let mut app = TestApp::new(create_test_sim_config());
    app.press(KeyCode::KeyA);
    app.press(KeyCode::KeyE);
    app.run_fixed_steps(4);
    app.run_frame();

    let player = app.player();
    let attitude = app.driver().body(player.0).unwrap().attitude;
    let expected = to_quat(&attitude);

    let transform = app
        .query_single::<Transform>()
        .copied()
        .expect("player marker has a transform");
    assert!(transform.rotation.abs_diff_eq(expected, 1e-6));
    assert!(app.query_single::<PlayerAircraftMarker>().is_some());
}

#[test]
fn test_frame_refreshes_status() {
    let mut app = TestApp::new(create_test_sim_config());
    app.run_frame();
    assert!(app.driver().hud().status.starts_with("Speed: "));
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let mut config = create_test_sim_config();
    config.flight.maximum_thrust = -5.0;
    config.timestep = 0.1;

    let mut app = TestApp::new(config);
    let fixed = app.app.world().resource::<Time<Fixed>>();
    assert_relative_eq!(fixed.timestep().as_secs_f64(), 1.0 / 50.0, epsilon = 1e-9);

    app.press(KeyCode::KeyE);
    app.run_fixed_steps(2);
    let thrust = app
        .driver()
        .get::<PlayerAircraft>(app.player().0)
        .unwrap()
        .state()
        .thrust;
    assert_relative_eq!(thrust, 2.0);
}

#[test]
fn test_transform_uses_bevy_forward() {
    let mut app = TestApp::new(create_test_sim_config());
    app.press(KeyCode::KeyE);
    app.run_fixed_steps(5);
    app.run_frame();

    let transform = app
        .query_single::<Transform>()
        .copied()
        .expect("player marker has a transform");
    assert!(transform.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
}
