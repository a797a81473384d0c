use approx::assert_relative_eq;
use flyer_arcade::{
    components::{ColliderTag, Collision, FlightConfig, FlightControls, RigidBodyComponent},
    resources::AxisState,
    systems::FlightIntegrator,
    GameOutcome, PlayerAircraft, SimEvent,
};
use nalgebra::Vector3;

use crate::common::{
    assert_body_at_rest, assert_body_finite, assert_flight_state_in_range,
    create_test_flight_config, driver_with_player, run_steps,
};

#[test]
fn test_start_launches_along_forward_axis() {
    let (mut driver, player) = driver_with_player();
    driver.frame(&AxisState::neutral());

    let body = driver.body(player).unwrap();
    assert_relative_eq!(body.velocity, Vector3::new(0.0, 0.0, 3.0), epsilon = 1e-12);
}

#[test]
fn test_state_stays_in_range_under_any_input() {
    let (mut driver, player) = driver_with_player();
    let config = create_test_flight_config();

    // Sweep through a deterministic spread of stick positions
    for step in 0..500 {
        let t = step as f64 * 0.37;
        let input = AxisState::new(t.sin(), (t * 1.7).cos(), (t * 0.3).sin());
        driver.fixed_step(&input);

        let aircraft = driver.get::<PlayerAircraft>(player).unwrap();
        assert_flight_state_in_range(aircraft.state(), &config);
        assert_body_finite(driver.body(player).unwrap());
    }
}

#[test]
fn test_full_stick_holds_limits() {
    let (mut driver, player) = driver_with_player();
    let config = create_test_flight_config();

    run_steps(&mut driver, AxisState::new(-1.0, -1.0, -1.0), 200);
    let state = *driver.get::<PlayerAircraft>(player).unwrap().state();
    assert_relative_eq!(state.roll, -config.roll_range, epsilon = 1e-9);
    assert_relative_eq!(state.pitch, -config.pitch_range);
    assert_eq!(state.thrust, 0.0);
}

#[test]
fn test_centred_stick_levels_the_wings() {
    let (mut driver, player) = driver_with_player();
    run_steps(&mut driver, AxisState::new(1.0, 0.0, 0.0), 10);
    run_steps(&mut driver, AxisState::neutral(), 100);

    let state = driver.get::<PlayerAircraft>(player).unwrap().state();
    assert_relative_eq!(state.roll, 0.0, epsilon = 1e-9);
    assert_relative_eq!(state.pitch, 0.0);
}

#[test]
fn test_thrust_reaches_maximum_after_twenty_steps() {
    let (mut driver, player) = driver_with_player();

    run_steps(&mut driver, AxisState::new(0.0, 0.0, 1.0), 19);
    let thrust = driver.get::<PlayerAircraft>(player).unwrap().state().thrust;
    assert_relative_eq!(thrust, 19.0);

    run_steps(&mut driver, AxisState::new(0.0, 0.0, 1.0), 6);
    let thrust = driver.get::<PlayerAircraft>(player).unwrap().state().thrust;
    assert_relative_eq!(thrust, 20.0);

    let speed = driver.body(player).unwrap().velocity.norm();
    assert_relative_eq!(speed, 20.0, epsilon = 1e-9);
}

#[test]
fn test_banking_turns_the_nose() {
    let (mut driver, player) = driver_with_player();
    run_steps(&mut driver, AxisState::new(0.0, 0.0, 1.0), 10);
    run_steps(&mut driver, AxisState::new(-0.5, 0.0, 0.0), 2);

    // Left bank (negative roll) yaws positive, towards +x: 28.125 + 42.1875
    let state = driver.get::<PlayerAircraft>(player).unwrap().state();
    assert_relative_eq!(state.yaw, 70.3125);
    assert!(driver.body(player).unwrap().velocity.x > 0.0);
}

#[test]
fn test_crash_freezes_the_aircraft() {
    let (mut driver, player) = driver_with_player();
    run_steps(&mut driver, AxisState::new(0.0, 0.0, 1.0), 10);

    driver
        .notify_collision(player, &Collision::with_impulse(ColliderTag::Ground, 12.0))
        .unwrap();
    assert_body_at_rest(driver.body(player).unwrap());
    assert_eq!(driver.hud().game_over.as_deref(), Some("OOPS"));

    // Input no longer moves the aircraft
    run_steps(&mut driver, AxisState::new(1.0, 1.0, 1.0), 20);
    assert_body_at_rest(driver.body(player).unwrap());

    let aircraft = driver.get::<PlayerAircraft>(player).unwrap();
    assert_eq!(aircraft.outcome(), Some(GameOutcome::Crash));
    assert_eq!(aircraft.state().thrust, 10.0);
}

#[test]
fn test_game_over_is_one_shot() {
    let (mut driver, player) = driver_with_player();
    driver.fixed_step(&AxisState::neutral());

    driver
        .notify_collision(player, &Collision::with_impulse(ColliderTag::Goal, 0.0))
        .unwrap();
    driver.game_over(player, GameOutcome::Crash).unwrap();

    assert_eq!(driver.hud().game_over.as_deref(), Some("You Win!"));
    let game_overs: Vec<_> = driver
        .drain_events()
        .into_iter()
        .filter(|event| matches!(event, SimEvent::GameOver { .. }))
        .collect();
    assert_eq!(
        game_overs,
        vec![SimEvent::GameOver {
            id: player,
            outcome: GameOutcome::Win
        }]
    );
}

#[test]
fn test_untagged_collision_is_ignored() {
    let (mut driver, player) = driver_with_player();
    driver
        .notify_collision(player, &Collision::with_impulse(ColliderTag::Untagged, 50.0))
        .unwrap();

    assert!(driver.hud().game_over.is_none());
    assert!(!driver
        .get::<PlayerAircraft>(player)
        .unwrap()
        .is_game_over());
}

#[test]
fn test_status_line_tracks_the_body() {
    let (mut driver, player) = driver_with_player();
    run_steps(&mut driver, AxisState::new(0.0, 0.0, 1.0), 4);
    driver.frame(&AxisState::neutral());

    assert_eq!(
        driver.hud().status,
        "Speed: 04.00    altitude: 100.00    Thrust 4.0"
    );
}

#[test]
fn test_slow_smoothing() {
    let config = FlightConfig {
        lerp_weight: 0.1,
        ..create_test_flight_config()
    };
    let mut flight = FlightIntegrator::new(config).unwrap();
    let mut body = RigidBodyComponent::default();

    flight.step(FlightControls::new(1.0, 0.0, 0.0), &mut body);
    assert_relative_eq!(flight.state().roll, 4.5);
}
