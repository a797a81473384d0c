use nalgebra::Vector3;
use std::env;

use flyer_arcade::{
    components::{ColliderTag, Collision, RigidBodyComponent},
    resources::{AxisState, SimulationConfig},
    PlayerAircraft, SimError, StepDriver,
};

const DEFAULT_STEPS: u64 = 200;
const START_ALTITUDE: f64 = 50.0;

/// Scripted stick for the headless flight: throttle up, bank right, then
/// level out and ease the nose up.
fn scripted_input(step: u64) -> AxisState {
    match step {
        0..=39 => AxisState::new(0.0, 0.0, 1.0),
        40..=99 => AxisState::new(0.5, 0.0, 0.0),
        100..=119 => AxisState::new(0.0, -0.1, 0.0),
        _ => AxisState::neutral(),
    }
}

fn main() -> Result<(), SimError> {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match args.first() {
        Some(path) => {
            println!("Loading config from {}", path);
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::default(),
    };
    let steps = match args.get(1) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| SimError::InvalidConfig(format!("invalid step count {raw:?}: {e}")))?,
        None => DEFAULT_STEPS,
    };

    let mut driver = StepDriver::new(config.timestep);
    let player = driver.add(PlayerAircraft::new(
        config.flight,
        RigidBodyComponent::at_position(Vector3::new(0.0, START_ALTITUDE, 0.0)),
    )?);

    // One rendered frame per five physics steps
    for step in 0..steps {
        let input = scripted_input(step);
        driver.fixed_step(&input);

        // Stand in for the host physics: move the body and report ground contact.
        let touched_ground = match driver.body_mut(player) {
            Some(body) => {
                let next = body.position + body.velocity * config.timestep;
                body.set_position(next);
                !body.is_frozen() && body.position.y <= 0.0
            }
            None => false,
        };
        if touched_ground {
            driver.notify_collision(player, &Collision::with_impulse(ColliderTag::Ground, 0.0))?;
            if let Some(message) = &driver.hud().game_over {
                println!("{}", message);
            }
        }

        if step % 5 == 0 {
            driver.frame(&input);
            println!("[{:>7.2}s] {}", driver.time(), driver.hud().status);
        }
    }

    if let Some(aircraft) = driver.get::<PlayerAircraft>(player) {
        println!("Final flight state: {:?}", aircraft.state());
    }
    Ok(())
}
