use flyer_arcade::{
    components::{ColliderTag, Collision, ContactPoint, Rgba},
    resources::AxisState,
    Bomb, SimEvent, TargetBox,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{driver_with_bomb, driver_with_target, run_steps};

fn contact(normal_impulse: f64) -> ContactPoint {
    ContactPoint::new(Vector3::zeros(), Vector3::y(), normal_impulse)
}

#[test]
fn test_soft_hit_leaves_bomb_intact() {
    let (mut driver, bomb) = driver_with_bomb();
    driver
        .notify_collision(bomb, &Collision::with_impulse(ColliderTag::Ground, 5.0))
        .unwrap();

    let state = driver.get::<Bomb>(bomb).unwrap().state();
    assert!(!state.exploded);
    assert!(state.visible);
    assert!(driver.drain_events().is_empty());
}

#[test]
fn test_any_hard_contact_explodes() {
    let (mut driver, bomb) = driver_with_bomb();
    let collision = Collision::new(
        ColliderTag::Custom("plank".to_string()),
        vec![contact(1.0), contact(5.5), contact(0.2)],
    );
    driver.notify_collision(bomb, &collision).unwrap();

    let state = *driver.get::<Bomb>(bomb).unwrap().state();
    assert!(state.exploded);
    assert!(state.effector_enabled);
    assert!(!state.visible);
    assert_eq!(
        driver.drain_events(),
        vec![SimEvent::ExplosionSpawned {
            source: bomb,
            position: Vector3::new(3.0, 1.0, 0.0),
        }]
    );
}

#[test]
fn test_bomb_explodes_once() {
    let (mut driver, bomb) = driver_with_bomb();
    let hit = Collision::with_impulse(ColliderTag::Ground, 9.0);
    driver.notify_collision(bomb, &hit).unwrap();
    driver.notify_collision(bomb, &hit).unwrap();

    let explosions = driver
        .drain_events()
        .into_iter()
        .filter(|event| matches!(event, SimEvent::ExplosionSpawned { .. }))
        .count();
    assert_eq!(explosions, 1);
}

#[test]
fn test_bomb_removed_after_fuse_delay() {
    let (mut driver, bomb) = driver_with_bomb();
    driver.fixed_step(&AxisState::neutral());
    driver
        .notify_collision(bomb, &Collision::with_impulse(ColliderTag::Ground, 9.0))
        .unwrap();
    driver.drain_events();

    // 0.1 s at 50 Hz is five steps
    run_steps(&mut driver, AxisState::neutral(), 4);
    assert!(driver.contains(bomb));

    driver.fixed_step(&AxisState::neutral());
    assert!(!driver.contains(bomb));
    assert_eq!(
        driver.drain_events(),
        vec![SimEvent::ObjectDestroyed {
            id: bomb,
            name: "bomb".to_string(),
        }]
    );
}

#[test]
fn test_target_scores_off_screen() {
    let (mut driver, target) = driver_with_target();
    driver.frame(&AxisState::neutral());
    assert_eq!(driver.score().total(), 0.0);

    driver.body_mut(target).unwrap().set_position(Vector3::new(10.5, 0.0, 0.0));
    driver.frame(&AxisState::neutral());

    let state = driver.get::<TargetBox>(target).unwrap().state();
    assert!(state.scored);
    assert_eq!(state.color, Rgba::GREEN);
    assert_eq!(driver.score().total(), 2.5);
    assert_eq!(
        driver.drain_events(),
        vec![SimEvent::Scored {
            id: target,
            points: 2.5
        }]
    );
}

#[test]
fn test_target_on_threshold_does_not_score() {
    let (mut driver, target) = driver_with_target();
    driver.body_mut(target).unwrap().set_position(Vector3::new(10.0, 0.0, 0.0));
    driver.frame(&AxisState::neutral());
    assert!(!driver.get::<TargetBox>(target).unwrap().state().scored);
}

#[test]
fn test_target_scores_on_ground_contact_once() {
    let (mut driver, target) = driver_with_target();
    let ground = Collision::with_impulse(ColliderTag::Ground, 0.5);
    driver.notify_collision(target, &ground).unwrap();
    driver.notify_collision(target, &ground).unwrap();

    driver.body_mut(target).unwrap().set_position(Vector3::new(50.0, 0.0, 0.0));
    for _ in 0..5 {
        driver.frame(&AxisState::neutral());
    }

    assert_eq!(driver.score().total(), 2.5);
    assert_eq!(driver.score().hits(), 1);
}

#[test]
fn test_target_ignores_other_colliders() {
    let (mut driver, target) = driver_with_target();
    driver
        .notify_collision(target, &Collision::with_impulse(ColliderTag::Goal, 0.5))
        .unwrap();
    assert_eq!(driver.score().total(), 0.0);
}

#[test]
fn test_each_box_has_its_own_threshold() {
    let (mut driver, near) = driver_with_target();
    let far = driver.add(TargetBox::new(
        flyer_arcade::components::TargetBoxConfig {
            off_screen_x: 100.0,
            mass: 1.0,
            ..Default::default()
        },
        Default::default(),
    ));

    for id in [near, far] {
        driver.body_mut(id).unwrap().set_position(Vector3::new(20.0, 0.0, 0.0));
    }
    driver.frame(&AxisState::neutral());

    assert!(driver.get::<TargetBox>(near).unwrap().state().scored);
    assert!(!driver.get::<TargetBox>(far).unwrap().state().scored);
}
