use glam::Vec2;
use gravity_sandbox::physics::{self, gravitational_force, G};
use gravity_sandbox::{
    AngleMode, Attractor, Command, DragController, Mover, PhysicsError, PhysicsParams,
    SingularityPolicy, World,
};
use winit::event::{ElementState, MouseButton};

const EPS: f32 = 1e-4;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < EPS
}

// ==================================================================================
// Scenarios
// ==================================================================================

#[test]
fn single_sun_pulls_mover_toward_it() {
    let mut world = World::new();
    world.spawn_attractor(Vec2::new(400.0, 300.0));
    world.spawn_mover(Vec2::new(400.0, 200.0), Vec2::ZERO);

    world.step().unwrap();

    let p = world.movers()[0];
    assert!(p.velocity.x.abs() < EPS);
    assert!(p.velocity.y > 0.0, "sun is below, pull must point down");
    assert!((p.velocity.length() - 0.981).abs() < EPS);
    assert!(close(p.position, Vec2::new(400.0, 200.981)));
}

#[test]
fn symmetric_suns_cancel_horizontally() {
    let mut world = World::new();
    world.spawn_attractor(Vec2::new(300.0, 300.0));
    world.spawn_attractor(Vec2::new(500.0, 300.0));
    world.spawn_mover(Vec2::new(400.0, 300.0), Vec2::ZERO);

    world.step().unwrap();

    let p = world.movers()[0];
    assert!(p.velocity.x.abs() < EPS, "net x pull {}", p.velocity.x);
    assert!(p.velocity.y.abs() < EPS);
}

#[test]
fn drag_sets_initial_velocity() {
    let mut input = DragController::default();
    let mut world = World::new();

    input.cursor_moved(Vec2::new(100.0, 100.0));
    input
        .mouse_input(MouseButton::Left, ElementState::Pressed)
        .unwrap();
    input.cursor_moved(Vec2::new(150.0, 150.0));
    let command = input
        .mouse_input(MouseButton::Left, ElementState::Released)
        .unwrap()
        .expect("release should launch");
    world.apply(command);

    let p = world.movers()[0];
    assert_eq!(p.position, Vec2::new(150.0, 150.0));
    assert!(close(p.velocity, Vec2::new(-7.5, -7.5)));
}

#[test]
fn coincident_bodies_are_detected() {
    let mut world = World::new();
    world.spawn_attractor(Vec2::new(200.0, 200.0));
    world.spawn_mover(Vec2::new(200.0, 200.0), Vec2::new(1.0, 0.0));

    assert_eq!(
        world.step(),
        Err(PhysicsError::Singularity {
            attractor: 0,
            mover: 0
        })
    );
    assert_eq!(world.movers()[0].position, Vec2::new(200.0, 200.0));
}

#[test]
fn coincident_bodies_softened_when_requested() {
    let params = PhysicsParams {
        singularity: SingularityPolicy::Soften(1.0),
        ..Default::default()
    };
    let mut world = World::new().with_params(params);
    world.spawn_attractor(Vec2::new(200.0, 200.0));
    world.spawn_mover(Vec2::new(200.0, 200.0), Vec2::new(1.0, 0.0));

    world.step().unwrap();
    assert_eq!(world.movers()[0].position, Vec2::new(201.0, 200.0));
}

#[test]
fn no_suns_means_straight_lines() {
    let mut world = World::new();
    world.spawn_mover(Vec2::new(10.0, 10.0), Vec2::new(2.0, -1.0));
    world.spawn_mover(Vec2::new(0.0, 0.0), Vec2::ZERO);

    for _ in 0..25 {
        world.step().unwrap();
    }

    assert_eq!(world.movers()[0].position, Vec2::new(60.0, -15.0));
    assert_eq!(world.movers()[0].velocity, Vec2::new(2.0, -1.0));
    assert_eq!(world.movers()[1].position, Vec2::ZERO);
}

// ==================================================================================
// Properties
// ==================================================================================

#[test]
fn attractor_order_does_not_change_result() {
    let suns = [
        Attractor::at(Vec2::new(100.0, 50.0)),
        Attractor::at(Vec2::new(-40.0, 220.0)),
        Attractor::new(Vec2::new(310.0, -90.0), 2500.0, 15.0),
    ];
    let start = [
        Mover::launched(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.5)),
        Mover::launched(Vec2::new(150.0, 150.0), Vec2::ZERO),
    ];
    let params = PhysicsParams::default();

    let mut forward = start;
    physics::step(&suns, &mut forward, &params).unwrap();

    let reversed: Vec<Attractor> = suns.iter().rev().copied().collect();
    let mut backward = start;
    physics::step(&reversed, &mut backward, &params).unwrap();

    for (a, b) in forward.iter().zip(&backward) {
        assert!(close(a.velocity, b.velocity));
        assert!(close(a.position, b.position));
    }
}

#[test]
fn spawning_does_not_disturb_movers() {
    let mut world = World::new();
    world.spawn_mover(Vec2::new(50.0, 60.0), Vec2::new(0.3, 0.4));
    let before = world.movers()[0];

    world.apply(Command::SpawnAttractor {
        position: Vec2::new(70.0, 80.0),
    });
    assert_eq!(world.movers()[0], before);

    world.step().unwrap();
    assert_ne!(world.movers()[0].velocity, before.velocity);
}

#[test]
fn force_strictly_decreasing_with_distance() {
    let sun = Attractor::at(Vec2::ZERO);
    let mut last = f32::INFINITY;
    for d in 1..200 {
        let p = Mover::launched(Vec2::new(d as f32 * 3.0, d as f32 * 4.0), Vec2::ZERO);
        let r = gravity_sandbox::vector::distance(sun.position, p.position);
        let f = gravitational_force(G, sun.mass, p.mass, r);
        assert!(f > 0.0 && f < last);
        last = f;
    }
}

#[test]
fn legacy_angle_matches_four_quadrant_off_axis() {
    let legacy = PhysicsParams {
        angle_mode: AngleMode::Legacy,
        ..Default::default()
    };
    let mut a = World::new().with_params(legacy);
    let mut b = World::new();
    for world in [&mut a, &mut b] {
        world.spawn_attractor(Vec2::new(400.0, 300.0));
        world.spawn_mover(Vec2::new(250.0, 420.0), Vec2::ZERO);
        world.spawn_mover(Vec2::new(560.0, 130.0), Vec2::ZERO);
    }

    for _ in 0..5 {
        a.step().unwrap();
        b.step().unwrap();
    }
    for (x, y) in a.movers().iter().zip(b.movers()) {
        assert!(close(x.position, y.position));
    }
}

#[test]
fn legacy_angle_faults_on_shared_x() {
    let legacy = PhysicsParams {
        angle_mode: AngleMode::Legacy,
        ..Default::default()
    };
    let mut world = World::new().with_params(legacy);
    world.spawn_attractor(Vec2::new(400.0, 300.0));
    world.spawn_mover(Vec2::new(400.0, 200.0), Vec2::ZERO);

    assert_eq!(
        world.step(),
        Err(PhysicsError::VerticalAlignment {
            attractor: 0,
            mover: 0
        })
    );
}
