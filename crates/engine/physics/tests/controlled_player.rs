//! The controller driving a real player body

use controls::{ControllerConfig, Controls, GroundLatch};
use devices::{InputEvent, InputHub, Key};
use glam::Vec3;
use playground_core::Node;
use playground_physics::rapier3d::prelude::*;
use playground_physics::{create_ground_plane_collider, FixedStep, PhysicsWorld, PlayerBody};

const FRAME: f32 = 1.0 / 60.0;

/// Sphere bottom one unit above a flat floor
const START: Vec3 = Vec3::new(0.0, 3.0, 0.0);

/// Body height when resting on the floor
const REST_HEIGHT: f32 = 2.0;

struct Harness {
    world: PhysicsWorld,
    player: PlayerBody,
    controls: Controls<RigidBodyHandle, Node>,
}

impl Harness {
    fn new(config: ControllerConfig) -> Self {
        let mut world = PhysicsWorld::default();
        let floor = world.add_rigid_body(RigidBodyBuilder::fixed().build());
        world.add_collider(create_ground_plane_collider(Vec3::Y), floor);

        let player = PlayerBody::new(&mut world, START);
        let controls = Controls::new(player.handle(), Node::default(), config).unwrap();

        Self {
            world,
            player,
            controls,
        }
    }

    fn frame(&mut self) {
        let controls = &mut self.controls;
        self.world.step_fixed(FixedStep::default(), FRAME, |contacts| {
            controls.begin_step();
            for contact in contacts {
                controls.handle_contact(contact);
            }
        });

        let mut body = self.world.body_mut(self.player.handle()).unwrap();
        self.controls.update(&mut body, FRAME);
    }

    fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            self.frame();
        }
    }

    fn key_down(&mut self, key: Key) {
        let mut body = self.world.body_mut(self.player.handle()).unwrap();
        self.controls.key_down(key, &mut body);
    }

    fn position(&self) -> Vec3 {
        self.player.position(&self.world)
    }

    fn velocity(&self) -> Vec3 {
        self.player.velocity(&self.world)
    }
}

#[test]
fn test_falls_and_lands_on_floor() {
    let mut harness = Harness::new(ControllerConfig::default());
    assert!(!harness.controls.is_on_ground());

    harness.run(120);

    assert!(harness.controls.is_on_ground());
    assert!((harness.position().y - REST_HEIGHT).abs() < 0.1, "{}", harness.position());
    assert!(harness.velocity().y.abs() < 0.5);
    assert_eq!(harness.controls.object().position, harness.position());
}

#[test]
fn test_jump_from_floor() {
    let mut harness = Harness::new(ControllerConfig::default());
    harness.run(120);

    harness.key_down(Key::Space);
    assert_eq!(harness.velocity().y, 12.0);
    assert!(!harness.controls.is_on_ground());

    harness.run(10);
    assert!(harness.position().y > REST_HEIGHT + 1.0, "{}", harness.position());
}

#[test]
fn test_jump_in_mid_air_does_nothing() {
    let mut harness = Harness::new(ControllerConfig::default());
    harness.run(5);
    let before = harness.velocity();

    harness.key_down(Key::Space);
    assert_eq!(harness.velocity(), before);
}

#[test]
fn test_walks_forward_through_input_hub() {
    let mut harness = Harness::new(ControllerConfig::default());
    let mut hub = InputHub::new();
    harness.controls.attach(&mut hub);
    harness.controls.set_enabled(true);
    harness.run(120);

    hub.dispatch(InputEvent::KeyDown(Key::W));
    let mut body = harness.world.body_mut(harness.player.handle()).unwrap();
    assert_eq!(harness.controls.pump(&mut body), 1);

    harness.run(60);
    let position = harness.position();
    assert!(position.z < -5.0, "{position}");
    assert!(position.x.abs() < 1e-3);
    assert!((position.y - REST_HEIGHT).abs() < 0.1);

    assert!(harness.controls.detach(&mut hub));
}

#[test]
fn test_disabled_controller_does_not_walk() {
    let mut harness = Harness::new(ControllerConfig::default());
    harness.run(120);

    harness.key_down(Key::W);
    harness.run(60);
    assert!(harness.position().z.abs() < 1e-3);
}

#[test]
fn test_reset_returns_to_spawn() {
    let mut harness = Harness::new(ControllerConfig::instant(96.0, 12.0));
    harness.controls.set_enabled(true);
    harness.run(60);

    harness.key_down(Key::D);
    harness.run(30);
    assert!(harness.position().x > 1.0);

    harness.player.reset(&mut harness.world);
    harness.frame();
    let position = harness.position();
    assert!(position.x.abs() < 1e-3 && position.y <= START.y, "{position}");
}

#[test]
fn test_per_step_latch_drops_ground_when_lifted() {
    let config = ControllerConfig::default().with_ground_latch(GroundLatch::PerStep);
    let mut harness = Harness::new(config);
    harness.run(120);
    assert!(harness.controls.is_on_ground());

    harness
        .world
        .body_mut(harness.player.handle())
        .unwrap()
        .set_position(Vec3::new(0.0, 50.0, 0.0));
    harness.frame();
    assert!(!harness.controls.is_on_ground());

    // The default latch keeps the flag until a jump
    let mut harness = Harness::new(ControllerConfig::default());
    harness.run(120);
    harness
        .world
        .body_mut(harness.player.handle())
        .unwrap()
        .set_position(Vec3::new(0.0, 50.0, 0.0));
    harness.frame();
    assert!(harness.controls.is_on_ground());
}
