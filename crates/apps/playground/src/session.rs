//! The playground frame loop

use anyhow::{Context, Result};
use controls::Controls;
use devices::{Action, InputEvent, InputHub, Subscription};
use glam::Vec3;
use playground_core::Camera;
use playground_physics::rapier3d::prelude::RigidBodyHandle;
use playground_physics::{
    DirectionMarker, FixedStep, PhysicsWorld, PlayerBody, SceneBodies,
};

use crate::config::PlaygroundConfig;
use crate::script::{HostEvent, Script};

/// Result of [`Session::run`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames that ran while focused
    pub frames: usize,
    /// Frames skipped while unfocused
    pub skipped: usize,
    /// Physics steps taken
    pub steps: usize,
    pub position: Vec3,
    pub velocity: Vec3,
    pub on_ground: bool,
}

/// A player in a physics scene, driven by host events
pub struct Session {
    world: PhysicsWorld,
    step: FixedStep,
    player: PlayerBody,
    scene: SceneBodies,
    controls: Controls<RigidBodyHandle, Camera>,
    hub: InputHub,
    host_input: Subscription,
    focused: bool,
    /// Time of the last focused frame; `None` after a focus change
    last_frame: Option<f32>,
    marker: DirectionMarker,
    frames: usize,
    skipped: usize,
    steps: usize,
}

impl Session {
    /// Build the world, scene, player and controller
    pub fn new(config: &PlaygroundConfig) -> Result<Self> {
        let mut world = PhysicsWorld::new(config.simulation.gravity);
        let scene = config
            .scene
            .build(&mut world)
            .with_context(|| format!("building scene '{}'", config.scene))?;
        let player = PlayerBody::new(&mut world, config.player.spawn);

        let mut hub = InputHub::new();
        let mut controls = Controls::new(player.handle(), Camera::default(), config.controller)
            .context("creating controls")?
            .with_bindings(config.bindings.clone());
        controls.attach(&mut hub);
        let host_input = hub.subscribe();

        let marker = player.marker(&world);

        Ok(Self {
            world,
            step: config.simulation.fixed_step(),
            player,
            scene,
            controls,
            hub,
            host_input,
            focused: true,
            last_frame: None,
            marker,
            frames: 0,
            skipped: 0,
            steps: 0,
        })
    }

    pub fn controls(&self) -> &Controls<RigidBodyHandle, Camera> {
        &self.controls
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn scene(&self) -> &SceneBodies {
        &self.scene
    }

    pub fn marker(&self) -> DirectionMarker {
        self.marker
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn position(&self) -> Vec3 {
        self.player.position(&self.world)
    }

    pub fn velocity(&self) -> Vec3 {
        self.player.velocity(&self.world)
    }

    /// Deliver one host event
    pub fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::Input(input) => self.hub.dispatch(input),
            HostEvent::Focus(focused) => {
                if focused != self.focused {
                    tracing::info!("Focus {}", if focused { "gained, resuming" } else { "lost, pausing" });
                }
                self.focused = focused;
                self.last_frame = None;
            }
        }
    }

    /// Advance one frame at simulated time `now`
    ///
    /// `fallback_dt` is used as the frame delta right after startup or a
    /// focus change, so a pause never turns into one huge step.
    ///
    /// Returns false if the frame was skipped because the window is
    /// unfocused.
    pub fn frame(&mut self, now: f32, fallback_dt: f32) -> bool {
        if !self.focused {
            self.skipped += 1;
            return false;
        }

        let delta = match self.last_frame {
            Some(last) => now - last,
            None => fallback_dt,
        };
        self.last_frame = Some(now);

        self.handle_host_input();

        let handle = self.player.handle();
        if let Some(mut body) = self.world.body_mut(handle) {
            self.controls.pump(&mut body);
        }

        let controls = &mut self.controls;
        let steps = self.world.step_fixed(self.step, delta, |contacts| {
            controls.begin_step();
            for contact in contacts {
                controls.handle_contact(contact);
            }
        });
        self.steps += steps;

        match self.world.body_mut(handle) {
            Some(mut body) => self.controls.update(&mut body, delta),
            None => tracing::warn!("Player body {:?} missing from world", handle),
        }

        self.marker = self.player.marker(&self.world);
        self.hub.end_frame();
        self.frames += 1;
        true
    }

    /// Pointer lock and reset are handled by the host, not the controller
    fn handle_host_input(&mut self) {
        for event in self.host_input.drain() {
            if let InputEvent::CursorMode(mode) = event {
                self.controls.set_enabled(mode.is_grabbed());
            }
        }

        // Held or repeated reset keys only count on the frame they went down
        let keyboard = self.hub.keyboard();
        let reset = self
            .controls
            .bindings()
            .keys_for(Action::Reset)
            .into_iter()
            .any(|key| keyboard.is_just_pressed(key));
        if reset {
            self.player.reset(&mut self.world);
        }
    }

    /// Run the timeline for `config.simulation.duration` simulated seconds
    pub fn run(&mut self, config: &PlaygroundConfig) -> RunSummary {
        let mut script = Script::new(config.script.clone());
        let frame_dt = config.simulation.frame_dt();
        let log_interval = config.simulation.log_interval;
        let frame_count = (config.simulation.duration * config.simulation.frame_rate).round() as usize;

        let mut next_log = 0.0;
        for index in 0..=frame_count {
            let now = index as f32 * frame_dt;
            for event in script.due(now) {
                self.dispatch(event);
            }

            if self.frame(now, frame_dt) && log_interval > 0.0 && now >= next_log {
                self.log_state(now);
                next_log = now + log_interval;
            }
        }

        if !script.is_finished() {
            tracing::warn!("{} script events after the end of the run were not fired", script.remaining());
        }

        self.summary()
    }

    fn log_state(&self, now: f32) {
        let position = self.position();
        let velocity = self.velocity();
        tracing::info!(
            "t={:.2}s pos=({:.2}, {:.2}, {:.2}) speed={:.2} vy={:.2} ground={} enabled={}",
            now,
            position.x,
            position.y,
            position.z,
            Vec3::new(velocity.x, 0.0, velocity.z).length(),
            velocity.y,
            self.controls.is_on_ground(),
            self.controls.is_enabled()
        );
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            skipped: self.skipped,
            steps: self.steps,
            position: self.position(),
            velocity: self.velocity(),
            on_ground: self.controls.is_on_ground(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{ScriptEntry, ScriptEvent};
    use devices::{CursorMode, Key, MouseMotion};
    use playground_physics::PLAYER_SPAWN;

    const DT: f32 = 1.0 / 60.0;

    fn session() -> Session {
        Session::new(&PlaygroundConfig::default()).unwrap()
    }

    fn run_frames(session: &mut Session, start: usize, count: usize) {
        for index in start..start + count {
            session.frame(index as f32 * DT, DT);
        }
    }

    #[test]
    fn test_new_session() {
        let session = session();
        assert_eq!(session.position(), PLAYER_SPAWN);
        assert_eq!(session.scene().len(), 5);
        assert_eq!(session.world().body_count(), 6);
        assert!(!session.controls().is_enabled());
        assert!(session.controls().is_attached());
    }

    #[test]
    fn test_pointer_lock_toggles_controls() {
        let mut session = session();

        session.dispatch(HostEvent::Input(InputEvent::CursorMode(CursorMode::Grabbed)));
        session.frame(0.0, DT);
        assert!(session.controls().is_enabled());

        session.dispatch(HostEvent::Input(InputEvent::CursorMode(CursorMode::Normal)));
        session.frame(DT, DT);
        assert!(!session.controls().is_enabled());
    }

    #[test]
    fn test_mouse_reaches_controls_through_hub() {
        let mut session = session();
        session.dispatch(HostEvent::Input(InputEvent::CursorMode(CursorMode::Grabbed)));
        session.frame(0.0, DT);

        session.dispatch(HostEvent::Input(InputEvent::MouseMove(MouseMotion::new(100.0, 0.0))));
        session.frame(DT, DT);
        assert!(session.controls().orientation().yaw() < 0.0);
    }

    #[test]
    fn test_unfocused_frames_are_skipped() {
        let mut session = session();
        run_frames(&mut session, 0, 10);
        let paused_at = session.position();

        session.dispatch(HostEvent::Focus(false));
        assert!(!session.frame(10.0 * DT, DT));
        assert!(!session.frame(500.0 * DT, DT));
        assert_eq!(session.position(), paused_at);

        // Long pause does not become one long step
        session.dispatch(HostEvent::Focus(true));
        let steps_before = session.summary().steps;
        assert!(session.frame(1000.0 * DT, DT));
        assert!(session.summary().steps - steps_before <= 2);

        let summary = session.summary();
        assert_eq!(summary.frames, 11);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn test_reset_key_returns_to_spawn() {
        let mut session = session();
        run_frames(&mut session, 0, 30);
        assert!(session.position().y < PLAYER_SPAWN.y);

        session.dispatch(HostEvent::Input(InputEvent::KeyDown(Key::R)));
        session.frame(30.0 * DT, DT);

        // Reset happens before the frame's physics step
        let position = session.position();
        assert!((position.y - PLAYER_SPAWN.y).abs() < 0.1, "{position}");
        assert!(session.velocity().y > -0.5);
    }

    #[test]
    fn test_held_reset_key_resets_once() {
        let mut session = session();
        session.dispatch(HostEvent::Input(InputEvent::KeyDown(Key::R)));
        session.frame(0.0, DT);
        run_frames(&mut session, 1, 30);
        let fallen = session.position().y;
        assert!(fallen < PLAYER_SPAWN.y - 0.5);

        // Key repeat while still held
        session.dispatch(HostEvent::Input(InputEvent::KeyDown(Key::R)));
        session.frame(31.0 * DT, DT);
        assert!(session.position().y < fallen);

        session.dispatch(HostEvent::Input(InputEvent::KeyUp(Key::R)));
        session.dispatch(HostEvent::Input(InputEvent::KeyDown(Key::R)));
        session.frame(32.0 * DT, DT);
        assert!((session.position().y - PLAYER_SPAWN.y).abs() < 0.1);
    }

    #[test]
    fn test_scripted_run_lands_on_tetrahedron_or_ground() {
        let mut config = PlaygroundConfig::default();
        config.simulation.duration = 6.0;
        config.simulation.log_interval = 0.0;
        config.script = vec![
            ScriptEntry {
                at: 0.0,
                event: ScriptEvent::PointerLock { locked: true },
            },
            ScriptEntry {
                at: 99.0,
                event: ScriptEvent::KeyDown { key: Key::W },
            },
        ];

        let mut session = Session::new(&config).unwrap();
        let summary = session.run(&config);

        assert_eq!(summary.frames, 361);
        assert_eq!(summary.skipped, 0);
        assert!(summary.position.y < PLAYER_SPAWN.y);
        assert!(summary.on_ground);
        assert!(session.controls().is_enabled());
    }
}
