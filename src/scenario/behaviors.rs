//! Event and collision stage tasks of the scenario.

use tracing::info;

use crate::collision::detect_collisions;
use crate::integration::AcceleratedMotion;
use crate::math::vec2::Vec2;
use crate::scheduler::{Signal, Task};
use crate::world::{BodyId, Flag, Scene, Stage};

/// Ends the world after `lifetime_ms`.
#[derive(Debug, Clone, Copy)]
pub struct WorldLife {
    elapsed_ms: f64,
    lifetime_ms: f64,
}

impl WorldLife {
    pub fn new(lifetime_ms: f64) -> Self {
        Self {
            elapsed_ms: 0.0,
            lifetime_ms,
        }
    }
}

impl Task<Scene> for WorldLife {
    fn run(&mut self, scene: &mut Scene, delta_ms: f64) -> Signal {
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms > self.lifetime_ms {
            info!(elapsed_ms = self.elapsed_ms, "world ended");
            scene.world.end();
            return Signal::Complete;
        }
        Signal::Continue
    }

    fn name(&self) -> &'static str {
        "world life"
    }
}

/// Keeps an entity's `life` flag in sync with the world: once the world has
/// ended, the flag is cleared and every behavior sharing it winds down.
#[derive(Debug, Clone, Copy)]
pub struct EntityLife {
    life: Flag,
}

impl EntityLife {
    pub fn new(life: Flag) -> Self {
        Self { life }
    }
}

impl Task<Scene> for EntityLife {
    fn run(&mut self, scene: &mut Scene, _delta_ms: f64) -> Signal {
        if !scene.world.is_alive() {
            scene.clear_flag(self.life);
        }
        Signal::from_bool(scene.is_present(self.life))
    }

    fn name(&self) -> &'static str {
        "entity life"
    }
}

/// What a [`Countdown`] does when it runs out.
#[derive(Debug, Clone, Copy)]
pub enum CountdownAction {
    /// Clear a flag. Also done when the owner dies first.
    ClearFlag(Flag),
    /// Start an accelerated motion bound to the owner's life.
    StartMotion { body: BodyId, acceleration: Vec2 },
}

/// Waits until more than `duration_ms` has passed, then performs its action.
/// Gives up early when `owner` is no longer present.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    elapsed_ms: f64,
    duration_ms: f64,
    owner: Flag,
    action: CountdownAction,
}

impl Countdown {
    pub fn new(duration_ms: f64, owner: Flag, action: CountdownAction) -> Self {
        Self {
            elapsed_ms: 0.0,
            duration_ms,
            owner,
            action,
        }
    }
}

impl Task<Scene> for Countdown {
    fn run(&mut self, scene: &mut Scene, delta_ms: f64) -> Signal {
        if !scene.is_present(self.owner) {
            if let CountdownAction::ClearFlag(flag) = self.action {
                scene.clear_flag(flag);
            }
            return Signal::Complete;
        }

        self.elapsed_ms += delta_ms;
        if self.elapsed_ms <= self.duration_ms {
            return Signal::Continue;
        }

        match self.action {
            CountdownAction::ClearFlag(flag) => scene.clear_flag(flag),
            CountdownAction::StartMotion { body, acceleration } => {
                let motion = AcceleratedMotion::start(scene, body, acceleration, self.owner);
                scene.spawn(Stage::Motion, Box::new(motion));
            }
        }
        Signal::Complete
    }

    fn name(&self) -> &'static str {
        "countdown"
    }
}

/// Turns clicks into jumps once `delay_ms` has passed. Clicks that arrive
/// earlier are dropped. Completes when the body's `life` goes away.
#[derive(Debug, Clone, Copy)]
pub struct JumpControl {
    body: BodyId,
    life: Flag,
    elapsed_ms: f64,
    delay_ms: f64,
    jump: Vec2,
    jump_duration_ms: f64,
}

impl JumpControl {
    pub fn new(body: BodyId, life: Flag, delay_ms: f64, jump: Vec2, jump_duration_ms: f64) -> Self {
        Self {
            body,
            life,
            elapsed_ms: 0.0,
            delay_ms,
            jump,
            jump_duration_ms,
        }
    }

    fn is_enabled(&self) -> bool {
        self.elapsed_ms > self.delay_ms
    }
}

impl Task<Scene> for JumpControl {
    fn run(&mut self, scene: &mut Scene, delta_ms: f64) -> Signal {
        if !scene.is_present(self.life) {
            return Signal::Complete;
        }

        self.elapsed_ms += delta_ms;
        let clicks = scene.take_clicks();
        if !self.is_enabled() {
            return Signal::Continue;
        }

        for _ in 0..clicks {
            let jump = scene.new_flag(true);
            let motion = AcceleratedMotion::start(scene, self.body, self.jump, jump);
            scene.spawn(Stage::Motion, Box::new(motion));
            scene.spawn(
                Stage::Event,
                Box::new(Countdown::new(
                    self.jump_duration_ms,
                    self.life,
                    CountdownAction::ClearFlag(jump),
                )),
            );
            info!(body = self.body.index(), "jump");
        }
        Signal::Continue
    }

    fn name(&self) -> &'static str {
        "jump control"
    }
}

/// Runs the broad phase over the world every tick and keeps the report on
/// the scene. Completes when the world ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionPass;

impl Task<Scene> for CollisionPass {
    fn run(&mut self, scene: &mut Scene, _delta_ms: f64) -> Signal {
        if !scene.world.is_alive() {
            return Signal::Complete;
        }
        scene.last_report = detect_collisions(scene.world.bodies());
        Signal::Continue
    }

    fn name(&self) -> &'static str {
        "collision pass"
    }
}
