//! Motion-stage behaviors. Velocities are in units per second, frame deltas
//! in milliseconds.

use tracing::trace;

use crate::math::vec2::Vec2;
use crate::scheduler::{Signal, Task};
use crate::world::{BodyId, Flag, Scene};

fn seconds(delta_ms: f64) -> f64 {
    delta_ms / 1000.0
}

/// Moves a body along its velocity while `life` is present.
#[derive(Debug, Clone, Copy)]
pub struct Translation {
    body: BodyId,
    life: Flag,
}

impl Translation {
    pub fn new(body: BodyId, life: Flag) -> Self {
        Self { body, life }
    }
}

impl Task<Scene> for Translation {
    fn run(&mut self, scene: &mut Scene, delta_ms: f64) -> Signal {
        if !scene.is_present(self.life) {
            return Signal::Complete;
        }
        let Some(body) = scene.world.body_mut(self.body) else {
            return Signal::Complete;
        };
        // p = p + v*dt
        let velocity = body.velocity;
        body.transform.translation += velocity * seconds(delta_ms);
        Signal::Continue
    }

    fn name(&self) -> &'static str {
        "translation"
    }
}

/// Turns a body's transform to face along its velocity while `life` is present.
///
/// A body at rest has no heading; its matrix is left as it was.
#[derive(Debug, Clone, Copy)]
pub struct Heading {
    body: BodyId,
    life: Flag,
}

impl Heading {
    pub fn new(body: BodyId, life: Flag) -> Self {
        Self { body, life }
    }
}

impl Task<Scene> for Heading {
    fn run(&mut self, scene: &mut Scene, _delta_ms: f64) -> Signal {
        if !scene.is_present(self.life) {
            return Signal::Complete;
        }
        let Some(body) = scene.world.body_mut(self.body) else {
            return Signal::Complete;
        };
        let velocity = body.velocity;
        if let Err(error) = body.transform.set_heading(velocity) {
            trace!(body = self.body.index(), %error, "heading unchanged");
        }
        Signal::Continue
    }

    fn name(&self) -> &'static str {
        "heading"
    }
}

/// Constant acceleration applied while `flag` is present.
///
/// The acceleration is added to the body's acceleration when the motion
/// starts and subtracted again when it ends, so concurrent motions stack.
#[derive(Debug, Clone, Copy)]
pub struct AcceleratedMotion {
    body: BodyId,
    acceleration: Vec2,
    flag: Flag,
}

impl AcceleratedMotion {
    /// Starts the motion, registering `acceleration` on the body right away.
    pub fn start(scene: &mut Scene, body: BodyId, acceleration: Vec2, flag: Flag) -> Self {
        if let Some(target) = scene.world.body_mut(body) {
            target.acceleration += acceleration;
        }
        Self {
            body,
            acceleration,
            flag,
        }
    }
}

impl Task<Scene> for AcceleratedMotion {
    fn run(&mut self, scene: &mut Scene, delta_ms: f64) -> Signal {
        let present = scene.is_present(self.flag);
        let Some(body) = scene.world.body_mut(self.body) else {
            return Signal::Complete;
        };
        if !present {
            body.acceleration -= self.acceleration;
            return Signal::Complete;
        }
        // v = v + a*dt
        body.velocity += self.acceleration * seconds(delta_ms);
        Signal::Continue
    }

    fn name(&self) -> &'static str {
        "accelerated motion"
    }
}
