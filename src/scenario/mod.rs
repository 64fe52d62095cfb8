//! The dot-and-wall scene: a small square pushed to the right for a few
//! seconds, then falling, jumping on click, next to a tall static wall.

pub mod behaviors;
pub mod config;

use tracing::info;

pub use behaviors::{
    CollisionPass, Countdown, CountdownAction, EntityLife, JumpControl, WorldLife,
};
pub use config::{ConfigError, ScenarioConfig};

use crate::integration::{AcceleratedMotion, Heading, Translation};
use crate::objects::Body;
use crate::scheduler::Task;
use crate::shapes::Polygon;
use crate::world::{BodyId, Scene, Simulation, Stage};

/// A running scenario and the handles of its bodies.
pub struct Scenario {
    pub simulation: Simulation,
    pub config: ScenarioConfig,
    pub dot: BodyId,
    pub wall: BodyId,
}

impl Scenario {
    /// Builds the world and queues every behavior. Nothing runs until the
    /// first [`Simulation::tick`].
    pub fn start(config: ScenarioConfig) -> Self {
        let mut scene = Scene::new();
        let mut tasks: Vec<(Stage, Box<dyn Task<Scene>>)> = Vec::new();

        // Dot first, then the wall: the broad phase pairs them in this order
        let dot_config = config.dot;
        let dot = scene.world.add_body(Body::at(
            Polygon::rectangle(dot_config.width, dot_config.height),
            dot_config.position,
        ));
        let dot_life = scene.new_flag(true);
        let dot_push = scene.new_flag(true);

        tasks.push((Stage::Motion, Box::new(Translation::new(dot, dot_life))));
        tasks.push((Stage::Motion, Box::new(Heading::new(dot, dot_life))));
        let push = AcceleratedMotion::start(&mut scene, dot, dot_config.push, dot_push);
        tasks.push((Stage::Motion, Box::new(push)));

        tasks.push((Stage::Event, Box::new(WorldLife::new(config.world_lifetime_ms))));
        tasks.push((Stage::Event, Box::new(EntityLife::new(dot_life))));
        tasks.push((
            Stage::Event,
            Box::new(Countdown::new(
                dot_config.push_duration_ms,
                dot_life,
                CountdownAction::ClearFlag(dot_push),
            )),
        ));
        tasks.push((
            Stage::Event,
            Box::new(Countdown::new(
                dot_config.free_fall_delay_ms,
                dot_life,
                CountdownAction::StartMotion {
                    body: dot,
                    acceleration: dot_config.free_fall,
                },
            )),
        ));
        tasks.push((
            Stage::Event,
            Box::new(JumpControl::new(
                dot,
                dot_life,
                dot_config.jump_delay_ms,
                dot_config.jump,
                dot_config.jump_duration_ms,
            )),
        ));

        let wall_config = config.wall;
        let wall = scene.world.add_body(Body::at(
            Polygon::rectangle(wall_config.width, wall_config.height),
            wall_config.position,
        ));
        let wall_life = scene.new_flag(true);
        tasks.push((Stage::Event, Box::new(EntityLife::new(wall_life))));

        tasks.push((Stage::Collision, Box::new(CollisionPass)));

        let mut simulation = Simulation::new(scene);
        for (stage, task) in tasks {
            simulation.add_task(stage, task);
        }

        info!(bodies = simulation.scene().world.len(), "scenario started");
        Self {
            simulation,
            config,
            dot,
            wall,
        }
    }

    pub fn tick(&mut self, delta_ms: f64) {
        self.simulation.tick(delta_ms);
    }

    pub fn is_running(&self) -> bool {
        self.simulation.is_running()
    }
}
