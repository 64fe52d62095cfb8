use tracing::info;

use super::scene::Scene;
use crate::scheduler::{Task, TaskList};

/// The per-tick stages, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Lifecycle, timers and input.
    Event,
    /// Velocity and transform updates.
    Motion,
    /// Broad phase + SAT over the world.
    Collision,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Event, Stage::Motion, Stage::Collision];
}

/// Owns the scene and one task list per stage, and drives them frame by frame.
pub struct Simulation {
    scene: Scene,
    events: TaskList<Scene>,
    motion: TaskList<Scene>,
    collision: TaskList<Scene>,
    frame: u64,
}

impl Simulation {
    /// Creates a simulation around `scene` with no tasks.
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            events: TaskList::new(),
            motion: TaskList::new(),
            collision: TaskList::new(),
            frame: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Adds a task to `stage`'s list.
    pub fn add_task(&mut self, stage: Stage, task: Box<dyn Task<Scene>>) {
        self.list_mut(stage).push(task);
    }

    /// Number of live tasks in `stage`'s list.
    pub fn task_count(&self, stage: Stage) -> usize {
        match stage {
            Stage::Event => self.events.len(),
            Stage::Motion => self.motion.len(),
            Stage::Collision => self.collision.len(),
        }
    }

    /// True while any stage still has tasks.
    pub fn is_running(&self) -> bool {
        Stage::ALL.iter().any(|&stage| self.task_count(stage) > 0)
    }

    /// Records a pointer click; input tasks see it on the next tick.
    pub fn click(&mut self) {
        self.scene.push_click();
    }

    /// Advances every stage once by `delta_ms` milliseconds.
    ///
    /// Tasks spawned by a stage join their list right after that stage, so
    /// a motion task spawned by an event runs in the same tick.
    pub fn tick(&mut self, delta_ms: f64) {
        self.scene.advance(delta_ms);

        for stage in Stage::ALL {
            let list = match stage {
                Stage::Event => &mut self.events,
                Stage::Motion => &mut self.motion,
                Stage::Collision => &mut self.collision,
            };
            list.run_once(&mut self.scene, delta_ms);
            self.adopt_spawned();
        }

        self.frame += 1;
    }

    /// Ends the world and drops every pending task.
    pub fn teardown(&mut self) {
        info!(frame = self.frame, "simulation teardown");
        self.scene.world.end();
        self.scene.take_spawned();
        for stage in Stage::ALL {
            self.list_mut(stage).clear();
        }
    }

    fn adopt_spawned(&mut self) {
        for (stage, task) in self.scene.take_spawned() {
            self.list_mut(stage).push(task);
        }
    }

    fn list_mut(&mut self, stage: Stage) -> &mut TaskList<Scene> {
        match stage {
            Stage::Event => &mut self.events,
            Stage::Motion => &mut self.motion,
            Stage::Collision => &mut self.collision,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Scene::new())
    }
}
