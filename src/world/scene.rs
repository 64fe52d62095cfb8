use crate::collision::CollisionReport;
use crate::math::transform::Transform;
use crate::scheduler::Task;

use super::simulation::Stage;
use super::world::World;

/// Handle to a presence flag owned by a [`Scene`].
///
/// Several behaviors of one entity share a flag: clearing it makes all of
/// them wind down on their next run. A cleared flag stays absent for good,
/// even after its slot is handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flag {
    slot: usize,
    generation: u32,
}

#[derive(Debug, Clone, Copy)]
struct FlagSlot {
    generation: u32,
    present: bool,
}

/// Everything tasks may read or change during a tick.
pub struct Scene {
    pub world: World,
    pub camera: Transform,
    /// Broad-phase result of the latest collision pass.
    pub last_report: CollisionReport,
    elapsed_ms: f64,
    flags: Vec<FlagSlot>,
    // Slots whose flag is absent, free for reuse
    free_slots: Vec<usize>,
    clicks: u32,
    spawned: Vec<(Stage, Box<dyn Task<Scene>>)>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            camera: Transform::identity(),
            last_report: CollisionReport::default(),
            elapsed_ms: 0.0,
            flags: Vec::new(),
            free_slots: Vec::new(),
            clicks: 0,
            spawned: Vec::new(),
        }
    }

    /// Total simulated time.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub(crate) fn advance(&mut self, delta_ms: f64) {
        self.elapsed_ms += delta_ms;
    }

    /// Allocates a flag, initially present or not. Reuses the slot of a
    /// cleared flag when there is one.
    pub fn new_flag(&mut self, present: bool) -> Flag {
        let flag = match self.free_slots.pop() {
            Some(slot) => {
                let entry = &mut self.flags[slot];
                entry.generation = entry.generation.wrapping_add(1);
                entry.present = present;
                Flag {
                    slot,
                    generation: entry.generation,
                }
            }
            None => {
                self.flags.push(FlagSlot {
                    generation: 0,
                    present,
                });
                Flag {
                    slot: self.flags.len() - 1,
                    generation: 0,
                }
            }
        };
        if !present {
            self.free_slots.push(flag.slot);
        }
        flag
    }

    pub fn is_present(&self, flag: Flag) -> bool {
        self.flags
            .get(flag.slot)
            .is_some_and(|entry| entry.generation == flag.generation && entry.present)
    }

    /// Clears `flag` and frees its slot. Clearing a stale or already
    /// cleared flag does nothing.
    pub fn clear_flag(&mut self, flag: Flag) {
        if self.is_present(flag) {
            self.flags[flag.slot].present = false;
            self.free_slots.push(flag.slot);
        }
    }

    /// Number of flag slots allocated so far.
    pub fn flag_slots(&self) -> usize {
        self.flags.len()
    }

    /// Records a pointer click for the input handling tasks.
    pub fn push_click(&mut self) {
        self.clicks += 1;
    }

    /// Returns and resets the number of clicks since the last call.
    pub fn take_clicks(&mut self) -> u32 {
        std::mem::take(&mut self.clicks)
    }

    /// Queues a task; it joins `stage`'s list once the running stage ends.
    pub fn spawn(&mut self, stage: Stage, task: Box<dyn Task<Scene>>) {
        self.spawned.push((stage, task));
    }

    pub(crate) fn take_spawned(&mut self) -> Vec<(Stage, Box<dyn Task<Scene>>)> {
        std::mem::take(&mut self.spawned)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
