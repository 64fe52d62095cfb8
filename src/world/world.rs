use crate::objects::Body;

/// Handle to a body in a [`World`]. Stays valid until the world ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(usize);

impl BodyId {
    /// Position of the body in [`World::bodies`].
    pub fn index(self) -> usize {
        self.0
    }
}

/// The ordered body list the broad phase runs over.
///
/// Created when a scenario starts and emptied wholesale by [`World::end`];
/// bodies are never removed one by one.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    bodies: Vec<Body>,
    alive: bool,
}

impl World {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            alive: true,
        }
    }

    /// Appends a body and returns its handle.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Drops every body and marks the world as ended.
    pub fn end(&mut self) {
        self.bodies.clear();
        self.alive = false;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
