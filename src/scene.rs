/*

    Declare the scene the alignment operators work on.

    The host application owns the objects, the selection and
    the 3D cursor. Everything in this crate reaches them through
    the SceneContext trait so that the operators can run against
    any host. Scene is a plain in-memory implementation of it.

    @date: 2 Oct, 2025
    @author: Bartu
*/

use crate::prelude::*;
use crate::object::SceneObject;

/// Index of an object inside the host's object storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

pub trait SceneContext {
    fn active_object(&self) -> Option<ObjectId>;

    /// Selected objects, in selection order
    fn selected_objects(&self) -> Vec<ObjectId>;

    fn object(&self, id: ObjectId) -> Option<&SceneObject>;
    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject>;

    fn cursor(&self) -> Vector3;
    fn set_cursor(&mut self, location: Vector3);
}


#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    active: Option<ObjectId>,
    selected: Vec<ObjectId>,
    cursor: Vector3,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, obj: SceneObject) -> ObjectId {
        self.objects.push(obj);
        ObjectId(self.objects.len() - 1)
    }

    /// Add to the selection, keeping selection order. Selecting
    /// twice is a no-op.
    pub fn select(&mut self, id: ObjectId) {
        if self.objects.get(id.0).is_none() {
            warn!("Ignoring selection of unknown object {:?}", id);
            return;
        }
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn set_active(&mut self, id: Option<ObjectId>) {
        self.active = id.filter(|id| self.objects.get(id.0).is_some());
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Look up an object by name, first match wins
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.objects.iter().position(|o| o.name == name).map(ObjectId)
    }
}

impl SceneContext for Scene {
    fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    fn selected_objects(&self) -> Vec<ObjectId> {
        self.selected.clone()
    }

    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0)
    }

    fn cursor(&self) -> Vector3 {
        self.cursor
    }

    fn set_cursor(&mut self, location: Vector3) {
        self.cursor = location;
    }
}
