//! In-memory scene
//!
//! A minimal stand-in for the editing environment the operator runs in:
//! uniquely named objects, a selection flag per object, and one active
//! object. Objects are addressed by name only, never by long-lived handles.

use crate::geometry::curve::Curve;
use std::collections::BTreeMap;

/// Data carried by a scene object
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectData {
    Text { body: String },
    Curve(Curve),
    Mesh,
}

impl ObjectData {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ObjectData::Text { .. } => "text object",
            ObjectData::Curve(_) => "curve object",
            ObjectData::Mesh => "mesh object",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub data: ObjectData,
    pub selected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: BTreeMap<String, SceneObject>,
    active: Option<String>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A name not yet used in the scene, derived from `base`
    ///
    /// Clashes get a numeric suffix: `base.001`, `base.002`, ...
    pub fn unique_name(&self, base: &str) -> String {
        if !self.objects.contains_key(base) {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{base}.{n:03}"))
            .find(|name| !self.objects.contains_key(name))
            .unwrap_or_else(|| base.to_string())
    }

    /// Add an object under a unique name derived from `name`, returning that name
    pub fn add_object(&mut self, name: &str, data: ObjectData) -> String {
        let name = self.unique_name(name);
        self.objects.insert(
            name.clone(),
            SceneObject {
                name: name.clone(),
                data,
                selected: false,
            },
        );
        name
    }

    /// Add a text object and make it the selected, active object
    pub fn add_text(&mut self, name: &str, body: &str) -> String {
        let name = self.add_object(
            name,
            ObjectData::Text {
                body: body.to_string(),
            },
        );
        self.deselect_all();
        self.set_active(&name);
        name
    }

    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.get_mut(name)
    }

    pub fn active(&self) -> Option<&SceneObject> {
        self.active.as_deref().and_then(|name| self.objects.get(name))
    }

    /// Make `name` the active object and select it
    pub fn set_active(&mut self, name: &str) -> bool {
        match self.objects.get_mut(name) {
            Some(object) => {
                object.selected = true;
                self.active = Some(name.to_string());
                true
            }
            None => false,
        }
    }

    pub fn deselect_all(&mut self) {
        for object in self.objects.values_mut() {
            object.selected = false;
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<SceneObject> {
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        self.objects.remove(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }
}
