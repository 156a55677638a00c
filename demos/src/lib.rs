// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless stand-ins for a renderer, shared by the demos.
//!
//! A [`Scene`] is a flat list of screen-space slabs. Each slab has a front
//! face toward the viewer and a back face behind it, so a cursor over a slab
//! yields two hits, nearest first, just like a ray cast through a closed mesh.

use glam::Vec3;
use kurbo::{Point, Rect};
use understory_scene_events::{Intersection, Picker};

/// Handle of a node in the demo scene graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// One pickable slab.
#[derive(Clone, Debug)]
pub struct SceneObject {
    /// Display name.
    pub name: &'static str,
    /// Root→leaf node path reported when the slab is hit.
    pub path: Vec<NodeId>,
    /// Screen-space footprint.
    pub rect: Rect,
    /// Distance of the front face from the viewer.
    pub depth: f32,
    /// Distance between front and back faces.
    pub thickness: f32,
}

/// A flat collection of slabs.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slab.
    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Name of the object whose path ends in `node`, or of its group.
    pub fn name_of(&self, node: NodeId) -> &'static str {
        self.objects
            .iter()
            .find(|o| o.path.contains(&node))
            .map_or("<unknown>", |o| o.name)
    }
}

impl Picker<NodeId> for Scene {
    fn intersections(&mut self, cursor: Point) -> Vec<Intersection<NodeId>> {
        let mut hits = Vec::new();
        for o in self.objects.iter().filter(|o| o.rect.contains(cursor)) {
            let local_x = (cursor.x - o.rect.x0) as f32;
            let local_y = (cursor.y - o.rect.y0) as f32;
            // The viewer looks down -Z.
            hits.push((
                o.depth,
                Intersection::new(
                    o.path.clone(),
                    Vec3::new(local_x, local_y, -o.depth),
                    Vec3::new(local_x, local_y, 0.0),
                    Vec3::Z,
                ),
            ));
            hits.push((
                o.depth + o.thickness,
                Intersection::new(
                    o.path.clone(),
                    Vec3::new(local_x, local_y, -(o.depth + o.thickness)),
                    Vec3::new(local_x, local_y, -o.thickness),
                    Vec3::NEG_Z,
                ),
            ));
        }
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.into_iter().map(|(_, h)| h).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab(name: &'static str, id: u32, x0: f64, depth: f32) -> SceneObject {
        SceneObject {
            name,
            path: vec![NodeId(0), NodeId(id)],
            rect: Rect::new(x0, 0.0, x0 + 100.0, 100.0),
            depth,
            thickness: 1.0,
        }
    }

    #[test]
    fn hits_are_sorted_nearest_first() {
        let mut scene = Scene::new();
        scene.add(slab("far", 1, 0.0, 10.0));
        scene.add(slab("near", 2, 50.0, 2.0));
        let hits = scene.intersections(Point::new(75.0, 50.0));
        let leaves: Vec<_> = hits.iter().filter_map(|h| h.leaf()).collect();
        assert_eq!(leaves, vec![NodeId(2), NodeId(2), NodeId(1), NodeId(1)]);
        assert_eq!(hits[0].world_normal, Vec3::Z);
        assert_eq!(hits[1].world_normal, Vec3::NEG_Z);
    }

    #[test]
    fn miss_returns_nothing() {
        let mut scene = Scene::new();
        scene.add(slab("only", 1, 0.0, 1.0));
        assert!(scene.intersections(Point::new(500.0, 50.0)).is_empty());
        assert_eq!(scene.name_of(NodeId(1)), "only");
    }
}
