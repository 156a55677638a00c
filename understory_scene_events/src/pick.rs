// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking results and hit selection.
//!
//! This crate does not intersect rays with geometry. A [`Picker`] supplies an
//! ordered list of [`Intersection`] records for the cursor, nearest first,
//! and [`select_hit`] chooses the one that should be considered "under the
//! pointer".
//!
//! ## Back faces
//!
//! With back-face ignoring enabled, the ray direction is approximated by the
//! segment from the first to the last hit. A hit is front-facing when its
//! world normal points against that direction. This needs at least two hits;
//! with fewer, or when no hit is front-facing, the nearest hit wins.
//!
//! ```
//! use glam::Vec3;
//! use understory_scene_events::pick::{select_hit, Intersection};
//!
//! // The ray travels along -Z. The first surface faces away from the viewer.
//! let hits = vec![
//!     Intersection::new(vec![1_u32], Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::NEG_Z),
//!     Intersection::new(vec![2_u32], Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO, Vec3::Z),
//! ];
//! assert_eq!(select_hit(&hits, false).unwrap().leaf(), Some(1));
//! assert_eq!(select_hit(&hits, true).unwrap().leaf(), Some(2));
//! ```

use alloc::vec::Vec;

use glam::Vec3;
use kurbo::Point;

/// One ray/surface intersection reported by the picking collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<K> {
    /// Node path from the picking root down to the hit leaf.
    pub path: Vec<K>,
    /// Intersection point in world space.
    pub world_point: Vec3,
    /// Intersection point in the hit node's local space.
    pub local_point: Vec3,
    /// Surface normal at the intersection, in world space.
    pub world_normal: Vec3,
}

impl<K: Copy> Intersection<K> {
    /// Create an intersection record.
    pub fn new(path: Vec<K>, world_point: Vec3, local_point: Vec3, world_normal: Vec3) -> Self {
        Self {
            path,
            world_point,
            local_point,
            world_normal,
        }
    }

    /// The hit leaf, i.e. the last entry of the path.
    pub fn leaf(&self) -> Option<K> {
        self.path.last().copied()
    }
}

/// Source of picking results for a cursor position.
///
/// Results must be ordered nearest to farthest along the view ray.
pub trait Picker<K> {
    /// Return every intersection under `cursor`, nearest first.
    fn intersections(&mut self, cursor: Point) -> Vec<Intersection<K>>;
}

impl<K, F> Picker<K> for F
where
    F: FnMut(Point) -> Vec<Intersection<K>>,
{
    fn intersections(&mut self, cursor: Point) -> Vec<Intersection<K>> {
        self(cursor)
    }
}

/// Choose the relevant hit out of an ordered hit list.
///
/// Returns `None` only when `hits` is empty.
pub fn select_hit<K>(hits: &[Intersection<K>], ignore_back_faces: bool) -> Option<&Intersection<K>> {
    let first = hits.first()?;
    if ignore_back_faces && hits.len() >= 2 {
        let last = &hits[hits.len() - 1];
        // A degenerate segment normalizes to zero and matches nothing.
        let ray_dir = (last.world_point - first.world_point).normalize_or_zero();
        if let Some(front) = hits.iter().find(|h| ray_dir.dot(h.world_normal) < 0.0) {
            return Some(front);
        }
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn hit(id: u32, z: f32, normal: Vec3) -> Intersection<u32> {
        Intersection::new(vec![0, id], Vec3::new(0.0, 0.0, z), Vec3::new(0.0, 0.0, z), normal)
    }

    #[test]
    fn empty_list_selects_nothing() {
        let hits: Vec<Intersection<u32>> = Vec::new();
        assert!(select_hit(&hits, true).is_none());
        assert!(select_hit(&hits, false).is_none());
    }

    #[test]
    fn single_hit_always_selected() {
        // Back-facing, but there is nothing to compare against.
        let hits = vec![hit(7, 0.0, Vec3::NEG_Z)];
        assert_eq!(select_hit(&hits, true).unwrap().leaf(), Some(7));
        assert_eq!(select_hit(&hits, false).unwrap().leaf(), Some(7));
    }

    #[test]
    fn back_face_skipped_when_enabled() {
        let hits = vec![hit(1, 5.0, Vec3::NEG_Z), hit(2, 0.0, Vec3::Z), hit(3, -5.0, Vec3::NEG_Z)];
        assert_eq!(select_hit(&hits, true).unwrap().leaf(), Some(2));
        assert_eq!(select_hit(&hits, false).unwrap().leaf(), Some(1));
    }

    #[test]
    fn all_back_facing_falls_back_to_first() {
        let hits = vec![hit(1, 5.0, Vec3::NEG_Z), hit(2, 0.0, Vec3::NEG_Z)];
        assert_eq!(select_hit(&hits, true).unwrap().leaf(), Some(1));
    }

    #[test]
    fn coincident_hits_fall_back_to_first() {
        let hits = vec![hit(1, 0.0, Vec3::Z), hit(2, 0.0, Vec3::Z)];
        assert_eq!(select_hit(&hits, true).unwrap().leaf(), Some(1));
    }

    #[test]
    fn closures_are_pickers() {
        let mut calls = 0;
        let mut picker = |p: Point| {
            calls += 1;
            if p.x > 0.0 {
                vec![hit(4, 0.0, Vec3::Z)]
            } else {
                Vec::new()
            }
        };
        assert_eq!(picker.intersections(Point::new(1.0, 0.0)).len(), 1);
        assert!(picker.intersections(Point::new(-1.0, 0.0)).is_empty());
        assert_eq!(calls, 2);
    }
}
