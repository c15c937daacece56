/*

    Extent of a whole selection, measured around one point
    that lies inside the selection.

    NOTE: This is not a plain union of every member's box.
    The accumulator starts at the interior point and only ever
    grows away from it, so the interior point is always inside
    the result. Block alignment relies on that.

    @date: 15 Nov, 2025
    @author: bartu
*/

use crate::prelude::*;

use crate::extent::{Extentable, Space};
use crate::scene::{ObjectId, SceneContext};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionExtent {
    pub min: Vector3,
    pub max: Vector3,
}

impl SelectionExtent {
    pub fn center(&self) -> Vector3 {
        self.min + (self.max - self.min) * 0.5
    }
}

/// Pick a point inside the selection: the first point (in world space)
/// of the first non-active object that has point data. Falls back to the
/// translation of the last non-active object visited, or to the active
/// object's translation when the selection holds nothing else.
pub fn point_in_selection<S: SceneContext>(ctx: &S, active: ObjectId, objects: &[ObjectId]) -> Vector3 {
    let mut ref_ob = None;

    for &id in objects {
        if id == active {
            continue;
        }
        let Some(obj) = ctx.object(id) else {
            continue;
        };
        ref_ob = Some(obj);

        if let Some(co) = obj.first_world_point() {
            return co;
        }
    }

    ref_ob
        .or_else(|| ctx.object(active))
        .map(|o| o.translation())
        .unwrap_or(Vector3::ZERO)
}

/// Min and max of the selection around `interior`, using the
/// global extent of every object in `objects`.
pub fn selection_extent<S: SceneContext>(ctx: &S, interior: Vector3, objects: &[ObjectId]) -> SelectionExtent {
    let mut sel_min = interior;
    let mut sel_max = interior;

    for obj in objects.iter().filter_map(|id| ctx.object(*id)) {
        let ext = obj.get_extent(Space::Global);
        for axis in Axis::ALL {
            if axis.get(&ext.min) < axis.get(&sel_min) {
                axis.set(&mut sel_min, axis.get(&ext.min));
            }
            if axis.get(&ext.max) > axis.get(&sel_max) {
                axis.set(&mut sel_max, axis.get(&ext.max));
            }
        }
    }

    SelectionExtent { min: sel_min, max: sel_max }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{CurveData, MeshData, ObjectData, SceneObject, Spline};
    use crate::scene::Scene;

    fn mesh(name: &str, verts: Vec<Vector3>) -> SceneObject {
        SceneObject::new(name, ObjectData::Mesh(MeshData::new(verts)))
    }

    #[test]
    fn test_point_in_selection_skips_active_and_empties() {
        let mut scene = Scene::new();
        let act = scene.add_object(mesh("act", vec![Vector3::splat(100.)]));
        let empty = scene.add_object(SceneObject::empty("empty").with_location(Vector3::splat(-3.)));
        let curve = scene.add_object(
            SceneObject::new("curve", ObjectData::Curve(CurveData::new(vec![Spline::poly(vec![Vector3::X])])))
                .with_location(Vector3::new(0., 2., 0.)),
        );

        let p = point_in_selection(&scene, act, &[act, empty, curve]);
        assert_eq!(p, Vector3::new(1., 2., 0.));
    }

    #[test]
    fn test_point_in_selection_fallbacks() {
        let mut scene = Scene::new();
        let act = scene.add_object(SceneObject::empty("act").with_location(Vector3::splat(9.)));
        let e1 = scene.add_object(SceneObject::empty("e1").with_location(Vector3::splat(1.)));
        let e2 = scene.add_object(SceneObject::empty("e2").with_location(Vector3::splat(2.)));

        // No point data anywhere: last visited non-active object wins
        assert_eq!(point_in_selection(&scene, act, &[e1, act, e2]), Vector3::splat(2.));
        // Only the active object is selected
        assert_eq!(point_in_selection(&scene, act, &[act]), Vector3::splat(9.));
    }

    #[test]
    fn test_selection_extent_grows_from_seed() {
        let mut scene = Scene::new();
        let a = scene.add_object(mesh("a", vec![Vector3::splat(-1.), Vector3::splat(1.)]));
        let b = scene.add_object(mesh("b", vec![Vector3::splat(4.), Vector3::splat(6.)]));

        let seed = Vector3::splat(5.);
        let ext = selection_extent(&scene, seed, &[a, b]);
        assert_eq!(ext.min, Vector3::splat(-1.));
        assert_eq!(ext.max, Vector3::splat(6.));
        assert_eq!(ext.center(), Vector3::splat(2.5));
    }

    #[test]
    fn test_selection_extent_keeps_seed_inside() {
        let mut scene = Scene::new();
        let b = scene.add_object(mesh("b", vec![Vector3::splat(4.), Vector3::splat(6.)]));

        // Seed outside the only member: result reaches from the seed to the member
        let ext = selection_extent(&scene, Vector3::ZERO, &[b]);
        assert_eq!(ext.min, Vector3::ZERO);
        assert_eq!(ext.max, Vector3::splat(6.));
    }
}
