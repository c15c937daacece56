/*

    Axis aligned extent of a single object, computed from
    its point data (mesh vertices or spline points) either in
    local or global space.

    An extent is never cached: objects move during alignment,
    so every query scans the points again.

    @author: bartu
    @date: 9 Nov, 2025
*/

use crate::prelude::*;

use crate::interval::Interval;
use crate::object::SceneObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Local,
    Global,
}

/// Min, center and max of an object on every axis.
/// Invariant: min <= center <= max, center = (min + max) / 2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingExtent {
    pub min: Vector3,
    pub center: Vector3,
    pub max: Vector3,
}

impl BoundingExtent {
    pub fn new_from(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {

        debug_assert!(xint.validate() && yint.validate() && zint.validate(), "Invalid interval, found max < min");
        Self {
            min: Vector3::new(xint.min, yint.min, zint.min),
            center: Vector3::new(xint.center(), yint.center(), zint.center()),
            max: Vector3::new(xint.max, yint.max, zint.max),
        }
    }

    /// Extent collapsed to a single point on all nine scalars
    pub fn degenerate(p: Vector3) -> Self {
        Self::new_from(&Interval::point(p.x), &Interval::point(p.y), &Interval::point(p.z))
    }

    /// Single linear scan over the points. None if there are no points.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vector3>,
    {
        let (mut xint, mut yint, mut zint) = (Interval::EMPTY, Interval::EMPTY, Interval::EMPTY);
        let mut n_points = 0;
        for v in points {
            xint.expand(v.x);
            yint.expand(v.y);
            zint.expand(v.z);
            n_points += 1;
        }

        if n_points == 0 {
            return None;
        }
        Some(Self::new_from(&xint, &yint, &zint))
    }

    pub fn dimensions(&self) -> Vector3 {
        self.max - self.min
    }

    /// [minX, centerX, maxX, minY, centerY, maxY, minZ, centerZ, maxZ]
    pub fn to_array(&self) -> [Float; 9] {
        [
            self.min.x, self.center.x, self.max.x,
            self.min.y, self.center.y, self.max.y,
            self.min.z, self.center.z, self.max.z,
        ]
    }
}

pub trait Extentable {
    fn get_extent(&self, space: Space) -> BoundingExtent;
}

impl Extentable for SceneObject {
    fn get_extent(&self, space: Space) -> BoundingExtent {
        let co_list = match space {
            Space::Global => self.world_points(),
            Space::Local => self.local_points(),
        };

        // Objects without points fall back to their world translation,
        // in local space too
        BoundingExtent::from_points(&co_list).unwrap_or_else(|| {
            debug!("'{}' has no point data, using its translation as extent", self.name);
            BoundingExtent::degenerate(self.translation())
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{CurveData, MeshData, ObjectData, Spline};
    use rand::Rng;

    fn unit_cube() -> Vec<Vector3> {
        let mut verts = Vec::with_capacity(8);
        for x in [-1., 1.] {
            for y in [-1., 1.] {
                for z in [-1., 1.] {
                    verts.push(Vector3::new(x, y, z));
                }
            }
        }
        verts
    }

    #[test]
    fn test_mesh_extent_local_and_global() {
        let obj = SceneObject::new("cube", ObjectData::Mesh(MeshData::new(unit_cube())))
            .with_location(Vector3::new(5., 0., 0.))
            .with_scale(Vector3::new(2., 1., 1.));

        let local = obj.get_extent(Space::Local);
        assert_eq!(local.min, Vector3::splat(-1.));
        assert_eq!(local.max, Vector3::splat(1.));
        assert_eq!(local.dimensions(), Vector3::splat(2.));

        let global = obj.get_extent(Space::Global);
        assert!(approx_eq(&global.min, &Vector3::new(3., -1., -1.)));
        assert!(approx_eq(&global.max, &Vector3::new(7., 1., 1.)));
        assert!(approx_eq(&global.center, &Vector3::new(5., 0., 0.)));
    }

    #[test]
    fn test_empty_falls_back_to_translation() {
        let p = Vector3::new(1., 2., 3.);
        let empty = SceneObject::empty("empty").with_location(p);
        let no_verts = SceneObject::new("no verts", ObjectData::Mesh(MeshData::default())).with_location(p);
        let no_splines = SceneObject::new("no splines", ObjectData::Curve(CurveData::default())).with_location(p);

        for obj in [empty, no_verts, no_splines] {
            for space in [Space::Local, Space::Global] {
                let ext = obj.get_extent(space);
                assert_eq!(ext.to_array(), [1., 1., 1., 2., 2., 2., 3., 3., 3.], "{}", obj.name);
            }
        }
    }

    #[test]
    fn test_curve_extent_uses_bezier_and_plain_points() {
        let spline = Spline {
            bezier_points: vec![Vector3::new(-4., 0., 0.)],
            points: vec![Vector3::new(0., 6., 0.)],
        };
        let curve = SceneObject::new("curve", ObjectData::Surface(CurveData::new(vec![spline])));
        let ext = curve.get_extent(Space::Local);
        assert_eq!(ext.min, Vector3::new(-4., 0., 0.));
        assert_eq!(ext.max, Vector3::new(0., 6., 0.));
    }

    #[test]
    fn test_random_extents_are_ordered() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let n = rng.random_range(1..40);
            let verts: Vec<Vector3> = (0..n)
                .map(|_| Vector3::new(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                ))
                .collect();
            let obj = SceneObject::new("random", ObjectData::Mesh(MeshData::new(verts)))
                .with_rotation(Vector3::new(rng.random_range(-3.0..3.0), 0.2, -0.7));

            for space in [Space::Local, Space::Global] {
                let ext = obj.get_extent(space);
                for axis in Axis::ALL {
                    let (min, center, max) = (axis.get(&ext.min), axis.get(&ext.center), axis.get(&ext.max));
                    assert!(min <= center && center <= max);
                    assert_eq!(center, (min + max) * 0.5);
                }
            }
        }
    }
}
