/*

    Declare scene objects: a transform (location, Euler
    rotation, scale) plus the point data the object is drawn
    from. Only meshes and curve-like objects (curve, surface,
    text) carry points, everything else is treated as an empty.

    Point data is always stored in object local space, use
    SceneObject::world_points( ) to get them in global space.

    @date: 14 Nov, 2025
    @author: bartu
*/

use crate::prelude::*;

// =======================================================================================================
// PointSource Trait
// =======================================================================================================
pub trait PointSource {
    /// All points in local space, in storage order
    fn points(&self) -> Vec<Vector3>;

    /// First stored point, used to pick a point that is
    /// guaranteed to lie inside the object's extent
    fn first_point(&self) -> Option<Vector3> {
        self.points().first().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Mesh,
    Curve,
    Surface,
    Text,
    Other,
}

// =======================================================================================================
// Mesh (impl PointSource)
// =======================================================================================================
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vector3>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vector3>) -> Self {
        Self { vertices }
    }
}

impl PointSource for MeshData {
    fn points(&self) -> Vec<Vector3> {
        self.vertices.clone()
    }

    fn first_point(&self) -> Option<Vector3> {
        self.vertices.first().copied()
    }
}

// =======================================================================================================
// Splines (impl PointSource)
// =======================================================================================================

/// A spline holds bezier control points, plain (poly / nurbs)
/// points, or both.
#[derive(Debug, Clone, Default)]
pub struct Spline {
    pub bezier_points: Vec<Vector3>,
    pub points: Vec<Vector3>,
}

impl Spline {
    pub fn bezier(bezier_points: Vec<Vector3>) -> Self {
        Self { bezier_points, points: Vec::new() }
    }

    pub fn poly(points: Vec<Vector3>) -> Self {
        Self { bezier_points: Vec::new(), points }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurveData {
    pub splines: Vec<Spline>,
}

impl CurveData {
    pub fn new(splines: Vec<Spline>) -> Self {
        Self { splines }
    }
}

impl PointSource for CurveData {
    fn points(&self) -> Vec<Vector3> {
        // Both lists are emitted for every spline, bezier points first
        let mut co_list = Vec::new();
        for s in &self.splines {
            co_list.extend_from_slice(&s.bezier_points);
            co_list.extend_from_slice(&s.points);
        }
        co_list
    }

    fn first_point(&self) -> Option<Vector3> {
        self.splines
            .iter()
            .find_map(|s| s.bezier_points.first().or_else(|| s.points.first()))
            .copied()
    }
}

// =======================================================================================================
// ObjectData (closed set of geometry sources)
// =======================================================================================================
#[derive(Debug, Clone, Default)]
pub enum ObjectData {
    Mesh(MeshData),
    Curve(CurveData),
    Surface(CurveData),
    Text(CurveData),
    #[default]
    Empty,
}

impl ObjectData {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectData::Mesh(_) => ObjectKind::Mesh,
            ObjectData::Curve(_) => ObjectKind::Curve,
            ObjectData::Surface(_) => ObjectKind::Surface,
            ObjectData::Text(_) => ObjectKind::Text,
            ObjectData::Empty => ObjectKind::Other,
        }
    }

    fn source(&self) -> Option<&dyn PointSource> {
        match self {
            ObjectData::Mesh(mesh) => Some(mesh as &dyn PointSource),
            ObjectData::Curve(curve) | ObjectData::Surface(curve) | ObjectData::Text(curve) => Some(curve as &dyn PointSource),
            ObjectData::Empty => None,
        }
    }
}

impl PointSource for ObjectData {
    fn points(&self) -> Vec<Vector3> {
        self.source().map(|s| s.points()).unwrap_or_default()
    }

    fn first_point(&self) -> Option<Vector3> {
        self.source().and_then(|s| s.first_point())
    }
}

// =======================================================================================================
// Transform
// =======================================================================================================
#[derive(Debug, Clone, Copy, PartialEq, SmartDefault)]
pub struct Transform {
    pub location: Vector3,
    /// Euler angles in radians, XYZ order
    pub rotation: Vector3,
    #[default(Vector3::ONE)]
    pub scale: Vector3,
}

impl Transform {
    pub fn matrix_world(&self) -> Matrix4 {
        compose_matrix(&self.location, &self.rotation, &self.scale)
    }
}

// =======================================================================================================
// SceneObject
// =======================================================================================================
#[derive(Debug, Clone, Default)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    pub data: ObjectData,
}

impl SceneObject {
    pub fn new(name: &str, data: ObjectData) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::default(),
            data,
        }
    }

    pub fn empty(name: &str) -> Self {
        Self::new(name, ObjectData::Empty)
    }

    pub fn with_location(mut self, location: Vector3) -> Self {
        self.transform.location = location;
        self
    }

    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn kind(&self) -> ObjectKind {
        self.data.kind()
    }

    pub fn matrix_world(&self) -> Matrix4 {
        self.transform.matrix_world()
    }

    /// World space translation of the object, i.e. its pivot
    pub fn translation(&self) -> Vector3 {
        self.transform.location
    }

    pub fn local_points(&self) -> Vec<Vector3> {
        self.data.points()
    }

    pub fn world_points(&self) -> Vec<Vector3> {
        let mat = self.matrix_world();
        self.data.points().iter().map(|p| transform_point(&mat, p)).collect()
    }

    /// First point of the object in world space, if it has any
    pub fn first_world_point(&self) -> Option<Vector3> {
        self.data.first_point().map(|p| transform_point(&self.matrix_world(), &p))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_points_keep_both_lists() {
        let spline = Spline {
            bezier_points: vec![Vector3::X],
            points: vec![Vector3::Y, Vector3::Z],
        };
        let curve = CurveData::new(vec![spline, Spline::poly(vec![Vector3::NEG_X])]);
        assert_eq!(curve.points(), vec![Vector3::X, Vector3::Y, Vector3::Z, Vector3::NEG_X]);
    }

    #[test]
    fn test_curve_first_point_skips_empty_splines() {
        let curve = CurveData::new(vec![
            Spline::default(),
            Spline::poly(vec![Vector3::new(4., 5., 6.)]),
        ]);
        assert_eq!(curve.first_point(), Some(Vector3::new(4., 5., 6.)));
        assert_eq!(CurveData::default().first_point(), None);
    }

    #[test]
    fn test_kind_follows_data() {
        assert_eq!(SceneObject::empty("e").kind(), ObjectKind::Other);
        let text = SceneObject::new("t", ObjectData::Text(CurveData::default()));
        assert_eq!(text.kind(), ObjectKind::Text);
        assert!(text.local_points().is_empty());
    }

    #[test]
    fn test_world_points() {
        let obj = SceneObject::new("cube", ObjectData::Mesh(MeshData::new(vec![Vector3::ONE])))
            .with_location(Vector3::new(1., 0., 0.))
            .with_scale(Vector3::splat(3.));
        assert_eq!(obj.world_points(), vec![Vector3::new(4., 3., 3.)]);
        assert_eq!(obj.first_world_point(), Some(Vector3::new(4., 3., 3.)));
        assert_eq!(obj.local_points(), vec![Vector3::ONE]);
    }
}
