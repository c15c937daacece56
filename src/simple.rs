/*

    Simple align: copy location, rotation or scale of the
    active object onto every selected object, on one axis or
    on all three. No extents involved.

    Host operator ids map onto these through FromStr, e.g.
    "object.align_rotation_y" -> CopyChannel { Rotation, Some(Y) }

    @date: 18 Nov, 2025
    @author: bartu
*/

use std::str::FromStr;

use crate::prelude::*;
use crate::error::PropertyError;
use crate::object::Transform;
use crate::scene::SceneContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Location,
    Rotation,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleAlign {
    /// Location and rotation, all axes. Both "object.align" and
    /// "object.align_location_all" run this one
    LocationRotation,
    /// One channel, on a single axis or on all of them (None)
    CopyChannel { channel: Channel, axis: Option<Axis> },
}

impl Channel {
    fn get(self, t: &Transform) -> Vector3 {
        match self {
            Channel::Location => t.location,
            Channel::Rotation => t.rotation,
            Channel::Scale => t.scale,
        }
    }

    fn get_mut(self, t: &mut Transform) -> &mut Vector3 {
        match self {
            Channel::Location => &mut t.location,
            Channel::Rotation => &mut t.rotation,
            Channel::Scale => &mut t.scale,
        }
    }
}

impl FromStr for SimpleAlign {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Channel::*;
        let copy = |channel: Channel, axis: Option<Axis>| -> Result<Self, Self::Err> {
            Ok(SimpleAlign::CopyChannel { channel, axis })
        };
        match s {
            "object.align" => Ok(SimpleAlign::LocationRotation),
            "object.align_location_all" => Ok(SimpleAlign::LocationRotation),
            "object.align_location_x" => copy(Location, Some(Axis::X)),
            "object.align_location_y" => copy(Location, Some(Axis::Y)),
            "object.align_location_z" => copy(Location, Some(Axis::Z)),
            "object.align_rotation" => copy(Rotation, None),
            "object.align_rotation_x" => copy(Rotation, Some(Axis::X)),
            "object.align_rotation_y" => copy(Rotation, Some(Axis::Y)),
            "object.align_rotation_z" => copy(Rotation, Some(Axis::Z)),
            "object.align_objects_scale" => copy(Scale, None),
            "object.align_objects_scale_x" => copy(Scale, Some(Axis::X)),
            "object.align_objects_scale_y" => copy(Scale, Some(Axis::Y)),
            "object.align_objects_scale_z" => copy(Scale, Some(Axis::Z)),
            _ => Err(PropertyError::InvalidCode { field: "operator", code: s.to_string() }),
        }
    }
}

/// Simple align operators are only available with an active object
pub fn poll<S: SceneContext>(ctx: &S) -> bool {
    ctx.active_object().and_then(|id| ctx.object(id)).is_some()
}

pub fn simple_align<S: SceneContext>(ctx: &mut S, op: SimpleAlign) {
    let Some(act) = ctx.active_object().and_then(|id| ctx.object(id)).map(|o| o.transform) else {
        debug!("No active object, skipping {:?}", op);
        return;
    };

    let copies: Vec<(Channel, AxisFlags)> = match op {
        SimpleAlign::LocationRotation => vec![
            (Channel::Location, AxisFlags::ALL),
            (Channel::Rotation, AxisFlags::ALL),
        ],
        SimpleAlign::CopyChannel { channel, axis } => {
            vec![(channel, axis.map(AxisFlags::only).unwrap_or(AxisFlags::ALL))]
        }
    };

    for id in ctx.selected_objects() {
        let Some(obj) = ctx.object_mut(id) else { continue };
        for &(channel, axes) in &copies {
            axes.assign(channel.get_mut(&mut obj.transform), &channel.get(&act));
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::SceneObject;
    use crate::scene::{ObjectId, Scene};

    fn setup() -> (Scene, ObjectId, ObjectId) {
        let mut scene = Scene::new();
        let act = scene.add_object(
            SceneObject::empty("act")
                .with_location(Vector3::new(1., 2., 3.))
                .with_rotation(Vector3::new(0.1, 0.2, 0.3))
                .with_scale(Vector3::new(4., 5., 6.)),
        );
        let other = scene.add_object(SceneObject::empty("other"));
        scene.select(act);
        scene.select(other);
        scene.set_active(Some(act));
        (scene, act, other)
    }

    fn transform(scene: &Scene, id: ObjectId) -> Transform {
        scene.object(id).map(|o| o.transform).unwrap_or_default()
    }

    #[test]
    fn test_operator_ids() {
        assert_eq!("object.align".parse::<SimpleAlign>().unwrap(), SimpleAlign::LocationRotation);
        assert_eq!(
            "object.align_objects_scale_z".parse::<SimpleAlign>().unwrap(),
            SimpleAlign::CopyChannel { channel: Channel::Scale, axis: Some(Axis::Z) }
        );
        assert!("object.align_everything".parse::<SimpleAlign>().is_err());
    }

    #[test]
    fn test_location_and_rotation() {
        let (mut scene, _, other) = setup();
        simple_align(&mut scene, SimpleAlign::LocationRotation);
        let t = transform(&scene, other);
        assert_eq!(t.location, Vector3::new(1., 2., 3.));
        assert_eq!(t.rotation, Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(t.scale, Vector3::ONE);
    }

    #[test]
    fn test_location_all_copies_rotation_too() {
        let (mut scene, _, other) = setup();
        simple_align(&mut scene, "object.align_location_all".parse().unwrap());
        let t = transform(&scene, other);
        assert_eq!(t.location, Vector3::new(1., 2., 3.));
        assert_eq!(t.rotation, Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(t.scale, Vector3::ONE);
    }

    #[test]
    fn test_single_axis_copy() {
        let (mut scene, act, other) = setup();
        simple_align(&mut scene, "object.align_objects_scale_y".parse().unwrap());
        assert_eq!(transform(&scene, other).scale, Vector3::new(1., 5., 1.));
        // the active object copies onto itself
        assert_eq!(transform(&scene, act).scale, Vector3::new(4., 5., 6.));
    }

    #[test]
    fn test_needs_active() {
        let (mut scene, _, other) = setup();
        scene.set_active(None);
        assert!(!poll(&scene));
        simple_align(&mut scene, SimpleAlign::CopyChannel { channel: Channel::Location, axis: None });
        assert_eq!(transform(&scene, other).location, Vector3::ZERO);
    }
}
