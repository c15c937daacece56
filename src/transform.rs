/*

    Transform edits applied to a single object while aligning
    it to the active object: location, rotation, scale and
    dimension fitting. Each one only touches the axes it is
    given, every other axis is left as it was.

    @date: 16 Nov, 2025
    @author: bartu
*/

use crate::prelude::*;

use crate::extent::{Extentable, Space};
use crate::object::SceneObject;
use crate::reference::{resolve_source, SourceReference};

/// Move `obj` so that its source point (plus offset) lands on `destination`.
/// Returns the translation computed for all three axes, of which only the
/// enabled ones are applied.
pub fn align_location(
    obj: &mut SceneObject,
    source: SourceReference,
    destination: Vector3,
    offset: Vector3,
    axes: AxisFlags,
) -> Vector3 {
    let source_co = resolve_source(obj, source) + offset;
    let translate = destination - source_co;
    axes.add(&mut obj.transform.location, &translate);
    translate
}

/// Add the same translation to the enabled axes, used when a selection
/// moves as a block
pub fn translate_axes(obj: &mut SceneObject, translate: Vector3, axes: AxisFlags) {
    axes.add(&mut obj.transform.location, &translate);
}

/// Absolute set of the object's location on the enabled axes
pub fn set_location_axes(obj: &mut SceneObject, target: Vector3, axes: AxisFlags) {
    axes.assign(&mut obj.transform.location, &target);
}

/// rotation[axis] = active_rotation[axis] + offset[axis]
pub fn align_rotation(obj: &mut SceneObject, active_rotation: Vector3, offset: Vector3, axes: AxisFlags) {
    axes.assign(&mut obj.transform.rotation, &(active_rotation + offset));
}

/// scale[axis] = active_scale[axis] + offset[axis]
///
/// WARNING: The offset is added, not multiplied, and it is added to the
/// active object's scale rather than the object's own one.
pub fn align_scale(obj: &mut SceneObject, active_scale: Vector3, offset: Vector3, axes: AxisFlags) {
    axes.assign(&mut obj.transform.scale, &(active_scale + offset));
}

/// Rescale `obj` so that its local dimension matches `target_dim` on the
/// enabled axes, and shift it to compensate.
///
/// For every enabled axis, ratio = own / target. The location shift of
/// that axis is ((1 - ratio) / 2) * own_dim, the *whole* dimension vector
/// scaled by that axis' ratio. Shifts of all enabled axes are summed and
/// added once, then scale[axis] is divided by the ratio. Axes with zero
/// target dimension or zero ratio are skipped.
pub fn fit_dimensions(obj: &mut SceneObject, target_dim: Vector3, axes: AxisFlags) {
    let dim = obj.get_extent(Space::Local).dimensions();

    let mut ratios = [None; 3];
    for axis in axes.enabled() {
        let target = axis.get(&target_dim);
        if target == 0.0 {
            continue;
        }
        let ratio = axis.get(&dim) / target;
        if ratio != 0.0 {
            ratios[axis.index()] = Some(ratio);
        }
    }

    let delta: Vector3 = ratios
        .iter()
        .flatten()
        .copied()
        .map(|ratio| ((1.0 - ratio) * 0.5) * dim)
        .sum();
    obj.transform.location += delta;

    for axis in Axis::ALL {
        if let Some(ratio) = ratios[axis.index()] {
            let scale = axis.get(&obj.transform.scale);
            axis.set(&mut obj.transform.scale, scale * (1.0 / ratio));
        }
    }
}
