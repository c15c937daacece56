/*

    Advanced alignment: move objects, their pivots, or the 3D
    cursor relative to the active object (or the selection).

    Three paths, picked by the request's subject:
        - Object: align selected objects to the active one, either
          one by one or, when consistent, as a single block
        - Pivot:  set selected objects' locations to the destination
        - Cursor: place the 3D cursor on the active object or on
          the selection

    Missing active object or an empty selection is not an error,
    nothing happens in that case.

    @date: 17 Nov, 2025
    @author: bartu
*/

use crate::prelude::*;

use crate::error::Result;
use crate::extent::{Extentable, Space};
use crate::properties::OperatorProperties;
use crate::reference::{resolve_block_source, resolve_destination, Reference, ReferenceTarget};
use crate::request::{AlignmentRequest, Relation, Subject};
use crate::scene::{ObjectId, SceneContext};
use crate::selection::{point_in_selection, selection_extent};
use crate::transform::{
    align_location, align_rotation, align_scale, fit_dimensions, set_location_axes, translate_axes,
};

/// Returned to the host after an operator ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    Finished,
}

/// Validate the host's properties and run the alignment.
/// Finished is returned for any valid request, even when
/// there was nothing to align.
pub fn execute<S: SceneContext>(ctx: &mut S, props: OperatorProperties) -> Result<OperatorStatus> {
    let request = props.into_request()?;
    align_function(ctx, &request);
    Ok(OperatorStatus::Finished)
}

pub fn align_function<S: SceneContext>(ctx: &mut S, request: &AlignmentRequest) {

    let span = tracing::span!(tracing::Level::INFO, "align", subject = ?request.subject);
    let _enter = span.enter();

    let sel_obj = ctx.selected_objects();
    let Some(act_obj) = ctx.active_object().filter(|id| ctx.object(*id).is_some()) else {
        debug!("No active object, nothing to align.");
        return;
    };
    if sel_obj.is_empty() {
        debug!("Empty selection, nothing to align.");
        return;
    }

    match request.subject {
        Subject::Object => {
            let ref2_co = destination_on_active(&*ctx, act_obj, request.destination);
            if request.consistent {
                align_as_block(ctx, act_obj, &sel_obj, ref2_co, request);
            } else {
                align_each(ctx, act_obj, &sel_obj, ref2_co, request);
            }
        }
        Subject::Pivot => {
            let ref2_co = destination_on_active(&*ctx, act_obj, request.destination);
            for &id in &sel_obj {
                if id == act_obj && !request.active_too {
                    continue;
                }
                if let Some(obj) = ctx.object_mut(id) {
                    set_location_axes(obj, ref2_co, request.location);
                }
            }
        }
        Subject::Cursor => place_cursor(ctx, act_obj, &sel_obj, request),
    }
}

fn destination_on_active<S: SceneContext>(ctx: &S, act_obj: ObjectId, reference: Reference) -> Vector3 {
    let cursor = ctx.cursor();
    match ctx.object(act_obj) {
        Some(act) => resolve_destination(reference, ReferenceTarget::Object(act), cursor),
        None => cursor,
    }
}

/// One translation, computed from the extent of the whole selection,
/// applied to every selected object
fn align_as_block<S: SceneContext>(
    ctx: &mut S,
    act_obj: ObjectId,
    sel_obj: &[ObjectId],
    ref2_co: Vector3,
    request: &AlignmentRequest,
) {
    let ref_co = point_in_selection(&*ctx, act_obj, sel_obj);
    let sel = selection_extent(&*ctx, ref_co, sel_obj);
    let source = resolve_block_source(&sel, request.source) + request.location_offset;
    let translate = ref2_co - source;
    debug!("Moving selection as a block by {:?}", translate);

    for &id in sel_obj {
        if id == act_obj && !request.active_too {
            continue;
        }
        if let Some(obj) = ctx.object_mut(id) {
            translate_axes(obj, translate, request.location);
        }
    }
}

/// Align every non-active selected object on its own, then
/// the active object itself if asked to
fn align_each<S: SceneContext>(
    ctx: &mut S,
    act_obj: ObjectId,
    sel_obj: &[ObjectId],
    ref2_co: Vector3,
    request: &AlignmentRequest,
) {
    for &id in sel_obj {
        if id == act_obj {
            continue;
        }
        align_single(ctx, act_obj, id, ref2_co, request);
    }

    if request.active_too {
        align_single(ctx, act_obj, act_obj, ref2_co, request);
    }
}

/// Rotation, dimension fit, scale and location, in this order. Later
/// steps read the object as left by the earlier ones.
fn align_single<S: SceneContext>(
    ctx: &mut S,
    act_obj: ObjectId,
    id: ObjectId,
    ref2_co: Vector3,
    request: &AlignmentRequest,
) {
    if request.rotation.any() {
        let Some(act_rotation) = ctx.object(act_obj).map(|a| a.transform.rotation) else { return };
        if let Some(obj) = ctx.object_mut(id) {
            align_rotation(obj, act_rotation, request.rotation_offset, request.rotation);
        }
    }

    if request.fit.any() {
        let Some(ref_dim) = ctx.object(act_obj).map(|a| a.get_extent(Space::Local).dimensions()) else { return };
        if let Some(obj) = ctx.object_mut(id) {
            fit_dimensions(obj, ref_dim, request.fit);
        }
    }

    if request.scale.any() {
        let Some(act_scale) = ctx.object(act_obj).map(|a| a.transform.scale) else { return };
        if let Some(obj) = ctx.object_mut(id) {
            align_scale(obj, act_scale, request.scale_offset, request.scale);
        }
    }

    if request.location.any() {
        if let Some(obj) = ctx.object_mut(id) {
            let translate = align_location(obj, request.source, ref2_co, request.location_offset, request.location);
            debug!("Moved '{}' by {:?}", obj.name, translate);
        }
    }
}

fn place_cursor<S: SceneContext>(ctx: &mut S, act_obj: ObjectId, sel_obj: &[ObjectId], request: &AlignmentRequest) {
    // The cursor can not be aligned to itself
    if request.destination == Reference::Cursor {
        debug!("Cursor reference given for the cursor, leaving it in place.");
        return;
    }

    let target_co = match request.relation {
        Relation::Itself | Relation::Active => {
            let Some(act) = ctx.object(act_obj) else { return };
            resolve_destination(request.destination, ReferenceTarget::Object(act), ctx.cursor())
        }
        Relation::Selection => {
            let ref_co = point_in_selection(&*ctx, act_obj, sel_obj);
            let sel = selection_extent(&*ctx, ref_co, sel_obj);
            resolve_destination(request.destination, ReferenceTarget::Selection(&sel), ctx.cursor())
        }
    };

    let mut cursor = ctx.cursor();
    request.location.assign(&mut cursor, &(target_co + request.location_offset));
    ctx.set_cursor(cursor);
    info!("Cursor placed at {:?}", cursor);
}
