/*

    Turn a symbolic reference (Min, Center, Pivot, Max or
    Cursor) into an actual coordinate, either on a single
    object or on a whole selection.

    Pivot is the object's translation, not a point of its
    geometry. A selection has no pivot of its own, so Pivot
    on a selection resolves to the selection's center.

    @date: 15 Nov, 2025
    @author: bartu
*/

use std::fmt;
use std::str::FromStr;

use crate::prelude::*;

use crate::error::PropertyError;
use crate::extent::{Extentable, Space};
use crate::object::SceneObject;
use crate::selection::SelectionExtent;

/// Destination reference. Host codes: "0" Min, "1" Center, "2" Pivot, "3" Max, "4" Cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reference {
    Min,
    Center,
    Pivot,
    #[default]
    Max,
    Cursor,
}

/// Source reference. Same codes as Reference, the cursor
/// is never a valid source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceReference {
    #[default]
    Min,
    Center,
    Pivot,
    Max,
}

pub enum ReferenceTarget<'a> {
    Object(&'a SceneObject),
    Selection(&'a SelectionExtent),
}

impl Reference {
    pub fn code(&self) -> usize {
        match self {
            Reference::Min => 0,
            Reference::Center => 1,
            Reference::Pivot => 2,
            Reference::Max => 3,
            Reference::Cursor => 4,
        }
    }
}

impl TryFrom<usize> for Reference {
    type Error = PropertyError;

    fn try_from(code: usize) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Reference::Min),
            1 => Ok(Reference::Center),
            2 => Ok(Reference::Pivot),
            3 => Ok(Reference::Max),
            4 => Ok(Reference::Cursor),
            _ => Err(PropertyError::InvalidCode { field: "reference", code: code.to_string() }),
        }
    }
}

impl FromStr for Reference {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.trim().parse::<usize>() {
            return Self::try_from(code);
        }
        match s.trim().to_lowercase().as_str() {
            "min" => Ok(Reference::Min),
            "center" => Ok(Reference::Center),
            "pivot" => Ok(Reference::Pivot),
            "max" => Ok(Reference::Max),
            "cursor" => Ok(Reference::Cursor),
            _ => Err(PropertyError::InvalidCode { field: "reference", code: s.to_string() }),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<Reference> for SourceReference {
    type Error = PropertyError;

    fn try_from(reference: Reference) -> Result<Self, Self::Error> {
        match reference {
            Reference::Min => Ok(SourceReference::Min),
            Reference::Center => Ok(SourceReference::Center),
            Reference::Pivot => Ok(SourceReference::Pivot),
            Reference::Max => Ok(SourceReference::Max),
            Reference::Cursor => Err(PropertyError::CursorAsSource),
        }
    }
}

impl From<SourceReference> for Reference {
    fn from(reference: SourceReference) -> Self {
        match reference {
            SourceReference::Min => Reference::Min,
            SourceReference::Center => Reference::Center,
            SourceReference::Pivot => Reference::Pivot,
            SourceReference::Max => Reference::Max,
        }
    }
}

/// Source point on an object, from its global extent
pub fn resolve_source(obj: &SceneObject, reference: SourceReference) -> Vector3 {
    let ext = obj.get_extent(Space::Global);
    match reference {
        SourceReference::Min => ext.min,
        SourceReference::Center => ext.center,
        SourceReference::Pivot => obj.translation(),
        SourceReference::Max => ext.max,
    }
}

/// Source point of a selection moved as one block. Pivot has no
/// meaning for a block and falls back to its center.
pub fn resolve_block_source(sel: &SelectionExtent, reference: SourceReference) -> Vector3 {
    match reference {
        SourceReference::Min => sel.min,
        SourceReference::Max => sel.max,
        SourceReference::Center | SourceReference::Pivot => sel.center(),
    }
}

pub fn resolve_destination(reference: Reference, target: ReferenceTarget, cursor: Vector3) -> Vector3 {
    let source = match SourceReference::try_from(reference) {
        Ok(source) => source,
        Err(_) => return cursor,
    };

    match target {
        ReferenceTarget::Object(obj) => resolve_source(obj, source),
        ReferenceTarget::Selection(sel) => resolve_block_source(sel, source),
    }
}
