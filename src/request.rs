/*

    Parameters of a single alignment run. A request is built
    once from the operator's properties (see properties.rs),
    consumed by align_function( ) and thrown away.

    The "Apply" master toggles of rotation, scale and fit are
    already folded into the axis flags here: when a master
    toggle is off, all of its axes are off.

    @date: 16 Nov, 2025
    @author: bartu
*/

use std::str::FromStr;

use crate::prelude::*;
use crate::error::PropertyError;
use crate::reference::{Reference, SourceReference};

/// What is moved. Host codes: "0" Object, "1" Pivot, "2" Cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subject {
    #[default]
    Object,
    Pivot,
    Cursor,
}

/// What the cursor is placed relative to. Host codes: "0" Self, "1" Active, "2" Selection
///
/// NOTE: Self and Active both place the cursor relative to the active object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relation {
    Itself,
    #[default]
    Active,
    Selection,
}

impl TryFrom<usize> for Subject {
    type Error = PropertyError;

    fn try_from(code: usize) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Subject::Object),
            1 => Ok(Subject::Pivot),
            2 => Ok(Subject::Cursor),
            _ => Err(PropertyError::InvalidCode { field: "subject", code: code.to_string() }),
        }
    }
}

impl FromStr for Subject {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.trim().parse::<usize>() {
            return Self::try_from(code);
        }
        match s.trim().to_lowercase().as_str() {
            "object" => Ok(Subject::Object),
            "pivot" => Ok(Subject::Pivot),
            "cursor" => Ok(Subject::Cursor),
            _ => Err(PropertyError::InvalidCode { field: "subject", code: s.to_string() }),
        }
    }
}

impl TryFrom<usize> for Relation {
    type Error = PropertyError;

    fn try_from(code: usize) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Relation::Itself),
            1 => Ok(Relation::Active),
            2 => Ok(Relation::Selection),
            _ => Err(PropertyError::InvalidCode { field: "self_or_active", code: code.to_string() }),
        }
    }
}

impl FromStr for Relation {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.trim().parse::<usize>() {
            return Self::try_from(code);
        }
        match s.trim().to_lowercase().as_str() {
            "self" => Ok(Relation::Itself),
            "active" => Ok(Relation::Active),
            "selection" => Ok(Relation::Selection),
            _ => Err(PropertyError::InvalidCode { field: "self_or_active", code: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlignmentRequest {
    pub subject: Subject,
    pub relation: Relation,
    /// Also transform the active object
    pub active_too: bool,
    /// Move the selection as one block (Object subject only)
    pub consistent: bool,

    pub location: AxisFlags,
    pub source: SourceReference,
    pub destination: Reference,
    pub location_offset: Vector3,

    pub rotation: AxisFlags,
    pub rotation_offset: Vector3,

    pub scale: AxisFlags,
    pub scale_offset: Vector3,

    pub fit: AxisFlags,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_operator() {
        let req = AlignmentRequest::default();
        assert_eq!(req.subject, Subject::Object);
        assert_eq!(req.relation, Relation::Active);
        assert_eq!(req.source, SourceReference::Min);
        assert_eq!(req.destination, Reference::Max);
        assert!(!req.location.any());
        assert!(!req.rotation.any() && !req.scale.any() && !req.fit.any());
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("2".parse::<Subject>().unwrap(), Subject::Cursor);
        assert_eq!("pivot".parse::<Subject>().unwrap(), Subject::Pivot);
        assert_eq!("0".parse::<Relation>().unwrap(), Relation::Itself);
        assert_eq!("Selection".parse::<Relation>().unwrap(), Relation::Selection);
        assert!(matches!(
            "3".parse::<Relation>(),
            Err(PropertyError::InvalidCode { field: "self_or_active", .. })
        ));
    }
}
