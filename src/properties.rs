/*

    Provide utilities to read the alignment operator's properties
    as the host hands them over, and validate them into an
    AlignmentRequest.

    The property bag is flat, one field per inspector widget, and
    the host is not consistent about types. The parser is somewhat
    robust, let <a> be integer or float type:
        - enum properties are string codes ("0".."4"), but plain
          numbers and item names ("Center") work too
        - booleans can be given as true/false, "true"/"false", "1"/"0"
        - vector properties can be given as [<a>, <a>, <a>] or "<a> <a> <a>"
    Every field is optional and falls back to the operator's default.

    @date: 2 Oct, 2025
    @author: bartu
*/

use std::fmt::{self};
use std::str::FromStr;

use serde::{Deserializer};
use serde::de::{self, Visitor, SeqAccess};
use serde_json::{self, Value};

use crate::prelude::*;
use crate::error::{PropertyError, Result};
use crate::reference::{Reference, SourceReference};
use crate::request::AlignmentRequest;

#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct OperatorProperties {
    #[serde(deserialize_with = "deser_code")]
    #[default(String::from("0"))]
    pub subject: String,
    #[serde(deserialize_with = "deser_code")]
    #[default(String::from("1"))]
    pub self_or_active: String,
    #[serde(deserialize_with = "deser_bool")]
    pub active_too: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub consistent: bool,
    /// Only toggles extra widgets in the host UI
    #[serde(deserialize_with = "deser_bool")]
    pub advanced: bool,

    #[serde(deserialize_with = "deser_code")]
    #[default(String::from("0"))]
    pub ref1: String,
    #[serde(deserialize_with = "deser_code")]
    #[default(String::from("3"))]
    pub ref2: String,

    #[serde(deserialize_with = "deser_bool")]
    pub loc_x: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub loc_y: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub loc_z: bool,
    #[serde(deserialize_with = "deser_vec3")]
    pub loc_offset: Vector3,

    #[serde(deserialize_with = "deser_bool")]
    pub rot_x: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub rot_y: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub rot_z: bool,
    #[serde(deserialize_with = "deser_vec3")]
    pub rot_offset: Vector3,
    #[serde(deserialize_with = "deser_bool")]
    pub apply_rot: bool,

    #[serde(deserialize_with = "deser_bool")]
    pub scale_x: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub scale_y: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub scale_z: bool,
    #[serde(deserialize_with = "deser_vec3")]
    pub scale_offset: Vector3,
    #[serde(deserialize_with = "deser_bool")]
    pub apply_scale: bool,

    #[serde(deserialize_with = "deser_bool")]
    pub fit_x: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub fit_y: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub fit_z: bool,
    #[serde(deserialize_with = "deser_bool")]
    pub apply_dim: bool,
}

impl OperatorProperties {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn into_request(self) -> Result<AlignmentRequest> {
        AlignmentRequest::try_from(self)
    }
}

pub fn parse_properties(json: &str) -> Result<OperatorProperties> {

    let span = tracing::span!(tracing::Level::DEBUG, "parse_properties");
    let _enter = span.enter();

    let props: OperatorProperties = serde_json::from_str(json)?;
    debug!("Parsed operator properties {:?}", props);
    Ok(props)
}

impl TryFrom<OperatorProperties> for AlignmentRequest {
    type Error = PropertyError;

    fn try_from(props: OperatorProperties) -> Result<Self> {
        let source = SourceReference::try_from(parse_code::<Reference>("ref1", &props.ref1)?)?;

        Ok(AlignmentRequest {
            subject: parse_code("subject", &props.subject)?,
            relation: parse_code("self_or_active", &props.self_or_active)?,
            active_too: props.active_too,
            consistent: props.consistent,

            location: AxisFlags::new(props.loc_x, props.loc_y, props.loc_z),
            source,
            destination: parse_code("ref2", &props.ref2)?,
            location_offset: props.loc_offset,

            rotation: AxisFlags::new(props.rot_x, props.rot_y, props.rot_z).gated(props.apply_rot),
            rotation_offset: props.rot_offset,

            scale: AxisFlags::new(props.scale_x, props.scale_y, props.scale_z).gated(props.apply_scale),
            scale_offset: props.scale_offset,

            fit: AxisFlags::new(props.fit_x, props.fit_y, props.fit_z).gated(props.apply_dim),
        })
    }
}

/// Enum codes are parsed with the field name attached, so an unknown
/// code reports which property it came from
fn parse_code<T>(field: &'static str, code: &str) -> Result<T>
where
    T: FromStr<Err = PropertyError>,
{
    code.parse::<T>().map_err(|err| match err {
        PropertyError::InvalidCode { code, .. } => PropertyError::InvalidCode { field, code },
        other => other,
    })
}

// ====================================================================================================
// Field deserializers
// ====================================================================================================

pub(crate) fn deser_code<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Read an enum property given as a string code, a number,
        or the item's name. It is kept as text here and checked
        when the request is built.
    */
    let s: Value = Deserialize::deserialize(deserializer)?;
    match s {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s),
        t => Err(de::Error::custom(format!("Expected code or string, found {t}"))),
    }
}

pub(crate) fn deser_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolVisitor;

    impl<'de> Visitor<'de> for BoolVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a boolean or a string containing true/false")
        }

        fn visit_bool<E>(self, v: bool) -> std::result::Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_str<E>(self, v: &str) -> std::result::Result<bool, E>
        where
            E: de::Error,
        {
            match v.to_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                "1" => Ok(true),
                "0" => Ok(false),
                _ => Err(E::custom(format!("invalid bool '{}'", v))),
            }
        }

        fn visit_u64<E>(self, v: u64) -> std::result::Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v != 0)
        }

        fn visit_i64<E>(self, v: i64) -> std::result::Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v != 0)
        }
    }

    deserializer.deserialize_any(BoolVisitor)
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> std::result::Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vec3Visitor;

    impl<'de> Visitor<'de> for Vec3Visitor {
        type Value = Vector3;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a Vec3 as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> std::result::Result<Vector3, E>
        where
            E: de::Error,
        {
            parse_vec3_str(value).map_err(de::Error::custom)
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Vector3, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let x: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let y: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let z: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            if seq.next_element::<Float>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(Vector3::new(x, y, z))
        }
    }

    deserializer.deserialize_any(Vec3Visitor)
}

pub fn parse_vec3_str(s: &str) -> std::result::Result<Vector3, String> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 components for Vec3 string, got '{}'", s));
    }
    let mut xyz = [0.0 as Float; 3];
    for (i, part) in parts.iter().enumerate() {
        xyz[i] = part
            .parse::<Float>()
            .map_err(|e| format!("Failed parsing component '{}': {}", part, e))?;
    }
    Ok(Vector3::from_array(xyz))
}
