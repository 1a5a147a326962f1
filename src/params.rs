//! The arc parameter snapshot.

use std::fmt;

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::control::{Control, Range};

/// A numeric parameter, stored as the exact text a widget supplied.
///
/// No parsing happens on the way in; the text is written into the path data
/// as-is. Use [`RawNumber::parse`] to get at the number, if there is one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", transparent)
)]
pub struct RawNumber(String);

/// One of the seven arc parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Rx,
    Ry,
    XAxisRotation,
    LargeArcFlag,
    SweepFlag,
    X,
    Y,
}

/// A value as delivered by a widget's change notification.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// The value of a slider or text input.
    Text(String),
    /// The checked state of a checkbox.
    Flag(bool),
}

/// The current parameters of the arc command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", rename_all = "camelCase")
)]
pub struct ArcParameters {
    pub rx: RawNumber,
    pub ry: RawNumber,
    /// Rotation of the ellipse's x axis, in degrees.
    pub x_axis_rotation: RawNumber,
    pub large_arc_flag: bool,
    pub sweep_flag: bool,
    /// Endpoint x, relative to the start of the arc.
    pub x: RawNumber,
    /// Endpoint y, relative to the start of the arc.
    pub y: RawNumber,
}

impl RawNumber {
    pub fn new(text: impl Into<String>) -> RawNumber {
        RawNumber(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the stored text as a float, ignoring surrounding whitespace.
    pub fn parse(&self) -> Option<f64> {
        self.0.trim().parse().ok()
    }
}

impl From<f64> for RawNumber {
    /// Uses the shortest representation that round-trips, so `30.0` becomes
    /// `"30"` rather than `"30.0"`.
    fn from(value: f64) -> RawNumber {
        RawNumber(value.to_string())
    }
}

impl From<&str> for RawNumber {
    fn from(text: &str) -> RawNumber {
        RawNumber(text.to_owned())
    }
}

impl From<String> for RawNumber {
    fn from(text: String) -> RawNumber {
        RawNumber(text)
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Field {
    /// All fields, in the order they appear in the arc command.
    pub const ALL: [Field; 7] = [
        Field::Rx,
        Field::Ry,
        Field::XAxisRotation,
        Field::LargeArcFlag,
        Field::SweepFlag,
        Field::X,
        Field::Y,
    ];

    /// The identifier of the widget bound to this field.
    pub fn id(self) -> &'static str {
        match self {
            Field::Rx => "rx",
            Field::Ry => "ry",
            Field::XAxisRotation => "x-axis-rotation",
            Field::LargeArcFlag => "large-arc-flag",
            Field::SweepFlag => "sweep-flag",
            Field::X => "x",
            Field::Y => "y",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|field| field.id() == id)
    }

    pub fn is_flag(self) -> bool {
        matches!(self, Field::LargeArcFlag | Field::SweepFlag)
    }

    /// The kind of widget that edits this field.
    pub fn control(self) -> Control {
        if self.is_flag() {
            Control::Checkbox
        } else {
            Control::Range(Range::DEFAULT)
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FieldValue {
    /// The value as text, the way it ends up in a numeric field.
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(flag) => flag.to_string(),
        }
    }

    /// The value as a flag; text is `true` when non-empty.
    fn into_flag(self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Flag(flag) => flag,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> FieldValue {
        FieldValue::Flag(flag)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> FieldValue {
        FieldValue::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> FieldValue {
        FieldValue::Text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> FieldValue {
        FieldValue::Text(RawNumber::from(value).0)
    }
}

impl ArcParameters {
    /// The current value of `field`.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::LargeArcFlag => FieldValue::Flag(self.large_arc_flag),
            Field::SweepFlag => FieldValue::Flag(self.sweep_flag),
            _ => FieldValue::Text(self.number(field).map(|n| n.0.clone()).unwrap_or_default()),
        }
    }

    /// The raw text of a numeric field, or `None` for a flag.
    pub fn number(&self, field: Field) -> Option<&RawNumber> {
        match field {
            Field::Rx => Some(&self.rx),
            Field::Ry => Some(&self.ry),
            Field::XAxisRotation => Some(&self.x_axis_rotation),
            Field::X => Some(&self.x),
            Field::Y => Some(&self.y),
            Field::LargeArcFlag | Field::SweepFlag => None,
        }
    }

    /// The state of a flag, or `None` for a numeric field.
    pub fn flag(&self, field: Field) -> Option<bool> {
        match field {
            Field::LargeArcFlag => Some(self.large_arc_flag),
            Field::SweepFlag => Some(self.sweep_flag),
            _ => None,
        }
    }

    /// Store `value` in `field`, verbatim. This never fails.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::Rx => self.rx = RawNumber(value.into_text()),
            Field::Ry => self.ry = RawNumber(value.into_text()),
            Field::XAxisRotation => self.x_axis_rotation = RawNumber(value.into_text()),
            Field::LargeArcFlag => self.large_arc_flag = value.into_flag(),
            Field::SweepFlag => self.sweep_flag = value.into_flag(),
            Field::X => self.x = RawNumber(value.into_text()),
            Field::Y => self.y = RawNumber(value.into_text()),
        }
    }
}

impl Default for ArcParameters {
    fn default() -> ArcParameters {
        ArcParameters {
            rx: RawNumber::from(30.0),
            ry: RawNumber::from(50.0),
            x_axis_rotation: RawNumber::from(0.0),
            large_arc_flag: false,
            sweep_flag: true,
            x: RawNumber::from(162.55),
            y: RawNumber::from(162.45),
        }
    }
}

/// Formats the relative arc command, e.g. `a30 50 0 0 1 162.55 162.45`.
impl fmt::Display for ArcParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a{} {} {} {} {} {} {}",
            self.rx,
            self.ry,
            self.x_axis_rotation,
            self.large_arc_flag as u8,
            self.sweep_flag as u8,
            self.x,
            self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_number_from_float() {
        assert_eq!(RawNumber::from(30.0).as_str(), "30");
        assert_eq!(RawNumber::from(162.55).as_str(), "162.55");
        assert_eq!(RawNumber::from(-4.5).as_str(), "-4.5");
    }

    #[test]
    fn raw_number_parse() {
        assert_eq!(RawNumber::from(" 12.5 ").parse(), Some(12.5));
        assert_eq!(RawNumber::from("").parse(), None);
        assert_eq!(RawNumber::from("twelve").parse(), None);
    }

    #[test]
    fn field_ids() {
        for field in Field::ALL.iter().copied() {
            assert_eq!(Field::from_id(field.id()), Some(field));
        }
        assert_eq!(Field::from_id("x-axis-rotation"), Some(Field::XAxisRotation));
        assert_eq!(Field::from_id("radius"), None);
    }

    #[test]
    fn controls() {
        assert_eq!(Field::SweepFlag.control(), Control::Checkbox);
        assert_eq!(Field::Ry.control(), Control::Range(Range::DEFAULT));
    }

    #[test]
    fn arc_segment() {
        let params = ArcParameters::default();
        assert_eq!(params.to_string(), "a30 50 0 0 1 162.55 162.45");
    }

    #[test]
    fn set_keeps_text_verbatim() {
        let mut params = ArcParameters::default();
        params.set(Field::X, "  1e2".into());
        params.set(Field::Ry, "".into());
        assert_eq!(params.x.as_str(), "  1e2");
        assert_eq!(params.ry.as_str(), "");
        assert_eq!(params.to_string(), "a30  0 0 1   1e2 162.45");
    }

    #[test]
    fn mismatched_kinds() {
        let mut params = ArcParameters::default();
        params.set(Field::Rx, true.into());
        assert_eq!(params.rx.as_str(), "true");

        params.set(Field::SweepFlag, "".into());
        assert!(!params.sweep_flag);
        params.set(Field::LargeArcFlag, "on".into());
        assert!(params.large_arc_flag);
    }

    #[test]
    fn get_reflects_set() {
        let mut params = ArcParameters::default();
        params.set(Field::XAxisRotation, FieldValue::from(45.0));
        assert_eq!(params.get(Field::XAxisRotation), FieldValue::Text("45".into()));
        assert_eq!(params.get(Field::SweepFlag), FieldValue::Flag(true));
        assert!(params.number(Field::LargeArcFlag).is_none());
        assert_eq!(params.flag(Field::SweepFlag), Some(true));
        assert_eq!(params.flag(Field::Rx), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&ArcParameters::default()).unwrap();
        assert_eq!(
            json,
            r#"{"rx":"30","ry":"50","xAxisRotation":"0","largeArcFlag":false,"sweepFlag":true,"x":"162.55","y":"162.45"}"#
        );
        let back: ArcParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ArcParameters::default());
    }
}
