//! Optional numeric validation of a parameter snapshot.
//!
//! The model itself accepts any text; this layer is for callers that need
//! actual numbers, for instance to build geometry.

use std::fmt;

use kurbo::{Arc, BezPath, SvgArc, Vec2};

use crate::model::{ARC_START, END_POINT, START_POINT};
use crate::params::{ArcParameters, Field, RawNumber};

/// A snapshot whose numeric fields all parsed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatedArc {
    pub rx: f64,
    pub ry: f64,
    /// Degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    NotANumber { field: Field, raw: String },
    NotFinite { field: Field, raw: String },
}

impl ArcParameters {
    /// Parse every numeric field, failing on the first one that is not a
    /// finite number.
    pub fn validate(&self) -> Result<ValidatedArc, ParamError> {
        Ok(ValidatedArc {
            rx: parse_field(Field::Rx, &self.rx)?,
            ry: parse_field(Field::Ry, &self.ry)?,
            x_axis_rotation: parse_field(Field::XAxisRotation, &self.x_axis_rotation)?,
            large_arc: self.large_arc_flag,
            sweep: self.sweep_flag,
            x: parse_field(Field::X, &self.x)?,
            y: parse_field(Field::Y, &self.y)?,
        })
    }
}

fn parse_field(field: Field, raw: &RawNumber) -> Result<f64, ParamError> {
    let value = raw.parse().ok_or_else(|| ParamError::NotANumber {
        field,
        raw: raw.to_string(),
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::NotFinite {
            field,
            raw: raw.to_string(),
        })
    }
}

impl ValidatedArc {
    /// The arc as an absolute SVG arc starting at [`ARC_START`].
    pub fn to_svg_arc(&self) -> SvgArc {
        SvgArc {
            from: ARC_START,
            to: ARC_START + Vec2::new(self.x, self.y),
            radii: Vec2::new(self.rx, self.ry),
            x_rotation: self.x_axis_rotation.to_radians(),
            large_arc: self.large_arc,
            sweep: self.sweep,
        }
    }

    /// The whole figure: the lead-in line, the arc, and the line out.
    ///
    /// An arc with a zero radius is drawn as a straight line to its endpoint.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let svg_arc = self.to_svg_arc();
        let mut path = BezPath::new();
        path.move_to(START_POINT);
        path.line_to(ARC_START);
        match Arc::from_svg_arc(&svg_arc) {
            Some(arc) => {
                for el in arc.append_iter(tolerance) {
                    path.push(el);
                }
            }
            None => path.line_to(svg_arc.to),
        }
        path.line_to(END_POINT);
        path
    }
}

impl ParamError {
    pub fn field(&self) -> Field {
        match self {
            ParamError::NotANumber { field, .. } | ParamError::NotFinite { field, .. } => *field,
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParamError::NotANumber { field, raw } => {
                write!(f, "{} is not a number: '{}'", field, raw)
            }
            ParamError::NotFinite { field, raw } => write!(f, "{} is not finite: '{}'", field, raw),
        }
    }
}

impl std::error::Error for ParamError {}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Point};

    use super::*;

    fn assert_near(p0: Point, p1: Point) {
        assert!((p1 - p0).hypot() < 1e-6, "{:?} != {:?}", p0, p1);
    }

    #[test]
    fn default_validates() {
        let arc = ArcParameters::default().validate().unwrap();
        assert_eq!(arc.rx, 30.0);
        assert_eq!(arc.ry, 50.0);
        assert!(!arc.large_arc);
        assert!(arc.sweep);

        let svg_arc = arc.to_svg_arc();
        assert_eq!(svg_arc.from, ARC_START);
        assert_near(svg_arc.to, Point::new(272.55, 377.45));
    }

    #[test]
    fn errors_name_the_field() {
        let mut params = ArcParameters::default();
        params.set(Field::XAxisRotation, "".into());
        let err = params.validate().unwrap_err();
        assert_eq!(err.field(), Field::XAxisRotation);
        assert_eq!(err.to_string(), "x-axis-rotation is not a number: ''");

        params.set(Field::XAxisRotation, "12".into());
        params.set(Field::Y, "inf".into());
        assert_eq!(
            params.validate(),
            Err(ParamError::NotFinite {
                field: Field::Y,
                raw: "inf".into()
            })
        );
    }

    #[test]
    fn bez_path_endpoints() {
        let path = ArcParameters::default()
            .validate()
            .unwrap()
            .to_bez_path(0.1);
        let els = path.elements();
        assert_eq!(els[0], PathEl::MoveTo(START_POINT));
        assert_eq!(els[1], PathEl::LineTo(ARC_START));
        assert_eq!(*els.last().unwrap(), PathEl::LineTo(END_POINT));
        assert!(els.len() > 3);
        match els[els.len() - 2] {
            PathEl::CurveTo(_, _, p) => assert_near(p, Point::new(272.55, 377.45)),
            ref other => panic!("expected the arc to end in a curve, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_arc_is_a_line() {
        let mut params = ArcParameters::default();
        params.set(Field::Rx, "0".into());
        let path = params.validate().unwrap().to_bez_path(0.1);
        assert_eq!(path.elements().len(), 4);
        match path.elements()[2] {
            PathEl::LineTo(p) => assert_near(p, Point::new(272.55, 377.45)),
            ref other => panic!("expected a line, got {:?}", other),
        }
    }
}
