//! Live-editable parameters for a single SVG arc command.
//!
//! This crate holds the state behind an interactive arc demo: seven values
//! describing one relative elliptical arc (`a rx ry x-axis-rotation
//! large-arc-flag sweep-flag x y`), embedded in a fixed path and rendered to
//! SVG path data every time a control changes.
//!
//! The core is deliberately permissive. Numeric values are kept as the raw
//! text a widget supplied and are written into the path data verbatim; a
//! malformed value produces malformed path data, and it is up to the drawing
//! surface to ignore it. Callers that want numbers can opt into the
//! [`validate`](ArcParameters::validate) layer, which parses the snapshot and
//! builds [`kurbo`] geometry from it.

mod control;
mod model;
mod params;
mod validate;

pub use control::{Control, Range, WidgetValue};
pub use model::{
    apply, escape_attribute, ArcParameterModel, Surface, ARC_START, END_POINT, START_POINT,
};
pub use params::{ArcParameters, Field, FieldValue, RawNumber};
pub use validate::{ParamError, ValidatedArc};
