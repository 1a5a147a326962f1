//! The parameter model and its rendered path.

use kurbo::Point;

use crate::control::{Control, WidgetValue};
use crate::params::{ArcParameters, Field, FieldValue, RawNumber};

/// Where the path starts.
pub const START_POINT: Point = Point { x: 10.0, y: 315.0 };
/// Where the arc starts; its endpoint is relative to this point.
pub const ARC_START: Point = Point { x: 110.0, y: 215.0 };
/// Where the path ends, after a line from the arc's endpoint.
pub const END_POINT: Point = Point { x: 315.0, y: 10.0 };

/// Something that displays path data, such as the `d` attribute of an SVG
/// `<path>`.
///
/// The surface receives the description as-is and is expected to cope with
/// malformed data on its own.
pub trait Surface {
    fn apply(&mut self, description: &str);
}

/// A string surface simply holds the latest description.
impl Surface for String {
    fn apply(&mut self, description: &str) {
        self.clear();
        self.push_str(description);
    }
}

/// Write `description` to `surface`.
pub fn apply<S: Surface + ?Sized>(surface: &mut S, description: &str) {
    surface.apply(description)
}

/// Escape path data for use inside a double-quoted XML attribute.
///
/// Raw parameter text ends up in the description verbatim, so it may
/// contain markup.
pub fn escape_attribute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Holds the current arc parameters and renders them to path data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcParameterModel {
    params: ArcParameters,
}

impl ArcParameterModel {
    /// A model with the default parameters.
    pub fn new() -> ArcParameterModel {
        ArcParameterModel::default()
    }

    pub fn with_params(params: ArcParameters) -> ArcParameterModel {
        ArcParameterModel { params }
    }

    pub fn params(&self) -> &ArcParameters {
        &self.params
    }

    /// A copy of the current parameters.
    pub fn snapshot(&self) -> ArcParameters {
        self.params.clone()
    }

    /// Update a single field. Numeric text is stored without validation.
    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.params.set(field, value.into());
    }

    /// The path description for the current parameters.
    pub fn render(&self) -> String {
        format!(
            "M {} {} L {} {} {} L {} {}",
            START_POINT.x,
            START_POINT.y,
            ARC_START.x,
            ARC_START.y,
            self.params,
            END_POINT.x,
            END_POINT.y
        )
    }

    /// Handle a change notification from the widget bound to `field`.
    ///
    /// Stores the value, then renders and applies the new description to
    /// `surface`.
    pub fn notify<S: Surface + ?Sized>(
        &mut self,
        field: Field,
        value: impl Into<FieldValue>,
        surface: &mut S,
    ) {
        self.set_field(field, value);
        let description = self.render();
        log::debug!("{} changed: {}", field, description);
        apply(surface, &description);
    }

    /// The value the widget for `field` should display.
    pub fn widget_value(&self, field: Field) -> WidgetValue {
        // `control` gives a range to exactly the numeric fields, so neither
        // fallback is taken
        match field.control() {
            Control::Range(range) => {
                let text = self.params.number(field).map(RawNumber::as_str);
                WidgetValue::Range(range.sanitize(text.unwrap_or_default()))
            }
            Control::Checkbox => WidgetValue::Checked(self.params.flag(field).unwrap_or_default()),
        }
    }
}
