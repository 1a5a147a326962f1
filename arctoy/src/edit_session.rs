use std::sync::Arc;

use arcparams::{ArcParameterModel, Field, FieldValue, Range, RawNumber, Surface};
use druid::kurbo::BezPath;
use druid::Data;

/// Letters that start a command in SVG path data.
const COMMAND_LETTERS: &str = "MmLlHhVvCcSsQqTtAaZz";

/// The state of the arc editor.
#[derive(Clone, Debug, Data)]
pub struct ArcSession {
    #[data(same_fn = "PartialEq::eq")]
    pub model: ArcParameterModel,
    #[data(same_fn = "PartialEq::eq")]
    pub surface: PathSurface,
}

/// The drawing surface: the last applied path data, and the path parsed
/// from it.
#[derive(Clone, Debug, Default)]
pub struct PathSurface {
    description: String,
    path: Option<Arc<BezPath>>,
}

impl ArcSession {
    pub fn new() -> ArcSession {
        let model = ArcParameterModel::new();
        let mut surface = PathSurface::default();
        arcparams::apply(&mut surface, &model.render());
        ArcSession { model, surface }
    }

    /// Handle a change from the widget bound to `field`.
    pub fn notify(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.model.notify(field, value, &mut self.surface);
    }

    /// The position of a slider over `range` bound to the numeric `field`.
    pub fn slider_value(&self, field: Field, range: Range) -> f64 {
        // a flag has no text; sanitizing "" only keeps this total
        let text = self
            .model
            .params()
            .number(field)
            .map(RawNumber::as_str)
            .unwrap_or_default();
        range.sanitize(text)
    }

    /// The state of a checkbox bound to the flag `field`.
    pub fn is_checked(&self, field: Field) -> bool {
        self.model.params().flag(field).unwrap_or_default()
    }
}

impl PathSurface {
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The path to draw, if any leading commands of the description parsed.
    pub fn path(&self) -> Option<&BezPath> {
        self.path.as_deref()
    }
}

impl Surface for PathSurface {
    fn apply(&mut self, description: &str) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&description.into());

        self.description = description.to_owned();
        self.path = parse_leading_commands(description).map(Arc::new);
    }
}

/// Parse as many whole commands of `description` as possible.
///
/// Like a browser drawing a `<path>`, everything before the first bad command
/// is kept and the rest is dropped.
fn parse_leading_commands(description: &str) -> Option<BezPath> {
    let mut err = match BezPath::from_svg(description) {
        Ok(path) => return Some(path),
        Err(e) => e,
    };
    let starts: Vec<usize> = description
        .char_indices()
        .filter(|(_, c)| COMMAND_LETTERS.contains(*c))
        .map(|(i, _)| i)
        .collect();
    for &end in starts.iter().rev() {
        let prefix = &description[..end];
        if prefix.trim().is_empty() {
            break;
        }
        match BezPath::from_svg(prefix) {
            Ok(path) => {
                log::warn!("drawing '{}' of '{}': {}", prefix.trim_end(), description, err);
                return Some(path);
            }
            Err(e) => err = e,
        }
    }
    log::warn!("not drawing '{}': {}", description, err);
    None
}

/// Surfaces are the same if they were given the same description.
impl PartialEq for PathSurface {
    fn eq(&self, other: &PathSurface) -> bool {
        self.description == other.description
    }
}

#[cfg(test)]
mod tests {
    use druid::kurbo::{PathEl, Point};

    use super::*;

    #[test]
    fn starts_with_default_path() {
        let session = ArcSession::new();
        assert_eq!(
            session.surface.description(),
            "M 10 315 L 110 215 a30 50 0 0 1 162.55 162.45 L 315 10"
        );
        assert!(session.surface.path().is_some());
    }

    #[test]
    fn notify_redraws() {
        let mut session = ArcSession::new();
        let before = session.clone();
        session.notify(Field::LargeArcFlag, true);
        assert!(!before.same(&session));
        assert_eq!(session.surface.description(), session.model.render());
        assert!(session.is_checked(Field::LargeArcFlag));
    }

    #[test]
    fn malformed_arc_keeps_lead_in() {
        let mut session = ArcSession::new();
        session.notify(Field::Y, "oops");
        assert!(session.surface.description().ends_with(" 162.55 oops L 315 10"));
        let path = session.surface.path().expect("lead-in should be drawn");
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(10.0, 315.0)),
                PathEl::LineTo(Point::new(110.0, 215.0)),
            ]
        );

        session.notify(Field::Rx, "abc");
        assert!(session.surface.description().contains(" aabc 50 "));
        assert_eq!(session.surface.path().map(|p| p.elements().len()), Some(2));

        session.notify(Field::Rx, "40");
        session.notify(Field::Y, "100");
        let path = session.surface.path().unwrap();
        assert!(path.elements().len() > 3);
        assert_eq!(
            path.elements().last(),
            Some(&PathEl::LineTo(Point::new(315.0, 10.0)))
        );
    }

    #[test]
    fn nothing_parses() {
        let mut surface = PathSurface::default();
        surface.apply("garbage");
        assert!(surface.path().is_none());
        assert_eq!(surface.description(), "garbage");
    }

    #[test]
    fn slider_values() {
        let mut session = ArcSession::new();
        assert_eq!(session.slider_value(Field::Ry, Range::DEFAULT), 50.0);
        session.notify(Field::Ry, "500");
        assert_eq!(session.slider_value(Field::Ry, Range::DEFAULT), 360.0);
        assert_eq!(session.model.params().ry.as_str(), "500");
    }
}
