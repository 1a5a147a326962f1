//! The sliders and checkboxes bound to the arc parameters.

use arcparams::{Control, Field, Range};
use druid::widget::{Checkbox, CrossAxisAlignment, Flex, Label, Slider};
use druid::{Color, Env, Lens, Widget, WidgetExt};

use crate::edit_session::ArcSession;

const LABEL_WIDTH: f64 = 120.0;
const VALUE_WIDTH: f64 = 64.0;
const ROW_SPACING: f64 = 4.0;

/// Binds a slider to a numeric field.
///
/// Moving the slider stores the snapped position as the field's new text.
#[derive(Debug, Clone, Copy)]
pub struct RangeLens {
    field: Field,
    range: Range,
}

/// Binds a checkbox to a flag.
#[derive(Debug, Clone, Copy)]
pub struct FlagLens(pub Field);

impl RangeLens {
    pub fn new(field: Field, range: Range) -> RangeLens {
        RangeLens { field, range }
    }
}

impl Lens<ArcSession, f64> for RangeLens {
    fn with<V, F: FnOnce(&f64) -> V>(&self, data: &ArcSession, f: F) -> V {
        f(&data.slider_value(self.field, self.range))
    }

    fn with_mut<V, F: FnOnce(&mut f64) -> V>(&self, data: &mut ArcSession, f: F) -> V {
        let old = data.slider_value(self.field, self.range);
        let mut value = old;
        let result = f(&mut value);
        if value != old {
            data.notify(self.field, self.range.snap(value));
        }
        result
    }
}

impl Lens<ArcSession, bool> for FlagLens {
    fn with<V, F: FnOnce(&bool) -> V>(&self, data: &ArcSession, f: F) -> V {
        f(&data.is_checked(self.0))
    }

    fn with_mut<V, F: FnOnce(&mut bool) -> V>(&self, data: &mut ArcSession, f: F) -> V {
        let old = data.is_checked(self.0);
        let mut checked = old;
        let result = f(&mut checked);
        if checked != old {
            data.notify(self.0, checked);
        }
        result
    }
}

/// One row per field, configured from the field's control.
pub fn control_panel() -> impl Widget<ArcSession> {
    let mut column = Flex::column().cross_axis_alignment(CrossAxisAlignment::Start);
    for field in Field::ALL.iter().copied() {
        column.add_child(control_row(field));
        column.add_spacer(ROW_SPACING);
    }
    column.padding(10.0)
}

fn control_row(field: Field) -> Box<dyn Widget<ArcSession>> {
    match field.control() {
        Control::Range(range) => {
            let value = Label::new(move |data: &ArcSession, _: &Env| {
                data.model
                    .params()
                    .number(field)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
            .with_text_color(Color::grey(0.3));

            Flex::row()
                .with_child(Label::new(field.id()).fix_width(LABEL_WIDTH))
                .with_flex_child(
                    Slider::new()
                        .with_range(range.min, range.max)
                        .lens(RangeLens::new(field, range))
                        .expand_width(),
                    1.0,
                )
                .with_spacer(8.0)
                .with_child(value.fix_width(VALUE_WIDTH))
                .boxed()
        }
        Control::Checkbox => Flex::row()
            .with_spacer(LABEL_WIDTH)
            .with_child(Checkbox::new(field.id()).lens(FlagLens(field)))
            .boxed(),
    }
}
