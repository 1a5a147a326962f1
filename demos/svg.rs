//! Render an arc to an HTML page.
//!
//! Takes up to seven positional arguments, in arc command order
//! (`rx ry x-axis-rotation large-arc-flag sweep-flag x y`), and prints a page
//! drawing the resulting path. Numeric arguments are used verbatim, like
//! widget values; flags are `1`/`true` or `0`/`false`.

use arcparams::{escape_attribute, ArcParameterModel, Field, FieldValue};

fn main() {
    let mut model = ArcParameterModel::new();
    for (field, arg) in Field::ALL.iter().copied().zip(std::env::args().skip(1)) {
        let value = if field.is_flag() {
            FieldValue::Flag(matches!(arg.as_str(), "1" | "true"))
        } else {
            FieldValue::Text(arg)
        };
        model.set_field(field, value);
    }

    let mut description = String::new();
    arcparams::apply(&mut description, &model.render());
    if let Err(e) = model.params().validate() {
        eprintln!("warning: {}", e);
    }

    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"##,
        escape_attribute(&description)
    );
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}
