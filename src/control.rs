//! Configuration pushed out to the widgets that edit the parameters.

/// The kind of widget bound to a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    /// A slider over a numeric range.
    Range(Range),
    Checkbox,
}

/// The bounds of a slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// The value a widget displays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WidgetValue {
    Range(f64),
    Checked(bool),
}

impl Range {
    /// The range used for every numeric field.
    pub const DEFAULT: Range = Range {
        min: 0.0,
        max: 360.0,
        step: 1.0,
    };

    /// The value a slider shows when given `text`.
    ///
    /// This follows how a browser sanitizes the value of a range input:
    /// text that is not a valid floating-point number in the HTML sense
    /// becomes the midpoint, and numbers are clamped to the bounds and
    /// snapped to the step grid starting at `min`, rounding ties upwards.
    pub fn sanitize(&self, text: &str) -> f64 {
        match parse_html_float(text) {
            Some(value) if value.is_finite() => self.snap(value),
            _ => self.midpoint(),
        }
    }

    /// Clamp `value` to the bounds and snap it to the step grid.
    pub fn snap(&self, value: f64) -> f64 {
        let max = self.max.max(self.min);
        let value = value.max(self.min).min(max);
        if self.step <= 0.0 {
            return value;
        }
        let steps = ((value - self.min) / self.step + 0.5).floor();
        let mut snapped = self.min + steps * self.step;
        if snapped > max {
            snapped -= self.step;
        }
        snapped
    }

    fn midpoint(&self) -> f64 {
        if self.max < self.min {
            self.min
        } else {
            self.snap(self.min + (self.max - self.min) / 2.0)
        }
    }
}

/// Parse `-? (digits | digits "." digits | "." digits) ([eE] [+-]? digits)?`,
/// rejecting whitespace, a leading `+`, and the words Rust would accept.
fn parse_html_float(text: &str) -> Option<f64> {
    fn digits(bytes: &[u8], mut i: usize) -> usize {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    }

    let bytes = text.as_bytes();
    let mut i = if bytes.first() == Some(&b'-') { 1 } else { 0 };
    let int_end = digits(bytes, i);
    let has_int = int_end > i;
    i = int_end;
    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits(bytes, i + 1);
        if frac_end == i + 1 {
            return None;
        }
        i = frac_end;
    } else if !has_int {
        return None;
    }
    if let Some(b'e') | Some(b'E') = bytes.get(i) {
        i += 1;
        if let Some(b'+') | Some(b'-') = bytes.get(i) {
            i += 1;
        }
        let exp_end = digits(bytes, i);
        if exp_end == i {
            return None;
        }
        i = exp_end;
    }
    if i != bytes.len() {
        return None;
    }
    text.parse().ok()
}
