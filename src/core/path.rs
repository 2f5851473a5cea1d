use std::fmt::Write as _;

/// Magnitudes below this are written as `0` (trig residue such as
/// `cos(90deg) = 6.1e-17`).
const ZERO_SNAP: f64 = 1e-9;

/// Appends `value` in shortest round-trip decimal form.
///
/// Negative zero and sub-nanopixel residue print as `0`; non-finite values
/// print as `0` so a stray NaN never produces unparsable path data.
pub fn write_number(out: &mut String, value: f64) {
    if !value.is_finite() || value.abs() < ZERO_SNAP {
        out.push('0');
        return;
    }
    let _ = write!(out, "{value}");
}

/// Formats one number the same way [`write_number`] does.
#[must_use]
pub fn fmt_number(value: f64) -> String {
    let mut out = String::new();
    write_number(&mut out, value);
    out
}

/// Incremental SVG path-data writer.
///
/// Commands use absolute coordinates with comma separated operands:
/// `M1,2L3,4C..Z`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathWriter {
    buf: String,
}

impl PathWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    fn pair(&mut self, cmd: char, x: f64, y: f64) {
        self.buf.push(cmd);
        write_number(&mut self.buf, x);
        self.buf.push(',');
        write_number(&mut self.buf, y);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pair('M', x, y);
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.pair('L', x, y);
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.pair('C', x1, y1);
        for v in [x2, y2, x, y] {
            self.buf.push(',');
            write_number(&mut self.buf, v);
        }
    }

    pub fn close(&mut self) {
        self.buf.push('Z');
    }

    /// Appends already formatted path data.
    pub fn push_raw(&mut self, data: &str) {
        self.buf.push_str(data);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::{PathWriter, fmt_number};

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(fmt_number(3.0), "3");
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(0.5), "0.5");
        assert_eq!(fmt_number(-12.25), "-12.25");
        assert_eq!(fmt_number(f64::NAN), "0");
        assert_eq!(fmt_number(6.123_233_995_736_766e-16), "0");
    }

    #[test]
    fn writer_emits_compact_commands() {
        let mut path = PathWriter::new();
        path.move_to(0.0, 1.0);
        path.line_to(2.5, 3.0);
        path.cubic_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        path.close();
        assert_eq!(path.finish(), "M0,1L2.5,3C1,2,3,4,5,6Z");
    }
}
