//! Plain-text summaries of scenario results.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use crate::fields::FieldVector;
use crate::math::{R2, Scalar};

/// Text shown in place of an unbounded magnitude.
pub const UNDEFINED_AT_SOURCE: &str = "undefined at r = 0";

/// Titled text summary with inputs and results sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Heading.
    pub title: String,
    /// One-paragraph description of the computation.
    pub description: String,
    /// Input parameters, one per line.
    pub inputs: String,
    /// Computed values, one per line.
    pub results: String,
}

impl Report {
    /// Creates an empty report with the given heading and description.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), ..Self::default() }
    }

    /// Appends a line to the inputs section.
    pub fn input(&mut self, line: impl AsRef<str>) -> &mut Self {
        push_line(&mut self.inputs, line.as_ref());
        self
    }

    /// Appends a line to the results section.
    pub fn result(&mut self, line: impl AsRef<str>) -> &mut Self {
        push_line(&mut self.results, line.as_ref());
        self
    }

    /// Writes the report to `w`.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "{self}")
    }
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f)?;
        writeln!(f, "Description:\n{}\n", self.description)?;
        writeln!(f, "Inputs:\n{}", self.inputs)?;
        write!(f, "Results:\n{}", self.results)
    }
}

/// Formats a magnitude in scientific notation, or [`UNDEFINED_AT_SOURCE`] when infinite.
#[must_use]
pub fn format_magnitude(value: Scalar, unit: &str) -> String {
    if value.is_finite() {
        format!("{value:.3e} {unit}")
    } else {
        UNDEFINED_AT_SOURCE.to_owned()
    }
}

/// `(Ex, Ey) N/C, |E| = ... N/C`.
#[must_use]
pub fn format_field(e: FieldVector) -> String {
    let mut s = format!("({:.3e}, {:.3e}) N/C", e.ex, e.ey);
    // Infallible for String.
    let _ = write!(s, ", |E| = {}", format_magnitude(e.magnitude(), "N/C"));
    s
}

/// `(x, y) m` with four decimals.
#[must_use]
pub fn format_position(p: R2) -> String {
    format!("({:.4}, {:.4}) m", p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_magnitudes_are_spelled_out() {
        assert_eq!(format_magnitude(Scalar::INFINITY, "N/C"), UNDEFINED_AT_SOURCE);
        assert_eq!(format_magnitude(8.99, "N/C"), "8.990e0 N/C");
    }

    #[test]
    fn report_renders_sections_in_order() {
        let mut report = Report::new("Demo", "Two lines of results.");
        report.input("Q1 = 1e-9 C").result("first").result("second");
        let text = report.to_string();
        assert!(text.starts_with("Demo\n====\n"));
        let inputs = text.find("Inputs:").expect("inputs heading");
        let results = text.find("Results:").expect("results heading");
        assert!(inputs < results);
        assert!(text.ends_with("first\nsecond\n"));
    }

    #[test]
    fn write_to_matches_display() {
        let report = Report::new("T", "D");
        let mut buf = Vec::new();
        report.write_to(&mut buf).expect("write to vec");
        assert_eq!(String::from_utf8(buf).expect("utf8"), report.to_string());
    }

    #[test]
    fn field_formatting_includes_magnitude() {
        let s = format_field(FieldVector::new(3.0, 4.0));
        assert!(s.ends_with("|E| = 5.000e0 N/C"), "{s}");
    }
}
