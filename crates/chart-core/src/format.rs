// File: crates/chart-core/src/format.rs
// Summary: Value label formatting.

/// Turns a data value into label text.
pub trait ValueFormatter {
    fn format(&self, value: f64) -> String;
}

/// Fixed number of fractional digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalFormatter {
    pub digits: usize,
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self { digits: 1 }
    }
}

impl ValueFormatter for DecimalFormatter {
    fn format(&self, value: f64) -> String {
        format!("{:.*}", self.digits, value)
    }
}

impl<F: Fn(f64) -> String> ValueFormatter for F {
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_digits() {
        assert_eq!(DecimalFormatter::default().format(13.0), "13.0");
        assert_eq!(DecimalFormatter { digits: 3 }.format(1.23456), "1.235");
    }

    #[test]
    fn closures_format() {
        let f = |v: f64| format!("${v}");
        assert_eq!(ValueFormatter::format(&f, 2.5), "$2.5");
    }
}
