//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a calendar `Date` that formats it for people, e.g.
/// `June 1, 2024`.
pub struct LongDate<'a>(pub &'a Date);

impl fmt::Display for LongDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%B %-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_long_date_format() {
        assert_eq!(LongDate(&date(2024, 6, 1)).to_string(), "June 1, 2024");
        assert_eq!(LongDate(&date(2023, 12, 25)).to_string(), "December 25, 2023");
    }
}
