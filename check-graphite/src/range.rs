//! Nagios threshold ranges.
//!
//! | range    | alerts when            |
//! |----------|------------------------|
//! | `10`     | `v < 0` or `v > 10`    |
//! | `10:`    | `v < 10`               |
//! | `~:10`   | `v > 10`               |
//! | `10:20`  | `v < 10` or `v > 20`   |
//! | `@10:20` | `10 <= v <= 20`        |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a threshold range.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    #[error("empty threshold range")]
    Empty,

    #[error("invalid number '{value}' in threshold range '{range}'")]
    InvalidNumber { range: String, value: String },

    #[error("threshold range '{range}' has start greater than end")]
    StartAfterEnd { range: String },
}

/// A parsed threshold range.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    start: f64,
    end: f64,
    /// `@` prefix: alert inside the range instead of outside it.
    inside: bool,
    text: String,
}

impl Range {
    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.inside
    }

    /// Returns true if `value` should raise an alert.
    pub fn alerts(&self, value: f64) -> bool {
        let within = self.start <= value && value <= self.end;
        if self.inside {
            within
        } else {
            !within
        }
    }
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (inside, body) = match text.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if body.is_empty() {
            return Err(RangeError::Empty);
        }

        // Infinite bounds are spelled `~` or left empty, never as numbers.
        let number = |value: &str| -> Result<f64, RangeError> {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| RangeError::InvalidNumber {
                    range: text.to_string(),
                    value: value.to_string(),
                })
        };

        let (start, end) = match body.split_once(':') {
            Some((start, end)) => {
                let start = match start.trim() {
                    "~" => f64::NEG_INFINITY,
                    "" => 0.0,
                    s => number(s)?,
                };
                let end = match end.trim() {
                    "" => f64::INFINITY,
                    e => number(e)?,
                };
                (start, end)
            }
            None => (0.0, number(body)?),
        };

        if start > end {
            return Err(RangeError::StartAfterEnd {
                range: text.to_string(),
            });
        }

        Ok(Range {
            start,
            end,
            inside,
            text: text.to_string(),
        })
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(s: &str) -> Range {
        s.parse().unwrap()
    }

    #[test]
    fn test_plain_number_is_zero_to_n() {
        let r = range("10");
        assert_eq!((r.start(), r.end()), (0.0, 10.0));
        assert!(!r.alerts(0.0));
        assert!(!r.alerts(10.0));
        assert!(r.alerts(10.1));
        assert!(r.alerts(-0.1));
    }

    #[test]
    fn test_open_end() {
        let r = range("10:");
        assert!(r.alerts(9.9));
        assert!(!r.alerts(10.0));
        assert!(!r.alerts(1e12));
    }

    #[test]
    fn test_negative_infinity_start() {
        let r = range("~:10");
        assert!(!r.alerts(-1e12));
        assert!(!r.alerts(10.0));
        assert!(r.alerts(11.0));
    }

    #[test]
    fn test_bounded() {
        let r = range("10:20");
        assert!(r.alerts(9.0));
        assert!(!r.alerts(15.0));
        assert!(r.alerts(21.0));
    }

    #[test]
    fn test_inverted() {
        let r = range("@10:20");
        assert!(r.is_inverted());
        assert!(!r.alerts(9.0));
        assert!(r.alerts(10.0));
        assert!(r.alerts(20.0));
        assert!(!r.alerts(20.5));
    }

    #[test]
    fn test_decimal_and_negative_bounds() {
        let r = range("-1.5:0.25");
        assert!(!r.alerts(0.0));
        assert!(r.alerts(-2.0));
        assert!(r.alerts(0.3));
    }

    #[test]
    fn test_display_keeps_original_text() {
        assert_eq!(range(" @10:20 ").to_string(), "@10:20");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Range>(), Err(RangeError::Empty));
        assert_eq!("@".parse::<Range>(), Err(RangeError::Empty));
        assert!(matches!(
            "abc".parse::<Range>(),
            Err(RangeError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "1:x".parse::<Range>(),
            Err(RangeError::InvalidNumber { .. })
        ));
        for text in ["NaN", "inf", "-inf:0", "0:NaN", "@1:infinity"] {
            assert!(
                matches!(text.parse::<Range>(), Err(RangeError::InvalidNumber { .. })),
                "{text} should be rejected"
            );
        }
        assert_eq!(
            "20:10".parse::<Range>(),
            Err(RangeError::StartAfterEnd {
                range: "20:10".to_string()
            })
        );
    }
}
