//! `from`/`until` handling for render queries.
//!
//! Graphite accepts absolute times (`20231114`, `22:13_20231114`, unix
//! seconds) and relative offsets (`-10min`, `-2h`). Plugin users usually
//! write offsets without the sign (`10min`), so bare offsets are signed
//! here before they go on the wire. Any token containing a unit character
//! counts as an offset, named anchors such as `now` included.

use serde::{Deserialize, Serialize};

/// Characters that appear in Graphite's relative unit suffixes
/// (`s`, `min`, `h`, `d`, `w`, `mon`, `y`).
pub const RELATIVE_UNIT_CHARS: &[char] = &['s', 'm', 'h', 'd', 'w', 'y', 'o', 'i', 'n'];

const SIGNS: &[char] = &['-', '+'];

/// The time range of a render query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from: String,
    /// Empty means "now"; the parameter is then left out of the query.
    pub until: String,
}

impl TimeWindow {
    pub fn new(from: impl Into<String>, until: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            until: until.into(),
        }
    }

    /// A window from the given offset up to now.
    pub fn since(from: impl Into<String>) -> Self {
        Self::new(from, "")
    }

    /// Returns the window with both ends normalized for transmission.
    pub fn normalized(&self) -> Self {
        Self {
            from: normalize_time(&self.from),
            until: normalize_time(&self.until),
        }
    }
}

/// Returns true if `token` contains any of [`RELATIVE_UNIT_CHARS`].
pub fn is_relative(token: &str) -> bool {
    token.contains(RELATIVE_UNIT_CHARS)
}

/// Prefixes bare relative offsets with `-`. Absolute times and offsets
/// that already carry a sign pass through unchanged.
pub fn normalize_time(token: &str) -> String {
    if token.starts_with(SIGNS) || !is_relative(token) {
        token.to_string()
    } else {
        format!("-{token}")
    }
}
