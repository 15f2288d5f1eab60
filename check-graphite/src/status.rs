//! Plugin states, perf data and the single output line.

use std::fmt;

/// Nagios service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// The process exit code Nagios reads this state from.
    pub fn exit_code(&self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats `value` with at most `precision` decimals, dropping trailing
/// zeros: `2.200000` becomes `2.2`, `6.000000` becomes `6`.
pub fn pretty_float(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    if !formatted.contains('.') {
        return formatted;
    }
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// One perf-data item, rendered as `label=value;warn;crit;;`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfData {
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub warning: Option<String>,
    pub critical: Option<String>,
}

impl PerfData {
    pub fn new(label: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            unit: unit.into(),
            warning: None,
            critical: None,
        }
    }

    pub fn with_thresholds(mut self, warning: Option<String>, critical: Option<String>) -> Self {
        self.warning = warning;
        self.critical = critical;
        self
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.contains(&[' ', '=', '\''][..]) {
            write!(f, "'{}'", self.label.replace('\'', "''"))?;
        } else {
            f.write_str(&self.label)?;
        }
        write!(
            f,
            "={}{};{};{};;",
            pretty_float(self.value, 6),
            self.unit,
            self.warning.as_deref().unwrap_or(""),
            self.critical.as_deref().unwrap_or(""),
        )
    }
}

/// The result of one plugin run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub status: Status,
    pub message: String,
    pub perfdata: Vec<PerfData>,
}

impl CheckOutcome {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            perfdata: Vec::new(),
        }
    }

    /// An UNKNOWN outcome; used for every failure before a value exists.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Status::Unknown, message)
    }

    pub fn with_perfdata(mut self, perfdata: PerfData) -> Self {
        self.perfdata.push(perfdata);
        self
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)?;
        if !self.perfdata.is_empty() {
            f.write_str(" |")?;
            for item in &self.perfdata {
                write!(f, " {item}")?;
            }
        }
        Ok(())
    }
}
