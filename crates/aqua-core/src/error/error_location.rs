//! Source location captured at error construction sites.

use std::fmt;
use std::panic::Location;

/// File, line and column of the call site that produced an error.
///
/// Built from [`Location::caller`] inside `#[track_caller]` conversions,
/// so the recorded position is the originating `?` or constructor call
/// rather than the conversion itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl From<&'static Location<'static>> for ErrorLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}:{}]", self.file, self.line, self.column)
    }
}
