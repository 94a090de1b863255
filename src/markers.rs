use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Opening and closing strings placed around a changed span.
///
/// The content is never interpreted by the renderer, so anything from
/// plain brackets to HTML tags or terminal escapes works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerPair {
    pub open: String,
    pub close: String,
}

impl MarkerPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self::new("[", "]")
    }
}

impl fmt::Display for MarkerPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.open, self.close)
    }
}

/// Parses `open,close`. The split happens on the first comma only.
impl FromStr for MarkerPair {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((open, close)) => Ok(Self::new(open, close)),
            None => Err(ConfigError::InvalidValue {
                field: "markers".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
