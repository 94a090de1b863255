pub mod line;
pub mod none;

pub use line::LineLevel;
pub use none::NoneLevel;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::markers::MarkerPair;
use crate::sequence::{CharSequence, MbString};

/// Marks the differing part of a pair of corresponding lines.
pub trait LineRenderer: Send + Sync {
    /// Mutate `old` and `new` in place.
    fn render(&self, old: &mut dyn CharSequence, new: &mut dyn CharSequence);

    /// Render copies of `old` and `new`, leaving the inputs untouched.
    fn render_pair(&self, old: &str, new: &str) -> (String, String) {
        let mut old = MbString::from(old);
        let mut new = MbString::from(new);
        self.render(&mut old, &mut new);
        (old.into_string(), new.into_string())
    }
}

/// How much detail the intra-line renderer highlights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Enclose the span between common prefix and common suffix.
    #[default]
    Line,
    /// Leave lines unmarked.
    None,
}

impl DetailLevel {
    pub fn build(self, markers: MarkerPair) -> Box<dyn LineRenderer> {
        match self {
            DetailLevel::Line => Box::new(LineLevel::new(markers)),
            DetailLevel::None => Box::new(NoneLevel),
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailLevel::Line => write!(f, "line"),
            DetailLevel::None => write!(f, "none"),
        }
    }
}

impl FromStr for DetailLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(DetailLevel::Line),
            "none" => Ok(DetailLevel::None),
            _ => Err(ConfigError::InvalidValue {
                field: "renderer.detail_level".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
