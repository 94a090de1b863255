use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    build_pattern("{", "}").expect("Failed to compile default placeholder pattern")
});

fn build_pattern(open: &str, close: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"{}\s*([\w.-]+)\s*{}",
        regex::escape(open),
        regex::escape(close)
    ))
}

/// Bracket pair surrounding a placeholder name, `{` and `}` by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Regex matching `<open>name<close>`, capturing the name.
    pub fn pattern(&self) -> Result<Regex, regex::Error> {
        if self.is_default() {
            return Ok(DEFAULT_PATTERN.clone());
        }

        build_pattern(&self.open, &self.close)
    }

    fn is_default(&self) -> bool {
        self.open == "{" && self.close == "}"
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new("{", "}")
    }
}

/// Substitute placeholders matched by `pattern` with their values.
/// Placeholders without a value are left as written.
pub fn render(template: &str, pattern: &Regex, placeholders: &[(&str, &str)]) -> String {
    if placeholders.is_empty() {
        return template.to_string();
    }

    pattern
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            placeholders
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
