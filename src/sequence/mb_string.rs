use std::fmt;

use super::{resolve_index, CharSequence};
use crate::markers::MarkerPair;

/// Multi-byte aware line buffer backed by a `Vec<char>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MbString {
    chars: Vec<char>,
}

impl MbString {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}

impl From<&str> for MbString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MbString {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for MbString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for c in &self.chars {
            f.write_char(*c)?;
        }
        Ok(())
    }
}

impl CharSequence for MbString {
    fn char_len(&self) -> usize {
        self.chars.len()
    }

    fn at(&self, index: isize) -> Option<char> {
        resolve_index(index, self.chars.len()).map(|i| self.chars[i])
    }

    fn equals(&self, other: &dyn CharSequence) -> bool {
        // Length first; avoids the per-char walk for most changed lines
        self.chars.len() == other.char_len()
            && self
                .chars
                .iter()
                .enumerate()
                .all(|(i, c)| other.at(i as isize) == Some(*c))
    }

    fn enclose(&mut self, markers: &MarkerPair, start: usize, count: usize) {
        let end = start + count;
        assert!(
            end <= self.chars.len(),
            "enclosed range {}..{} out of bounds for sequence of length {}",
            start,
            end,
            self.chars.len()
        );

        // Close first so `start` stays valid
        self.chars.splice(end..end, markers.close.chars());
        self.chars.splice(start..start, markers.open.chars());
    }
}
