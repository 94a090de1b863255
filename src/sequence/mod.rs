pub mod mb_string;

pub use mb_string::MbString;

use crate::markers::MarkerPair;

/// A character-indexed, in-place mutable line.
///
/// Positions and counts are in characters, never bytes. Negative indices
/// count from the end: `-1` is the last character.
pub trait CharSequence {
    /// Length in characters.
    fn char_len(&self) -> usize;

    /// Character at `index`, or `None` when out of range.
    fn at(&self, index: isize) -> Option<char>;

    /// Whole-sequence identity.
    fn equals(&self, other: &dyn CharSequence) -> bool {
        let len = self.char_len();
        len == other.char_len()
            && (0..len as isize).all(|i| self.at(i) == other.at(i))
    }

    /// Insert `markers.open` before `start` and `markers.close` after the
    /// `count` characters beginning at `start`.
    fn enclose(&mut self, markers: &MarkerPair, start: usize, count: usize);
}

/// Resolve a possibly negative index against `len`.
pub(crate) fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };

    (resolved < len).then_some(resolved)
}
