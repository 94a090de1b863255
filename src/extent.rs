//! Changed-extent detection between two corresponding lines.
//!
//! The extent is bounded by the longest common prefix and the longest common
//! suffix of the two lines. The suffix scan is limited to whatever the prefix
//! left unclaimed in the shorter line, so the two windows never overlap.

use crate::sequence::CharSequence;

/// Outcome of comparing two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Both lines are equal; nothing to highlight.
    Identical,
    Changed(ChangedExtent),
}

/// Lengths of the shared prefix and shared suffix of a changed pair.
///
/// Only [`compute_extent`] builds these, so `prefix + suffix` never exceeds
/// the shorter of the two compared lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedExtent {
    prefix: usize,
    suffix: usize,
}

impl ChangedExtent {
    pub(crate) fn new(prefix: usize, suffix: usize) -> Self {
        Self { prefix, suffix }
    }

    pub fn prefix(&self) -> usize {
        self.prefix
    }

    pub fn suffix(&self) -> usize {
        self.suffix
    }

    /// Number of characters between prefix and suffix in a sequence of
    /// `len` characters.
    ///
    /// `len` must be the length of one of the compared lines; any shorter
    /// length yields 0.
    pub fn span_len(&self, len: usize) -> usize {
        len.saturating_sub(self.prefix + self.suffix)
    }
}

impl Extent {
    /// Signed `(start, end)` region: `end` is the negative offset one past
    /// the matched suffix, and `(0, 0)` means identical.
    pub fn region(&self) -> (usize, isize) {
        match self {
            Extent::Identical => (0, 0),
            Extent::Changed(changed) => (changed.prefix, -(changed.suffix as isize) - 1),
        }
    }

    pub fn is_identical(&self) -> bool {
        matches!(self, Extent::Identical)
    }
}

/// Locate where `old` and `new` start and stop differing.
pub fn compute_extent(old: &dyn CharSequence, new: &dyn CharSequence) -> Extent {
    // Most pairs in a diff stream are unchanged context lines
    if old.equals(new) {
        return Extent::Identical;
    }

    let start_max = old.char_len().min(new.char_len());

    let mut prefix = 0;
    while prefix < start_max && old.at(prefix as isize) == new.at(prefix as isize) {
        prefix += 1;
    }

    let suffix_max = start_max - prefix;
    let mut suffix = 0;
    while suffix < suffix_max {
        let offset = -(suffix as isize) - 1;
        if old.at(offset) != new.at(offset) {
            break;
        }
        suffix += 1;
    }

    Extent::Changed(ChangedExtent::new(prefix, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::MbString;

    fn extent(old: &str, new: &str) -> Extent {
        compute_extent(&MbString::from(old), &MbString::from(new))
    }

    #[test]
    fn test_identical_lines() {
        assert_eq!(extent("same", "same"), Extent::Identical);
        assert_eq!(extent("", ""), Extent::Identical);
        assert_eq!(extent("same", "same").region(), (0, 0));
    }

    #[test]
    fn test_single_substitution() {
        let result = extent("cat", "cut");
        assert_eq!(
            result,
            Extent::Changed(ChangedExtent::new(1, 1))
        );
        assert_eq!(result.region(), (1, -2));
    }

    #[test]
    fn test_empty_old_line() {
        let result = extent("", "abc");
        assert_eq!(
            result,
            Extent::Changed(ChangedExtent::new(0, 0))
        );
        assert_eq!(result.region(), (0, -1));
    }

    #[test]
    fn test_suffix_does_not_reuse_prefix() {
        // "aa" is a prefix of "aaa"; without the cap the suffix would
        // match both characters again
        let result = extent("aa", "aaa");
        assert_eq!(
            result,
            Extent::Changed(ChangedExtent::new(2, 0))
        );
    }

    #[test]
    fn test_insertion_in_middle() {
        let result = extent("abcd", "abXcd");
        assert_eq!(
            result,
            Extent::Changed(ChangedExtent::new(2, 2))
        );
    }

    #[test]
    fn test_completely_different() {
        let result = extent("abc", "xyz");
        assert_eq!(
            result,
            Extent::Changed(ChangedExtent::new(0, 0))
        );
    }

    #[test]
    fn test_span_len_per_side() {
        let changed = ChangedExtent::new(2, 2);
        assert_eq!(changed.span_len(4), 0);
        assert_eq!(changed.span_len(5), 1);
    }

    #[test]
    fn test_span_len_never_underflows() {
        let changed = ChangedExtent::new(3, 2);
        assert_eq!(changed.span_len(4), 0);
        assert_eq!(changed.span_len(0), 0);
    }

    #[test]
    fn test_multibyte_positions() {
        let result = extent("naïve", "naive");
        assert_eq!(
            result,
            Extent::Changed(ChangedExtent::new(2, 2))
        );
    }
}
