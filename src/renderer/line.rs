use super::LineRenderer;
use crate::extent::{compute_extent, Extent};
use crate::markers::MarkerPair;
use crate::sequence::CharSequence;

/// Encloses the changed extent of each line in a marker pair.
///
/// Both lines share the prefix and suffix lengths, but each side's enclosed
/// span is measured against its own length.
#[derive(Debug, Clone, Default)]
pub struct LineLevel {
    markers: MarkerPair,
}

impl LineLevel {
    pub fn new(markers: MarkerPair) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &MarkerPair {
        &self.markers
    }
}

impl LineRenderer for LineLevel {
    fn render(&self, old: &mut dyn CharSequence, new: &mut dyn CharSequence) {
        let changed = match compute_extent(&*old, &*new) {
            Extent::Identical => return,
            Extent::Changed(changed) => changed,
        };

        let old_count = changed.span_len(old.char_len());
        let new_count = changed.span_len(new.char_len());
        tracing::trace!(
            prefix = changed.prefix(),
            suffix = changed.suffix(),
            old_count,
            new_count,
            "enclosing changed extent"
        );

        old.enclose(&self.markers, changed.prefix(), old_count);
        new.enclose(&self.markers, changed.prefix(), new_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::MbString;
    use pretty_assertions::assert_eq;

    fn render(old: &str, new: &str) -> (String, String) {
        LineLevel::default().render_pair(old, new)
    }

    #[test]
    fn test_render_substitution() {
        assert_eq!(render("cat", "cut"), ("c[a]t".into(), "c[u]t".into()));
    }

    #[test]
    fn test_render_identical_untouched() {
        let mut old = MbString::from("unchanged");
        let mut new = MbString::from("unchanged");
        LineLevel::default().render(&mut old, &mut new);

        assert_eq!(old.to_string(), "unchanged");
        assert_eq!(new.to_string(), "unchanged");
    }

    #[test]
    fn test_render_empty_old() {
        assert_eq!(render("", "abc"), ("[]".into(), "[abc]".into()));
    }

    #[test]
    fn test_render_appended_text() {
        assert_eq!(
            render("let x = 1;", "let x = 1; // note"),
            ("let x = 1;[]".into(), "let x = 1;[ // note]".into())
        );
    }

    #[test]
    fn test_render_removed_text() {
        assert_eq!(
            render("foo(a, b, c)", "foo(a, c)"),
            ("foo(a, [b, ]c)".into(), "foo(a, []c)".into())
        );
    }

    #[test]
    fn test_render_with_html_markers() {
        let renderer = LineLevel::new(MarkerPair::new("<ins>", "</ins>"));
        assert_eq!(
            renderer.render_pair("value = 10", "value = 12"),
            ("value = 1<ins>0</ins>".into(), "value = 1<ins>2</ins>".into())
        );
    }
}
