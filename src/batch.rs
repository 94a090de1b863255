use rayon::prelude::*;

use crate::renderer::LineRenderer;

/// Highlight many line pairs concurrently.
///
/// Every worker builds its own buffers from the borrowed input, so no
/// sequence is ever shared between pairs. Results keep the input order.
pub fn highlight_pairs<S>(renderer: &dyn LineRenderer, pairs: &[(S, S)]) -> Vec<(String, String)>
where
    S: AsRef<str> + Sync,
{
    pairs
        .par_iter()
        .map(|(old, new)| renderer.render_pair(old.as_ref(), new.as_ref()))
        .collect()
}

/// Pair two line lists by position. Lines beyond the shorter list are
/// paired with `None`.
pub fn pair_by_position<'a>(
    old: &[&'a str],
    new: &[&'a str],
) -> Vec<(Option<&'a str>, Option<&'a str>)> {
    let len = old.len().max(new.len());
    (0..len)
        .map(|i| (old.get(i).copied(), new.get(i).copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::MarkerPair;
    use crate::renderer::LineLevel;

    #[test]
    fn test_highlight_pairs_keeps_order() {
        let renderer = LineLevel::new(MarkerPair::default());
        let pairs: Vec<(String, String)> = (0..500)
            .map(|i| (format!("line {i} old"), format!("line {i} new")))
            .collect();

        let results = highlight_pairs(&renderer, &pairs);

        assert_eq!(results.len(), 500);
        for (i, (old, new)) in results.iter().enumerate() {
            assert_eq!(old, &format!("line {i} [old]"));
            assert_eq!(new, &format!("line {i} [new]"));
        }
    }

    #[test]
    fn test_highlight_pairs_matches_single_render() {
        let renderer = LineLevel::default();
        let pairs = [("cat", "cut"), ("", "abc"), ("same", "same")];

        let results = highlight_pairs(&renderer, &pairs);
        for ((old, new), result) in pairs.iter().zip(&results) {
            assert_eq!(&renderer.render_pair(old, new), result);
        }
    }

    #[test]
    fn test_pair_by_position() {
        let pairs = pair_by_position(&["a", "b", "c"], &["a"]);
        assert_eq!(
            pairs,
            vec![(Some("a"), Some("a")), (Some("b"), None), (Some("c"), None)]
        );
    }
}
