use super::LineRenderer;
use crate::sequence::CharSequence;

/// Renderer that never marks anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneLevel;

impl LineRenderer for NoneLevel {
    fn render(&self, _old: &mut dyn CharSequence, _new: &mut dyn CharSequence) {}
}
