use serde::Serialize;

/// Cards show this many tags/specialties before collapsing the rest.
pub const CARD_PREVIEW_LIMIT: usize = 3;

/// First `limit` items of a list plus how many were left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview<'a> {
    pub shown: &'a [String],
    pub overflow: usize,
}

impl Preview<'_> {
    /// `"+N"` when something was cut, otherwise nothing.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}

pub fn tag_preview(items: &[String], limit: usize) -> Preview<'_> {
    let cut = items.len().min(limit);
    Preview {
        shown: &items[..cut],
        overflow: items.len() - cut,
    }
}
