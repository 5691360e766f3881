//! The masked projection of a value.
//!
//! Projection is a pure string transformation. It does not know about timers,
//! widgets, or which signal caused the redraw.

use crate::config::MaskConfig;

/// Whether the final character is shown in clear text regardless of the
/// visible range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Reveal {
    /// Only the visible range is shown.
    #[default]
    Masked,
    /// The visible range and the last character are shown.
    LastChar,
}

/// Maps `value` to the string that should be displayed.
///
/// Each Unicode scalar value is kept if its index is inside the configured
/// visible range, or if it is the last one and `reveal` is [`Reveal::LastChar`].
/// Every other one becomes the mask glyph. The output always has as many
/// scalar values as the input; an empty value projects to an empty string.
#[must_use]
pub fn project(config: &MaskConfig, value: &str, reveal: Reveal) -> String {
    let last = value.chars().count().checked_sub(1);
    value
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            let revealed = reveal == Reveal::LastChar && Some(index) == last;
            if revealed || config.is_visible(index) {
                ch
            } else {
                config.mask_glyph()
            }
        })
        .collect()
}
