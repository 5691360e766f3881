//! Masking configuration.
//!
//! A [`MaskConfig`] is fixed for the lifetime of an engine. It describes which
//! positions stay visible, which glyph hides the others, how long a typed
//! character stays revealed, and whether partial masking is available on the
//! host at all.

use std::time::Duration;

/// Default glyph rendered in place of a masked character (U+25CF BLACK CIRCLE).
pub const MASK_GLYPH: char = '\u{25CF}';

/// Default length of the reveal window after a character is typed.
pub const REVEAL_DELAY: Duration = Duration::from_millis(2000);

/// Configuration that keeps a contiguous range of positions visible while
/// masking the remainder.
///
/// Positions are counted in Unicode scalar values. The visible range is
/// `[unmasked_start, unmasked_start + unmasked_count)`; its end saturates
/// instead of overflowing.
///
/// Use [`MaskConfig::new`] or [`MaskConfig::from_signed`] to create instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaskConfig {
    /// First visible index.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "clamped::deserialize"))]
    unmasked_start: usize,
    /// Number of visible characters starting at `unmasked_start`.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "clamped::deserialize"))]
    unmasked_count: usize,
    /// Symbol used for masked positions.
    mask_glyph: char,
    /// Reveal window, in milliseconds.
    reveal_delay_ms: u64,
    /// Whether the host can show a masked projection without disturbing the widget.
    supported: bool,
}

impl MaskConfig {
    /// Keeps `unmasked_count` characters visible starting at `unmasked_start`.
    ///
    /// Partial masking is assumed to be supported; the glyph is [`MASK_GLYPH`]
    /// and the reveal window is [`REVEAL_DELAY`].
    #[must_use]
    pub fn new(unmasked_start: usize, unmasked_count: usize) -> Self {
        Self {
            unmasked_start,
            unmasked_count,
            mask_glyph: MASK_GLYPH,
            reveal_delay_ms: duration_to_millis(REVEAL_DELAY),
            supported: true,
        }
    }

    /// Builds a configuration from host-supplied bounds that may be negative or
    /// absent. Both are clamped to zero.
    #[must_use]
    pub fn from_signed(unmasked_start: Option<i64>, unmasked_count: Option<i64>) -> Self {
        Self::new(clamp_signed(unmasked_start), clamp_signed(unmasked_count))
    }

    /// Masks every position. Only the transient reveal shows real characters.
    #[must_use]
    pub fn fully_masked() -> Self {
        Self::new(0, 0)
    }

    /// Uses a specific mask glyph.
    #[must_use]
    pub fn with_mask_glyph(mut self, mask_glyph: char) -> Self {
        self.mask_glyph = mask_glyph;
        self
    }

    /// Uses a specific reveal window. Sub-millisecond precision is dropped.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = duration_to_millis(delay);
        self
    }

    /// Selects between partial masking (`true`) and the degraded mode, where
    /// the widget's native full masking is used and input is mirrored as-is.
    #[must_use]
    pub fn with_supported(mut self, supported: bool) -> Self {
        self.supported = supported;
        self
    }

    /// Returns the first visible index.
    pub fn unmasked_start(&self) -> usize {
        self.unmasked_start
    }

    /// Returns the number of visible characters.
    pub fn unmasked_count(&self) -> usize {
        self.unmasked_count
    }

    /// Returns the glyph shown at masked positions.
    pub fn mask_glyph(&self) -> char {
        self.mask_glyph
    }

    /// Returns the reveal window after a typed character.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Returns `false` in the degraded mode.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Returns `true` if `index` falls inside the visible range.
    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.unmasked_start
            && index < self.unmasked_start.saturating_add(self.unmasked_count)
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self::fully_masked()
    }
}

fn clamp_signed(value: Option<i64>) -> usize {
    value.map_or(0, |v| usize::try_from(v.max(0)).unwrap_or(usize::MAX))
}

fn duration_to_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(feature = "serde")]
mod clamped {
    use serde::{Deserialize, Deserializer};

    /// A bound as written in the source document, either sign.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Bound {
        Signed(i64),
        Unsigned(u64),
    }

    // Negative bounds are clamped rather than rejected; bounds past `usize::MAX` saturate.
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<usize, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Bound>::deserialize(deserializer)? {
            None => 0,
            Some(Bound::Signed(value)) => super::clamp_signed(Some(value)),
            Some(Bound::Unsigned(value)) => usize::try_from(value).unwrap_or(usize::MAX),
        })
    }
}
