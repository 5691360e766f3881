//! The masking state machine.
//!
//! [`MaskingEngine`] owns the authoritative value of a partially masked field
//! and the single pending reveal timer. It reacts to three signals (input
//! changed, blur, programmatic overwrite) plus timer expiry, and after each
//! one writes the new masked projection to its [`InputAdapter`].
//!
//! All calls are expected to come from one event loop. Each handler runs to
//! completion, so an expiry and an edit never interleave inside the engine.

use std::{cmp::Ordering, fmt, time::Duration};

use slog::{debug, o, trace, Discard, Logger};

use crate::{
    adapter::InputAdapter,
    config::MaskConfig,
    projection::{project, Reveal},
    timer::{ManualTimers, TimerHandle, TimerService},
};

/// Placeholder printed by `Debug` in place of the actual value.
const REDACTED_VALUE: &str = "[REDACTED]";

/// Partial masking state for one input field.
///
/// The engine is generic over the widget ([`InputAdapter`]) and the timer
/// source ([`TimerService`]). In supported mode it keeps the real value to
/// itself and only ever shows the widget a projection of it. In degraded mode
/// (see [`MaskConfig::with_supported`]) it turns on the widget's native masking
/// and mirrors whatever the widget reports.
///
/// Always read the value through [`MaskingEngine::value`], never from the widget.
pub struct MaskingEngine<A, T>
where
    A: InputAdapter,
    T: TimerService,
{
    config: MaskConfig,
    adapter: A,
    timers: T,
    actual: String,
    pending_reveal: Option<TimerHandle>,
    logger: Logger,
}

impl<A, T> MaskingEngine<A, T>
where
    A: InputAdapter,
    T: TimerService,
{
    /// Wraps `adapter` with an empty value and configures native masking so
    /// that exactly one masking mechanism is in effect.
    pub fn new(adapter: A, timers: T, config: MaskConfig) -> Self {
        Self::with_logger(adapter, timers, config, Logger::root(Discard, o!()))
    }

    /// Like [`MaskingEngine::new`], logging transitions to `logger`.
    ///
    /// Records carry lengths and counts only; neither the value nor a revealed
    /// character is ever logged.
    pub fn with_logger(mut adapter: A, timers: T, config: MaskConfig, logger: Logger) -> Self {
        let logger = logger.new(o!("component" => "masking_engine"));
        adapter.set_native_masking(!config.is_supported());
        debug!(logger, "masking engine created";
            "supported" => config.is_supported(),
            "unmasked_start" => config.unmasked_start(),
            "unmasked_count" => config.unmasked_count());
        Self {
            config,
            adapter,
            timers,
            actual: String::new(),
            pending_reveal: None,
            logger,
        }
    }

    /// Returns the actual value.
    pub fn value(&self) -> &str {
        &self.actual
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the widget, for host-side bookkeeping.
    ///
    /// Text written here bypasses the engine; use [`MaskingEngine::force`] to
    /// set the value programmatically.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// Handles the widget's change notification. `displayed` is the widget's
    /// full text after the change.
    ///
    /// Only edits at the end of the text are understood: a longer text appends
    /// its trailing characters to the value, a shorter one truncates the value.
    /// A text of unchanged length is a transient notification (typically
    /// caused by the engine's own write) and is ignored.
    pub fn on_input_changed(&mut self, displayed: &str) {
        if !self.config.is_supported() {
            self.actual.clear();
            self.actual.push_str(displayed);
            trace!(self.logger, "mirrored input"; "len" => self.actual.chars().count());
            return;
        }

        let old_len = self.actual.chars().count();
        let new_len = displayed.chars().count();
        match new_len.cmp(&old_len) {
            Ordering::Equal => {
                trace!(self.logger, "ignored transient change"; "len" => new_len);
            }
            Ordering::Greater => {
                self.cancel_reveal();
                self.actual.extend(displayed.chars().skip(old_len));
                self.render(Reveal::LastChar);
                let handle = self.timers.schedule_once(self.config.reveal_delay());
                self.pending_reveal = Some(handle);
                debug!(self.logger, "inserted";
                    "added" => new_len - old_len,
                    "len" => new_len,
                    "timer" => handle.into_raw());
            }
            Ordering::Less => {
                self.cancel_reveal();
                let cut = self
                    .actual
                    .char_indices()
                    .nth(new_len)
                    .map_or(self.actual.len(), |(byte, _)| byte);
                self.actual.truncate(cut);
                self.render(Reveal::Masked);
                debug!(self.logger, "deleted";
                    "removed" => old_len - new_len,
                    "len" => new_len);
            }
        }
    }

    /// Handles focus loss: any revealed character is masked immediately.
    ///
    /// In degraded mode there is nothing to re-mask and this does nothing.
    pub fn on_blur(&mut self) {
        if !self.config.is_supported() {
            return;
        }
        self.cancel_reveal();
        self.render(Reveal::Masked);
        debug!(self.logger, "blurred");
    }

    /// Handles a reveal timer expiry delivered by the host.
    ///
    /// Handles that are not the currently pending one (already canceled,
    /// superseded, or belonging to another engine sharing the timer service)
    /// are ignored.
    pub fn on_reveal_expired(&mut self, handle: TimerHandle) {
        if self.pending_reveal != Some(handle) {
            trace!(self.logger, "ignored stale reveal expiry"; "timer" => handle.into_raw());
            return;
        }
        self.pending_reveal = None;
        self.render(Reveal::Masked);
        debug!(self.logger, "reveal expired"; "timer" => handle.into_raw());
    }

    /// Overwrites the value programmatically.
    ///
    /// The value is stored as its `Display` output and shown fully masked
    /// outside the visible range; programmatic sets never get the transient
    /// reveal. A pending reveal timer is canceled. In degraded mode the value is
    /// written to the widget unchanged.
    pub fn force(&mut self, value: impl fmt::Display) {
        self.force_optional(Some(value));
    }

    /// Like [`MaskingEngine::force`]; `None` clears the value.
    pub fn force_optional<V: fmt::Display>(&mut self, value: Option<V>) {
        self.cancel_reveal();
        self.actual = value.map_or_else(String::new, |v| v.to_string());
        if self.config.is_supported() {
            self.render(Reveal::Masked);
        } else {
            self.adapter.set_displayed_text(&self.actual);
        }
        debug!(self.logger, "forced"; "len" => self.actual.chars().count());
    }

    /// Clears the value. Equivalent to `force_optional(None::<&str>)`.
    pub fn clear(&mut self) {
        self.force_optional(None::<&str>);
    }

    /// Describes what the field currently shows, safe to log or serialize.
    ///
    /// The snapshot never contains characters outside the visible range, not
    /// even a character inside its reveal window.
    pub fn snapshot(&self) -> FieldSnapshot {
        let displayed = if self.config.is_supported() {
            project(&self.config, &self.actual, Reveal::Masked)
        } else {
            let glyph = self.config.mask_glyph();
            self.actual.chars().map(|_| glyph).collect()
        };
        FieldSnapshot {
            displayed,
            length: self.actual.chars().count(),
            reveal_pending: self.pending_reveal.is_some(),
            supported: self.config.is_supported(),
        }
    }

    /// Returns `true` while a typed character is inside its reveal window.
    #[cfg(any(test, feature = "testing"))]
    pub fn is_reveal_pending(&self) -> bool {
        self.pending_reveal.is_some()
    }

    fn cancel_reveal(&mut self) {
        if let Some(handle) = self.pending_reveal.take() {
            self.timers.cancel(handle);
            trace!(self.logger, "canceled reveal timer"; "timer" => handle.into_raw());
        }
    }

    fn render(&mut self, reveal: Reveal) {
        let text = project(&self.config, &self.actual, reveal);
        self.adapter.set_displayed_text(&text);
    }
}

impl<A> MaskingEngine<A, ManualTimers>
where
    A: InputAdapter,
{
    /// Advances the owned timer queue by `by` and delivers every expiry.
    pub fn advance(&mut self, by: Duration) {
        for handle in self.timers.advance(by) {
            self.on_reveal_expired(handle);
        }
    }
}

impl<A, T> fmt::Debug for MaskingEngine<A, T>
where
    A: InputAdapter,
    T: TimerService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskingEngine")
            .field("config", &self.config)
            .field("value", &REDACTED_VALUE)
            .field("pending_reveal", &self.pending_reveal)
            .finish_non_exhaustive()
    }
}

impl<A, T> Drop for MaskingEngine<A, T>
where
    A: InputAdapter,
    T: TimerService,
{
    fn drop(&mut self) {
        self.cancel_reveal();
    }
}

/// What a field shows, without the value behind it.
///
/// `displayed` is the masked projection with no character revealed; in
/// degraded mode every position is masked, as native masking shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSnapshot {
    pub displayed: String,
    /// Length of the value in Unicode scalar values.
    pub length: usize,
    pub reveal_pending: bool,
    pub supported: bool,
}
