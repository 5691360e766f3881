//! The input widget as seen by the engine.
//!
//! The engine only ever writes to the widget. Change and blur notifications
//! travel the other way through the host, which calls
//! [`MaskingEngine::on_input_changed`](crate::MaskingEngine::on_input_changed)
//! and [`MaskingEngine::on_blur`](crate::MaskingEngine::on_blur).
//!
//! Writing the displayed text must not synchronously re-enter the engine. If
//! the widget queues a change notification for a programmatic write, the host
//! may still deliver it: the engine ignores change notifications that do not
//! alter the length.

/// Write access to a text input widget.
pub trait InputAdapter {
    /// Replaces the visible content of the widget.
    fn set_displayed_text(&mut self, text: &str);

    /// Turns the widget's native full masking on or off.
    fn set_native_masking(&mut self, enabled: bool);
}

impl<A: InputAdapter + ?Sized> InputAdapter for Box<A> {
    fn set_displayed_text(&mut self, text: &str) {
        (**self).set_displayed_text(text);
    }

    fn set_native_masking(&mut self, enabled: bool) {
        (**self).set_native_masking(enabled);
    }
}

impl<A: InputAdapter + ?Sized> InputAdapter for &mut A {
    fn set_displayed_text(&mut self, text: &str) {
        (**self).set_displayed_text(text);
    }

    fn set_native_masking(&mut self, enabled: bool) {
        (**self).set_native_masking(enabled);
    }
}

/// Caret placement for widgets that move the caret when their text is replaced.
pub trait CaretControl {
    /// Places the caret before the scalar value at `position`.
    fn set_caret(&mut self, position: usize);
}

/// Adapter decorator that moves the caret to the end after every display write.
///
/// Some platforms put the caret at position 0 whenever a widget's text is
/// replaced programmatically, which breaks end-of-text typing. Wrapping the
/// widget's adapter in `CaretPinned` restores the caret after each write; the
/// engine stays unaware of carets.
#[derive(Debug, Default)]
pub struct CaretPinned<A> {
    inner: A,
}

impl<A> CaretPinned<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &A {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut A {
        &mut self.inner
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: InputAdapter + CaretControl> InputAdapter for CaretPinned<A> {
    fn set_displayed_text(&mut self, text: &str) {
        self.inner.set_displayed_text(text);
        self.inner.set_caret(text.chars().count());
    }

    fn set_native_masking(&mut self, enabled: bool) {
        self.inner.set_native_masking(enabled);
    }
}
