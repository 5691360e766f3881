//! Partial masking for sensitive text input.
//!
//! A caller picks a range of character positions that stay visible (for
//! example the last four digits of an identifier); every other position is
//! displayed as a mask glyph. The true value is tracked separately from what
//! the input widget shows, and a freshly typed character is revealed briefly
//! before it is masked again, the way native secure-entry fields behave.
//!
//! This crate separates:
//! - **Configuration**: which positions are visible and how masking looks ([`MaskConfig`]).
//! - **Projection**: the pure mapping from the true value to the displayed text ([`project`]).
//! - **State**: the [`MaskingEngine`], which owns the authoritative value and the
//!   single pending reveal timer.
//!
//! The widget and the timer are collaborators behind the [`InputAdapter`] and
//! [`TimerService`] traits. The host forwards the widget's change and blur
//! notifications to the engine and forwards expired timer handles to
//! [`MaskingEngine::on_reveal_expired`].
//!
//! ```rust
//! use partial_mask::{InputAdapter, ManualTimers, MaskConfig, MaskingEngine};
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct Field {
//!     text: String,
//!     native_masking: bool,
//! }
//!
//! impl InputAdapter for Field {
//!     fn set_displayed_text(&mut self, text: &str) {
//!         self.text = text.to_string();
//!     }
//!
//!     fn set_native_masking(&mut self, enabled: bool) {
//!         self.native_masking = enabled;
//!     }
//! }
//!
//! let mut ssn = MaskingEngine::new(Field::default(), ManualTimers::new(), MaskConfig::new(5, 4));
//! ssn.force("123456789");
//! assert_eq!(ssn.value(), "123456789");
//! assert_eq!(ssn.adapter().text, "●●●●●6789");
//!
//! // The user deletes one character, then types a new one.
//! ssn.on_input_changed("●●●●●678");
//! ssn.on_input_changed("●●●●●6780");
//! assert_eq!(ssn.value(), "123456780");
//!
//! ssn.advance(Duration::from_secs(2));
//! assert_eq!(ssn.adapter().text, "●●●●●6780");
//! ```
//!
//! What this crate does not do:
//! - render anything or own the widget's lifecycle
//! - validate the value's content
//! - detect platform capabilities (the host passes [`MaskConfig::with_supported`])

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod adapter;
mod config;
mod engine;
mod projection;
#[cfg(feature = "slog-json")]
pub mod slog;
mod timer;

// Re-exports
pub use adapter::{CaretControl, CaretPinned, InputAdapter};
pub use config::{MaskConfig, MASK_GLYPH, REVEAL_DELAY};
pub use engine::{FieldSnapshot, MaskingEngine};
pub use projection::{project, Reveal};
pub use timer::{ManualTimers, TimerHandle, TimerService};
