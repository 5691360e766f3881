//! A simulated text widget and host loop shared by the integration tests.
//!
//! The widget behaves like the platforms that fire a change notification for
//! programmatic writes too: when `echo_writes` is set, every write queues a
//! notification that the host later delivers back to the engine.

#![allow(dead_code)]

use std::collections::VecDeque;

use partial_mask::{
    CaretControl, InputAdapter, ManualTimers, MaskConfig, MaskingEngine, TimerService,
};

#[derive(Debug, Default)]
pub struct Widget {
    pub text: String,
    pub native_masking: Option<bool>,
    pub caret: usize,
    pub echo_writes: bool,
    pub queued: VecDeque<String>,
    pub history: Vec<String>,
}

impl Widget {
    pub fn echoing() -> Self {
        Self {
            echo_writes: true,
            ..Self::default()
        }
    }
}

impl InputAdapter for Widget {
    fn set_displayed_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = 0;
        self.history.push(text.to_string());
        if self.echo_writes {
            self.queued.push_back(text.to_string());
        }
    }

    fn set_native_masking(&mut self, enabled: bool) {
        self.native_masking = Some(enabled);
    }
}

impl CaretControl for Widget {
    fn set_caret(&mut self, position: usize) {
        self.caret = position;
    }
}

pub type Field = MaskingEngine<Widget, ManualTimers>;

pub fn field(config: MaskConfig) -> Field {
    MaskingEngine::new(Widget::default(), ManualTimers::new(), config)
}

/// Delivers every change notification the widget queued for its own writes.
pub fn deliver_echoes<T: TimerService>(engine: &mut MaskingEngine<Widget, T>) {
    while let Some(text) = engine.adapter_mut().queued.pop_front() {
        engine.on_input_changed(&text);
    }
}

/// The user types `input` one character at a time at the end of the field.
pub fn type_str<T: TimerService>(engine: &mut MaskingEngine<Widget, T>, input: &str) {
    for ch in input.chars() {
        let mut raw = engine.adapter().text.clone();
        raw.push(ch);
        user_edit(engine, raw);
    }
}

/// The user pastes `input` at the end of the field in one edit.
pub fn paste<T: TimerService>(engine: &mut MaskingEngine<Widget, T>, input: &str) {
    let mut raw = engine.adapter().text.clone();
    raw.push_str(input);
    user_edit(engine, raw);
}

/// The user presses backspace `times` times at the end of the field.
pub fn backspace<T: TimerService>(engine: &mut MaskingEngine<Widget, T>, times: usize) {
    for _ in 0..times {
        let mut raw = engine.adapter().text.clone();
        raw.pop();
        user_edit(engine, raw);
    }
}

fn user_edit<T: TimerService>(engine: &mut MaskingEngine<Widget, T>, raw: String) {
    engine.adapter_mut().text.clone_from(&raw);
    engine.on_input_changed(&raw);
    deliver_echoes(engine);
}
