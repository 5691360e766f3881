//! Engines over trait objects, for hosts that pick widgets at runtime.

use partial_mask::{InputAdapter, ManualTimers, MaskConfig, MaskingEngine, TimerService};

#[derive(Default)]
struct Entry {
    text: String,
    secure: bool,
}

impl InputAdapter for Entry {
    fn set_displayed_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_native_masking(&mut self, enabled: bool) {
        self.secure = enabled;
    }
}

type DynEngine = MaskingEngine<Box<dyn InputAdapter>, Box<dyn TimerService>>;

fn build(supported: bool) -> DynEngine {
    let adapter: Box<dyn InputAdapter> = Box::new(Entry::default());
    let timers: Box<dyn TimerService> = Box::new(ManualTimers::new());
    let config = MaskConfig::from_signed(Some(-1), Some(4)).with_supported(supported);
    MaskingEngine::new(adapter, timers, config)
}

fn main() {
    let mut fields = vec![build(true), build(false)];
    for field in &mut fields {
        field.force("abcdef");
        field.on_blur();
        assert_eq!(field.value(), "abcdef");
    }
}
