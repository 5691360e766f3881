//! A host-provided timer service issuing its own handles.

use std::time::{Duration, Instant};

use partial_mask::{InputAdapter, MaskConfig, MaskingEngine, TimerHandle, TimerService};

struct Label(String);

impl InputAdapter for Label {
    fn set_displayed_text(&mut self, text: &str) {
        self.0 = text.to_string();
    }

    fn set_native_masking(&mut self, _enabled: bool) {}
}

#[derive(Default)]
struct WallClockTimers {
    next: u64,
    deadlines: Vec<(TimerHandle, Instant)>,
}

impl WallClockTimers {
    fn due(&mut self, now: Instant) -> Vec<TimerHandle> {
        let (due, pending) = self
            .deadlines
            .drain(..)
            .partition::<Vec<_>, _>(|(_, at)| *at <= now);
        self.deadlines = pending;
        due.into_iter().map(|(handle, _)| handle).collect()
    }
}

impl TimerService for WallClockTimers {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle::from_raw(self.next);
        self.next += 1;
        self.deadlines.push((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.deadlines.retain(|(h, _)| *h != handle);
    }
}

fn main() {
    let config = MaskConfig::new(0, 0).with_reveal_delay(Duration::ZERO);
    let mut engine = MaskingEngine::new(Label(String::new()), WallClockTimers::default(), config);
    engine.on_input_changed("a");
    let due = engine.timers_mut().due(Instant::now());
    for handle in due {
        engine.on_reveal_expired(handle);
    }
    assert_eq!(engine.value(), "a");
    assert_eq!(engine.adapter().0, "●");
}
