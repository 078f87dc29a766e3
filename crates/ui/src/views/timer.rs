use dioxus::prelude::*;

use quiz_core::{Countdown, Tick};

use crate::vm::format_clock;

/// Per-question countdown driven by a background tick task.
///
/// A change of `reset_key` restarts the count from `duration_secs`; the
/// previous tick task is cancelled first so at most one task is ever
/// running. Expiry fires `on_expire` exactly once per activation.
#[component]
pub fn CountdownTimer(
    duration_secs: u32,
    active: bool,
    reset_key: usize,
    on_expire: EventHandler<()>,
) -> Element {
    let mut remaining = use_signal(|| duration_secs);
    let mut task = use_signal(|| None::<Task>);

    use_effect(use_reactive!(|(duration_secs, active, reset_key)| {
        let _ = reset_key;
        if let Some(old) = task.take() {
            old.cancel();
        }
        remaining.set(duration_secs);
        if !active {
            return;
        }
        let handle = spawn(async move {
            let mut countdown = Countdown::new(duration_secs);
            countdown.start(duration_secs);
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                match countdown.tick() {
                    Tick::Running(left) => remaining.set(left),
                    Tick::Expired => {
                        remaining.set(0);
                        on_expire.call(());
                        break;
                    }
                    Tick::Idle => break,
                }
            }
        });
        task.set(Some(handle));
    }));

    use_drop(move || {
        if let Some(handle) = task.take() {
            handle.cancel();
        }
    });

    let left = remaining();
    let tone = timer_tone(left, duration_secs);
    let label = format_clock(left);

    rsx! {
        span { class: "timer timer--{tone}", id: "quiz-timer", "{label}" }
    }
}

/// Green above half time, yellow above a quarter, red below.
fn timer_tone(remaining: u32, duration: u32) -> &'static str {
    if duration == 0 {
        return "red";
    }
    let percentage = remaining * 100 / duration;
    if percentage > 50 {
        "green"
    } else if percentage > 25 {
        "yellow"
    } else {
        "red"
    }
}
