//! Focus Timer Widget
//!
//! Countdown widget on the dashboard. Checkpoints to session storage on
//! every tick so a reload resumes mid-countdown; reset drops the
//! checkpoint along with the countdown.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::session::SessionStore;
use crate::timer::{TimerState, PRESET_MINUTES};

/// Focus timer with presets, start/pause and reset
#[component]
pub fn FocusTimer(session: SessionStore) -> impl IntoView {
    let (timer, set_timer) = signal(session.load_timer().unwrap_or_default());

    // 1 Hz drive; dropping the interval on unmount stops it. While the
    // countdown is not running the interval stays quiet, in particular it
    // must not re-save a checkpoint that reset just cleared.
    let interval = SendWrapper::new(Interval::new(1000, move || {
        if !timer.get_untracked().running {
            return;
        }
        set_timer.update(|t| t.tick());
        session.save_timer(&timer.get_untracked());
    }));
    on_cleanup(move || drop(interval));

    let start = move |_| {
        set_timer.update(|t| t.start());
        session.save_timer(&timer.get_untracked());
    };
    let pause = move |_| {
        set_timer.update(|t| t.pause());
        session.save_timer(&timer.get_untracked());
    };
    let reset = move |_| {
        set_timer.update(|t| t.reset());
        session.clear_timer();
    };
    let choose = move |minutes: u32| {
        set_timer.set(TimerState::with_minutes(minutes));
        session.save_timer(&timer.get_untracked());
    };

    let clock_class = move || {
        if timer.get().finished() { "focus-timer-clock finished" } else { "focus-timer-clock" }
    };
    let fill_style = move || {
        format!("width: {:.1}%;", timer.get().fraction_done() * 100.0)
    };

    view! {
        <div class="focus-timer">
            <div class="focus-timer-title">"Focus Timer"</div>
            <div class=clock_class>{move || timer.get().clock()}</div>

            <div class="focus-timer-track">
                <div class="focus-timer-fill" style=fill_style></div>
            </div>

            <div class="focus-timer-presets">
                {PRESET_MINUTES.iter().map(|m| {
                    let minutes = *m;
                    let is_active = move || timer.get().total_secs == minutes * 60;
                    view! {
                        <button
                            class=move || if is_active() { "preset-btn active" } else { "preset-btn" }
                            on:click=move |_| choose(minutes)
                        >
                            {format!("{minutes} min")}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="focus-timer-controls">
                <Show when=move || !timer.get().running>
                    <button class="timer-btn" on:click=start>"Start"</button>
                </Show>
                <Show when=move || timer.get().running>
                    <button class="timer-btn" on:click=pause>"Pause"</button>
                </Show>
                <button class="timer-btn" on:click=reset>"Reset"</button>
            </div>

            <Show when=move || timer.get().finished()>
                <div class="focus-timer-done">"Session complete"</div>
            </Show>
        </div>
    }
}
