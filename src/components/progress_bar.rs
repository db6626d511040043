//! Progress Bar Component
//!
//! Thin horizontal bar showing a task's time-based completion.

use leptos::prelude::*;

/// Progress bar with a percentage label
#[component]
pub fn ProgressBar(percent: f64) -> impl IntoView {
    let clamped = percent.clamp(0.0, 100.0);
    view! {
        <div class="progress-bar">
            <div class="progress-bar-track">
                <div class="progress-bar-fill" style=format!("width: {clamped:.0}%;")></div>
            </div>
            <span class="progress-bar-label">{format!("{clamped:.0}%")}</span>
        </div>
    }
}
