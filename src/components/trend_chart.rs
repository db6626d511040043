//! Trend Chart Widget
//!
//! Dashboard bar chart over one pre-aggregated series. The backend does
//! the aggregation, this only scales bars against the series maximum.

use leptos::prelude::*;

use crate::models::TrendSeries;

/// Bar chart widget for one trend series
#[component]
pub fn TrendChart(series: TrendSeries) -> impl IntoView {
    let title = series.kind.label();
    let points = series.points;

    let body = if points.is_empty() {
        view! { <div class="trend-empty">"No data yet"</div> }.into_any()
    } else {
        let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max).max(1.0);
        let bars = points
            .iter()
            .map(|point| {
                let height = format!("height: {:.1}%;", (point.value / max) * 100.0);
                let caption = format!("{}: {}", point.label, point.value);
                view! {
                    <div class="trend-bar-col" title=caption>
                        <div class="trend-bar-track">
                            <div class="trend-bar" style=height></div>
                        </div>
                        <span class="trend-label">{point.label.clone()}</span>
                    </div>
                }
            })
            .collect_view();

        view! { <div class="trend-bars">{bars}</div> }.into_any()
    };

    view! {
        <div class="trend-widget">
            <div class="trend-widget-title">{title}</div>
            {body}
        </div>
    }
}
