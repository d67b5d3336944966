//! Prediction result panel.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::state::ResultView;

/// Delay before the bar grows, so the CSS width transition plays.
const BAR_ANIMATION_DELAY_MS: u32 = 50;

#[component]
pub fn ResultPanel(result: ResultView) -> impl IntoView {
    view! {
        <div class="result-panel">
            <div class="result-header">
                <span>"Verdict"</span>
                <span>"Confidence"</span>
            </div>
            <div class="result-body">
                <div class=format!("verdict {}", result.css_class)>
                    <span class="verdict-icon">{result.emoji}</span>
                    <span class="verdict-label">{result.label}</span>
                </div>
                <div class="confidence-text">{result.percent_text}</div>
            </div>
            <ConfidenceBar width=result.bar_width css_class=result.css_class/>
        </div>
    }
}

/// Bar sized to the confidence, animated from zero when it appears.
#[component]
pub fn ConfidenceBar(width: f64, css_class: &'static str) -> impl IntoView {
    let (shown_width, set_shown_width) = create_signal(0.0_f64);

    spawn_local(async move {
        TimeoutFuture::new(BAR_ANIMATION_DELAY_MS).await;
        // The panel may already be gone.
        let _ = set_shown_width.try_set(width);
    });

    view! {
        <div class="confidence-track">
            <div
                class=format!("confidence-fill {}", css_class)
                style=move || format!("width: {:.1}%;", shown_width.get())
            ></div>
        </div>
    }
}
