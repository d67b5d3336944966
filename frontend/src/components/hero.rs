//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Cat vs Dog Classifier"</h1>
            <p class="subtitle">
                "Drop a photo of your pet and let the model decide."
            </p>
        </div>
    }
}
