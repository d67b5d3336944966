//! The upload-and-predict view.
//!
//! Owns the [`ViewState`] signal and wires the drop target, the submit
//! control, the error panel and the result panel to it.

use leptos::*;
use web_sys::File;

use crate::components::{Dropzone, ResultPanel};
use crate::config::ApiConfig;
use crate::services::{GlooTransport, HttpPredictor};
use crate::state::{trigger_prediction, ImageHandle, StateHandle, ViewState};

impl<H: ImageHandle> StateHandle<H> for RwSignal<ViewState<H>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState<H>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[component]
pub fn Classifier() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    log::debug!("Prediction endpoint: {}", config.predict_url());
    let predictor = HttpPredictor::new(config, GlooTransport);

    let state = create_rw_signal(ViewState::<File>::new());
    let model = create_memo(move |_| state.with(|s| s.view_model()));
    let result = create_memo(move |_| model.with(|m| m.result.clone()));

    let on_files = move |files: Vec<File>| match state.try_update(|s| s.select_single(files)) {
        Some(Ok(kind)) => log::info!("🖼️  Selected a {} image", kind.mime()),
        Some(Err(e)) => log::warn!("⚠️ Ignoring selection: {}", e),
        None => {}
    };

    let on_predict = move |_| {
        let predictor = predictor.clone();
        spawn_local(async move {
            trigger_prediction(&state, &predictor).await;
        });
    };

    view! {
        <div class="classifier-card">
            <Dropzone
                preview_url=Signal::derive(move || model.with(|m| m.preview_url.clone()))
                on_files=on_files
            />

            {move || model.with(|m| m.file_name.clone()).map(|name| view! {
                <div class="file-name">{name}</div>
            })}

            <button
                class=move || if model.with(|m| m.button.busy) { "predict-button busy" } else { "predict-button" }
                disabled=move || model.with(|m| m.button.disabled)
                on:click=on_predict
            >
                {move || model.with(|m| m.button.label)}
            </button>

            {move || model.with(|m| m.error.clone()).map(|message| view! {
                <div class="error-message">"⚠️ " {message}</div>
            })}

            {move || result.get().map(|result| view! { <ResultPanel result=result/> })}
        </div>
    }
}
