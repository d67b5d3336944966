//! Image drop target with drag & drop and click-to-browse.
//!
//! Shows the preview of the Selected Image, or an instructional placeholder
//! when nothing is selected. Every drop or pick is forwarded as-is to
//! `on_files`; filtering happens in the view state.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::ACCEPT_ATTR;
use crate::services::files_from_list;

const FILE_INPUT_ID: &str = "fileInput";

#[component]
pub fn Dropzone(
    #[prop(into)] preview_url: Signal<Option<String>>,
    #[prop(into)] on_files: Callback<Vec<File>>,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(files) = input.files() {
            if files.length() > 0 {
                on_files.call(files_from_list(&files));
            }
        }
        // Let the same file be picked again.
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files.call(files_from_list(&files));
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |_: DragEvent| {
        set_drag_active.set(false);
    };

    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div class="dropzone-wrapper">
            <div
                class=move || if drag_active.get() { "dropzone drag-active" } else { "dropzone" }
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                {move || match preview_url.get() {
                    Some(url) => view! {
                        <img class="preview" src=url alt="Preview"/>
                    }.into_view(),
                    None => view! {
                        <div class="placeholder">
                            <div class="upload-icon">"📤"</div>
                            <p class="upload-text">"Drag & drop or click to select"</p>
                            <p class="upload-hint">"JPEG, PNG, WEBP"</p>
                        </div>
                    }.into_view(),
                }}
            </div>

            // Kept outside the drop target so its click does not bubble back.
            <input
                type="file"
                id=FILE_INPUT_ID
                accept=ACCEPT_ATTR
                style="display:none"
                on:change=on_file_change
            />
        </div>
    }
}
