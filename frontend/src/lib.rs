//! Cat vs Dog Classifier - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads one pet photo to a prediction
//! service and shows the verdict.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── Classifier                                              │
//! │      ├── Dropzone (preview or placeholder)                  │
//! │      ├── Predict button                                      │
//! │      ├── Error message                                       │
//! │      └── ResultPanel (verdict, confidence bar)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Prediction endpoint configuration
//! - [`types`] - Prediction, image and error types
//! - [`state`] - View state machine and render model
//! - [`services`] - Prediction client, browser files
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod services;
pub mod components;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Prediction
    PetClass, Confidence, Prediction,
    // Images
    ImageKind,
    // Errors
    PredictError, SelectError, FAILURE_MESSAGE,
};

// State
pub use state::{
    trigger_prediction, ImageHandle, RequestState, StateHandle, ViewModel, ViewState,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

/// Root component.
///
/// Provides the [`ApiConfig`] built at compile time; tests and embedders
/// can mount [`MainContent`] under their own context instead.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::default());

    view! {
        <Title text="Cat vs Dog Classifier"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <Classifier/>
        </div>

        <Footer/>
    }
}
