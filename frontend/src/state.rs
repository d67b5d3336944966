//! State of the upload-and-predict view.
//!
//! All UI state lives in one [`ViewState`] value. The request status is a
//! tagged [`RequestState`], so a prediction and an error can never be shown
//! at the same time, and the whole screen is a pure function of the state
//! ([`ViewState::view_model`]).
//!
//! ```text
//!            select                trigger              response
//!  Idle ───────────────▶ Idle ───────────────▶ Loading ─────────▶ Succeeded | Failed
//!   ▲                                             │ select            │ select
//!   └────────────── (stale response dropped) ◀────┘◀──────────────────┘
//! ```

use std::marker::PhantomData;

use crate::services::Predictor;
use crate::types::{ImageKind, PetClass, Prediction, PredictError, SelectError};

/// Label of the submit control when idle.
pub const PREDICT_LABEL: &str = "Predict";

/// Label of the submit control while a request is in flight.
pub const BUSY_LABEL: &str = "Analyzing...";

// =============================================================================
// Image handle
// =============================================================================

/// A user-selected file the view can preview and upload.
///
/// Implemented for `web_sys::File` in the browser and by fakes in tests.
pub trait ImageHandle: Clone + 'static {
    /// MIME type reported by the browser, e.g. `image/png`.
    fn mime_type(&self) -> String;

    fn file_name(&self) -> String;

    /// Create a display URL for the image, `None` if the platform refuses.
    fn create_preview(&self) -> Option<String>;

    /// Release a URL returned by [`ImageHandle::create_preview`].
    fn revoke_preview(url: &str);
}

/// Display URL of the Selected Image. Revoked when dropped.
pub struct PreviewRef<H: ImageHandle> {
    url: String,
    _image: PhantomData<H>,
}

impl<H: ImageHandle> PreviewRef<H> {
    fn new(url: String) -> Self {
        Self {
            url,
            _image: PhantomData,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<H: ImageHandle> Drop for PreviewRef<H> {
    fn drop(&mut self) {
        H::revoke_preview(&self.url);
    }
}

struct Selection<H: ImageHandle> {
    image: H,
    preview: Option<PreviewRef<H>>,
}

// =============================================================================
// Request state
// =============================================================================

/// Identifies which selection a request was started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Status of the single prediction call.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestState {
    Idle,
    Loading(Ticket),
    Succeeded(Prediction),
    Failed(String),
}

/// All state owned by the view.
pub struct ViewState<H: ImageHandle> {
    selection: Option<Selection<H>>,
    request: RequestState,
    generation: u64,
}

impl<H: ImageHandle> Default for ViewState<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ImageHandle> ViewState<H> {
    pub fn new() -> Self {
        Self {
            selection: None,
            request: RequestState::Idle,
            generation: 0,
        }
    }

    /// Replace the Selected Image.
    ///
    /// The previous preview is revoked and any result or error is cleared.
    /// A request already in flight keeps the view loading; its answer will
    /// be dropped since it describes the previous image.
    pub fn select_image(&mut self, image: H) -> Result<ImageKind, SelectError> {
        let mime = image.mime_type();
        let kind = match ImageKind::from_mime(&mime) {
            Some(kind) => kind,
            None => return Err(SelectError::UnsupportedType(mime)),
        };

        let preview = image.create_preview().map(PreviewRef::new);
        self.selection = Some(Selection { image, preview });
        self.generation += 1;

        if !self.is_loading() {
            self.request = RequestState::Idle;
        }
        Ok(kind)
    }

    /// Select from a drop or picker result, which must hold exactly one file.
    pub fn select_single(&mut self, mut images: Vec<H>) -> Result<ImageKind, SelectError> {
        match images.len() {
            0 => Err(SelectError::Empty),
            1 => {
                let image = images.remove(0);
                self.select_image(image)
            }
            count => Err(SelectError::MultipleFiles(count)),
        }
    }

    /// Enter the loading state and return the image to upload.
    ///
    /// `None` (and no state change) when nothing is selected or a request
    /// is already in flight.
    pub fn begin_prediction(&mut self) -> Option<H> {
        if self.is_loading() {
            return None;
        }
        let image = self.selection.as_ref()?.image.clone();
        self.request = RequestState::Loading(Ticket(self.generation));
        Some(image)
    }

    /// Store the outcome of the request started by [`Self::begin_prediction`].
    pub fn finish_prediction(&mut self, outcome: Result<Prediction, PredictError>) {
        let ticket = match self.request {
            RequestState::Loading(ticket) => ticket,
            _ => {
                log::debug!("Ignoring prediction outcome: no request in flight");
                return;
            }
        };

        if ticket != Ticket(self.generation) {
            log::info!("♻️  Dropping prediction for a replaced image");
            self.request = RequestState::Idle;
            return;
        }

        self.request = match outcome {
            Ok(prediction) => RequestState::Succeeded(prediction),
            Err(err) => RequestState::Failed(err.user_message().to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::Loading(_))
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn selected_image(&self) -> Option<&H> {
        self.selection.as_ref().map(|s| &s.image)
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.selection
            .as_ref()
            .and_then(|s| s.preview.as_ref())
            .map(PreviewRef::url)
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match &self.request {
            RequestState::Succeeded(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.request {
            RequestState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Everything the view renders, derived from the current state.
    pub fn view_model(&self) -> ViewModel {
        let loading = self.is_loading();
        ViewModel {
            preview_url: self.preview_url().map(str::to_string),
            file_name: self.selected_image().map(|image| image.file_name()),
            button: ButtonView {
                label: if loading { BUSY_LABEL } else { PREDICT_LABEL },
                disabled: loading || self.selection.is_none(),
                busy: loading,
            },
            error: self.error_message().map(str::to_string),
            result: self.prediction().map(ResultView::from),
        }
    }
}

// =============================================================================
// Render model
// =============================================================================

/// Submit control.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
    pub busy: bool,
}

/// Result panel contents.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub class: PetClass,
    pub label: &'static str,
    pub emoji: &'static str,
    pub css_class: &'static str,
    /// Confidence text, e.g. `87.0%`.
    pub percent_text: String,
    /// Width of the confidence bar, in percent of the track.
    pub bar_width: f64,
}

impl From<&Prediction> for ResultView {
    fn from(prediction: &Prediction) -> Self {
        Self {
            class: prediction.class,
            label: prediction.class.label(),
            emoji: prediction.class.emoji(),
            css_class: prediction.class.css_class(),
            percent_text: prediction.confidence.percent_text(),
            bar_width: prediction.confidence.value() * 100.0,
        }
    }
}

/// Visual output of the view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    /// Preview image in the drop target; placeholder when `None`.
    pub preview_url: Option<String>,
    pub file_name: Option<String>,
    pub button: ButtonView,
    /// Error panel, shown iff set.
    pub error: Option<String>,
    /// Result panel, shown iff set.
    pub result: Option<ResultView>,
}

// =============================================================================
// Trigger Prediction
// =============================================================================

/// Mutable access to a [`ViewState`] held in some container.
///
/// Returns `None` when the state is gone (e.g. the view was unmounted).
pub trait StateHandle<H: ImageHandle> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState<H>) -> R) -> Option<R>;
}

impl<H: ImageHandle> StateHandle<H> for std::cell::RefCell<ViewState<H>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState<H>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one prediction round trip against `predictor`.
///
/// Returns `false` without touching the network when there is nothing to
/// send or a request is already running.
pub async fn trigger_prediction<H, S, P>(state: &S, predictor: &P) -> bool
where
    H: ImageHandle,
    S: StateHandle<H>,
    P: Predictor<H>,
{
    let Some(image) = state.with_state(|s| s.begin_prediction()).flatten() else {
        return false;
    };

    log::info!("📤 Sending '{}' for prediction...", image.file_name());
    let outcome = predictor.predict(&image).await;

    match &outcome {
        Ok(prediction) => log::info!(
            "✅ {} {} ({})",
            prediction.class.emoji(),
            prediction.class.label(),
            prediction.confidence.percent_text()
        ),
        Err(err) => log::warn!("❌ Prediction failed: {}", err),
    }

    state.with_state(|s| s.finish_prediction(outcome));
    true
}
