//! Fakes shared by the unit tests.

use std::cell::{Cell, RefCell};

use crate::services::{HttpReply, Predictor, Transport};
use crate::state::ImageHandle;
use crate::types::{Prediction, PredictError};

thread_local! {
    static REVOKED: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

/// Preview URLs revoked so far on this test thread.
pub fn revoked_previews() -> Vec<String> {
    REVOKED.with(|revoked| revoked.borrow().clone())
}

/// In-memory stand-in for a browser `File`.
#[derive(Clone, Debug, PartialEq)]
pub struct FakeImage {
    pub name: String,
    pub mime: String,
}

impl FakeImage {
    pub fn new(name: &str, mime: &str) -> Self {
        Self {
            name: name.to_string(),
            mime: mime.to_string(),
        }
    }

    pub fn jpeg(name: &str) -> Self {
        Self::new(name, "image/jpeg")
    }

    pub fn png(name: &str) -> Self {
        Self::new(name, "image/png")
    }

    pub fn webp(name: &str) -> Self {
        Self::new(name, "image/webp")
    }
}

impl ImageHandle for FakeImage {
    fn mime_type(&self) -> String {
        self.mime.clone()
    }

    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn create_preview(&self) -> Option<String> {
        Some(format!("blob:fake/{}", self.name))
    }

    fn revoke_preview(url: &str) {
        REVOKED.with(|revoked| revoked.borrow_mut().push(url.to_string()));
    }
}

/// Predictor answering with a canned outcome and counting calls.
pub struct FakePredictor {
    outcome: Result<Prediction, PredictError>,
    calls: Cell<usize>,
}

impl FakePredictor {
    pub fn answering(outcome: Result<Prediction, PredictError>) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Predictor<FakeImage> for FakePredictor {
    async fn predict(&self, _image: &FakeImage) -> Result<Prediction, PredictError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

/// One upload seen by [`MockTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub field: String,
    pub file_name: String,
}

/// Mocked prediction endpoint.
pub struct MockTransport {
    reply: Result<HttpReply, PredictError>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpReply {
                status,
                body: body.to_string(),
            }),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: Err(PredictError::Transport("connection refused".into())),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport<FakeImage> for MockTransport {
    async fn post_image(
        &self,
        url: &str,
        field: &str,
        image: &FakeImage,
    ) -> Result<HttpReply, PredictError> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            field: field.to_string(),
            file_name: image.name.clone(),
        });
        self.reply.clone()
    }
}
