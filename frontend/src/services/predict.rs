//! HTTP client for the prediction service.
//!
//! [`HttpPredictor`] knows the wire contract (`POST {base}/predict`, image in
//! the multipart field `file`, JSON verdict back) and hands the actual I/O to
//! a [`Transport`]. In the browser that is [`GlooTransport`].

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{ApiConfig, UPLOAD_FIELD};
use crate::types::{Prediction, PredictError};

/// Anything that can classify an image.
#[allow(async_fn_in_trait)]
pub trait Predictor<H> {
    async fn predict(&self, image: &H) -> Result<Prediction, PredictError>;
}

/// Raw HTTP answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Sends an image as a one-part multipart form.
#[allow(async_fn_in_trait)]
pub trait Transport<H> {
    async fn post_image(&self, url: &str, field: &str, image: &H) -> Result<HttpReply, PredictError>;
}

/// Predictor backed by the remote service.
#[derive(Clone, Debug)]
pub struct HttpPredictor<T> {
    config: ApiConfig,
    transport: T,
}

impl<T> HttpPredictor<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<H, T: Transport<H>> Predictor<H> for HttpPredictor<T> {
    async fn predict(&self, image: &H) -> Result<Prediction, PredictError> {
        let url = self.config.predict_url();
        let reply = self.transport.post_image(&url, UPLOAD_FIELD, image).await?;
        parse_prediction(reply.status, &reply.body)
    }
}

/// Interpret the service's answer.
///
/// Any non-2xx status fails; a 2xx body must be a JSON object with a known
/// `class` and a `confidence` in `[0, 1]`.
pub fn parse_prediction(status: u16, body: &str) -> Result<Prediction, PredictError> {
    if !(200..300).contains(&status) {
        return Err(PredictError::Status {
            code: status,
            body: body.to_string(),
        });
    }

    serde_json::from_str::<Prediction>(body).map_err(|e| PredictError::Malformed(e.to_string()))
}

/// Browser transport built on `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport<File> for GlooTransport {
    async fn post_image(&self, url: &str, field: &str, image: &File) -> Result<HttpReply, PredictError> {
        let form_data = FormData::new()
            .map_err(|e| PredictError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(field, image, &image.name())
            .map_err(|e| PredictError::Transport(format!("Failed to append file: {:?}", e)))?;

        // The browser sets `multipart/form-data` with its boundary.
        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| PredictError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeImage, MockTransport};
    use crate::types::{Confidence, PetClass};
    use futures::executor::block_on;

    #[test]
    fn test_parse_success() {
        let prediction = parse_prediction(200, r#"{"class": "Cat", "confidence": 0.87, "score": 0.13}"#).unwrap();
        assert_eq!(
            prediction,
            Prediction {
                class: PetClass::Cat,
                confidence: Confidence::new(0.87).unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_any_2xx() {
        assert!(parse_prediction(201, r#"{"class": "Dog", "confidence": 1}"#).is_ok());
        assert!(parse_prediction(299, r#"{"class": "Dog", "confidence": 0}"#).is_ok());
    }

    #[test]
    fn test_parse_non_2xx() {
        let err = parse_prediction(400, r#"{"error": "No file part"}"#).unwrap_err();
        assert_eq!(
            err,
            PredictError::Status {
                code: 400,
                body: r#"{"error": "No file part"}"#.to_string(),
            }
        );
        // A well-formed verdict does not rescue a failing status.
        assert!(parse_prediction(302, r#"{"class": "Cat", "confidence": 0.5}"#).is_err());
    }

    #[test]
    fn test_parse_malformed() {
        for body in [
            "",
            "not json",
            "[]",
            r#"{"class": "Cat"}"#,
            r#"{"confidence": 0.5}"#,
            r#"{"class": "Horse", "confidence": 0.5}"#,
            r#"{"class": "Dog", "confidence": 1.5}"#,
            r#"{"class": "Dog", "confidence": "0.5"}"#,
        ] {
            assert!(
                matches!(parse_prediction(200, body), Err(PredictError::Malformed(_))),
                "body {:?} should be malformed",
                body
            );
        }
    }

    #[test]
    fn test_http_predictor_posts_to_predict_route() {
        let predictor = HttpPredictor::new(
            ApiConfig::new("http://localhost:5000/"),
            MockTransport::replying(200, r#"{"class": "Dog", "confidence": 0.64}"#),
        );

        let prediction = block_on(predictor.predict(&FakeImage::webp("rex.webp"))).unwrap();
        assert_eq!(prediction.class, PetClass::Dog);

        let requests = predictor.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://localhost:5000/predict");
        assert_eq!(requests[0].field, UPLOAD_FIELD);
    }

    #[test]
    fn test_http_predictor_transport_error() {
        let predictor = HttpPredictor::new(ApiConfig::default(), MockTransport::unreachable());
        let err = block_on(predictor.predict(&FakeImage::jpeg("a.jpg"))).unwrap_err();
        assert!(matches!(err, PredictError::Transport(_)));
    }
}
