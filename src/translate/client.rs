use super::multipart::build_multipart;
use super::types::*;
use crate::{
    Result,
    config::TranslatorConfig,
    imaging::MenuImage,
    state::TranslationViewState,
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use tracing::{debug, info};

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Delivers one request to the translation service and returns the raw body.
#[async_trait]
pub trait TranslationTransport: Send + Sync {
    async fn send(&self, request: TranslationRequest) -> Result<Vec<u8>>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl TranslationTransport for HttpTransport {
    async fn send(&self, request: TranslationRequest) -> Result<Vec<u8>> {
        debug!(
            "POST {} ({} bytes, language {})",
            self.endpoint,
            request.body.bytes.len(),
            request.target_language
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, request.content_type())
            .body(request.body.bytes)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        debug!(
            "Translation service answered {} with {} bytes",
            status,
            body.len()
        );

        Ok(body.to_vec())
    }
}

pub struct TranslationClient {
    transport: Arc<dyn TranslationTransport>,
    max_width: u32,
    max_height: u32,
    jpeg_quality: f32,
}

impl TranslationClient {
    pub fn new(config: &TranslatorConfig) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(config)), config)
    }

    pub fn with_transport(
        transport: Arc<dyn TranslationTransport>,
        config: &TranslatorConfig,
    ) -> Self {
        Self {
            transport,
            max_width: config.max_width,
            max_height: config.max_height,
            jpeg_quality: config.jpeg_quality,
        }
    }

    /// Resizes and encodes the image, then wraps it in a multipart request.
    pub fn prepare(&self, image: &MenuImage, target_language: &str) -> Result<TranslationRequest> {
        let payload = image
            .resize(self.max_width, self.max_height)
            .encode_jpeg(self.jpeg_quality)?;

        Ok(TranslationRequest {
            target_language: target_language.to_string(),
            body: build_multipart(&payload, target_language),
        })
    }

    /// Runs one full request/response cycle. Exactly one request is sent,
    /// and none when the image cannot be encoded.
    pub async fn fetch(&self, image: &MenuImage, target_language: &str) -> Result<TranslatedMenu> {
        let request = self.prepare(image, target_language)?;
        let body = self.transport.send(request).await?;
        parse_response(&body)
    }

    /// Translates the view's current image into its selected language,
    /// driving the view through `InFlight` to a terminal state.
    ///
    /// Does nothing when no image is selected and fails with
    /// `Error::RequestInFlight` if the view is already translating.
    pub async fn translate(&self, view: &mut TranslationViewState) -> Result<()> {
        let Some(image) = view.image().cloned() else {
            debug!("Translate requested without an image; ignoring");
            return Ok(());
        };
        let language = view.selected_language();

        view.begin_translation()?;
        info!("Translating menu image into {}", language);

        let outcome = self.fetch(&image, language.as_str()).await;
        view.finish_translation(outcome)
    }
}
