use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use world_dishes::{
    Error, Result,
    translate::{TranslationRequest, TranslationTransport},
};

/// Mock transport for testing
#[derive(Debug)]
pub struct MockTransport {
    pub responses: Arc<Mutex<Vec<Vec<u8>>>>,
    pub requests: Arc<Mutex<Vec<TranslationRequest>>>,
    pub error: Option<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_response(self, body: &str) -> Self {
        self.responses.lock().unwrap().push(body.as_bytes().to_vec());
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationTransport for MockTransport {
    async fn send(&self, request: TranslationRequest) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}
