//! reqwest-backed classification service

use super::error::{HttpServiceError, Result};
use super::wire::{ErrorBody, PredictResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, trace};
use verdict_application::{ClassificationService, ServiceError, ServiceParams};
use verdict_domain::{AnalysisRequest, Classification};

const USER_AGENT: &str = concat!("news-verdict/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the classification service.
///
/// Sends one `POST {base_url}/predict` per call with a JSON body and never
/// retries. A timeout is only applied when [`ServiceParams::timeout`] is set.
#[derive(Debug, Clone)]
pub struct HttpClassificationService {
    client: Client,
    endpoint: Url,
}

impl HttpClassificationService {
    pub fn new(params: &ServiceParams) -> Result<Self> {
        let url = params.predict_url();
        let endpoint = Url::parse(&url).map_err(|e| HttpServiceError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ClassificationService for HttpClassificationService {
    async fn classify(&self, request: &AnalysisRequest) -> std::result::Result<Classification, ServiceError> {
        debug!(
            endpoint = %self.endpoint,
            title_len = request.title.len(),
            text_len = request.text.len(),
            "Sending classification request"
        );
        trace!("Request body: {:?}", request);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        if !status.is_success() {
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                message: ErrorBody::message_from(&body),
            });
        }

        let parsed: PredictResponse = serde_json::from_slice(&body)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

        Classification::new(parsed.is_fake, parsed.confidence)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> ServiceError {
    if error.is_timeout() {
        ServiceError::Timeout
    } else if error.is_decode() {
        ServiceError::MalformedResponse(error.to_string())
    } else {
        ServiceError::Connection(error.to_string())
    }
}
