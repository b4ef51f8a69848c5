use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::model::{ActivitiesResponse, Activity, RollInput, Student, StudentsResponse};
use crate::source::error::SourceError;

/// JSON client for the roll-call API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /get-homeboard-students`
    pub async fn fetch_students(&self) -> Result<Vec<Student>, SourceError> {
        let body: StudentsResponse = self.get_json("/get-homeboard-students").await?;
        Ok(body.students)
    }

    /// `POST /save-roll`
    pub async fn save_roll(&self, input: &RollInput) -> Result<(), SourceError> {
        let url = self.url("/save-roll");
        tracing::debug!(
            url = %url,
            students = input.student_roll_states.len(),
            "Saving roll"
        );

        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: url.clone(),
                source,
            })?;

        check_status(&url, response).await.map(|_| ())
    }

    /// `GET /get-activities`
    pub async fn fetch_activities(&self) -> Result<Vec<Activity>, SourceError> {
        let body: ActivitiesResponse = self.get_json("/get-activities").await?;
        Ok(body.activity)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: url.clone(),
                source,
            })?;

        check_status(&url, response)
            .await?
            .json::<T>()
            .await
            .map_err(|source| SourceError::Decode { url, source })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn check_status(
    url: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    tracing::warn!(url = %url, status = %status, error = %message, "API error");

    Err(SourceError::Status {
        url: url.to_string(),
        status: status.as_u16(),
        message,
    })
}
