use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::game::definition::{Question, RawQuestion};

#[cfg(test)]
pub mod mock;

pub const DEFAULT_ENDPOINT: &str = "https://the-trivia-api.com/v2/questions";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where question batches come from.
pub trait QuestionSource {
    fn fetch(&self, limit: u32, region: &str) -> Result<Vec<Question>, FetchError>;
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("the trivia API answered with HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("could not reach the trivia API")]
    Network(#[source] reqwest::Error),
    #[error("could not make sense of the trivia API response")]
    Decode(#[source] serde_json::Error),
}

/// Fetches question batches over HTTP from the Trivia API.
pub struct TriviaClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl TriviaClient {
    pub fn new(endpoint: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        TriviaClient {
            endpoint: endpoint.to_owned(),
            client,
        }
    }
}

impl QuestionSource for TriviaClient {
    fn fetch(&self, limit: u32, region: &str) -> Result<Vec<Question>, FetchError> {
        debug!(
            "requesting {} questions for region {} from {}",
            limit, region, self.endpoint
        );
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("limit", limit.to_string()), ("region", region.to_owned())])
            .send()
            .map_err(FetchError::Network)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(FetchError::Network)?;
        parse_response(status, &body)
    }
}

fn parse_response(status: u16, body: &str) -> Result<Vec<Question>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            status,
            body: body.trim().to_owned(),
        });
    }
    let raw: Vec<RawQuestion> = serde_json::from_str(body).map_err(FetchError::Decode)?;
    Ok(raw.into_iter().map(Question::from).collect())
}
