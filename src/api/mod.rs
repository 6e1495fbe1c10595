//! Client for the planned `/api/analyze-style` endpoint.
//!
//! This is a dormant extension point: the upload pipeline never calls it and
//! results always come from the static catalogs. It exists so the wire shape
//! is typed and tested before a real inference backend lands. Network
//! failures surface as contextualized `anyhow` errors and would feed the same
//! notification channel as validation failures once wired in.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::internal::catalog::Recommendation;

const API_BASE_URL: &str = "https://okfashion.example/";

/// Styling preferences sent alongside the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub style: String,
    pub budget: String,
    pub occasion: String,
    pub body_type: String,
    pub color_preferences: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            style: "modern".to_string(),
            budget: "medium".to_string(),
            occasion: "everyday".to_string(),
            body_type: "auto-detect".to_string(),
            color_preferences: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    image: &'a str,
    preferences: &'a UserPreferences,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    // The backend contract has used both field names; accept either.
    #[serde(alias = "suggestions")]
    recommendations: Vec<Recommendation>,
}

/// HTTP client for the style-analysis API.
pub struct StyleApiClient {
    client: Client,
    base_url: String,
}

impl StyleApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// POST the encoded image and preferences, returning the server's
    /// recommendations.
    pub fn analyze_style(
        &self,
        image: &str,
        preferences: &UserPreferences,
    ) -> Result<Vec<Recommendation>> {
        let url = format!("{}api/analyze-style", self.base_url);

        let resp = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(10))
            .json(&AnalyzeRequest { image, preferences })
            .send()
            .with_context(|| format!("failed to send POST request to {}", url))?;

        let body: AnalyzeResponse = resp
            .json()
            .with_context(|| format!("failed to parse JSON response from {}", url))?;

        Ok(body.recommendations)
    }
}

impl Default for StyleApiClient {
    fn default() -> Self {
        Self::new()
    }
}
