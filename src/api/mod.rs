use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::CONTENT_DISPOSITION;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{
    AuthToken, Category, Credentials, NewProduct, NewScorecard, Product, Scorecard,
    ScorecardFilter, TrendPoint,
};

pub mod error;

pub use error::ApiError;

#[derive(Debug, Clone)]
pub struct PdfDownload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            http: Client::new(),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        check_status(request.send()?)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<AuthToken, ApiError> {
        let url = self.url_for("/auth/login");
        debug!(%url, "logging in");
        let body = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.send(self.http.post(&url).json(&body))?;
        decode(response)
    }

    pub fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let url = self.url_for("/auth/register");
        debug!(%url, "registering");
        let body = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(self.http.post(&url).json(&body))?;
        Ok(())
    }

    pub fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.url_for("/products");
        debug!(%url, "loading products");
        let response = self.send(self.authorize(self.http.get(&url)))?;
        decode(response)
    }

    pub fn create_product(&self, new: &NewProduct) -> Result<Product, ApiError> {
        let url = self.url_for("/products");
        debug!(%url, name = %new.name, "creating product");
        let response = self.send(self.authorize(self.http.post(&url)).json(new))?;
        decode(response)
    }

    pub fn list_scorecards(
        &self,
        filter: &ScorecardFilter,
    ) -> Result<Vec<Scorecard>, ApiError> {
        let url = self.url_for("/scorecards");
        debug!(%url, "loading scorecards");
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(product_id) = filter.product_id {
            query.push(("product_id", product_id.to_string()));
        }
        if let Some(category) = filter.category {
            query.push(("category", category.to_string()));
        }
        let response = self.send(self.authorize(self.http.get(&url)).query(&query))?;
        decode(response)
    }

    pub fn create_scorecard(&self, new: &NewScorecard) -> Result<Scorecard, ApiError> {
        let url = self.url_for("/scorecards");
        debug!(%url, product_id = new.product_id, category = %new.category, "submitting scorecard");
        let response = self.send(self.authorize(self.http.post(&url)).json(new))?;
        decode(response)
    }

    pub fn download_scorecard_pdf(&self, id: i64) -> Result<PdfDownload, ApiError> {
        let url = self.url_for(&format!("/scorecards/{id}/pdf"));
        debug!(%url, "downloading scorecard pdf");
        let response = self.send(self.authorize(self.http.get(&url)))?;
        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| format!("scorecard_{id}.pdf"));
        let bytes = response.bytes()?.to_vec();
        Ok(PdfDownload { filename, bytes })
    }

    pub fn list_trends(
        &self,
        product_id: i64,
        category: Category,
        days: u32,
    ) -> Result<Vec<TrendPoint>, ApiError> {
        let url = self.url_for(&format!("/trends/{product_id}/{category}"));
        debug!(%url, days, "loading trend");
        let response = self.send(
            self.authorize(self.http.get(&url))
                .query(&[("days", days.to_string())]),
        )?;
        decode(response)
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    match extract_detail(&body) {
        Some(detail) => Err(ApiError::Backend {
            status: status.as_u16(),
            detail,
        }),
        None => Err(ApiError::Status {
            status: status.as_u16(),
        }),
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text()?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Pulls the `detail` field out of an error body when one is present.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn filename_from_disposition(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=\"")?;
    let (name, _) = rest.split_once('"')?;
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
