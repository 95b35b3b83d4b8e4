//! HTTP client for the station backend

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use shared::SectionKey;
use shared::api::{
    CashToBankResponse, MeterReadingResponse, MeterTotalResponse, PinVerifyRequest,
    PinVerifyResponse,
};

use crate::{ClientConfig, ClientError, ClientResult, StationApi};

/// HTTP client for making network requests to the station backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            csrf_token: config.csrf_token.clone(),
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a form-encoded body
    async fn post_form<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).form(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl StationApi for HttpClient {
    async fn get_meter_total(&self, section: SectionKey) -> ClientResult<Decimal> {
        let path = format!("/get_meter_total?section={}", section.as_str());
        let resp: MeterTotalResponse = self.get(&path).await?;
        Ok(resp.meter_total)
    }

    async fn get_cash_to_bank(&self, section: SectionKey) -> ClientResult<Decimal> {
        let path = format!("/get_cash_to_bank?section={}", section.as_str());
        let resp: CashToBankResponse = self.get(&path).await?;
        Ok(resp.cash_to_bank)
    }

    async fn get_meter_reading(
        &self,
        date: NaiveDate,
        section: SectionKey,
    ) -> ClientResult<MeterReadingResponse> {
        let path = format!(
            "/get_meter_reading?date={}&section={}",
            date.format("%Y-%m-%d"),
            section.as_str()
        );
        self.get(&path).await
    }

    async fn verify_pin(&self, pin: &str) -> ClientResult<bool> {
        let request = PinVerifyRequest {
            pin: pin.to_string(),
            csrf_token: self.csrf_token.clone().unwrap_or_default(),
        };
        let resp: PinVerifyResponse = self.post_form("/verify_pin", &request).await?;
        Ok(resp.valid)
    }
}
