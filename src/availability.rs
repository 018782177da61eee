// Availability client for the partner hotel feed.
// Fetches priced hotel options for a location and date range over HTTP and
// maps the raw response into domain values. Retry and timeout policy belong
// to the injected `reqwest::Client`, not to this module.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::money::{Currency, Money};

/// A priced hotel offer for a location, independent of trip length.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelOption {
    pub location: String,
    pub hotel_name: String,
    pub price_per_night: Money,
}

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("connection to partner service failed: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("partner service returned status {0}")]
    UpstreamStatus(u16),

    #[error("failed to decode partner response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("base url cannot be empty")]
    EmptyBaseUrl,
}

/// Source of priced hotel options for a trip. The recommendation engine
/// depends only on this seam, so the partner integration can be swapped out
/// in tests.
#[async_trait]
pub trait AvailabilityGetter: Send + Sync {
    async fn get_availability(
        &self,
        trip_start: NaiveDate,
        trip_end: NaiveDate,
        location: &str,
    ) -> Result<Vec<HotelOption>, AvailabilityError>;
}

/// HTTP adaptor for the partner `/partnerships` endpoint.
///
/// Stateless apart from the pooled `reqwest::Client`, so a single instance
/// can be shared across concurrent requests. Cancelling the caller drops the
/// in-flight future and aborts the outbound call.
pub struct PartnershipClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartnershipClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Result<Self, ClientError> {
        if base_url.is_empty() {
            return Err(ClientError::EmptyBaseUrl);
        }
        Ok(Self { http, base_url })
    }
}

// Wire shape of the partner response:
// { "availableHotels": [ { "name": "...", "priceInUSDPerNight": 100 } ] }
#[derive(Debug, Deserialize)]
struct PartnershipResponse {
    #[serde(rename = "availableHotels")]
    available_hotels: Vec<PartnerHotel>,
}

#[derive(Debug, Deserialize)]
struct PartnerHotel {
    name: String,
    #[serde(rename = "priceInUSDPerNight")]
    price_in_usd_per_night: i64,
}

/// Partner date format: year-month-day with no zero padding, e.g. `2024-1-3`.
fn partner_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

#[async_trait]
impl AvailabilityGetter for PartnershipClient {
    async fn get_availability(
        &self,
        trip_start: NaiveDate,
        trip_end: NaiveDate,
        location: &str,
    ) -> Result<Vec<HotelOption>, AvailabilityError> {
        let url = format!("{}/partnerships", self.base_url);
        debug!(%url, location, "querying partner availability");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("from", partner_date(trip_start).as_str()),
                ("to", partner_date(trip_end).as_str()),
                ("location", location),
            ])
            .send()
            .await
            .map_err(AvailabilityError::Connection)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AvailabilityError::UpstreamStatus(status.as_u16()));
        }

        let body: PartnershipResponse =
            response.json().await.map_err(AvailabilityError::Decode)?;

        let options = body
            .available_hotels
            .into_iter()
            .map(|hotel| HotelOption {
                location: location.to_string(),
                hotel_name: hotel.name,
                price_per_night: Money::new(hotel.price_in_usd_per_night, Currency::Usd),
            })
            .collect();

        Ok(options)
    }
}
