//! Reverse geocoding against a Nominatim-compatible endpoint.

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::state::order_flow::Location;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Coordinates out of range: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Invalid geocoding URL: {0}")]
    InvalidUrl(String),

    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Geocoding provider returned {status}")]
    Status { status: u16 },

    #[error("No address found for these coordinates")]
    NoResult,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    #[serde(default)]
    address: ReverseAddress,
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseAddress {
    road: Option<String>,
    house_number: Option<String>,
    suburb: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

impl ReverseAddress {
    fn street(&self) -> Option<String> {
        match (&self.house_number, &self.road) {
            (Some(number), Some(road)) => Some(format!("{} {}", number, road)),
            (None, Some(road)) => Some(road.clone()),
            _ => None,
        }
    }

    fn city(&self) -> Option<String> {
        self.city
            .clone()
            .or_else(|| self.town.clone())
            .or_else(|| self.village.clone())
    }

    /// Short "street, suburb, city" form; `None` when nothing is known.
    fn short_form(&self) -> Option<String> {
        let parts: Vec<String> = [self.street(), self.suburb.clone(), self.city()]
            .into_iter()
            .flatten()
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

pub struct Geocoder {
    http: Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(config: &Config) -> Result<Self, GeocodingError> {
        let http = Client::builder()
            .timeout(config.api.timeout())
            .connect_timeout(config.api.connect_timeout())
            .user_agent(config.api.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            base_url: config.geocoding.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Turn coordinates into a displayable address.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Location, GeocodingError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeocodingError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        let url = Url::parse_with_params(
            &format!("{}/reverse", self.base_url),
            &[
                ("format", "jsonv2".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("accept-language", "fr".to_string()),
            ],
        )
        .map_err(|e| GeocodingError::InvalidUrl(e.to_string()))?;

        tracing::debug!(url = %url, "Reverse geocoding");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Status {
                status: status.as_u16(),
            });
        }

        let body: ReverseResponse = response.json().await?;
        if body.error.is_some() {
            return Err(GeocodingError::NoResult);
        }

        let formatted_address = body
            .address
            .short_form()
            .or(body.display_name)
            .ok_or(GeocodingError::NoResult)?;

        Ok(Location {
            latitude,
            longitude,
            formatted_address,
            street: body.address.street(),
            city: body.address.city(),
        })
    }
}
