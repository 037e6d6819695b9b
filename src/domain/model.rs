use crate::utils::error::{CourierError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

/// A courier supported by the tracking service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    /// Unique code of the courier.
    pub slug: String,

    /// Name of the courier.
    pub name: String,

    /// Contact phone number of the courier.
    pub phone: String,

    /// Other name of the courier.
    pub other_name: String,

    /// Website link of the courier.
    pub web_url: String,

    /// Extra fields needed for tracking lookups with this courier, such as
    /// `tracking_account_number` or `tracking_postal_code`.
    pub required_fields: Vec<String>,

    /// Same as `required_fields`, except only some tracking numbers of this
    /// courier need them.
    pub optional_fields: Vec<String>,

    /// Default language of tracking results.
    pub default_language: String,

    /// Other supported languages.
    pub support_languages: Vec<String>,

    /// ISO Alpha-3 codes of the countries the courier provides service from.
    pub service_from_country_iso3: Vec<String>,
}

/// A tracking record as echoed by the detect endpoint. The auxiliary
/// `tracking_*` fields only carry a value for the couriers that require
/// them; the rest come back empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierTracking {
    /// Unique identifier assigned by the remote service.
    pub id: String,

    pub tracking_number: String,

    /// Postal code of the receiver's address (deutsch-post among others).
    pub tracking_postal_code: String,

    /// Shipping date in YYYYMMDD format.
    pub tracking_ship_date: String,

    /// Shipment key for couriers such as sic-teliway.
    pub tracking_key: String,

    pub tracking_origin_country: String,

    pub tracking_destination_country: String,

    /// Located state of the shipment for couriers such as star-track-courier.
    pub tracking_state: String,

    /// Account number of the shipper for couriers such as dynamic-logistics.
    pub tracking_account_number: String,

    /// Unique code of the matched courier.
    pub slug: String,
}

/// Response body of the courier list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierList {
    /// Total number of supported couriers.
    pub total: u64,

    pub couriers: Vec<Courier>,
}

/// Courier filter of a detect query. The wire accepts either a single slug
/// string or an array of slugs; a single slug behaves like a one-element
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlugFilter {
    Single(String),
    List(Vec<String>),
}

impl SlugFilter {
    /// Normalizes the filter to a list of slugs.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SlugFilter::Single(slug) => vec![slug],
            SlugFilter::List(slugs) => slugs,
        }
    }
}

impl From<&str> for SlugFilter {
    fn from(slug: &str) -> Self {
        SlugFilter::Single(slug.to_string())
    }
}

impl From<String> for SlugFilter {
    fn from(slug: String) -> Self {
        SlugFilter::Single(slug)
    }
}

impl From<Vec<String>> for SlugFilter {
    fn from(slugs: Vec<String>) -> Self {
        SlugFilter::List(slugs)
    }
}

/// Input of a couriers detect query. Only `tracking_number` is required;
/// absent auxiliary fields are left out of the serialized payload entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourierDetectTracking {
    pub tracking_number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_postal_code: Option<String>,

    /// Shipping date in YYYYMMDD format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_ship_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_destination_country: Option<String>,

    /// Couriers to restrict auto-detection to. When absent, the service
    /// detects from the tracking number format alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<SlugFilter>,
}

impl CourierDetectTracking {
    /// Builds a detect query carrying nothing but a tracking number.
    pub fn new(tracking_number: String) -> Self {
        Self {
            tracking_number,
            ..Self::default()
        }
    }
}

impl Validate for CourierDetectTracking {
    fn validate(&self) -> Result<()> {
        if self.tracking_number.is_empty() {
            tracing::warn!("Rejecting detect tracking: tracking_number is empty");
            return Err(CourierError::invalid_tracking_number(
                self,
                "tracking_number is required and cannot be empty",
            ));
        }
        Ok(())
    }
}

/// A validated couriers detect request, ready for the transport client to
/// serialize and send. Construction is the only way to obtain one, so a
/// value of this type always holds a usable tracking number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourierDetectRequest {
    tracking: CourierDetectTracking,
}

impl CourierDetectRequest {
    /// Validates and wraps a detect tracking payload.
    ///
    /// Fails with [`CourierError::InvalidTrackingNumber`] when the payload's
    /// `tracking_number` is empty; no partial request is produced.
    pub fn new(tracking: CourierDetectTracking) -> Result<Self> {
        tracking.validate()?;
        tracing::debug!(
            "Built detect request for tracking number {}",
            tracking.tracking_number
        );
        Ok(Self { tracking })
    }

    /// The validated tracking payload.
    pub fn tracking(&self) -> &CourierDetectTracking {
        &self.tracking
    }
}

/// Response body of a couriers detect query. `couriers` is ordered by the
/// remote service's own ranking and preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierDetectList {
    /// Total number of matched couriers.
    pub total: u64,

    pub tracking: Vec<CourierTracking>,

    /// Matched couriers based on the tracking number format.
    pub couriers: Vec<Courier>,
}
