//! Validated warranty assignment request
//!
//! An [`AssignmentRequest`] only exists after the raw payload passed
//! validation. Optional overrides stay `None` when the client omitted them;
//! falling back to the package defaults is the assignment service's job.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{AssignmentId, DealerId, WarrantyPackageId};

use crate::rules::fields;

/// Intent to bind a warranty package to a dealer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub dealer_id: DealerId,
    pub warranty_package_id: WarrantyPackageId,
    #[serde(flatten)]
    pub overrides: CoverageOverrides,
}

impl AssignmentRequest {
    /// Creates a request with no overrides
    pub fn new(dealer_id: DealerId, warranty_package_id: WarrantyPackageId) -> Self {
        Self {
            dealer_id,
            warranty_package_id,
            overrides: CoverageOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: CoverageOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Per-assignment replacements for the package's coverage terms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageOverrides {
    /// Coverage length in months
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excess: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labour_rate_per_hour: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_claim_limit: Option<Decimal>,
    #[serde(flatten)]
    pub dealer_pricing: DealerPricing,
}

impl CoverageOverrides {
    /// True when the client supplied no override at all
    pub fn is_empty(&self) -> bool {
        self.supplied_fields().is_empty()
    }

    /// Wire names of the overrides that were supplied
    pub fn supplied_fields(&self) -> Vec<&'static str> {
        let mut supplied = Vec::new();
        if self.duration_months.is_some() {
            supplied.push(fields::DURATION);
        }
        if self.excess.is_some() {
            supplied.push(fields::EXCESS);
        }
        if self.labour_rate_per_hour.is_some() {
            supplied.push(fields::LABOUR_RATE_PER_HOUR);
        }
        if self.fixed_claim_limit.is_some() {
            supplied.push(fields::FIXED_CLAIM_LIMIT);
        }
        supplied.extend(self.dealer_pricing.supplied_fields());
        supplied
    }
}

/// Tiered price charged to the dealer, by contract term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DealerPricing {
    #[serde(rename = "dealerPrice12Months", skip_serializing_if = "Option::is_none")]
    pub twelve_months: Option<Decimal>,
    #[serde(rename = "dealerPrice24Months", skip_serializing_if = "Option::is_none")]
    pub twenty_four_months: Option<Decimal>,
    #[serde(rename = "dealerPrice36Months", skip_serializing_if = "Option::is_none")]
    pub thirty_six_months: Option<Decimal>,
}

impl DealerPricing {
    /// Price override for a 12, 24 or 36 month term
    pub fn for_term(&self, months: u32) -> Option<Decimal> {
        match months {
            12 => self.twelve_months,
            24 => self.twenty_four_months,
            36 => self.thirty_six_months,
            _ => None,
        }
    }

    fn supplied_fields(&self) -> Vec<&'static str> {
        [
            (fields::DEALER_PRICE_12_MONTHS, self.twelve_months),
            (fields::DEALER_PRICE_24_MONTHS, self.twenty_four_months),
            (fields::DEALER_PRICE_36_MONTHS, self.thirty_six_months),
        ]
        .into_iter()
        .filter_map(|(field, price)| price.map(|_| field))
        .collect()
    }
}

/// Acknowledgement returned by the assignment service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentReceipt {
    pub assignment_id: AssignmentId,
    pub dealer_id: DealerId,
    pub warranty_package_id: WarrantyPackageId,
    pub overridden_fields: Vec<&'static str>,
    pub accepted_at: DateTime<Utc>,
}

impl AssignmentReceipt {
    /// Issues a fresh receipt for `request`
    pub fn for_request(request: &AssignmentRequest) -> Self {
        Self {
            assignment_id: AssignmentId::new_v7(),
            dealer_id: request.dealer_id.clone(),
            warranty_package_id: request.warranty_package_id.clone(),
            overridden_fields: request.overrides.supplied_fields(),
            accepted_at: Utc::now(),
        }
    }
}
