use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::vocabulary::LodgingType;
use crate::attributes::Attributes;

/// A bookable stay between two calendar dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lodging {
    pub lodging_name: String,
    pub address: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub lodging_type: LodgingType,
    #[serde(default)]
    pub lodging_url: String,
    #[serde(default)]
    pub lodging_details: Attributes,
}

impl Lodging {
    /// Number of nights between start and end; zero for same-day stays
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(0)
    }
}
