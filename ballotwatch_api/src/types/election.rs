//! Election records returned by the provider.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Provider-issued opaque election identifier (e.g. "2000").
pub type ElectionID = String;

/// A single election known to the provider.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    /// Provider-issued identifier; the only identity this record has.
    pub id: ElectionID,

    pub name: String,

    /// Day the election is held.
    pub election_day: NaiveDate,

    /// OCD division identifier for the jurisdiction (e.g.
    /// "ocd-division/country:us/state:il"). Opaque to this crate.
    pub ocd_division_id: Option<String>,
}

/// Payload of the `/elections` endpoint.
#[derive(Serialize, Deserialize)]
pub struct ElectionsResponse {
    #[serde(default)]
    pub elections: Vec<Election>,
}
