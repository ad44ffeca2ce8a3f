//! Polling-place records returned by the provider.
//!
//! The same shape is used for election-day polling places, early-vote sites,
//! and ballot drop-off locations; which collection a record arrived in is
//! what distinguishes them.

use serde::{Deserialize, Serialize};

/// A place to vote or drop off a ballot.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PollingLocation {
    pub address: CivicAddress,

    /// Free-form opening hours text; no structure is guaranteed.
    pub polling_hours: Option<String>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    pub notes: Option<String>,

    pub sources: Option<Vec<Source>>,
}

/// Postal address as the provider reports it. Preserved verbatim; no postal
/// code validation or re-formatting happens anywhere downstream.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CivicAddress {
    /// Venue name, e.g. "Springfield City Hall".
    pub location_name: Option<String>,

    pub line1: String,

    pub line2: Option<String>,

    pub line3: Option<String>,

    pub city: String,

    pub state: String,

    pub zip: String,
}

/// Attribution for where the provider sourced a record.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub name: String,
    pub official: bool,
}
