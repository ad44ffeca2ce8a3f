//! Normalized domain records produced by the resolution pipeline.
//!
//! These are immutable value types: nothing mutates one in place, a new
//! record replaces an old one. They exist for the duration of a single
//! request/response cycle; nothing here is persisted or cached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Everything the pipeline resolved for one address: the applicable election,
/// its contests, and the places to vote.
///
/// The collections are always present (possibly empty) so consumers can
/// iterate without null checks. A `None` election means the provider found no
/// applicable election for the address, which is a valid outcome.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub election: Option<ElectionSummary>,

    pub contests: Vec<Contest>,

    pub polling_locations: Vec<PollingLocation>,

    pub early_vote_sites: Vec<PollingLocation>,

    pub drop_off_locations: Vec<PollingLocation>,

    /// State election-administration resources; `None` when the provider
    /// sent none, as opposed to an empty list it chose to send.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_resources: Option<Vec<StateResource>>,
}

/// Identity and date of one election. Identity is the provider-issued id.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ElectionSummary {
    pub id: String,

    pub name: String,

    pub election_day: NaiveDate,

    /// Opaque jurisdiction-division identifier (OCD division id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocd_division_id: Option<String>,
}

impl ElectionSummary {
    /// Days from `today` until election day. Negative once the election has
    /// passed.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.election_day - today).num_days()
    }
}

/// A single race on the ballot. Uncontested races appear with an empty
/// candidate list.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub office_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<DistrictInfo>,

    pub candidates: Vec<CandidateSummary>,
}

/// The electoral district a contest applies to.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DistrictInfo {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// A candidate as shown on the ballot. Every field but the name is optional
/// and stays optional: a missing party is `None`, never an empty string.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Social channels preserved as-is; the open-ended `channelType` strings
    /// are not forced onto a closed enumeration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_channels: Option<Vec<SocialChannel>>,
}

/// One social-media channel reference, tagged with the provider's type string.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SocialChannel {
    pub channel_type: String,

    pub id: String,
}

/// Which collection a voting location came from.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    PollingPlace,
    EarlyVoting,
    DropOff,
}

/// A place to vote: election-day polling place, early-vote site, or ballot
/// drop-off, distinguished by `location_type`.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PollingLocation {
    /// Venue name, when the provider supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Street address lines in provider order, verbatim.
    pub address_lines: Vec<String>,

    pub city: String,

    pub state: String,

    pub zip: String,

    pub location_type: LocationType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoPoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Provenance attribution, retained whenever the provider supplied it.
    pub sources: Vec<SourceAttribution>,
}

/// Where the provider sourced a record.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SourceAttribution {
    pub name: String,

    pub official: bool,
}

/// Election administration resources published by a state.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StateResource {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub administration_body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub election_info_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_confirmation_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub absentee_voting_info_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub voting_location_finder_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ballot_info_url: Option<String>,
}

/// Structured address input, the alternative to a free-text string.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Renders a structured address as the single-line form the provider expects.
pub fn format_address(address: &Address) -> String {
    format!(
        "{}, {}, {} {}",
        address.street, address.city, address.state, address.zip_code
    )
}
