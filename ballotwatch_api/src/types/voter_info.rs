//! The `/voterinfo` payload: everything the provider knows about voting at
//! one address, for one election.

use serde::{Deserialize, Serialize};

use super::{Contest, Election, PollingLocation};

/// Payload of the `/voterinfo` endpoint.
///
/// Every nested collection may be absent. A missing `election` means the
/// provider found no applicable election for the address/electionId pair,
/// which is a valid outcome and not a decode failure.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterInfoResponse {
    pub election: Option<Election>,

    pub contests: Option<Vec<Contest>>,

    pub polling_locations: Option<Vec<PollingLocation>>,

    pub early_vote_sites: Option<Vec<PollingLocation>>,

    pub drop_off_locations: Option<Vec<PollingLocation>>,

    /// Per-state election administration info; the provider returns at most
    /// one entry for a US address but models it as a list.
    pub state: Option<Vec<StateAdministration>>,
}

/// State-level election administration block.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StateAdministration {
    pub name: String,

    pub election_administration_body: AdministrationBody,
}

/// Contact and reference URLs for a state's election administration body.
/// All fields optional; states publish wildly different subsets.
#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdministrationBody {
    pub name: Option<String>,

    pub election_info_url: Option<String>,

    pub election_registration_url: Option<String>,

    pub election_registration_confirmation_url: Option<String>,

    pub absentee_voting_info_url: Option<String>,

    pub voting_location_finder_url: Option<String>,

    pub ballot_info_url: Option<String>,

    /// Mailing address block; shape varies, passed through undecoded.
    pub correspondence_address: Option<serde_json::Value>,
}
