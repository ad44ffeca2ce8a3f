//! Ballot contest and candidate records returned by the provider.

use serde::{Deserialize, Serialize};

/// A single race on the ballot. The provider frequently omits the optional
/// fields, and an uncontested race may carry no candidates at all.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    /// Contest category, e.g. "General" or "Referendum".
    #[serde(rename = "type")]
    pub contest_type: String,

    /// Name of the office being contested, e.g. "Mayor".
    pub office: String,

    /// Government levels the office serves, e.g. "administrativeArea1".
    pub level: Option<Vec<String>>,

    /// Roles the office fills, e.g. "legislatorLowerBody".
    pub roles: Option<Vec<String>>,

    pub district: Option<District>,

    pub candidates: Option<Vec<Candidate>>,
}

/// The electoral district a contest applies to.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub name: String,
    pub scope: Option<String>,
}

/// A candidate in a contest. Everything except the name is optional; the
/// provider omits fields freely and nothing here fabricates defaults.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,

    pub party: Option<String>,

    pub candidate_url: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub photo_url: Option<String>,

    /// Social-media channels, tagged with an open-ended type string
    /// ("Facebook", "Twitter", ...). Not mapped onto a closed enumeration.
    pub channels: Option<Vec<Channel>>,
}

/// One social-media channel reference.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(rename = "type")]
    pub channel_type: String,

    /// Channel-local identifier, e.g. an account handle.
    pub id: String,
}
