use url::Url;

use super::common::Query;

/// Query for the `/voterinfo` endpoint: a free-text address plus an optional
/// provider-issued election id.
///
/// The address is not validated locally beyond being required at
/// construction; the provider is the source of truth for geocoding.
pub struct VoterInfoQuery {
    pub address: String,
    pub election_id: Option<String>,
}

impl VoterInfoQuery {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            election_id: None,
        }
    }

    /// Restricts the lookup to a single election. The id is opaque and passed
    /// through unvalidated.
    pub fn with_election_id(mut self, election_id: &str) -> Self {
        self.election_id = Some(election_id.to_string());
        self
    }
}

impl Query for VoterInfoQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("address", self.address.as_str());
        if let Some(election_id) = &self.election_id {
            url.query_pairs_mut()
                .append_pair("electionId", election_id.as_str());
        }
        url
    }
}
