use url::Url;

use super::common::Query;

/// Query for the `/representatives` endpoint: an address plus optional
/// government-level and role filters.
///
/// Levels and roles are joined into single comma-separated parameters, the
/// format the provider expects.
pub struct RepresentativesQuery {
    pub address: String,
    pub levels: Vec<String>,
    pub roles: Vec<String>,
}

impl RepresentativesQuery {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            levels: Vec::new(),
            roles: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.levels.push(level.to_string());
        self
    }
    pub fn with_levels(mut self, levels: &[String]) -> Self {
        self.levels.extend_from_slice(levels);
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.roles.push(role.to_string());
        self
    }
    pub fn with_roles(mut self, roles: &[String]) -> Self {
        self.roles.extend_from_slice(roles);
        self
    }
}

impl Query for RepresentativesQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("address", self.address.as_str());
        if !self.levels.is_empty() {
            url.query_pairs_mut()
                .append_pair("levels", self.levels.join(",").as_str());
        }
        if !self.roles.is_empty() {
            url.query_pairs_mut()
                .append_pair("roles", self.roles.join(",").as_str());
        }
        url
    }
}
