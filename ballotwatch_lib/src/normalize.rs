//! The normalization layer: reshapes provider payloads into domain records.
//!
//! Pure transformation, no I/O and no failure modes. This is the only place
//! that interprets the meaning of provider fields; missing optional data is
//! carried through as absent, never fabricated, and provider ordering of
//! every collection is preserved as-is.

use ballotwatch_api::types as provider;

use crate::domain::{
    CandidateSummary, Contest, DistrictInfo, ElectionSummary, LocationType, PollingLocation,
    ResolutionResult, SocialChannel, SourceAttribution, StateResource,
};
use crate::geo::GeoPoint;

/// Produces a [`ResolutionResult`] from a raw voter-info payload.
///
/// Absent nested collections become empty `Vec`s so downstream consumers can
/// iterate without null checks.
pub fn normalize_voter_info(resp: provider::VoterInfoResponse) -> ResolutionResult {
    ResolutionResult {
        election: resp.election.map(normalize_election),
        contests: resp
            .contests
            .unwrap_or_default()
            .into_iter()
            .map(normalize_contest)
            .collect(),
        polling_locations: normalize_locations(resp.polling_locations, LocationType::PollingPlace),
        early_vote_sites: normalize_locations(resp.early_vote_sites, LocationType::EarlyVoting),
        drop_off_locations: normalize_locations(resp.drop_off_locations, LocationType::DropOff),
        state_resources: resp
            .state
            .map(|entries| entries.into_iter().map(normalize_state_resource).collect()),
    }
}

pub fn normalize_election(election: provider::Election) -> ElectionSummary {
    ElectionSummary {
        id: election.id,
        name: election.name,
        election_day: election.election_day,
        ocd_division_id: election.ocd_division_id,
    }
}

pub fn normalize_contest(contest: provider::Contest) -> Contest {
    Contest {
        office_name: contest.office,
        level: contest.level,
        roles: contest.roles,
        district: contest.district.map(|d| DistrictInfo {
            name: d.name,
            scope: d.scope,
        }),
        candidates: contest
            .candidates
            .unwrap_or_default()
            .into_iter()
            .map(normalize_candidate)
            .collect(),
    }
}

pub fn normalize_candidate(candidate: provider::Candidate) -> CandidateSummary {
    CandidateSummary {
        name: candidate.name,
        party: candidate.party,
        website_url: candidate.candidate_url,
        email: candidate.email,
        phone: candidate.phone,
        photo_url: candidate.photo_url,
        social_channels: candidate.channels.map(|channels| {
            channels
                .into_iter()
                .map(|c| SocialChannel {
                    channel_type: c.channel_type,
                    id: c.id,
                })
                .collect()
        }),
    }
}

fn normalize_locations(
    locations: Option<Vec<provider::PollingLocation>>,
    location_type: LocationType,
) -> Vec<PollingLocation> {
    locations
        .unwrap_or_default()
        .into_iter()
        .map(|l| normalize_location(l, location_type))
        .collect()
}

/// Flattens one provider location record. Address lines are kept verbatim in
/// provider order; coordinates are only produced when both halves are present.
pub fn normalize_location(
    location: provider::PollingLocation,
    location_type: LocationType,
) -> PollingLocation {
    let address = location.address;
    let address_lines = [Some(address.line1), address.line2, address.line3]
        .into_iter()
        .flatten()
        .collect();
    let coordinates = match (location.latitude, location.longitude) {
        (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
        _ => None,
    };

    PollingLocation {
        name: address.location_name,
        address_lines,
        city: address.city,
        state: address.state,
        zip: address.zip,
        location_type,
        hours: location.polling_hours,
        coordinates,
        notes: location.notes,
        sources: location
            .sources
            .unwrap_or_default()
            .into_iter()
            .map(|s| SourceAttribution {
                name: s.name,
                official: s.official,
            })
            .collect(),
    }
}

fn normalize_state_resource(entry: provider::StateAdministration) -> StateResource {
    let body = entry.election_administration_body;
    StateResource {
        name: entry.name,
        administration_body: body.name,
        election_info_url: body.election_info_url,
        registration_url: body.election_registration_url,
        registration_confirmation_url: body.election_registration_confirmation_url,
        absentee_voting_info_url: body.absentee_voting_info_url,
        voting_location_finder_url: body.voting_location_finder_url,
        ballot_info_url: body.ballot_info_url,
    }
}
