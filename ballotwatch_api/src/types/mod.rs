mod election;
pub use self::election::{Election, ElectionID, ElectionsResponse};

mod contest;
pub use self::contest::{Candidate, Channel, Contest, District};

mod location;
pub use self::location::{CivicAddress, PollingLocation, Source};

mod voter_info;
pub use self::voter_info::{AdministrationBody, StateAdministration, VoterInfoResponse};
