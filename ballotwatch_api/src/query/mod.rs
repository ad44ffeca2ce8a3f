mod common;
pub use self::common::Query;

mod voter_info;
pub use self::voter_info::VoterInfoQuery;

mod representatives;
pub use self::representatives::RepresentativesQuery;
