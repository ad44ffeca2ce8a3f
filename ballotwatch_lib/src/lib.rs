pub mod domain;
pub mod geo;
pub mod normalize;
