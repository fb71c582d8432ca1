//! Chaff DNS Infrastructure Layer
pub mod audit;
pub mod dns;
