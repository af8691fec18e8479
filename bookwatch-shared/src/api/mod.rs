pub mod endpoints;
#[cfg(feature = "rest-client")]
pub mod rest;

pub use crate::domain::{Record, Ucn};

/// Path of the record listing served by the booking backend.
pub const POLL_PATH: &str = "/poll";

/// Body of `GET /poll`: every booking currently known to the backend.
pub type PollResp = Vec<Record>;
