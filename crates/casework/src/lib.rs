//! Benefits eligibility evaluation for case-management client intake.
//!
//! The [`eligibility`] module holds the engine that maps a (possibly partial)
//! intake record onto the twenty-two supported assistance programs. The
//! remaining modules carry the service plumbing shared by the API binary.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
