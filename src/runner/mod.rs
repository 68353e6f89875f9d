//! Verification orchestration and its aggregate report.

pub mod report;
pub mod verifier;

pub use report::VerificationReport;
pub use verifier::{Verifier, VerifyOptions, HEADER};
