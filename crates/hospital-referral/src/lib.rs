pub mod config;
pub mod error;
pub mod referral;
pub mod telemetry;
