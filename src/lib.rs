//! stocktake — AI-powered repository portfolio auditor (library crate).
//!
//! The core is the structured-extraction contract with the hosted
//! completion service: schema definitions, prompt construction, the
//! completion gateway, response normalization, and error classification.
//! The presentation layer calls the capability functions on
//! [`auditor::Auditor`] and renders their results or classified failures.

pub mod auditor;
pub mod config;
pub mod constants;
pub mod env;
pub mod gateway;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod schema;

pub use auditor::{AuditError, AuditErrorKind, Auditor};
pub use config::GatewayConfig;
pub use models::AnalysisResult;
