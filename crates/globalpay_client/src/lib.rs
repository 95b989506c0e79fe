//! Transport agnostic client for the GP API stored payment method surface.
//!
//! The client builds request descriptors for tokenizing cards and for
//! querying, paginating, sorting and filtering stored payment method
//! records, then maps gateway responses onto the typed records in
//! [`globalpay_models`]. Authentication, HTTP transport and retries are the
//! caller's concern: every operation goes through the
//! [`gateway::GatewayClient`] collaborator supplied at construction.

#![warn(missing_docs, missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod errors;
pub mod ext_traits;
pub mod gateway;
pub mod reporting;
pub mod request;
pub mod tokenization;

pub use self::{client::GlobalpayClient, config::GlobalpayConfig, errors::GlobalpayError};
