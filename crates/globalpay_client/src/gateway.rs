//! The gateway collaborator seam.
//!
//! Authentication, HTTP transport, TLS and retries live behind
//! [`GatewayClient`]. This crate only describes requests and interprets
//! successful payloads; rejections travel back verbatim.

use bytes::Bytes;
use globalpay_models::response::GlobalpayErrorResponse;

use crate::{errors::CustomResult, request::GatewayRequest};

/// Sends request descriptors to the gateway.
#[async_trait::async_trait]
pub trait GatewayClient: Send + Sync {
    /// Performs one round trip.
    ///
    /// Implementations report gateway error payloads as
    /// [`GatewayError::Rejected`] and transport level failures as
    /// [`GatewayError::RequestFailed`].
    async fn send(&self, request: GatewayRequest) -> CustomResult<GatewayResponse, GatewayError>;
}

/// Raw successful response from the gateway.
#[derive(Clone, Debug)]
pub struct GatewayResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Raw body bytes.
    pub response: Bytes,
}

/// A rejection reported by the gateway, carried verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GatewayRejection {
    /// HTTP status code.
    pub status_code: u16,
    /// Machine readable response code.
    pub code: String,
    /// Machine readable detailed response code.
    pub detailed_code: String,
    /// Human readable description of what was wrong.
    pub description: String,
}

impl std::fmt::Display for GatewayRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}): {}",
            self.status_code, self.code, self.detailed_code, self.description
        )
    }
}

impl From<(u16, GlobalpayErrorResponse)> for GatewayRejection {
    fn from((status_code, error): (u16, GlobalpayErrorResponse)) -> Self {
        Self {
            status_code,
            code: error.error_code,
            detailed_code: error.detailed_error_code,
            description: error.detailed_error_description,
        }
    }
}

/// Failures a [`GatewayClient`] can report.
#[derive(Clone, Debug, thiserror::Error)]
pub enum GatewayError {
    /// The gateway answered with an error payload.
    #[error("Gateway rejected the request: {0}")]
    Rejected(GatewayRejection),
    /// The request never reached the gateway, or no response arrived.
    #[error("Request to the gateway failed")]
    RequestFailed,
}
