//! Error and result types shared across client operations.

use error_stack::Report;
use globalpay_models::enums::SearchCriteria;

use crate::gateway::{GatewayError, GatewayRejection};

/// Type alias for `Result` carrying an [`error_stack::Report`] error.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures while encoding or decoding payloads.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// The payload could not be parsed into the named struct.
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
    /// The value could not be serialized to the named format.
    #[error("Failed to serialize to {0} format")]
    EncodeError(&'static str),
}

/// Failures surfaced by stored payment method operations.
#[derive(Debug, thiserror::Error)]
pub enum GlobalpayError {
    /// Page numbering starts at 1 and pages cannot be empty. Raised locally
    /// before anything is sent.
    #[error("Invalid page bounds: page {page} with page_size {page_size}")]
    InvalidPageBounds {
        /// Requested page.
        page: u32,
        /// Requested page size.
        page_size: u32,
    },
    /// The criterion is not part of the stored payment method report's
    /// filter set. Raised locally before anything is sent.
    #[error("Search criterion {criterion} is not supported by the stored payment method report")]
    UnsupportedCriterion {
        /// The offending criterion.
        criterion: SearchCriteria,
    },
    /// The value attached to a criterion has the wrong kind for that key.
    /// Raised locally before anything is sent.
    #[error("Search criterion {criterion} expects a {expected} value")]
    CriterionTypeMismatch {
        /// The offending criterion.
        criterion: SearchCriteria,
        /// Kind of value the criterion takes.
        expected: &'static str,
    },
    /// The outgoing request could not be encoded.
    #[error("Failed to encode the request")]
    RequestEncodingFailed,
    /// The gateway response could not be deserialized.
    #[error("Failed to deserialize the gateway response")]
    ResponseDeserializationFailed,
    /// The gateway rejected the request. The rejection is carried verbatim;
    /// its codes are never interpreted here.
    #[error("Gateway rejected the request: {0}")]
    Rejected(GatewayRejection),
    /// The request never produced a gateway response.
    #[error("Request to the gateway failed")]
    RequestFailed,
}

impl GlobalpayError {
    /// Lifts a collaborator failure into the client error, keeping any
    /// rejection payload verbatim.
    pub(crate) fn from_gateway(report: Report<GatewayError>) -> Report<Self> {
        let context = match report.current_context() {
            GatewayError::Rejected(rejection) => Self::Rejected(rejection.clone()),
            GatewayError::RequestFailed => Self::RequestFailed,
        };
        report.change_context(context)
    }
}
