//! Transport agnostic request descriptors handed to the gateway
//! collaborator.

use masking::{Maskable, PeekInterface, Secret};
use serde::Serialize;

use crate::{
    errors::{CustomResult, ParsingError},
    ext_traits::Encode,
};

/// Gateway protocol version sent with every request.
pub const GP_API_VERSION: &str = "2021-03-22";

pub(crate) mod headers {
    pub(crate) const ACCEPT: &str = "Accept";
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
    pub(crate) const X_GP_VERSION: &str = "X-GP-Version";
}

/// Request headers. Values may be masked so they stay out of debug output.
pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

/// HTTP methods used by the gateway surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
    /// HTTP PATCH.
    Patch,
}

/// A JSON body, pre-encoded and masked so neither logs nor debug output can
/// leak its contents.
#[derive(Clone, Debug)]
pub struct RequestBody(Secret<String>);

impl RequestBody {
    /// Encode `body` to its JSON string form and wrap it.
    pub fn json<T>(body: &T) -> CustomResult<Self, ParsingError>
    where
        T: Serialize,
    {
        Ok(Self(Secret::new(body.encode_to_string_of_json()?)))
    }

    /// The encoded JSON, for the transport layer.
    pub fn peek(&self) -> &str {
        self.0.peek()
    }

    /// Consume the wrapper, keeping the payload masked.
    pub fn into_inner(self) -> Secret<String> {
        self.0
    }
}

/// Request descriptor handed to
/// [`GatewayClient::send`](crate::gateway::GatewayClient::send).
///
/// The query string is kept as key/value pairs so transports can apply
/// their own encoding.
#[derive(Debug)]
pub struct GatewayRequest {
    /// Absolute URL without the query string.
    pub url: String,
    /// Query pairs in the order they must be emitted.
    pub query_pairs: Vec<(String, String)>,
    /// Request headers. Authorization headers are added by the gateway
    /// collaborator, not here.
    pub headers: Headers,
    /// HTTP method.
    pub method: Method,
    /// JSON body, when the operation carries one.
    pub body: Option<RequestBody>,
}

/// Fluent builder for [`GatewayRequest`].
#[derive(Debug)]
pub struct RequestBuilder {
    url: String,
    query_pairs: Vec<(String, String)>,
    headers: Headers,
    method: Method,
    body: Option<RequestBody>,
}

impl RequestBuilder {
    /// Creates a builder for a GET of the empty URL.
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            query_pairs: Vec::new(),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Sets the URL.
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Appends query pairs, preserving their order.
    pub fn query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query_pairs.extend(pairs);
        self
    }

    /// Adds a single header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert((name.into(), value.into()));
        self
    }

    /// Adds a batch of headers.
    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Attaches a JSON body.
    pub fn set_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Finishes the descriptor.
    pub fn build(self) -> GatewayRequest {
        GatewayRequest {
            method: self.method,
            url: self.url,
            query_pairs: self.query_pairs,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
