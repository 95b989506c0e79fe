//! The client handle tying configuration to a gateway collaborator.

use error_stack::ResultExt;
use masking::Maskable;

use crate::{
    config::GlobalpayConfig,
    errors::{CustomResult, GlobalpayError},
    ext_traits::ByteSliceExt,
    gateway::{GatewayClient, GatewayResponse},
    request::{headers, GatewayRequest, GP_API_VERSION},
};

/// Entry point for every stored payment method operation.
///
/// Holds the environment configuration and the [`GatewayClient`] that
/// performs the actual round trips. The handle is cheap to share by
/// reference; each operation builds its own request descriptor.
#[derive(Debug)]
pub struct GlobalpayClient<G> {
    pub(crate) config: GlobalpayConfig,
    pub(crate) gateway: G,
}

impl<G> GlobalpayClient<G> {
    /// Creates a client for `config`, sending through `gateway`.
    pub fn new(config: GlobalpayConfig, gateway: G) -> Self {
        Self { config, gateway }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GlobalpayConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path under the configured base URL.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}/{path}")
    }

    /// Headers common to every request. Authorization is the gateway
    /// collaborator's concern and is absent here.
    pub(crate) fn common_headers(&self) -> Vec<(String, Maskable<String>)> {
        vec![
            (headers::ACCEPT.to_string(), "application/json".into()),
            (headers::X_GP_VERSION.to_string(), GP_API_VERSION.into()),
        ]
    }
}

impl<G> GlobalpayClient<G>
where
    G: GatewayClient,
{
    /// One round trip through the collaborator, lifting its failures into
    /// [`GlobalpayError`] without touching rejection payloads.
    pub(crate) async fn send(
        &self,
        request: GatewayRequest,
    ) -> CustomResult<GatewayResponse, GlobalpayError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending gateway request");
        self.gateway
            .send(request)
            .await
            .map_err(GlobalpayError::from_gateway)
    }

    /// Sends and parses the JSON body of a successful response.
    pub(crate) async fn send_and_parse<T>(
        &self,
        request: GatewayRequest,
        type_name: &'static str,
    ) -> CustomResult<T, GlobalpayError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let response = self.send(request).await?;
        response
            .response
            .parse_struct(type_name)
            .change_context(GlobalpayError::ResponseDeserializationFailed)
    }
}
