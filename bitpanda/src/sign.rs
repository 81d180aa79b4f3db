//! Unified request construction.

use crate::Bitpanda;
use bitpanda_core::{
    request::{build_query_string, implode_params, HttpMethod, Params, RequestDescriptor},
    EndpointType, Result,
};
use reqwest::header::HeaderMap;
use serde_json::Value;

impl Bitpanda {
    /// Turns a logical operation into an unsigned request descriptor.
    ///
    /// Resolves `{name}` placeholders in `path` from `params`, then builds
    /// `base_url + "/" + version + "/" + path`. For public endpoints the
    /// remaining parameters are appended as a percent-encoded query string in
    /// insertion order; for private endpoints they are returned untouched for
    /// the signing collaborator to place. Caller-supplied `headers` and
    /// `body` pass through unmodified.
    ///
    /// # Errors
    ///
    /// Fails only when a placeholder has no matching parameter.
    pub fn sign(
        &self,
        path: &str,
        endpoint_type: EndpointType,
        method: HttpMethod,
        params: Params,
        headers: Option<HeaderMap>,
        body: Option<Value>,
    ) -> Result<(RequestDescriptor, Params)> {
        let urls = self.urls();
        let base_url = match endpoint_type {
            EndpointType::Public => &urls.public,
            EndpointType::Private => &urls.private,
        };

        let (resolved_path, residual) = implode_params(path, params)?;
        let mut url = format!("{}/{}/{}", base_url, self.version(), resolved_path);

        let residual = match endpoint_type {
            EndpointType::Public => {
                if !residual.is_empty() {
                    url.push('?');
                    url.push_str(&build_query_string(&residual));
                }
                Vec::new()
            }
            EndpointType::Private => residual,
        };

        Ok((
            RequestDescriptor {
                url,
                method,
                headers,
                body,
            },
            residual,
        ))
    }
}
