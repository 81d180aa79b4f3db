//! Bitpanda Pro authentication.
//!
//! The exchange authenticates private calls with a bearer token; there is no
//! request signature to compute. The signer also decides where residual
//! parameters land: query string for GET and DELETE, JSON body for POST.

use bitpanda_core::{
    request::{build_query_string, HttpMethod, RequestDescriptor},
    Error, Result, SecretString, Signer,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::{Map, Value};

/// Bitpanda Pro authenticator.
#[derive(Debug, Clone)]
pub struct BitpandaAuth {
    api_key: SecretString,
}

impl BitpandaAuth {
    /// Creates a new authenticator.
    pub fn new(api_key: SecretString) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::authentication("apiKey credential is empty"));
        }
        Ok(Self { api_key })
    }

    fn bearer_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose()))
            .map_err(|_| Error::authentication("apiKey contains invalid header characters"))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl Signer for BitpandaAuth {
    fn sign(
        &self,
        request: RequestDescriptor,
        params: &[(String, String)],
    ) -> Result<RequestDescriptor> {
        let mut signed = request;

        let mut headers = signed.headers.take().unwrap_or_else(HeaderMap::new);
        headers.insert(AUTHORIZATION, self.bearer_header()?);
        signed.headers = Some(headers);

        if !params.is_empty() {
            match signed.method {
                HttpMethod::Get | HttpMethod::Delete => {
                    signed.url.push('?');
                    signed.url.push_str(&build_query_string(params));
                }
                HttpMethod::Post => {
                    // Caller-supplied bodies win; parameters only fill a gap.
                    if signed.body.is_none() {
                        let object: Map<String, Value> = params
                            .iter()
                            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                            .collect();
                        signed.body = Some(Value::Object(object));
                    }
                }
            }
        }

        Ok(signed)
    }
}
