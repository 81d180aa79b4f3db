//! Narrow seams between an adapter and its collaborators.
//!
//! Adapters compose these traits instead of inheriting from a base exchange:
//! the request-construction core stays pure and synchronous, while network
//! I/O and authentication live behind [`Transport`] and [`Signer`]
//! implementations injected at construction time.

use crate::error::Result;
use crate::request::RequestDescriptor;
use async_trait::async_trait;
use serde_json::Value;

/// Executes a fully-formed request and returns the decoded JSON response.
///
/// Owns all network concerns: connection handling, timeouts, cancellation,
/// and mapping of HTTP failures onto the error taxonomy. Errors it produces
/// must pass through the adapter unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` and decode the response body as JSON.
    async fn execute(&self, request: RequestDescriptor) -> Result<Value>;
}

/// Turns an unsigned request into an authenticated one.
///
/// Invoked for private endpoints only, after the request builder has
/// produced the unsigned descriptor and the residual (non-path) parameters.
/// The signer decides where residual parameters belong (query string, body)
/// and which authentication headers to add.
pub trait Signer: Send + Sync {
    /// Sign `request`, consuming the residual `params`.
    fn sign(&self, request: RequestDescriptor, params: &[(String, String)])
        -> Result<RequestDescriptor>;
}
