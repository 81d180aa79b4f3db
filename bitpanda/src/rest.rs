//! REST operations.
//!
//! The request plumbing plus the public market data operations. Private
//! operations share the same [`Bitpanda::request`] path: the unsigned
//! descriptor and the residual parameters go through the bearer-token signer
//! before hitting the transport.

use crate::{auth::BitpandaAuth, constants::endpoints, parser, Bitpanda};
use bitpanda_core::{
    parser_utils::safe_integer,
    request::{HttpMethod, Params},
    EndpointType, Error, Market, ParseError, Result, Signer,
};
use serde_json::Value;
use tracing::debug;

impl Bitpanda {
    fn authenticator(&self) -> Result<BitpandaAuth> {
        let api_key = self
            .config()
            .api_key
            .clone()
            .ok_or_else(|| Error::authentication("private endpoints require an apiKey"))?;
        BitpandaAuth::new(api_key)
    }

    /// Builds, signs (for private endpoints), and executes a request.
    pub async fn request(
        &self,
        path: &str,
        endpoint_type: EndpointType,
        method: HttpMethod,
        params: Params,
    ) -> Result<Value> {
        let (request, residual) = self.sign(path, endpoint_type, method, params, None, None)?;
        let request = match endpoint_type {
            EndpointType::Public => request,
            EndpointType::Private => self.authenticator()?.sign(request, &residual)?,
        };

        debug!(
            exchange = self.id(),
            partition = %endpoint_type,
            method = %method,
            url = %request.url,
            "sending request"
        );
        self.transport().execute(request).await
    }

    /// Fetch the exchange server time in epoch milliseconds.
    ///
    /// Response sample:
    ///
    /// ```json
    /// {
    ///     "iso": "2020-07-10T05:17:26.716Z",
    ///     "epoch_millis": 1594358246716
    /// }
    /// ```
    pub async fn fetch_time(&self) -> Result<i64> {
        let response = self
            .request(
                endpoints::public::TIME,
                EndpointType::Public,
                HttpMethod::Get,
                Vec::new(),
            )
            .await?;

        safe_integer(&response, "epoch_millis")
            .ok_or_else(|| ParseError::missing_field("epoch_millis").into())
    }

    /// Fetch all trading markets in canonical form.
    ///
    /// Inactive instruments are included with `active == false`; the output
    /// preserves the exchange's ordering. Response sample:
    ///
    /// ```json
    /// [
    ///     {
    ///         "state": "ACTIVE",
    ///         "base": {"code": "ETH", "precision": 8},
    ///         "quote": {"code": "CHF", "precision": 2},
    ///         "amount_precision": 4,
    ///         "market_precision": 2,
    ///         "min_size": "10.0"
    ///     }
    /// ]
    /// ```
    pub async fn fetch_markets(&self) -> Result<Vec<Market>> {
        let response = self
            .request(
                endpoints::public::INSTRUMENTS,
                EndpointType::Public,
                HttpMethod::Get,
                Vec::new(),
            )
            .await?;

        let markets = parser::parse_markets(&response, self.currencies())?;
        debug!(exchange = self.id(), count = markets.len(), "parsed markets");
        Ok(markets)
    }
}
