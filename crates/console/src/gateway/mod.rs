//! Remote call gateway - the single chokepoint for all backend calls.
//!
//! Every backend operation is the same POST to one endpoint URL,
//! selected by a transaction code (`trcode`) inside a fixed envelope:
//!
//! ```json
//! {
//!   "head": { "queryType": "T", "endpoint": "ad_user", "trcode": "ad_user_get" },
//!   "body": { "InBlock1": [ { ...input row... } ] }
//! }
//! ```
//!
//! Responses come back as `{ "body": { "OutBlock1": [ ...rows... ] } }`
//! and the gateway unwraps them to the row vec. There is no retry and
//! no backoff: a failed call surfaces immediately to the caller, and a
//! fixed 5-second ceiling turns a hung call into [`GatewayError::Timeout`].
//!
//! Typed call methods, one per trcode, live in the submodules
//! (`auth`, `users`, `accounts`, `assets`, `master`) as impl blocks on
//! [`Gateway`]. The lone exception to the envelope is the
//! deposit/withdraw listing (`transactions`), a plain REST resource
//! beside the call endpoint.

mod accounts;
mod assets;
mod auth;
mod master;
mod transactions;
mod users;

pub use accounts::AccountRegisterInput;
pub use transactions::TransactionFilter;
pub use users::UserUpdateInput;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use url::Url;

use crate::config::ConsoleConfig;

/// Fixed per-call timeout; a hung call fails rather than blocking the
/// console.
const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// The only query type the console issues.
const QUERY_TYPE: &str = "T";

/// Endpoint for auth, user, and agreement trcodes.
pub(crate) const ENDPOINT_USER: &str = "ad_user";
/// Endpoint for account, asset, and master trcodes.
pub(crate) const ENDPOINT_PRODUCT: &str = "ad_product";

/// Errors surfaced by the gateway.
///
/// The taxonomy is deliberately small: a call either did not complete
/// (`Transport`/`Timeout`), completed but was rejected by the backend
/// (`Rejected`), or produced a reply the envelope contract does not
/// allow (`Shape`/`EmptyReply`).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed before a response arrived.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The 5-second call ceiling elapsed.
    #[error("call timed out after {}s", CALL_TIMEOUT.as_secs())]
    Timeout,

    /// The backend answered with a non-success status.
    #[error("backend rejected {trcode} with status {status}")]
    Rejected { trcode: String, status: u16 },

    /// The reply body did not match the envelope shape.
    #[error("malformed reply envelope: {0}")]
    Shape(String),

    /// A call that must return one row returned none.
    #[error("empty reply for {trcode}")]
    EmptyReply { trcode: &'static str },
}

#[derive(Serialize)]
struct CallHead<'a> {
    #[serde(rename = "queryType")]
    query_type: &'a str,
    endpoint: &'a str,
    trcode: &'a str,
}

#[derive(Serialize)]
struct CallBody<I> {
    #[serde(rename = "InBlock1")]
    in_block1: [I; 1],
}

#[derive(Serialize)]
struct CallEnvelope<'a, I> {
    head: CallHead<'a>,
    body: CallBody<I>,
}

#[derive(Deserialize)]
struct ReplyEnvelope<O> {
    body: ReplyBody<O>,
}

#[derive(Deserialize)]
struct ReplyBody<O> {
    // The path form keeps serde from bounding `O: Default`; row types
    // need only Deserialize.
    #[serde(rename = "OutBlock1", default = "Vec::new")]
    out_block1: Vec<O>,
}

/// Remote call gateway.
///
/// Cheap to clone; the HTTP client and endpoint URL live behind an
/// `Arc`. Constructed once after configuration loads and passed by
/// reference to every controller.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    client: reqwest::Client,
    api_url: Url,
}

impl Gateway {
    /// Create a new gateway for the configured endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized.
    #[must_use]
    pub fn new(config: &ConsoleConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(CALL_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GatewayInner {
                client,
                api_url: config.api_url.clone(),
            }),
        }
    }

    /// Issue one enveloped call and unwrap the reply rows.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`]; no failure is retried here.
    pub(crate) async fn call<I, O>(
        &self,
        endpoint: &str,
        trcode: &str,
        input: I,
    ) -> Result<Vec<O>, GatewayError>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let envelope = CallEnvelope {
            head: CallHead {
                query_type: QUERY_TYPE,
                endpoint,
                trcode,
            },
            body: CallBody { in_block1: [input] },
        };

        let response = self
            .inner
            .client
            .post(self.inner.api_url.clone())
            .json(&envelope)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Rejected {
                trcode: trcode.to_string(),
                status: status.as_u16(),
            });
        }

        let reply: ReplyEnvelope<O> = response.json().await.map_err(map_transport)?;
        Ok(reply.body.out_block1)
    }
}

fn map_transport(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_decode() {
        GatewayError::Shape(error.to_string())
    } else {
        GatewayError::Transport(error)
    }
}

/// Reply row for mutation calls whose payload the console ignores.
pub(crate) type AckRow = serde_json::Value;

/// Serializes as `{}` - the input row for parameterless fetches.
#[derive(Serialize)]
pub(crate) struct EmptyInput {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wire_shape() {
        #[derive(Serialize)]
        struct Input<'a> {
            search_word: &'a str,
            next_key: Option<&'a str>,
        }

        let envelope = CallEnvelope {
            head: CallHead {
                query_type: QUERY_TYPE,
                endpoint: ENDPOINT_USER,
                trcode: "ad_user_get",
            },
            body: CallBody {
                in_block1: [Input {
                    search_word: "Kim",
                    next_key: None,
                }],
            },
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["head"]["queryType"], "T");
        assert_eq!(json["head"]["endpoint"], "ad_user");
        assert_eq!(json["head"]["trcode"], "ad_user_get");
        assert_eq!(json["body"]["InBlock1"][0]["search_word"], "Kim");
        assert!(json["body"]["InBlock1"][0]["next_key"].is_null());
    }

    #[test]
    fn test_reply_unwraps_out_block() {
        let raw = r#"{"body":{"OutBlock1":[{"user_uid":"U1"},{"user_uid":"U2"}]}}"#;
        let reply: ReplyEnvelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(reply.body.out_block1.len(), 2);
    }

    #[test]
    fn test_reply_missing_out_block_defaults_empty() {
        let raw = r#"{"body":{}}"#;
        let reply: ReplyEnvelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(reply.body.out_block1.is_empty());
    }

    #[test]
    fn test_reply_parses_rows_without_a_default_impl() {
        // Master and identity rows have no Default; the envelope must
        // deserialize for them all the same.
        let raw = r#"{"body":{"OutBlock1":[{"exchange_code":"KRX","symbol_code":"005930"}]}}"#;
        let reply: ReplyEnvelope<ledgerdesk_core::SymbolRow> = serde_json::from_str(raw).unwrap();
        assert_eq!(reply.body.out_block1.len(), 1);

        let raw = r#"{"body":{}}"#;
        let reply: ReplyEnvelope<ledgerdesk_core::AdminSession> = serde_json::from_str(raw).unwrap();
        assert!(reply.body.out_block1.is_empty());
    }

    #[test]
    fn test_empty_input_serializes_as_object() {
        let json = serde_json::to_string(&EmptyInput {}).unwrap();
        assert_eq!(json, "{}");
    }
}
