// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Upstream ledger client.
//!
//! One JSON-RPC `query` call per account, no retries. The response is decoded
//! permissively: each field the service cares about is read on its own and
//! dropped if absent or of the wrong type.

use crate::errors::NodeError;
use crystal_kernel::types::account::AccountSnapshot;
use crystal_kernel::types::id::AccountId;
use reqwest::Client;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

#[derive(Serialize, Debug)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: QueryParams<'a>,
}

#[derive(Serialize, Debug)]
struct QueryParams<'a> {
    url: &'a str,
}

impl<'a> RpcRequest<'a> {
    fn query(account: &'a AccountId) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method: "query",
            params: QueryParams { url: account.as_str() },
        }
    }
}

#[derive(Deserialize, Debug)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<RpcResult>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
struct RpcResult {
    #[serde(default)]
    data: Option<Map<String, Value>>,
}

#[derive(Deserialize, Debug)]
struct RpcError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Balance {
    Text(String),
    Number(f64),
}

/// The account fields we read out of `result.data`.
#[derive(Deserialize, Debug, Default)]
pub struct LedgerAccountData {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    account_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    balance: Option<Balance>,
    #[serde(default, rename = "creditBalance", deserialize_with = "lenient")]
    credit_balance: Option<f64>,
}

/// Present and well-typed, or `None`. Never an error.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

impl LedgerAccountData {
    pub fn from_object(data: Map<String, Value>) -> Self {
        serde_json::from_value(Value::Object(data)).unwrap_or_default()
    }

    pub fn into_snapshot(self) -> AccountSnapshot {
        AccountSnapshot {
            account_type: self.account_type,
            token_balance: self.balance.map(|b| match b {
                Balance::Text(s) => s,
                Balance::Number(n) => format!("{:.0}", n),
            }),
            credit_balance: self.credit_balance.map(|c| c.trunc() as i64),
        }
    }
}

/// Extracts the account snapshot from a raw JSON-RPC response body.
pub fn decode_query_response(body: &[u8]) -> Result<AccountSnapshot, NodeError> {
    let envelope: RpcEnvelope = serde_json::from_slice(body)
        .map_err(|e| NodeError::Upstream(format!("malformed response: {}", e)))?;

    if let Some(err) = envelope.error {
        return Err(NodeError::Upstream(format!(
            "rpc error {}: {}",
            err.code, err.message
        )));
    }

    let data = envelope
        .result
        .and_then(|r| r.data)
        .ok_or_else(|| NodeError::Upstream("unexpected API response format".to_string()))?;

    Ok(LedgerAccountData::from_object(data).into_snapshot())
}

#[derive(Debug, Clone)]
pub struct LedgerClient {
    endpoint: String,
    client: Client,
}

impl LedgerClient {
    pub fn new(endpoint: String, timeout: Option<Duration>) -> Result<Self, NodeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| NodeError::Init(format!("ledger client init failed: {}", e)))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn query_account(&self, account: &AccountId) -> Result<AccountSnapshot, NodeError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&RpcRequest::query(account))
            .send()
            .await
            .map_err(|e| NodeError::Upstream(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(NodeError::Upstream(format!(
                "query request failed: {}",
                resp.status()
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| NodeError::Upstream(e.to_string()))?;

        decode_query_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(v: Value) -> Result<AccountSnapshot, NodeError> {
        decode_query_response(&serde_json::to_vec(&v).unwrap())
    }

    #[test]
    fn test_request_envelope() {
        let account = AccountId::new("acc://alice.acme/tokens").unwrap();
        let v = serde_json::to_value(RpcRequest::query(&account)).unwrap();
        assert_eq!(
            v,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "query",
                "params": { "url": "acc://alice.acme/tokens" }
            })
        );
    }

    #[test]
    fn test_string_fields() {
        let snap = decode(json!({
            "result": { "data": {
                "type": "liteTokenAccount",
                "balance": "500",
                "creditBalance": 10.0
            }}
        }))
        .unwrap();
        assert_eq!(snap.account_type.as_deref(), Some("liteTokenAccount"));
        assert_eq!(snap.token_balance.as_deref(), Some("500"));
        assert_eq!(snap.credit_balance, Some(10));
    }

    #[test]
    fn test_numeric_balance_and_fractional_credits() {
        let snap = decode(json!({
            "result": { "data": { "balance": 1250000000.0, "creditBalance": 99.9 } }
        }))
        .unwrap();
        assert_eq!(snap.token_balance.as_deref(), Some("1250000000"));
        assert_eq!(snap.credit_balance, Some(99));
        assert_eq!(snap.account_type, None);
    }

    #[test]
    fn test_wrong_types_are_dropped_individually() {
        let snap = decode(json!({
            "result": { "data": {
                "type": 7,
                "balance": ["500"],
                "creditBalance": "10"
            }}
        }))
        .unwrap();
        assert_eq!(snap, AccountSnapshot::default());

        let snap = decode(json!({
            "result": { "data": { "type": null, "balance": "3" } }
        }))
        .unwrap();
        assert_eq!(snap.account_type, None);
        assert_eq!(snap.token_balance.as_deref(), Some("3"));
    }

    #[test]
    fn test_unexpected_shapes_are_errors() {
        assert!(decode(json!({ "result": {} })).is_err());
        assert!(decode(json!({ "result": { "data": "nope" } })).is_err());
        assert!(decode(json!({ "result": "nope" })).is_err());
        assert!(decode(json!({})).is_err());
        assert!(decode(json!({ "error": { "code": -32601, "message": "not found" } })).is_err());
        assert!(decode_query_response(b"<html>bad gateway</html>").is_err());
    }
}
