// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crystal_kernel::proof::ProofData;
use crystal_kernel::types::account::AccountInfo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
pub struct QueryRequest {
    /// `None` for missing or `null`; both are rejected as an empty account.
    #[serde(default)]
    pub account: Option<String>,
}

impl QueryRequest {
    /// Decodes a request body.
    ///
    /// Accepts a JSON object or a bare `null`. The `account` key is matched
    /// exactly first, then ASCII case-insensitively, so `{"Account": ..}`
    /// is understood. A non-string, non-null `account` is malformed.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let map = match serde_json::from_slice::<Value>(body).ok()? {
            Value::Null => return Some(Self::default()),
            Value::Object(map) => map,
            _ => return None,
        };

        let value = map.get("account").or_else(|| {
            map.iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("account"))
                .map(|(_, v)| v)
        });

        match value {
            None | Some(Value::Null) => Some(Self::default()),
            Some(Value::String(s)) => Some(Self { account: Some(s.clone()) }),
            Some(_) => None,
        }
    }

    pub fn into_account(self) -> String {
        self.account.unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QueryResponse {
    pub account: AccountInfo,
    pub proof: ProofData,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub endpoints: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(body: &str) -> Option<Option<String>> {
        QueryRequest::from_body(body.as_bytes()).map(|r| r.account)
    }

    #[test]
    fn test_exact_key() {
        assert_eq!(account(r#"{"account":"acc://a.acme"}"#), Some(Some("acc://a.acme".into())));
    }

    #[test]
    fn test_null_is_missing() {
        assert_eq!(account(r#"{"account":null}"#), Some(None));
        assert_eq!(account("null"), Some(None));
        assert_eq!(account("{}"), Some(None));
    }

    #[test]
    fn test_key_case_insensitive() {
        assert_eq!(account(r#"{"Account":"acc://a.acme"}"#), Some(Some("acc://a.acme".into())));
        assert_eq!(account(r#"{"ACCOUNT":"acc://b.acme"}"#), Some(Some("acc://b.acme".into())));
        assert_eq!(
            account(r#"{"Account":"acc://upper.acme","account":"acc://exact.acme"}"#),
            Some(Some("acc://exact.acme".into())),
            "exact key wins"
        );
    }

    #[test]
    fn test_malformed() {
        assert_eq!(account(""), None);
        assert_eq!(account("not json"), None);
        assert_eq!(account(r#"{"account":42}"#), None);
        assert_eq!(account(r#"["acc://x"]"#), None);
        assert_eq!(account(r#""acc://x""#), None);
    }
}
