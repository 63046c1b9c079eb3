//! Domain DTOs for the accounts API.
//!
//! # Design
//! Shapes mirror the wire format of the remote service. Identifiers stay
//! opaque strings (the server validates that they are UUIDs), every
//! attribute is optional and omitted from JSON when unset, and no
//! cross-field validation happens client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire-level wrapper used by every endpoint.
///
/// Outbound payloads travel as `{"data": ...}`. Responses carry either
/// `data` or a non-empty `error_message`; when the latter is present the
/// payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> Envelope<T> {
    /// Request envelope around an outbound payload.
    pub fn wrap(data: T) -> Self {
        Self {
            data: Some(data),
            error_message: None,
        }
    }
}

/// An account resource as represented on the wire.
///
/// `id` is immutable once created. `version` is assigned by the server,
/// starts at 0, and must match the server's current value for a delete to
/// succeed. The timestamps only ever appear in server responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub organisation_id: String,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default)]
    pub version: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AccountAttributes>,
}

/// Attributes payload of an [`Account`].
///
/// Enumerated fields are open `String`s; the sets the API accepts are
/// listed in [`crate::consts`]. Validation is entirely server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_matching_opt_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_identification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switched: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;

    #[test]
    fn unset_fields_are_omitted_from_json() {
        let account = Account {
            id: "a".to_string(),
            organisation_id: "b".to_string(),
            account_type: consts::ACCOUNT_TYPE.to_string(),
            version: 0,
            attributes: Some(AccountAttributes {
                account_classification: Some(consts::classification::PERSONAL.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(
            json,
            r#"{"id":"a","organisation_id":"b","type":"accounts","version":0,"attributes":{"account_classification":"Personal"}}"#
        );
    }

    #[test]
    fn server_response_deserializes_with_timestamps() {
        let body = r#"{
            "id": "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
            "organisation_id": "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
            "type": "accounts",
            "version": 0,
            "created_on": "2024-03-01T09:30:00Z",
            "modified_on": "2024-03-01T09:30:00Z",
            "attributes": {
                "account_classification": "Personal",
                "alternative_names": ["foo", "bar"],
                "bank_id": "400300",
                "bank_id_code": "GBDSC",
                "base_currency": "GBP",
                "country": "GB",
                "name": ["ada", "lovelace"],
                "status": "confirmed"
            }
        }"#;
        let account: Account = serde_json::from_str(body).unwrap();
        assert_eq!(account.account_type, consts::ACCOUNT_TYPE);
        assert!(account.created_on.is_some());
        assert!(account.modified_on.is_some());
        let attributes = account.attributes.unwrap();
        assert_eq!(attributes.bank_id_code.as_deref(), Some("GBDSC"));
        assert_eq!(attributes.status.as_deref(), Some(consts::status::CONFIRMED));
        assert!(attributes.iban.is_none());
        assert!(attributes.joint_account.is_none());
    }

    #[test]
    fn request_envelope_serializes_to_data_only() {
        let envelope = Envelope::wrap(serde_json::json!({"id": "1"}));
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"data":{"id":"1"}}"#
        );
    }

    #[test]
    fn error_envelope_deserializes_without_data() {
        let envelope: Envelope<Account> =
            serde_json::from_str(r#"{"error_message":"invalid version"}"#).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error_message.as_deref(), Some("invalid version"));
    }
}
