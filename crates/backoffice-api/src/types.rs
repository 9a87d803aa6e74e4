//! Request and response contracts for the dashboard service endpoints.
//!
//! Every response type is a flat record matching the decoded JSON body.
//! Field names use camelCase on the wire via `#[serde(rename_all = "camelCase")]`.
//! Unknown fields are ignored so additive server changes do not break decoding.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Identifiers ──────────────────────────────────────────────────────

/// Record identifier as the service sends it: a JSON number or a string.
///
/// Serializes back in the form it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

// ── Pagination ───────────────────────────────────────────────────────

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total: u64,
}

// ── QR location types ────────────────────────────────────────────────

/// Filters for `GET /qr-location-type`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrLocationTypeListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One QR location type row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrLocationType {
    pub id: RecordId,
    pub name: String,
}

/// Merchant location attached to the location-type listing.
///
/// The service returns a loosely specified record here; the identifying
/// fields are modeled and the rest is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantLocation {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Response of `GET /qr-location-type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrLocationTypeListResponse {
    pub items: Vec<QrLocationType>,
    #[serde(default)]
    pub merchant_location_list: Vec<MerchantLocation>,
    #[serde(default)]
    pub pagination: Pagination,
}

// ── QR types ─────────────────────────────────────────────────────────

/// Filters for `GET /qr-type`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrTypeListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub qr_type: Option<String>,
}

/// Response of `GET /qr-type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrTypeListResponse {
    pub qr_type: Vec<String>,
}

// ── Merchant ─────────────────────────────────────────────────────────

/// Body of `POST /merchant/cashout/inquiry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantCreateQrRequest {
    pub amount: u64,
    pub merchant_code: String,
}

/// Response of `POST /merchant/cashout/inquiry`: the amount encoded in the
/// generated QR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantCreateQrResponse {
    pub amount: u64,
}

/// Query of `GET /merchant/transaction-history/print`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantTransactionHistoryPrintParams {
    pub id: String,
}

/// Response of `GET /merchant/transaction-history/print`: where the
/// rendered document can be downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantTransactionHistoryPrintResponse {
    pub url: String,
}
