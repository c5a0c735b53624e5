use serde::{Deserialize, Serialize};

/// Document type of per-account profiles.
pub const PROFILE_DOCUMENT_TYPE: &str = "users";

/// Document type of confirmed transfers.
pub const TRANSFER_DOCUMENT_TYPE: &str = "transactions";

/// Type tag the store expects on a cross-document reference.
pub const REFERENCE_TYPE: &str = "reference";

/// Field on a profile holding the ordered transfer references.
pub const PROFILE_TRANSFERS_FIELD: &str = "transactions";

/// One profile per distinct account, keyed by the account address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<DocumentReference>,
}

impl ProfileDocument {
    pub fn new(account: &str, user_name: &str) -> Self {
        Self {
            id: account.to_string(),
            doc_type: PROFILE_DOCUMENT_TYPE.to_string(),
            user_name: user_name.to_string(),
            address: account.to_string(),
            transactions: Vec::new(),
        }
    }
}

/// Durable log entry of one confirmed transfer, keyed by transaction hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "fromAddress")]
    pub from_address: String,
    #[serde(rename = "toAddress")]
    pub to_address: String,
    /// ISO-8601 creation time
    pub timestamp: String,
    /// Human-readable amount in whole native units
    pub amount: f64,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}

impl TransferDocument {
    pub fn new(tx_hash: &str, from: &str, to: &str, amount: f64, timestamp: &str) -> Self {
        Self {
            id: tx_hash.to_string(),
            doc_type: TRANSFER_DOCUMENT_TYPE.to_string(),
            from_address: from.to_string(),
            to_address: to.to_string(),
            timestamp: timestamp.to_string(),
            amount,
            tx_hash: tx_hash.to_string(),
        }
    }

    /// Reference to this transfer for a profile's transfer list.
    pub fn reference(&self) -> DocumentReference {
        DocumentReference::to(&self.id)
    }
}

/// Weak link from one document to another. `_key` is the array item key the
/// store requires on every object inside an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_ref")]
    pub target: String,
    #[serde(rename = "_type")]
    pub ref_type: String,
}

impl DocumentReference {
    pub fn to(document_id: &str) -> Self {
        Self {
            key: document_id.to_string(),
            target: document_id.to_string(),
            ref_type: REFERENCE_TYPE.to_string(),
        }
    }
}
