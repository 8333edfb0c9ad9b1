use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Investment record as stored in MongoDB.
///
/// Every field except the store-assigned `_id` is optional; the collection
/// accepts partial documents and this shape has to read them back without
/// complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub fund: Option<String>,
    pub amount: Option<f64>,
    pub mode: Option<String>,
}

/// Caller-supplied investment fields from the request body.
///
/// Unknown keys are dropped during deserialization; absent fields are not
/// written to the document at all, so partial records stay partial instead
/// of gaining explicit nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvestment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Investment record as serialized in JSON responses.
///
/// Same fields as the stored document, but `_id` is rendered as the plain
/// 24-character hex string rather than BSON extended JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl From<InvestmentDocument> for InvestmentResponse {
    fn from(doc: InvestmentDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            fund: doc.fund,
            amount: doc.amount,
            mode: doc.mode,
        }
    }
}

impl InvestmentResponse {
    /// Build the response for a freshly inserted record from the input fields
    /// and the identifier the store assigned to it.
    pub fn created(id: ObjectId, input: NewInvestment) -> Self {
        Self {
            id: id.to_hex(),
            fund: input.fund,
            amount: input.amount,
            mode: input.mode,
        }
    }
}
