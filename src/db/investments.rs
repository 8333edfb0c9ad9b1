use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use tracing::debug;

use crate::db::errors::{DatabaseError, Result};
use crate::models::{InvestmentDocument, NewInvestment};

/// Collection holding investment records.
pub const COLLECTION: &str = "investments";

/// Fetch every record in the collection, in store-native order.
pub async fn list_investments(
    investments: &Collection<InvestmentDocument>,
) -> Result<Vec<InvestmentDocument>> {
    let cursor = investments.find(None, None).await?;
    let records: Vec<InvestmentDocument> = cursor.try_collect().await?;

    debug!(count = records.len(), "Listed investments");
    Ok(records)
}

/// Insert a record and return the identifier the store assigned to it.
pub async fn insert_investment(
    investments: &Collection<NewInvestment>,
    record: NewInvestment,
) -> Result<ObjectId> {
    let result = investments.insert_one(record, None).await?;

    match result.inserted_id.as_object_id() {
        Some(id) => {
            debug!(id = %id, "Inserted investment");
            Ok(id)
        }
        None => Err(DatabaseError::UnexpectedId(result.inserted_id.to_string())),
    }
}

/// Delete a record by its identifier string.
///
/// No existence check is performed: deleting an identifier that matches
/// nothing still succeeds. Only a malformed identifier or a driver failure
/// is an error.
pub async fn delete_investment(
    investments: &Collection<InvestmentDocument>,
    id: &str,
) -> Result<()> {
    let object_id =
        ObjectId::parse_str(id).map_err(|e| DatabaseError::InvalidId(format!("{}: {}", id, e)))?;

    let result = investments.delete_one(doc! { "_id": object_id }, None).await?;

    debug!(id = %object_id, deleted = result.deleted_count, "Delete issued");
    Ok(())
}
