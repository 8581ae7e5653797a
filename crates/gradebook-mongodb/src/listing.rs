//! Full-collection listing

use bson::{doc, Document as BsonDocument};
use futures::TryStreamExt;
use gradebook_common::Result;
use mongodb::Collection;
use tracing::debug;

/// Lists all documents in a collection, in driver-default order.
///
/// No filter, no projection, no bound on result size; memory use grows
/// linearly with the collection. An empty collection yields an empty `Vec`.
pub async fn list_all(collection: &Collection<BsonDocument>) -> Result<Vec<BsonDocument>> {
    debug!("Listing all documents in collection '{}'", collection.name());

    let cursor = collection.find(doc! {}).await?;
    let documents: Vec<BsonDocument> = cursor.try_collect().await?;

    debug!("Listed {} documents", documents.len());
    Ok(documents)
}

/// Counts all documents in a collection.
pub async fn count_all(collection: &Collection<BsonDocument>) -> Result<u64> {
    let count = collection.count_documents(doc! {}).await?;
    Ok(count)
}
