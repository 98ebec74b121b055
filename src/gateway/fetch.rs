//! Document retrieval
//!
//! One fetch call runs exactly one of: a full scan, a filtered find, or an
//! aggregation, selected by [`QueryOptions::plan`] before dispatch.

use futures::stream::TryStreamExt;
use mongodb::bson::Document;
use mongodb::{Collection, Cursor};
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::error::{Result, classify_driver_error};
use crate::model::{CollectionInfo, CollectionResult};
use crate::query::{QueryOptions, QueryPlan};

impl super::Gateway {
    /// Fetch documents from one collection.
    ///
    /// Results are appended in the order the server returns them; a single
    /// error aborts the whole call. The cursor is owned by this call and
    /// dropped on every exit path, normal completion and mid-iteration
    /// errors alike.
    ///
    /// # Arguments
    /// * `server` - Connection parameters
    /// * `collection` - Target collection
    /// * `options` - Optional filter/project/group documents
    ///
    /// # Returns
    /// * `Result<CollectionResult>` - Ordered documents, or the
    ///   configuration error wrapping the failure
    pub async fn fetch(
        &self,
        server: &ServerConfig,
        collection: &CollectionInfo,
        options: &QueryOptions,
    ) -> Result<CollectionResult> {
        info!(
            "Fetching from '{}.{}'",
            collection.database, collection.name
        );

        let client = self.connect(server).await?;
        let target: Collection<Document> = client
            .database(&collection.database)
            .collection(&collection.name);

        let cursor = match options.plan() {
            QueryPlan::FullScan => {
                debug!("Running full scan");
                target.find(Document::new()).await
            }
            QueryPlan::Find(filter) => {
                debug!("Running filtered find");
                target.find(filter).await
            }
            QueryPlan::Aggregate(pipeline) => {
                debug!("Running aggregation with {} stages", pipeline.len());
                target.aggregate(pipeline).await
            }
        }
        .map_err(|e| classify_driver_error(&server.address(), e))?;

        let mut result = CollectionResult::new(&collection.name);
        drain(cursor, &mut result, &server.address()).await?;

        info!(
            "Retrieved {} documents from '{}'",
            result.len(),
            result.collection
        );
        Ok(result)
    }
}

/// Append every cursor document in server order.
///
/// Takes the cursor by value so it is dropped exactly once when this
/// returns, whether iteration completed or failed partway.
async fn drain(
    mut cursor: Cursor<Document>,
    result: &mut CollectionResult,
    server: &str,
) -> Result<()> {
    while let Some(document) = cursor
        .try_next()
        .await
        .map_err(|e| classify_driver_error(server, e))?
    {
        result.push(document);
    }
    Ok(())
}
