//! Server structure enumeration

use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::error::{Result, classify_driver_error};
use crate::model::{CollectionInfo, DatabaseInfo, ServerInfo};

impl super::Gateway {
    /// List every database and, per database, every collection name.
    ///
    /// Databases are visited sequentially, one listing round trip each, in
    /// the order the server reports them. The hierarchy is rebuilt from
    /// scratch on every call.
    ///
    /// # Returns
    /// * `Result<ServerInfo>` - The full hierarchy, or the configuration
    ///   error wrapping the failure
    pub async fn enumerate(&self, server: &ServerConfig) -> Result<ServerInfo> {
        info!("Enumerating structure of {}", server.address());

        let client = self.connect(server).await?;
        let mut info = ServerInfo::new(&server.host, server.port);

        let names = client
            .list_database_names()
            .await
            .map_err(|e| classify_driver_error(&server.address(), e))?;

        for name in names {
            let database = client.database(&name);
            let mut database_info = DatabaseInfo::new(&name);

            let collections = database
                .list_collection_names()
                .await
                .map_err(|e| classify_driver_error(&server.address(), e))?;

            debug!("Database '{}' has {} collections", name, collections.len());
            for collection in collections {
                database_info.add_collection(CollectionInfo::new(collection, &name));
            }

            info.add_database(database_info);
        }

        info!("Enumerated {} databases", info.databases.len());
        Ok(info)
    }
}
