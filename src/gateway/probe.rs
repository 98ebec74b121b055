//! Connectivity and credential verification

use mongodb::bson::doc;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::error::{ConfigurationError, Result, classify_driver_error};

impl super::Gateway {
    /// Verify that the server is reachable and, when a username is
    /// configured, that the credentials are accepted.
    ///
    /// The probe lists databases and fails if none exist. The credential
    /// check then authenticates against the FIRST listed database only;
    /// that mirrors the hosting application's historical behavior and is
    /// not a general credential check (a user scoped to another database
    /// will fail here).
    ///
    /// # Returns
    /// * `Result<()>` - Ok, or the configuration error wrapping the failure
    pub async fn verify(&self, server: &ServerConfig) -> Result<()> {
        info!("Verifying connectivity to {}", server.address());

        let client = self.connect(server).await?;

        let databases = client
            .list_database_names()
            .await
            .map_err(|e| classify_driver_error(&server.address(), e))?;

        if databases.is_empty() {
            return Err(ConfigurationError::NoDatabases.into());
        }
        debug!("Found {} databases", databases.len());

        if let Some(username) = server.username_if_set() {
            if let Some(probe_db) = databases.first() {
                debug!(
                    "Probing credentials for '{}' against database '{}'",
                    username, probe_db
                );

                let authenticated = self.connect_authenticated(server, probe_db).await?;
                authenticated
                    .database(probe_db)
                    .run_command(doc! { "ping": 1 })
                    .await
                    .map_err(|e| classify_driver_error(&server.address(), e))?;
            }
        }

        info!("Server {} verified", server.address());
        Ok(())
    }
}
