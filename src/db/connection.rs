use mongodb::{Client, Database};
use tracing::info;

use crate::db::errors::{DatabaseError, Result};

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "investments";

/// Construct a MongoDB client and resolve the working database.
///
/// The driver connects lazily, so this succeeds as long as the URI parses;
/// an unreachable server only surfaces once the first operation runs. The
/// returned handle is cloned into the router state rather than stashed in a
/// process-global, so handlers receive it explicitly.
pub async fn connect(uri: &str) -> Result<Database> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| DatabaseError::Connection(format!("Failed to create client: {}", e)))?;

    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    info!(database = %database.name(), "MongoDB client initialized");

    Ok(database)
}
