use serde::{Deserialize, Serialize};

/// Configuration for the database connection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Name of the database.
    pub name: String,
    /// Host of the database.
    pub host: String,
    /// Port of the database.
    pub port: u16,
    /// Username to use to authenticate to the database.
    pub username: String,
    /// Password to use to authenticate to the database.
    pub password: Option<String>,
    /// Maximum number of connections in the connection pool.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: "taskping".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            password: None,
            max_connections: 100,
        }
    }
}
