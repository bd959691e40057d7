use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_url: String,
    pub database_name: String,
    /// Collection holding pet documents
    pub pets_collection: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mongodb_url: env::var("MONGODB_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "petai".to_string()),
            pets_collection: env::var("PETS_COLLECTION").unwrap_or_else(|_| "pets".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}
