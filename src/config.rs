use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub profiles_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub gemini_api_key: SecretString,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub collaborator_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "swiftprep-local".to_string()),
            profiles_collection: env::var("PROFILES_COLLECTION")
                .unwrap_or_else(|_| "profiles".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_else(|_| "dev_gemini_api_key".to_string()),
            ),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash-lite".to_string()),
            collaborator_timeout_secs: env::var("COLLABORATOR_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let api_key = self.gemini_api_key.expose_secret();

        if api_key == "dev_gemini_api_key" {
            panic!(
                "FATAL: GEMINI_API_KEY is using default value! Set GEMINI_API_KEY environment variable."
            );
        }

        if self.collaborator_timeout_secs == 0 {
            panic!("FATAL: COLLABORATOR_TIMEOUT_SECS must be greater than zero.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "swiftprep-test".to_string(),
            profiles_collection: "profiles".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            gemini_api_key: SecretString::from("test_gemini_api_key".to_string()),
            gemini_base_url: "http://localhost:9090".to_string(),
            gemini_model: "gemini-2.0-flash-lite".to_string(),
            collaborator_timeout_secs: 5,
        }
    }
}
