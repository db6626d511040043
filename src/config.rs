//! Build-Time Configuration
//!
//! CSR builds have no runtime environment, so deployment values are baked
//! in at compile time. Every knob has a local-dev default.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin, no trailing slash
    pub api_url: String,
    /// App id handed to the chat vendor SDK
    pub chat_app_id: String,
    /// Websocket origin the chat SDK connects to
    pub socket_url: String,
    pub support_email: String,
    pub docs_url: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        AppConfig {
            api_url: trimmed(option_env!("STUDYFLOW_API_URL").unwrap_or("http://localhost:8080")),
            chat_app_id: option_env!("STUDYFLOW_CHAT_APP_ID").unwrap_or("studyflow-dev").to_string(),
            socket_url: trimmed(option_env!("STUDYFLOW_SOCKET_URL").unwrap_or("ws://localhost:8081")),
            support_email: option_env!("STUDYFLOW_SUPPORT_EMAIL")
                .unwrap_or("support@studyflow.app")
                .to_string(),
            docs_url: option_env!("STUDYFLOW_DOCS_URL")
                .unwrap_or("https://docs.studyflow.app")
                .to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn trimmed(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        let config = AppConfig::from_build_env();
        assert!(!config.api_url.ends_with('/'));
        assert!(!config.chat_app_id.is_empty());
        assert_eq!(config.endpoint("/api/tasks"), format!("{}/api/tasks", config.api_url));
    }
}
