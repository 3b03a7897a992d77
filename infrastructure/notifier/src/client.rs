use reqwest::Client;

/// Shared HTTP client configuration for the reminder webhook.
pub struct WebhookClient {
    pub client: Client,
    pub base_url: String,
}

impl WebhookClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the reminders collection endpoint URL.
    pub fn reminders_url(&self) -> String {
        format!("{}/reminders", self.base_url)
    }
}
