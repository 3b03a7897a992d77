use super::{cors_config, reminder_config::ReminderConfig, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub reminders: ReminderConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            reminders: ReminderConfig::from_env()?,
        })
    }
}
