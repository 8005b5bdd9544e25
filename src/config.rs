use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Outbound webhook for lead notifications. Absence is a valid, silent
    /// operating mode: the dispatcher becomes a no-op.
    pub notify_webhook_url: Option<String>,
    /// Source tag stamped onto every persisted lead.
    pub lead_source: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("DATABASE_URL cannot be empty");
                    }
                    if !url.starts_with("postgresql://") && !url.starts_with("postgres://") {
                        anyhow::bail!("DATABASE_URL must start with postgresql:// or postgres://");
                    }
                    Ok(url)
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            notify_webhook_url: match std::env::var("NOTIFY_WEBHOOK_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
            {
                Some(url) => {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("NOTIFY_WEBHOOK_URL must start with http:// or https://");
                    }
                    Some(url)
                }
                None => None,
            },
            lead_source: std::env::var("LEAD_SOURCE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "unified-form".to_string()),
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!(
            "Database URL: {}...",
            &config.database_url[..20.min(config.database_url.len())]
        );
        if let Some(ref url) = config.notify_webhook_url {
            tracing::info!("Notification webhook configured: {}", url);
        } else {
            tracing::warn!("NOTIFY_WEBHOOK_URL not set; lead notifications disabled");
        }
        tracing::debug!("Lead source tag: {}", config.lead_source);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
