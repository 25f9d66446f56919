//! Interaction Store Config

use clap::Args;

use tableside_app::domain::feedback::SheetStoreConfig;

/// Sheet-backed interaction store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Webhook address of the sheet script recording interactions
    #[arg(long, env = "SHEETS_WEBHOOK_URL")]
    pub sheets_webhook_url: String,
}

impl From<StoreConfig> for SheetStoreConfig {
    fn from(config: StoreConfig) -> Self {
        Self {
            webhook_url: config.sheets_webhook_url,
        }
    }
}
