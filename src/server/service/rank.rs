use dioxus_logger::tracing;

use crate::server::{
    config::Config,
    error::AppError,
    model::rank::{RankChange, RankUpdate},
    service::{notification::WebhookNotifier, roblox::RankProvider},
};

/// Service orchestrating a single rank change.
///
/// Re-checks the ranking configuration, calls the Roblox provider, and on success posts
/// the optional Discord notification. Holds only borrowed state, so one is built per
/// request.
pub struct RankService<'a> {
    /// Process configuration.
    pub config: &'a Config,
    /// HTTP client shared by the provider and the notifier.
    pub http_client: &'a reqwest::Client,
}

impl<'a> RankService<'a> {
    /// Creates a new RankService instance.
    ///
    /// # Arguments
    /// - `config` - Reference to the process configuration
    /// - `http_client` - Reference to the HTTP client for outbound requests
    ///
    /// # Returns
    /// - `RankService` - New service instance
    pub fn new(config: &'a Config, http_client: &'a reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Applies a rank change and announces it.
    ///
    /// The notification only runs after Roblox confirmed the change. Its failure is logged
    /// and otherwise ignored, so the result of this method depends on the provider alone.
    ///
    /// # Arguments
    /// - `change` - Validated rank change
    ///
    /// # Returns
    /// - `Ok(RankUpdate)` - Role changed in Roblox
    /// - `Err(AppError::ConfigErr)` - Credential or group id missing; Roblox not contacted
    /// - `Err(AppError::RobloxErr)` - Roblox rejected or failed the change
    pub async fn set_rank(&self, change: RankChange) -> Result<RankUpdate, AppError> {
        let (credential, group_id) = self.config.ranking()?;

        match &change.initiator {
            Some(initiator) => tracing::info!(
                "Received request from {} ({}) to set rank for target UserID: {} to RoleID: {} in GroupID: {}",
                initiator.username.as_deref().unwrap_or("unknown"),
                initiator
                    .user_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                change.target_user_id,
                change.desired_rank_id,
                group_id
            ),
            None => tracing::info!(
                "Received request to set rank for UserID: {} to RoleID: {} in GroupID: {}",
                change.target_user_id,
                change.desired_rank_id,
                group_id
            ),
        }

        let update = RankProvider::new(self.http_client, &self.config.roblox, credential)
            .set_rank(group_id, &change)
            .await?;

        tracing::info!(
            "Successfully changed rank for target UserID {} to role {} ({})",
            update.user_id,
            update.role.name,
            update.role.id
        );

        if let Some(url) = &self.config.discord_webhook_url {
            match WebhookNotifier::new(self.http_client, url)
                .notify(&change, &update)
                .await
            {
                Ok(()) => tracing::info!("Discord webhook notification sent."),
                Err(e) => tracing::error!(
                    "Error while sending Discord webhook notification: {}",
                    e
                ),
            }
        }

        Ok(update)
    }
}
