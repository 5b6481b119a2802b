//! Discord webhook notifications for rank changes.
//!
//! This module builds the embed announcing a successful rank change and posts it to the
//! configured webhook. Delivery is best effort: the caller decides what to do with a
//! `NotificationError`, and nothing here retries.

use serde::Serialize;
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};
use url::Url;

use crate::server::{
    error::notification::NotificationError,
    model::rank::{RankChange, RankUpdate},
};

pub static WEBHOOK_USERNAME: &str = "Roblox Rank Bot";
pub static WEBHOOK_AVATAR_URL: &str = "https://www.roblox.com/favicon.ico";

static EMBED_TITLE: &str = "Roblox Rank Changed!";
static EMBED_FOOTER: &str = "Roblox Ranking Bot";

/// Green
const EMBED_COLOR: u32 = 0x00FF00;

/// Body of a Discord webhook execution.
#[derive(Serialize)]
pub struct WebhookPayload {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<CreateEmbed>,
}

/// Builds the embed announcing a rank change.
///
/// The description names the initiator when the caller sent one, then the target user,
/// role id and group. Fields repeat the ids for quick scanning and add the resolved role
/// name.
///
/// # Arguments
/// - `change` - Rank change as requested
/// - `update` - Rank change as applied by Roblox
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting
/// - `Err(NotificationError::InvalidTimestamp)` - Current time not representable
pub fn build_rank_embed(
    change: &RankChange,
    update: &RankUpdate,
) -> Result<CreateEmbed, NotificationError> {
    let now = chrono::Utc::now();
    let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
        NotificationError::InvalidTimestamp {
            timestamp: now.timestamp(),
            reason: e.to_string(),
        }
    })?;

    let initiator = change.initiator.as_ref();
    let initiator_username = initiator.and_then(|i| i.username.as_deref());
    let initiator_user_id = initiator.and_then(|i| i.user_id);

    let description = match (initiator_username, initiator_user_id) {
        (Some(name), Some(id)) => format!(
            "Player **{}** (ID: {}) changed rank for user **{}** to Role ID: **{}** in group **{}**.",
            name, id, update.user_id, change.desired_rank_id, update.group_id
        ),
        (Some(name), None) => format!(
            "Player **{}** changed rank for user **{}** to Role ID: **{}** in group **{}**.",
            name, update.user_id, change.desired_rank_id, update.group_id
        ),
        (None, Some(id)) => format!(
            "Player with ID {} changed rank for user **{}** to Role ID: **{}** in group **{}**.",
            id, update.user_id, change.desired_rank_id, update.group_id
        ),
        (None, None) => format!(
            "Rank for user **{}** changed to Role ID: **{}** in group **{}**.",
            update.user_id, change.desired_rank_id, update.group_id
        ),
    };

    let mut embed = CreateEmbed::new()
        .title(EMBED_TITLE)
        .description(description)
        .color(EMBED_COLOR)
        .field("Target UserID", update.user_id.to_string(), true)
        .field("New Rank ID", change.desired_rank_id.to_string(), true)
        .field(
            "New Role",
            format!("{} (rank {})", update.role.name, update.role.rank),
            true,
        );

    if let Some(id) = initiator_user_id {
        embed = embed.field("Initiator (UserID)", id.to_string(), true);
    }

    embed = embed
        .field(
            "Initiator (Username)",
            initiator_username.unwrap_or("Unknown"),
            true,
        )
        .timestamp(timestamp)
        .footer(CreateEmbedFooter::new(EMBED_FOOTER));

    Ok(embed)
}

/// Posts rank change notifications to a Discord webhook.
pub struct WebhookNotifier<'a> {
    /// HTTP client for the webhook request.
    pub http_client: &'a reqwest::Client,
    /// Webhook URL including id and token.
    pub url: &'a Url,
}

impl<'a> WebhookNotifier<'a> {
    pub fn new(http_client: &'a reqwest::Client, url: &'a Url) -> Self {
        Self { http_client, url }
    }

    /// Sends the rank change embed.
    ///
    /// # Returns
    /// - `Ok(())` - Discord accepted the message
    /// - `Err(NotificationError::Request)` - Webhook unreachable
    /// - `Err(NotificationError::Rejected)` - Discord answered with a non-success status
    pub async fn notify(
        &self,
        change: &RankChange,
        update: &RankUpdate,
    ) -> Result<(), NotificationError> {
        let payload = WebhookPayload {
            username: WEBHOOK_USERNAME.to_string(),
            avatar_url: WEBHOOK_AVATAR_URL.to_string(),
            embeds: vec![build_rank_embed(change, update)?],
        };

        let response = self
            .http_client
            .post(self.url.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::Rejected { status, body });
        }

        Ok(())
    }
}
