//! Domain models for rank change operations.

use serde_json::Value;

use crate::{model::rank::SetRankDto, server::model::roblox::GroupRole};

/// Player in-game who asked for the rank change.
#[derive(Debug, Clone, PartialEq)]
pub struct Initiator {
    /// Roblox user id of the initiator, if the caller sent one.
    pub user_id: Option<i64>,
    /// Roblox username of the initiator, if the caller sent one.
    pub username: Option<String>,
}

/// Validated rank change request.
///
/// Built from a `SetRankDto` after strict type checking; carries no configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RankChange {
    /// Roblox user id whose role is changed.
    pub target_user_id: i64,
    /// Requested role id or rank number.
    pub desired_rank_id: i64,
    /// Who asked for the change, when known.
    pub initiator: Option<Initiator>,
}

impl RankChange {
    /// Converts a request DTO to a rank change at the controller boundary.
    ///
    /// # Arguments
    /// - `dto` - Type-checked request payload
    ///
    /// # Returns
    /// - `RankChange` - Initiator is `None` when neither initiator field was sent
    pub fn from_dto(dto: SetRankDto) -> Self {
        let initiator = match (dto.initiator_user_id, dto.initiator_username) {
            (None, None) => None,
            (user_id, username) => Some(Initiator { user_id, username }),
        };

        Self {
            target_user_id: dto.target_user_id,
            desired_rank_id: dto.desired_rank_id,
            initiator,
        }
    }
}

/// Outcome of a successful rank change.
#[derive(Debug, Clone, PartialEq)]
pub struct RankUpdate {
    /// Group the change was made in.
    pub group_id: u64,
    /// User whose role changed.
    pub user_id: i64,
    /// Role the user now holds.
    pub role: GroupRole,
    /// Body Roblox answered the role set with, if it was non-empty JSON.
    pub response: Option<Value>,
}
