use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rank change request as sent by the game server.
///
/// The target may be named either `targetUserID` or `userId`; both spellings are in use by
/// existing callers. Parsing goes through `server::util::parse::parse_set_rank`, which
/// enforces strict JSON types instead of serde's coercions.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetRankDto {
    #[serde(rename = "targetUserID", alias = "userId")]
    pub target_user_id: i64,
    #[serde(rename = "desiredRankId")]
    pub desired_rank_id: i64,
    #[serde(
        rename = "initiatorUserID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub initiator_user_id: Option<i64>,
    #[serde(
        rename = "initiatorUsername",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub initiator_username: Option<String>,
}
