//! Canned test data.
//!
//! Values mirror what the Roblox API returns for a small group with four roles. Use the
//! constants instead of literals so tests read as "owner rank" rather than "255".

use serde_json::{json, Value};

/// Group all fixtures live in.
pub const GROUP_ID: u64 = 4242;

/// User whose rank is changed.
pub const TARGET_USER_ID: i64 = 12345;

/// Account the session cookie belongs to.
pub const BOT_USER_ID: u64 = 777;
pub const BOT_USERNAME: &str = "RankBot";

pub const COOKIE: &str = "_|WARNING:-DO-NOT-SHARE-THIS.--test-cookie";
pub const API_KEY: &str = "test-open-cloud-key";
pub const CSRF_TOKEN: &str = "csrf-token-123";

/// Role of the group as `(id, name, rank)`.
pub type RoleFixture = (u64, &'static str, u8);

pub const GUEST: RoleFixture = (10, "Guest", 0);
pub const MEMBER: RoleFixture = (20, "Member", 1);
pub const OFFICER: RoleFixture = (30, "Officer", 7);
pub const OWNER: RoleFixture = (40, "Owner", 255);

pub fn roles() -> Vec<RoleFixture> {
    vec![GUEST, MEMBER, OFFICER, OWNER]
}

/// Body of `GET /v1/groups/{groupId}/roles`.
pub fn roles_body(group_id: u64, roles: &[RoleFixture]) -> Value {
    json!({
        "groupId": group_id,
        "roles": roles
            .iter()
            .map(|(id, name, rank)| json!({
                "id": id,
                "name": name,
                "rank": rank,
                "memberCount": 1,
            }))
            .collect::<Vec<_>>(),
    })
}

/// Standard Roblox error envelope.
pub fn errors_body(code: i64, message: &str) -> Value {
    json!({ "errors": [{ "code": code, "message": message }] })
}

/// Minimal rank request with the `userId` spelling.
pub fn set_rank_body(user_id: i64, desired_rank_id: i64) -> Value {
    json!({ "userId": user_id, "desiredRankId": desired_rank_id })
}

/// Rank request carrying the initiator fields sent by in-game callers.
pub fn set_rank_body_with_initiator(
    target_user_id: i64,
    desired_rank_id: i64,
    initiator_user_id: i64,
    initiator_username: &str,
) -> Value {
    json!({
        "targetUserID": target_user_id,
        "desiredRankId": desired_rank_id,
        "initiatorUserID": initiator_user_id,
        "initiatorUsername": initiator_username,
    })
}
