//! Roblox web API payloads.

use serde::{Deserialize, Serialize};

/// Role (rank tier) within a group, as returned by `GET /v1/groups/{groupId}/roles`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRole {
    /// Role set id, the value the role-set endpoint expects.
    pub id: u64,
    pub name: String,
    /// Rank number between 0 and 255.
    pub rank: u8,
    #[serde(default)]
    pub member_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct GroupRolesResponse {
    #[serde(default)]
    pub roles: Vec<GroupRole>,
}

/// Account behind a session cookie, from `GET /v1/users/authenticated`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Body of `PATCH /v1/groups/{groupId}/users/{userId}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSetBody {
    pub role_id: u64,
}

/// Standard Roblox error envelope: `{"errors":[{"code":0,"message":"..."}]}`; only messages are kept.
#[derive(Debug, Deserialize)]
pub struct RobloxErrorsBody {
    #[serde(default)]
    pub errors: Vec<RobloxErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RobloxErrorEntry {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Tests decoding of the authenticated user with and without a display name.
    ///
    /// Expected: `displayName` is read when present and defaults to `None`
    #[test]
    fn decodes_authenticated_user() {
        let user: AuthenticatedUser = serde_json::from_value(json!({
            "id": 777,
            "name": "RankBot",
            "displayName": "Rank Bot",
        }))
        .unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Rank Bot"));

        let user: AuthenticatedUser =
            serde_json::from_value(json!({ "id": 777, "name": "RankBot" })).unwrap();
        assert_eq!(user.display_name, None);
    }

    /// Tests that the error envelope only needs the message of each entry.
    ///
    /// Expected: `code` is ignored and the message is kept
    #[test]
    fn decodes_errors_envelope() {
        let body: RobloxErrorsBody = serde_json::from_value(json!({
            "errors": [{ "code": 4, "message": "You do not have permission" }]
        }))
        .unwrap();

        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].message, "You do not have permission");
    }
}
