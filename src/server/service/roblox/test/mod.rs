use serde_json::json;
use test_utils::{fixture, roblox::MockRoblox};

use crate::server::{
    config::{RobloxApiUrls, RobloxCredential},
    error::roblox::{FailureKind, RobloxError},
    model::{rank::RankChange, roblox::GroupRole},
    service::roblox::{find_role, RankProvider},
};

mod cookie;

fn urls(base: &str) -> RobloxApiUrls {
    RobloxApiUrls {
        users: base.to_string(),
        auth: base.to_string(),
        groups: base.to_string(),
    }
}

fn change(desired_rank_id: i64) -> RankChange {
    RankChange {
        target_user_id: fixture::TARGET_USER_ID,
        desired_rank_id,
        initiator: None,
    }
}

fn role((id, name, rank): fixture::RoleFixture) -> GroupRole {
    GroupRole {
        id,
        name: name.to_string(),
        rank,
        member_count: None,
    }
}

/// Tests role lookup by role id.
///
/// Expected: the role whose id matches
#[test]
fn find_role_matches_role_id() {
    let roles = fixture::roles().into_iter().map(role).collect();

    let found = find_role(roles, 40).unwrap();
    assert_eq!(found.name, "Owner");
}

/// Tests role lookup by rank number.
///
/// Expected: the role whose rank matches
#[test]
fn find_role_falls_back_to_rank() {
    let roles = fixture::roles().into_iter().map(role).collect();

    let found = find_role(roles, 7).unwrap();
    assert_eq!(found.id, fixture::OFFICER.0);
}

/// Tests that a role id wins over an equal rank number.
///
/// Role id 10 (Guest) and rank 10 (Veteran) both exist.
///
/// Expected: the role with the matching id
#[test]
fn find_role_prefers_id_over_rank() {
    let mut roles: Vec<GroupRole> = fixture::roles().into_iter().map(role).collect();
    roles.push(role((50, "Veteran", 10)));

    let found = find_role(roles, 10).unwrap();
    assert_eq!(found.name, "Guest");
}

/// Tests lookups without a match.
///
/// Expected: None for unknown values and negative numbers
#[test]
fn find_role_returns_none_without_match() {
    let roles: Vec<GroupRole> = fixture::roles().into_iter().map(role).collect();

    assert!(find_role(roles.clone(), 99).is_none());
    assert!(find_role(roles, -1).is_none());
}

/// Tests that an unknown role stops before the role set.
///
/// Expected: Err(RoleNotFound) and no PATCH request
#[tokio::test]
async fn unknown_role_is_not_set() {
    let roblox = MockRoblox::start().await;
    roblox.with_roles(fixture::GROUP_ID, &fixture::roles()).await;

    let client = reqwest::Client::new();
    let urls = urls(&roblox.url());
    let credential = RobloxCredential::ApiKey(fixture::API_KEY.to_string());

    let result = RankProvider::new(&client, &urls, &credential)
        .set_rank(fixture::GROUP_ID, &change(99))
        .await;

    match result {
        Err(RobloxError::RoleNotFound {
            group_id,
            requested,
        }) => {
            assert_eq!(group_id, fixture::GROUP_ID);
            assert_eq!(requested, 99);
        }
        other => panic!("expected RoleNotFound, got {:?}", other),
    }
    assert!(roblox.role_set_requests().await.is_empty());
}

/// Tests upstream error translation.
///
/// Expected: Err(Api) with status, summarized message and raw body
#[tokio::test]
async fn upstream_error_keeps_status_and_body() {
    let roblox = MockRoblox::start().await;
    roblox.with_roles(fixture::GROUP_ID, &fixture::roles()).await;
    roblox
        .fail_role_set(
            fixture::GROUP_ID,
            fixture::TARGET_USER_ID,
            403,
            "You don't have permission to manage this member.",
        )
        .await;

    let client = reqwest::Client::new();
    let urls = urls(&roblox.url());
    let credential = RobloxCredential::ApiKey(fixture::API_KEY.to_string());

    let err = RankProvider::new(&client, &urls, &credential)
        .set_rank(fixture::GROUP_ID, &change(7))
        .await
        .unwrap_err();

    match &err {
        RobloxError::Api {
            status,
            message,
            body,
        } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(
                message,
                "Roblox responded with status code 403: You don't have permission to manage this member."
            );
            assert_eq!(
                body.as_ref().unwrap()["errors"][0]["message"],
                json!("You don't have permission to manage this member.")
            );
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert_eq!(err.kind(), FailureKind::Forbidden);
}

/// Tests an unreachable Roblox API.
///
/// Expected: Err(Transport) classified as NoResponse
#[tokio::test]
async fn unreachable_api_is_no_response() {
    let client = reqwest::Client::new();
    let urls = urls("http://127.0.0.1:1");
    let credential = RobloxCredential::ApiKey(fixture::API_KEY.to_string());

    let err = RankProvider::new(&client, &urls, &credential)
        .set_rank(fixture::GROUP_ID, &change(7))
        .await
        .unwrap_err();

    assert!(matches!(err, RobloxError::Transport(_)));
    assert_eq!(err.kind(), FailureKind::NoResponse);
}
