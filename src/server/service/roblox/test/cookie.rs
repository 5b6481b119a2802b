use super::*;

fn cookie_credential() -> RobloxCredential {
    RobloxCredential::Cookie(fixture::COOKIE.to_string())
}

/// Tests a role set authenticated with a session cookie.
///
/// Verifies the full handshake: authenticated user lookup, CSRF token fetch, then a role
/// set carrying both the cookie and the token.
///
/// Expected: Ok(RankUpdate) and one PATCH with cookie and CSRF headers
#[tokio::test]
async fn sets_role_with_cookie_session() {
    let roblox = MockRoblox::start().await;
    roblox.with_cookie_session().await;
    roblox.with_roles(fixture::GROUP_ID, &fixture::roles()).await;
    roblox
        .accept_role_set(fixture::GROUP_ID, fixture::TARGET_USER_ID, fixture::MEMBER.0)
        .await;

    let client = reqwest::Client::new();
    let urls = urls(&roblox.url());
    let credential = cookie_credential();

    let update = RankProvider::new(&client, &urls, &credential)
        .set_rank(fixture::GROUP_ID, &change(fixture::MEMBER.0 as i64))
        .await
        .unwrap();

    assert_eq!(update.role.name, "Member");

    let role_sets = roblox.role_set_requests().await;
    assert_eq!(role_sets.len(), 1);
    assert_eq!(
        role_sets[0].headers.get("x-csrf-token").unwrap(),
        fixture::CSRF_TOKEN
    );
    assert_eq!(
        role_sets[0].headers.get("cookie").unwrap().to_str().unwrap(),
        format!(".ROBLOSECURITY={}", fixture::COOKIE)
    );
    assert!(role_sets[0].headers.get("x-api-key").is_none());
}

/// Tests a cookie Roblox does not accept.
///
/// Expected: Err(InvalidCookie) classified as AuthenticationFailed, nothing else requested
#[tokio::test]
async fn rejected_cookie_stops_before_role_set() {
    let roblox = MockRoblox::start().await;
    roblox.reject_cookie().await;
    roblox.with_roles(fixture::GROUP_ID, &fixture::roles()).await;
    roblox
        .accept_role_set(fixture::GROUP_ID, fixture::TARGET_USER_ID, fixture::MEMBER.0)
        .await;

    let client = reqwest::Client::new();
    let urls = urls(&roblox.url());
    let credential = cookie_credential();

    let err = RankProvider::new(&client, &urls, &credential)
        .set_rank(fixture::GROUP_ID, &change(fixture::MEMBER.0 as i64))
        .await
        .unwrap_err();

    assert!(matches!(err, RobloxError::InvalidCookie));
    assert!(err.to_string().contains("Invalid security cookie"));
    assert_eq!(err.kind(), FailureKind::AuthenticationFailed);
    assert_eq!(roblox.requests().await.len(), 1);
}

/// Tests a CSRF endpoint that does not hand out a token.
///
/// Expected: Err(UnexpectedResponse) and no role set
#[tokio::test]
async fn missing_csrf_token_is_unexpected_response() {
    let roblox = MockRoblox::start().await;
    roblox.with_authenticated_user(fixture::COOKIE).await;
    roblox.with_roles(fixture::GROUP_ID, &fixture::roles()).await;

    let client = reqwest::Client::new();
    let urls = urls(&roblox.url());
    let credential = cookie_credential();

    let err = RankProvider::new(&client, &urls, &credential)
        .set_rank(fixture::GROUP_ID, &change(fixture::MEMBER.0 as i64))
        .await
        .unwrap_err();

    assert!(matches!(err, RobloxError::UnexpectedResponse(_)));
    assert_eq!(err.kind(), FailureKind::Unclassified);
    assert!(roblox.role_set_requests().await.is_empty());
}

/// Tests a rate-limited role set.
///
/// Expected: Err(Api) classified as RateLimited
#[tokio::test]
async fn rate_limited_role_set() {
    let roblox = MockRoblox::start().await;
    roblox.with_cookie_session().await;
    roblox.with_roles(fixture::GROUP_ID, &fixture::roles()).await;
    roblox
        .fail_role_set(
            fixture::GROUP_ID,
            fixture::TARGET_USER_ID,
            429,
            "Too many requests",
        )
        .await;

    let client = reqwest::Client::new();
    let urls = urls(&roblox.url());
    let credential = cookie_credential();

    let err = RankProvider::new(&client, &urls, &credential)
        .set_rank(fixture::GROUP_ID, &change(fixture::OWNER.2 as i64))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::RateLimited);
}
