//! Rank Relay Test Utils
//!
//! Provides shared testing utilities for the rank relay. The real service talks to two
//! external systems, the Roblox web API and a Discord webhook; this crate stands both up as
//! local `wiremock` servers so tests can drive the full request path without network access.
//!
//! # Overview
//!
//! - **MockRoblox**: users, auth and groups APIs on one server
//! - **MockWebhook**: Discord webhook sink recording every payload
//! - **fixture**: canned roles and request bodies
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture, roblox::MockRoblox};
//!
//! #[tokio::test]
//! async fn ranks_user() {
//!     let roblox = MockRoblox::start().await;
//!     roblox.with_roles(fixture::GROUP_ID, &fixture::roles()).await;
//!     roblox.accept_role_set(fixture::GROUP_ID, 12345, 30).await;
//!
//!     // Point the service's groups URL at `roblox.url()` ...
//! }
//! ```

pub mod discord;
pub mod fixture;
pub mod roblox;
