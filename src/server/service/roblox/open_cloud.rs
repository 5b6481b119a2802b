//! Open Cloud API key authentication.

use crate::server::service::roblox::RoleSetAuth;

pub static API_KEY_HEADER: &str = "x-api-key";

/// API keys need no handshake; the key travels on the role-set request itself.
pub fn authenticate(api_key: &str) -> RoleSetAuth {
    RoleSetAuth::new().header(API_KEY_HEADER, api_key)
}
