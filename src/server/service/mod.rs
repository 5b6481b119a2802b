//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the external systems the
//! relay talks to:
//!
//! - **Rank** (`rank`) - orchestrates one rank change end to end
//! - **Roblox** (`roblox`) - provider performing the role set
//! - **Notification** (`notification`) - Discord webhook announcements

pub mod notification;
pub mod rank;
pub mod roblox;
