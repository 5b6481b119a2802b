//! Server-side domain models.
//!
//! This module contains the domain models used by the service layer. Request DTOs are
//! converted into these models at the controller boundary, and Roblox payloads are decoded
//! into them at the provider boundary.

pub mod rank;
pub mod roblox;
