//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: one endpoint that changes a Roblox group
//! rank on behalf of a game server and announces the change on Discord. The backend uses
//! Axum as the web framework, reqwest for the Roblox API and Serenity's embed builders for
//! Discord messages.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Rank orchestration, Roblox provider, Discord notifier
//! - **Model Layer** (`model/`) - Domain models and Roblox payloads
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (configuration, HTTP client)
//! - **Startup** (`startup`) - HTTP client, layered application and shutdown signal setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; non-POST methods are rejected with 405
//! 2. **Controller** parses and type-checks the body into a `RankChange`
//! 3. **Service** re-checks configuration, calls Roblox, then notifies Discord
//! 4. **Controller** wraps the result in the JSON envelope; errors convert via `AppError`

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
