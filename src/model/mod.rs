//! Wire-level DTOs shared by the controllers and the OpenAPI document.

pub mod api;
pub mod rank;
