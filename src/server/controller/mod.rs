//! HTTP request handlers.
//!
//! Controllers convert raw requests into domain models, call the service layer and turn
//! the result into the JSON envelope. They hold no logic of their own beyond that.

pub mod rank;

#[cfg(test)]
mod test;
