//! Shared types between the MES frontend and backend.
//!
//! Everything here compiles for both the native server and the WASM client.

pub mod domain;
pub mod enums;
pub mod shared;
