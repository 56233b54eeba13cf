pub mod indicators;
pub mod metadata;
pub mod search;
