//! HTTP handlers.

pub mod entity;
pub mod root;
