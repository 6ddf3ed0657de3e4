//! Public share links: idempotent share-id assignment and snapshot lookup.

pub mod handlers;
pub mod service;
