//! Story editing: load-or-default, field-wise patching, drafts, customization
//! and timeline CRUD. Every operation takes its store explicitly.

pub mod handlers;
pub mod service;
