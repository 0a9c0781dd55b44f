//! Chat widget: one request/response exchange per user message.

pub mod ui;
