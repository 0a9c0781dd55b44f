//! Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: `POST /api/chat` call
//! - view_model.rs: Transcript + ChatVm with RwSignals
//! - view.rs: ChatPanel component

mod model;
mod view;
mod view_model;

pub use view::ChatPanel;
pub use view_model::{ChatMessage, ChatRole, ChatVm, Transcript};
