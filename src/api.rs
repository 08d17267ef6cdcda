//! HTTP surface
//!
//! The invocation wrapper around the dispatch core: one POST route per
//! hosted skill, taking the platform event JSON and returning the reply
//! envelope.

mod handlers;
mod types;

pub use handlers::create_router;

use crate::skills::SkillRegistry;
use std::sync::Arc;

/// Application state shared across handlers. The registry is immutable, so
/// concurrent requests never contend.
#[derive(Clone)]
pub struct AppState {
    pub skills: Arc<SkillRegistry>,
    /// When set, inbound events must carry this application id.
    pub expected_app_id: Option<Arc<str>>,
}

impl AppState {
    pub fn new(skills: SkillRegistry, expected_app_id: Option<String>) -> Self {
        Self {
            skills: Arc::new(skills),
            expected_app_id: expected_app_id.map(Arc::from),
        }
    }
}
