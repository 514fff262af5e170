//! Handler types and dependencies.

use std::sync::Arc;

use crate::download::pipeline::Pipeline;
use crate::download::source::MediaSource;
use crate::session::SessionStore;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub sessions: Arc<SessionStore>,
    pub source: Arc<dyn MediaSource>,
    pub pipeline: Arc<Pipeline>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(sessions: Arc<SessionStore>, source: Arc<dyn MediaSource>, pipeline: Arc<Pipeline>) -> Self {
        Self {
            sessions,
            source,
            pipeline,
        }
    }
}
