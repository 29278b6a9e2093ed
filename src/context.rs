use std::sync::Arc;

use crate::mailer::Mailer;

/// Shared handler dependencies. Settings are re-read from the environment on
/// every request, so the context carries only the mail transport.
#[derive(Clone)]
pub struct AppContext {
    pub mailer: Arc<dyn Mailer>,
}

impl AppContext {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}
