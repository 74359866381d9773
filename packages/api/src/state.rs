use std::{sync::Arc, time::Duration};

use minijinja::Environment;
use sea_orm::DatabaseConnection;

use crate::storage::ReceiptStore;
use crate::templates;

pub type AppState = Arc<State>;

/// Everything a request handler needs, built once at startup and passed
/// down explicitly.
pub struct State {
    pub db: DatabaseConnection,
    /// Receipt bucket. `None` when the server runs without upload
    /// credentials; the upload route then answers 503.
    pub receipts: Option<ReceiptStore>,
    pub templates: Environment<'static>,
    /// Pause inserted after a successful item submission, before the
    /// redirect. Zero disables it.
    pub insert_delay: Duration,
}

impl State {
    pub fn new(
        db: DatabaseConnection,
        receipts: Option<ReceiptStore>,
        insert_delay: Duration,
    ) -> Self {
        Self {
            db,
            receipts,
            templates: templates::environment(),
            insert_delay,
        }
    }
}
