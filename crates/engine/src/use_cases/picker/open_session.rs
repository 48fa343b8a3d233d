//! Open session use case - fetch the dataset and start a fresh picker.

use std::sync::Arc;

use ubigeo_domain::{LocationHierarchy, PreloadRequest};

use crate::infrastructure::ports::{LocationSourcePort, Notice, NotifierPort};

use super::session::{PickerError, PickerSession};

/// Builds a [`PickerSession`] from one fetch of the location source.
///
/// A fetch failure does not fail the open: the user gets an empty picker
/// and one error notice. A stored selection, if supplied, is restored once
/// the dataset turns out complete.
pub struct OpenSession {
    source: Arc<dyn LocationSourcePort>,
    notifier: Arc<dyn NotifierPort>,
}

impl OpenSession {
    pub fn new(source: Arc<dyn LocationSourcePort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { source, notifier }
    }

    pub async fn execute(&self, preload: Option<PreloadRequest>) -> PickerSession {
        let source = self.source.describe();

        let hierarchy = match self.source.fetch_nodes().await {
            Ok(nodes) => {
                let hierarchy = LocationHierarchy::load(nodes);
                tracing::info!(source = %source, nodes = hierarchy.len(), "Location hierarchy loaded");

                let orphans = hierarchy.orphans().len();
                if orphans > 0 {
                    tracing::warn!(orphans, "Location data has nodes whose parent is missing");
                }
                if let Err(warning) = hierarchy.check_complete() {
                    tracing::warn!(error = %warning, "Location data is incomplete");
                    self.notifier.notify(Notice::from(&warning));
                }
                hierarchy
            }
            Err(error) => {
                tracing::warn!(source = %source, error = %error, "Failed to fetch location data");
                self.notifier
                    .notify(Notice::error(format!("Location data could not be loaded: {error}")));
                LocationHierarchy::empty()
            }
        };

        let mut session = PickerSession::new(hierarchy, self.notifier.clone());
        if let Some(request) = preload {
            // Resolution failures are already logged and reported by the session
            if let Err(PickerError::NotReady) = session.preload(&request) {
                tracing::debug!("Stored selection left for a later attempt");
            }
        }
        session
    }
}
