//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    notifier::TracingNotifier,
    ports::{LocationSourcePort, NotifierPort},
    settings::PickerSettings,
};
use crate::use_cases;
use crate::use_cases::picker::OpenSession;

/// Main application state.
///
/// Holds the use cases built on the injected ports.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub picker: use_cases::PickerUseCases,
}

impl App {
    /// Wire use cases around the given ports.
    pub fn new(source: Arc<dyn LocationSourcePort>, notifier: Arc<dyn NotifierPort>) -> Self {
        let open_session = Arc::new(OpenSession::new(source, notifier));
        let use_cases = UseCases {
            picker: use_cases::PickerUseCases::new(open_session),
        };

        Self { use_cases }
    }

    /// Compose from settings, notifying through the log.
    pub fn from_settings(settings: &PickerSettings) -> Self {
        tracing::info!(source = ?settings.source, "Composing location picker");
        Self::new(settings.build_source(), Arc::new(TracingNotifier::new()))
    }
}
