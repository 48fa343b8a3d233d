//! Location picker use cases.

mod modal;
mod open_session;
mod session;

pub use modal::PickerModal;
pub use open_session::OpenSession;
pub use session::{FinalizedSelection, PickerError, PickerSession, PreloadLatch};

use std::sync::Arc;

/// Container for picker use cases.
pub struct PickerUseCases {
    pub open_session: Arc<OpenSession>,
}

impl PickerUseCases {
    pub fn new(open_session: Arc<OpenSession>) -> Self {
        Self { open_session }
    }

    /// A closed modal backed by this container's open-session use case.
    pub fn modal(&self) -> PickerModal {
        PickerModal::new(self.open_session.clone())
    }
}
