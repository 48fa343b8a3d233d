//! Picker modal - the single slot a host form opens pickers in.

use std::sync::Arc;

use ubigeo_domain::PreloadRequest;

use super::open_session::OpenSession;
use super::session::{FinalizedSelection, PickerError, PickerSession};

/// Holds at most one open [`PickerSession`].
///
/// Opening always discards the previous session, so no selection, latch,
/// or dataset carries over between openings.
pub struct PickerModal {
    open_session: Arc<OpenSession>,
    current: Option<PickerSession>,
}

impl PickerModal {
    pub fn new(open_session: Arc<OpenSession>) -> Self {
        Self {
            open_session,
            current: None,
        }
    }

    pub async fn open(&mut self, preload: Option<PreloadRequest>) -> &mut PickerSession {
        if self.current.take().is_some() {
            tracing::debug!("Discarding previous picker session");
        }
        let session = self.open_session.execute(preload).await;
        self.current.insert(session)
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn session(&self) -> Option<&PickerSession> {
        self.current.as_ref()
    }

    /// Finalize and close. An incomplete selection keeps the picker open.
    pub fn confirm(&mut self) -> Result<FinalizedSelection, PickerError> {
        let session = self.current.as_ref().ok_or(PickerError::NoSession)?;
        let finalized = session.finalize()?;
        self.current = None;
        Ok(finalized)
    }

    /// Close without emitting anything.
    pub fn cancel(&mut self) {
        self.current = None;
    }
}
