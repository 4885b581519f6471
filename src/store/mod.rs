use crate::api::ApplicationApi;
use crate::domain::ApplicantRecord;
use crate::errors::ServerError;
use std::sync::{Arc, RwLock};

/// Shared snapshot of the applicant list for the job this console manages.
///
/// The console never writes applicant data itself: a status update goes to
/// the applications API and the snapshot only changes when someone refreshes
/// it. Page renders read a clone so no lock is held while rendering.
#[derive(Clone, Default)]
pub struct ApplicantStore {
    inner: Arc<RwLock<Vec<ApplicantRecord>>>,
}

impl ApplicantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ApplicantRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(records)),
        }
    }

    pub fn snapshot(&self) -> Result<Vec<ApplicantRecord>, ServerError> {
        let guard = self.inner.read().map_err(|_| ServerError::InternalError)?;
        Ok(guard.clone())
    }

    pub fn replace(&self, records: Vec<ApplicantRecord>) -> Result<(), ServerError> {
        let mut guard = self.inner.write().map_err(|_| ServerError::InternalError)?;
        *guard = records;
        Ok(())
    }
}

/// Pull the current list from the API and swap it in. Returns how many
/// records the snapshot now holds.
pub fn refresh(store: &ApplicantStore, api: &dyn ApplicationApi) -> Result<usize, ServerError> {
    let records = api.fetch_applicants()?;
    let count = records.len();
    store.replace(records)?;
    Ok(count)
}
