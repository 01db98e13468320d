use energy_profile::assessment::{
    AssessmentRecord, AssessmentRepository, RepositoryError, RespondentId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local assessment history, newest record last per respondent.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<RespondentId, Vec<AssessmentRecord>>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn save(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".into()))?;
        guard
            .entry(record.respondent_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    fn load_latest(
        &self,
        respondent_id: &RespondentId,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".into()))?;
        Ok(guard
            .get(respondent_id)
            .and_then(|history| history.last())
            .cloned())
    }
}
