use std::sync::Arc;

use backend_domain::ports::{
    ClaimLogRepository, Clock, ConditionEvaluator, EventDefinitionRepository, ProgressRepository,
};
use backend_domain::RuntimeConfig;
use rand::rngs::StdRng;
use tokio::sync::Mutex;

use crate::{Metrics, ProgressLocks};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn EventDefinitionRepository>,
    pub progress_repo: Arc<dyn ProgressRepository>,
    pub claim_log_repo: Arc<dyn ClaimLogRepository>,
    pub condition_evaluator: Arc<dyn ConditionEvaluator>,
    pub clock: Arc<dyn Clock>,
    pub rng: Arc<Mutex<StdRng>>,
    pub progress_locks: Arc<ProgressLocks>,
    pub metrics: Arc<Metrics>,
}
