use std::sync::Arc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use backend_application::{AppState, Metrics, ProgressLocks};
use backend_infrastructure::{
    AppConfig, EventFileRepository, FileStateRepository, StaticConditionEvaluator, SystemClock,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config_path: Option<&str>) -> Result<Self> {
        let config = AppConfig::load(config_path).await?;
        let runtime_config = config.to_runtime_config();

        let event_repo = Arc::new(EventFileRepository::open(&runtime_config.events_path).await?);
        let state_repo = Arc::new(FileStateRepository::open(&runtime_config.data_dir).await?);

        let state = AppState {
            config: runtime_config,
            event_repo,
            progress_repo: state_repo.clone(),
            claim_log_repo: state_repo,
            condition_evaluator: Arc::new(StaticConditionEvaluator::new()),
            clock: Arc::new(SystemClock),
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
            progress_locks: Arc::new(ProgressLocks::default()),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
