// In-crate port fakes for command/query tests. Infrastructure ships the real
// implementations; the application layer cannot depend on it without a cycle.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{Mutex, RwLock};

use backend_domain::ports::{
    ClaimLogRepository, Clock, ConditionEvaluator, EventDefinitionRepository, ProgressRepository,
};
use backend_domain::{
    ClaimKind, ClaimLogFilter, DailyRewardRule, DayCondition, EventDefinition, EventId,
    EventStatus, RewardClaimLogEntry, RewardOption, RuntimeConfig, SlotRewardRule, UserId,
    UserProgress,
};

use crate::{AppState, Metrics, ProgressLocks};

/// 2025-07-03 is a Thursday; 09:00 keeps same-day clock nudges on one date.
pub(crate) fn thursday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 3, 9, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

pub(crate) struct FixedClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub(crate) fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: std::sync::Mutex::new(now),
        }
    }

    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

#[derive(Default)]
pub(crate) struct MemoryEventRepo {
    events: RwLock<HashMap<EventId, EventDefinition>>,
}

#[async_trait]
impl EventDefinitionRepository for MemoryEventRepo {
    async fn find_event(&self, event_id: EventId) -> anyhow::Result<Option<EventDefinition>> {
        Ok(self.events.read().await.get(&event_id).cloned())
    }

    async fn save_event(&self, event: &EventDefinition) -> anyhow::Result<()> {
        self.events.write().await.insert(event.id, event.clone());
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MemoryStateRepo {
    progress: RwLock<HashMap<(UserId, EventId), UserProgress>>,
    entries: RwLock<Vec<RewardClaimLogEntry>>,
}

#[async_trait]
impl ProgressRepository for MemoryStateRepo {
    async fn find_progress(
        &self,
        user_id: UserId,
        event_id: EventId,
    ) -> anyhow::Result<Option<UserProgress>> {
        Ok(self.progress.read().await.get(&(user_id, event_id)).cloned())
    }

    async fn upsert_progress(&self, progress: &UserProgress) -> anyhow::Result<()> {
        self.progress
            .write()
            .await
            .insert((progress.user_id, progress.event_id), progress.clone());
        Ok(())
    }
}

#[async_trait]
impl ClaimLogRepository for MemoryStateRepo {
    async fn append_entry(&self, entry: &RewardClaimLogEntry) -> anyhow::Result<()> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn query_entries(
        &self,
        filter: &ClaimLogFilter,
        offset: usize,
        limit: usize,
    ) -> anyhow::Result<(Vec<RewardClaimLogEntry>, usize)> {
        let entries = self.entries.read().await;
        let mut matched: Vec<RewardClaimLogEntry> = entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = matched.len();
        let page = matched.into_iter().skip(offset).take(limit).collect();
        Ok((page, total))
    }
}

struct StaticEvaluator {
    verdict: bool,
}

#[async_trait]
impl ConditionEvaluator for StaticEvaluator {
    async fn satisfied(
        &self,
        _user_id: UserId,
        _event_id: EventId,
        _day: u32,
        _condition: &DayCondition,
    ) -> anyhow::Result<bool> {
        Ok(self.verdict)
    }
}

struct ErrorEvaluator;

#[async_trait]
impl ConditionEvaluator for ErrorEvaluator {
    async fn satisfied(
        &self,
        _user_id: UserId,
        _event_id: EventId,
        _day: u32,
        _condition: &DayCondition,
    ) -> anyhow::Result<bool> {
        Err(anyhow!("telemetry unreachable"))
    }
}

pub(crate) fn deny_evaluator() -> Arc<dyn ConditionEvaluator> {
    Arc::new(StaticEvaluator { verdict: false })
}

pub(crate) fn failing_evaluator() -> Arc<dyn ConditionEvaluator> {
    Arc::new(ErrorEvaluator)
}

pub(crate) fn daily_rule(day: u32, reward_id: &str, quantity: u32) -> DailyRewardRule {
    DailyRewardRule {
        day,
        reward_id: reward_id.to_string(),
        quantity,
    }
}

pub(crate) fn slot_rule(slot: u32, rewards: &[(&str, u32, f64)]) -> SlotRewardRule {
    SlotRewardRule {
        slot,
        rewards: rewards
            .iter()
            .map(|(reward_id, quantity, probability)| RewardOption {
                reward_id: reward_id.to_string(),
                quantity: *quantity,
                probability: *probability,
            })
            .collect(),
    }
}

/// Active event with a day-1 condition and no reward tables; tests add what
/// they need.
pub(crate) fn active_event() -> EventDefinition {
    EventDefinition {
        id: EventId(100),
        name: "summer-attendance".to_string(),
        description: None,
        status: EventStatus::Active,
        start_date: thursday() - Duration::days(30),
        end_date: thursday() + Duration::days(30),
        created_by: "operator".to_string(),
        daily_rewards: Vec::new(),
        conditions: vec![DayCondition {
            condition_type: backend_domain::ConditionType::DailyLoginCount,
            parameters: None,
            description: None,
        }],
        slot_rewards: Vec::new(),
    }
}

pub(crate) struct TestHarness {
    pub(crate) state: AppState,
    pub(crate) clock: Arc<FixedClock>,
    pub(crate) store: Arc<MemoryStateRepo>,
}

impl TestHarness {
    pub(crate) async fn progress(
        &self,
        user_id: UserId,
        event_id: EventId,
    ) -> Option<UserProgress> {
        self.store
            .find_progress(user_id, event_id)
            .await
            .expect("memory store never fails")
    }

    pub(crate) async fn put_progress(&self, progress: UserProgress) {
        self.store
            .upsert_progress(&progress)
            .await
            .expect("memory store never fails");
    }

    pub(crate) async fn ledger(&self) -> Vec<RewardClaimLogEntry> {
        self.store.entries.read().await.clone()
    }

    pub(crate) async fn ledger_kinds(&self) -> Vec<ClaimKind> {
        self.ledger().await.iter().map(|e| e.claim_kind).collect()
    }
}

fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_token: None,
        events_path: "./events.json".to_string(),
        data_dir: "./data".to_string(),
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 5,
        log_page_size_default: 10,
        log_page_size_max: 100,
    }
}

pub(crate) async fn test_state(event: EventDefinition) -> TestHarness {
    let clock = Arc::new(FixedClock::at(thursday()));
    let event_repo = Arc::new(MemoryEventRepo::default());
    event_repo
        .save_event(&event)
        .await
        .expect("memory store never fails");
    let store = Arc::new(MemoryStateRepo::default());

    let state = AppState {
        config: test_config(),
        event_repo,
        progress_repo: store.clone(),
        claim_log_repo: store.clone(),
        condition_evaluator: Arc::new(StaticEvaluator { verdict: true }),
        clock: clock.clone(),
        rng: Arc::new(Mutex::new(StdRng::seed_from_u64(7))),
        progress_locks: Arc::new(ProgressLocks::default()),
        metrics: Arc::new(Metrics::default()),
    };

    TestHarness {
        state,
        clock,
        store,
    }
}
