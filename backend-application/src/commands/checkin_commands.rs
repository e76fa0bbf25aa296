use anyhow::anyhow;
use chrono::{DateTime, Utc};
use tracing::{error, info};

use backend_domain::services::{reward_selector, week_window};
use backend_domain::{
    EventDefinition, EventId, RewardClaimLogEntry, UserId, UserProgress, MAX_STREAK,
};

use crate::dtos::{
    CheckInStatus, ClaimRequest, DailyCheckInResponse, RewardGrant, WeeklyClaimResponse,
    WeeklyClaimStatus,
};
use crate::{AppError, AppState};

/// Daily attendance: evaluates the next day's unlock condition, grants the
/// configured fixed reward, and advances the streak. A failed condition is a
/// soft outcome carried in the response, not an error.
pub async fn daily_check_in(
    state: &AppState,
    request: ClaimRequest,
) -> Result<DailyCheckInResponse, AppError> {
    let ClaimRequest { user_id, event_id } = request;
    let now = state.clock.now_utc();

    let event = load_active_event(state, user_id, event_id, now).await?;

    // Everything from the duplicate guard to the final write runs under the
    // per-key lock so concurrent retries cannot double-grant.
    let cell = state.progress_locks.cell(user_id, event_id).await;
    let _guard = cell.lock().await;

    let week_start = week_window::start_of_reward_week(now);
    let mut progress = match find_progress(state, user_id, event_id).await? {
        Some(mut existing) => {
            if existing.is_stale(week_start) {
                info!(%user_id, %event_id, "resetting progress for new reward week");
                existing.reset_for_week(week_start);
            }
            existing
        }
        None => UserProgress::new(user_id, event_id, week_start),
    };

    if progress.already_checked_in(now) {
        state.metrics.record_claim_conflict();
        log_failed_claim(state, user_id, event_id, now, "duplicate daily claim").await?;
        return Err(AppError::Conflict(
            "daily reward already claimed today".to_string(),
        ));
    }

    let next_day = progress.next_day();
    let condition_met = match event.condition_for_day(next_day) {
        Some(condition) => state
            .condition_evaluator
            .satisfied(user_id, event_id, next_day, condition)
            .await
            .map_err(|err| {
                // Fail-closed: an unreachable evaluator aborts the attempt.
                error!(%user_id, %event_id, day = next_day, "condition evaluator failed: {err:#}");
                AppError::Internal(err.context(format!(
                    "evaluate day {} condition for user {} event {}",
                    next_day, user_id, event_id
                )))
            })?,
        None => true,
    };

    if !condition_met {
        state.metrics.record_condition_failure();
        log_failed_claim(state, user_id, event_id, now, "condition not met").await?;
        return Ok(DailyCheckInResponse {
            status: CheckInStatus::ConditionNotMet,
            daily_reward: None,
            condition_met: false,
            message: Some(format!("day {} attendance condition not met", next_day)),
        });
    }

    let mut daily_reward = None;
    if let Some(rule) = event.daily_reward_for_day(next_day) {
        let entry =
            RewardClaimLogEntry::daily(user_id, event_id, &rule.reward_id, rule.quantity, now);
        append_ledger_entry(state, &entry).await?;
        daily_reward = Some(RewardGrant {
            reward_id: rule.reward_id.clone(),
            quantity: rule.quantity,
        });
    }

    progress.record_checkin(now);
    upsert_progress(state, &progress).await?;
    state.metrics.record_daily_checkin();

    Ok(DailyCheckInResponse {
        status: CheckInStatus::CheckedIn,
        daily_reward,
        condition_met: true,
        message: Some("attendance recorded".to_string()),
    })
}

/// Weekly gauge claim: selects one weighted reward for the slot matching the
/// current streak, once per reward week.
pub async fn weekly_claim(
    state: &AppState,
    request: ClaimRequest,
) -> Result<WeeklyClaimResponse, AppError> {
    let ClaimRequest { user_id, event_id } = request;
    let now = state.clock.now_utc();

    let event = load_active_event(state, user_id, event_id, now).await?;

    let cell = state.progress_locks.cell(user_id, event_id).await;
    let _guard = cell.lock().await;

    let Some(mut progress) = find_progress(state, user_id, event_id).await? else {
        log_failed_claim(state, user_id, event_id, now, "no progress record").await?;
        return Err(AppError::NotFound(format!(
            "no progress for user {} in event {}",
            user_id, event_id
        )));
    };

    // A stale window is an error here, not a reset: the weekly claim must be
    // judged against the current week's streak, which only a daily check-in
    // establishes.
    let week_start = week_window::start_of_reward_week(now);
    if progress.is_stale(week_start) {
        state.metrics.record_claim_conflict();
        log_failed_claim(state, user_id, event_id, now, "stale reward week").await?;
        return Err(AppError::Conflict(
            "progress is for a previous week; perform a daily check-in first".to_string(),
        ));
    }

    if progress.weekly_reward_claimed {
        state.metrics.record_claim_conflict();
        log_failed_claim(state, user_id, event_id, now, "duplicate weekly claim").await?;
        return Err(AppError::Conflict(
            "weekly reward already claimed this week".to_string(),
        ));
    }

    let slot = progress.current_streak;
    if !(1..=MAX_STREAK).contains(&slot) {
        state.metrics.record_claim_conflict();
        log_failed_claim(state, user_id, event_id, now, "ineligible gauge level").await?;
        return Err(AppError::Conflict(format!(
            "gauge level {} is not eligible for a reward (claimable at levels 1-7)",
            slot
        )));
    }

    let options = event
        .slot_rewards_for(slot)
        .filter(|options| !options.is_empty())
        .ok_or_else(|| {
            error!(%event_id, slot, "no slot rewards configured");
            AppError::Internal(anyhow!(
                "no slot rewards configured for event {} slot {}",
                event_id,
                slot
            ))
        })?;

    let selected = {
        let mut rng = state.rng.lock().await;
        reward_selector::select_weighted(options, &mut *rng).cloned()
    };
    let Some(selected) = selected else {
        error!(%event_id, slot, "slot reward table carries no probability mass");
        return Err(AppError::Internal(anyhow!(
            "slot {} reward table for event {} carries no probability mass",
            slot,
            event_id
        )));
    };

    let entry = RewardClaimLogEntry::slot(
        user_id,
        event_id,
        &selected.reward_id,
        selected.quantity,
        now,
    );
    append_ledger_entry(state, &entry).await?;

    progress.record_weekly_claim(slot);
    upsert_progress(state, &progress).await?;
    state.metrics.record_weekly_claim();

    Ok(WeeklyClaimResponse {
        status: WeeklyClaimStatus::GaugeRewardClaimed,
        gauge_reward: RewardGrant {
            reward_id: selected.reward_id,
            quantity: selected.quantity,
        },
    })
}

async fn load_active_event(
    state: &AppState,
    user_id: UserId,
    event_id: EventId,
    now: DateTime<Utc>,
) -> Result<EventDefinition, AppError> {
    let event = state
        .event_repo
        .find_event(event_id)
        .await
        .map_err(|err| {
            error!(%event_id, "failed to load event definition: {err:#}");
            AppError::Internal(err.context(format!("load event definition {}", event_id)))
        })?;

    let Some(event) = event else {
        log_failed_claim(state, user_id, event_id, now, "event not found").await?;
        return Err(AppError::NotFound(format!("event {} not found", event_id)));
    };

    if !event.is_active() {
        state.metrics.record_claim_conflict();
        log_failed_claim(state, user_id, event_id, now, "event not active").await?;
        return Err(AppError::Conflict(format!(
            "event {} is not currently active (status {})",
            event_id, event.status
        )));
    }

    Ok(event)
}

async fn find_progress(
    state: &AppState,
    user_id: UserId,
    event_id: EventId,
) -> Result<Option<UserProgress>, AppError> {
    state
        .progress_repo
        .find_progress(user_id, event_id)
        .await
        .map_err(|err| {
            error!(%user_id, %event_id, "failed to load progress: {err:#}");
            AppError::Internal(err.context(format!(
                "load progress for user {} event {}",
                user_id, event_id
            )))
        })
}

async fn upsert_progress(state: &AppState, progress: &UserProgress) -> Result<(), AppError> {
    state
        .progress_repo
        .upsert_progress(progress)
        .await
        .map_err(|err| {
            error!(
                user_id = %progress.user_id,
                event_id = %progress.event_id,
                "failed to persist progress: {err:#}"
            );
            AppError::Internal(err.context(format!(
                "persist progress for user {} event {}",
                progress.user_id, progress.event_id
            )))
        })
}

async fn append_ledger_entry(
    state: &AppState,
    entry: &RewardClaimLogEntry,
) -> Result<(), AppError> {
    state.claim_log_repo.append_entry(entry).await.map_err(|err| {
        error!(
            user_id = %entry.user_id,
            event_id = %entry.event_id,
            kind = %entry.claim_kind,
            "failed to append claim ledger entry: {err:#}"
        );
        AppError::Internal(err.context(format!(
            "append {} ledger entry for user {} event {}",
            entry.claim_kind, entry.user_id, entry.event_id
        )))
    })
}

/// Records a FAIL ledger entry for a rejected attempt. The rejection reason
/// rides along in the storage-error context so a ledger outage never hides
/// what was being logged.
async fn log_failed_claim(
    state: &AppState,
    user_id: UserId,
    event_id: EventId,
    now: DateTime<Utc>,
    reason: &str,
) -> Result<(), AppError> {
    let entry = RewardClaimLogEntry::failure(user_id, event_id, now);
    state.claim_log_repo.append_entry(&entry).await.map_err(|err| {
        error!(%user_id, %event_id, reason, "failed to record FAIL ledger entry: {err:#}");
        AppError::Internal(err.context(format!(
            "append FAIL ledger entry while rejecting claim ({}) for user {} event {}",
            reason, user_id, event_id
        )))
    })
}
