use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::error;

use backend_domain::ClaimLogFilter;

use crate::dtos::{ClaimLogPage, ClaimLogQuery};
use crate::{AppError, AppState};

/// Paged audit view over the claim ledger, newest entries first. Date bounds
/// are calendar days in UTC; `dateTo` is inclusive through end of day.
pub async fn list_claim_logs(
    state: &AppState,
    query: ClaimLogQuery,
) -> Result<ClaimLogPage, AppError> {
    let filter = ClaimLogFilter {
        user_id: query.user_id,
        date_from: query
            .date_from
            .as_deref()
            .map(parse_day_start)
            .transpose()?,
        date_to: query.date_to.as_deref().map(parse_day_end).transpose()?,
    };

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query
        .limit
        .unwrap_or(state.config.log_page_size_default)
        .clamp(1, state.config.log_page_size_max);
    let offset = page.saturating_sub(1).saturating_mul(per_page);

    let (logs, total) = state
        .claim_log_repo
        .query_entries(&filter, offset, per_page)
        .await
        .map_err(|err| {
            error!("claim log query failed: {err:#}");
            AppError::Internal(err.context("query claim ledger"))
        })?;

    Ok(ClaimLogPage {
        logs,
        total,
        current_page: page,
        per_page,
        total_pages: total.div_ceil(per_page),
    })
}

fn parse_day_start(raw: &str) -> Result<DateTime<Utc>, AppError> {
    Ok(parse_day(raw)?.and_time(NaiveTime::MIN).and_utc())
}

fn parse_day_end(raw: &str) -> Result<DateTime<Utc>, AppError> {
    Ok(parse_day(raw)?.and_time(NaiveTime::MIN).and_utc() + Duration::days(1)
        - Duration::milliseconds(1))
}

fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date '{}', expected YYYY-MM-DD", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{active_event, test_state, thursday};
    use backend_domain::ports::ClaimLogRepository;
    use backend_domain::{EventId, RewardClaimLogEntry, UserId};

    async fn seed_entries(harness: &crate::test_support::TestHarness, count: usize) {
        for offset in 0..count {
            let entry = RewardClaimLogEntry::daily(
                UserId(1),
                EventId(100),
                "MESO_1000000",
                1,
                thursday() + Duration::hours(offset as i64),
            );
            harness.store.append_entry(&entry).await.unwrap();
        }
    }

    #[tokio::test]
    async fn pages_newest_first() {
        let harness = test_state(active_event()).await;
        seed_entries(&harness, 25).await;

        let page = list_claim_logs(
            &harness.state,
            ClaimLogQuery {
                page: Some(2),
                limit: Some(10),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(page.total, 25);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.logs.len(), 10);
        // Offset 24 is the newest entry; page 2 starts 10 behind it.
        assert_eq!(page.logs[0].created_at, thursday() + Duration::hours(14));
    }

    #[tokio::test]
    async fn defaults_and_clamps_page_size() {
        let harness = test_state(active_event()).await;
        seed_entries(&harness, 5).await;

        let defaulted = list_claim_logs(&harness.state, ClaimLogQuery::default())
            .await
            .unwrap();
        assert_eq!(defaulted.per_page, 10);

        let clamped = list_claim_logs(
            &harness.state,
            ClaimLogQuery {
                limit: Some(10_000),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(clamped.per_page, 100);
    }

    #[tokio::test]
    async fn filters_by_user() {
        let harness = test_state(active_event()).await;
        seed_entries(&harness, 3).await;
        let other = RewardClaimLogEntry::daily(UserId(2), EventId(100), "X", 1, thursday());
        harness.store.append_entry(&other).await.unwrap();

        let page = list_claim_logs(
            &harness.state,
            ClaimLogQuery {
                user_id: Some(UserId(2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.logs[0].user_id, UserId(2));
    }

    #[tokio::test]
    async fn date_to_is_inclusive_through_end_of_day() {
        let harness = test_state(active_event()).await;
        let late = RewardClaimLogEntry::daily(
            UserId(1),
            EventId(100),
            "X",
            1,
            thursday().date_naive().and_hms_opt(23, 59, 59).unwrap().and_utc(),
        );
        harness.store.append_entry(&late).await.unwrap();

        let page = list_claim_logs(
            &harness.state,
            ClaimLogQuery {
                date_from: Some("2025-07-03".to_string()),
                date_to: Some("2025-07-03".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn malformed_date_is_rejected() {
        let harness = test_state(active_event()).await;
        let result = list_claim_logs(
            &harness.state,
            ClaimLogQuery {
                date_from: Some("03-07-2025".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn out_of_range_page_yields_empty_page() {
        let harness = test_state(active_event()).await;
        seed_entries(&harness, 3).await;
        let page = list_claim_logs(
            &harness.state,
            ClaimLogQuery {
                page: Some(usize::MAX),
                limit: Some(10),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(page.logs.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.current_page, usize::MAX);
    }

    #[tokio::test]
    async fn zero_page_is_treated_as_first() {
        let harness = test_state(active_event()).await;
        seed_entries(&harness, 2).await;
        let page = list_claim_logs(
            &harness.state,
            ClaimLogQuery {
                page: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.logs.len(), 2);
    }
}
