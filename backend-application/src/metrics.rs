use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    daily_checkins: AtomicU64,
    condition_failures: AtomicU64,
    weekly_claims: AtomicU64,
    claim_conflicts: AtomicU64,
}

impl Metrics {
    pub fn record_daily_checkin(&self) {
        self.daily_checkins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_condition_failure(&self) {
        self.condition_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_weekly_claim(&self) {
        self.weekly_claims.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_claim_conflict(&self) {
        self.claim_conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let daily = self.daily_checkins.load(Ordering::Relaxed);
        let condition_failures = self.condition_failures.load(Ordering::Relaxed);
        let weekly = self.weekly_claims.load(Ordering::Relaxed);
        let conflicts = self.claim_conflicts.load(Ordering::Relaxed);

        format!(
            "# TYPE attendance_daily_checkins_total counter\n\
attendance_daily_checkins_total {}\n\
# TYPE attendance_condition_failures_total counter\n\
attendance_condition_failures_total {}\n\
# TYPE attendance_weekly_claims_total counter\n\
attendance_weekly_claims_total {}\n\
# TYPE attendance_claim_conflicts_total counter\n\
attendance_claim_conflicts_total {}\n",
            daily, condition_failures, weekly, conflicts
        )
    }
}
