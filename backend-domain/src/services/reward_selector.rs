// Weighted reward selection
// Pure except for the injected random source, so claim logic stays testable
// with a seeded generator or a fixed roll.

use rand::Rng;

use crate::entities::RewardOption;

/// Sum of configured probabilities. Slot tables do not have to sum to 1;
/// selection normalizes against this observed total.
pub fn total_probability(options: &[RewardOption]) -> f64 {
    options.iter().map(|option| option.probability).sum()
}

/// Picks one option with probability proportional to its weight. Returns
/// None when the table is empty or carries no probability mass, which
/// callers treat as a configuration error.
pub fn select_weighted<'a, R: Rng + ?Sized>(
    options: &'a [RewardOption],
    rng: &mut R,
) -> Option<&'a RewardOption> {
    let total = total_probability(options);
    if total <= 0.0 {
        return None;
    }
    pick_at(options, rng.gen_range(0.0..total))
}

/// Walks the table with an explicit roll in `[0, total)`. If accumulated
/// float drift exhausts the walk, the last option absorbs the remaining
/// mass; probability is never silently dropped.
pub fn pick_at<'a>(options: &'a [RewardOption], roll: f64) -> Option<&'a RewardOption> {
    let mut remaining = roll;
    for option in options {
        if remaining < option.probability {
            return Some(option);
        }
        remaining -= option.probability;
    }
    options.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn option(reward_id: &str, probability: f64) -> RewardOption {
        RewardOption {
            reward_id: reward_id.to_string(),
            quantity: 1,
            probability,
        }
    }

    #[test]
    fn zero_total_mass_selects_nothing() {
        let options = vec![option("A", 0.0), option("B", 0.0)];
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_weighted(&options, &mut rng).is_none());
        assert!(select_weighted(&[], &mut rng).is_none());
    }

    #[test]
    fn certain_option_is_always_selected() {
        let options = vec![option("A", 1.0)];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let picked = select_weighted(&options, &mut rng).expect("selection");
            assert_eq!(picked.reward_id, "A");
        }
    }

    #[test]
    fn roll_past_first_band_selects_second_option() {
        // 0.9 lands beyond A's 0.8 band, inside B's.
        let options = vec![option("A", 0.8), option("B", 0.2)];
        let picked = pick_at(&options, 0.9).expect("selection");
        assert_eq!(picked.reward_id, "B");
    }

    #[test]
    fn exhausted_walk_falls_back_to_last_option() {
        let options = vec![option("A", 0.5), option("B", 0.5)];
        // A drifted roll equal to the total must still yield an option.
        let picked = pick_at(&options, 1.0).expect("selection");
        assert_eq!(picked.reward_id, "B");
    }

    #[test]
    fn selection_converges_to_configured_weights() {
        let options = vec![option("A", 0.6), option("B", 0.3), option("C", 0.1)];
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 10_000usize;
        let mut counts = [0usize; 3];
        for _ in 0..draws {
            let picked = select_weighted(&options, &mut rng).expect("selection");
            match picked.reward_id.as_str() {
                "A" => counts[0] += 1,
                "B" => counts[1] += 1,
                _ => counts[2] += 1,
            }
        }
        let expected = [0.6, 0.3, 0.1];
        for (count, want) in counts.iter().zip(expected) {
            let observed = *count as f64 / draws as f64;
            assert!(
                (observed - want).abs() < 0.03,
                "observed {} expected {}",
                observed,
                want
            );
        }
    }

    #[test]
    fn weights_are_normalized_against_observed_total() {
        // Sums to 0.5, not 1.0; the draw space shrinks with it.
        let options = vec![option("A", 0.4), option("B", 0.1)];
        let mut rng = StdRng::seed_from_u64(11);
        let draws = 10_000usize;
        let mut first = 0usize;
        for _ in 0..draws {
            if select_weighted(&options, &mut rng).expect("selection").reward_id == "A" {
                first += 1;
            }
        }
        let observed = first as f64 / draws as f64;
        assert!((observed - 0.8).abs() < 0.03, "observed {}", observed);
    }
}
