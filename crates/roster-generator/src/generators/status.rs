//! Weighted employment status draw.

use rand::Rng;
use roster_core::Status;

/// Draw a status by cumulative-weight selection over [`Status::WEIGHTS`].
///
/// With weights active 4, inactive 1, on-leave 1 this is equivalent to a
/// uniform draw over a six-slot multiset.
pub fn weighted_status<R: Rng>(rng: &mut R) -> Status {
    let total: u32 = Status::WEIGHTS.iter().map(|(_, weight)| weight).sum();
    let mut draw = rng.gen_range(0..total);

    for (status, weight) in Status::WEIGHTS {
        if draw < weight {
            return status;
        }
        draw -= weight;
    }

    unreachable!("draw is bounded by the cumulative status weight")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_status_in_domain() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let status = weighted_status(&mut rng);
            assert!(Status::WEIGHTS.iter().any(|(s, _)| *s == status));
        }
    }

    #[test]
    fn test_status_distribution() {
        let mut rng = StdRng::seed_from_u64(42);

        let draws = 6000;
        let mut counts = std::collections::HashMap::new();
        for _ in 0..draws {
            *counts.entry(weighted_status(&mut rng)).or_insert(0u32) += 1;
        }

        // Expected frequencies 4/6, 1/6, 1/6 with a generous tolerance
        let active = counts[&Status::Active] as f64 / draws as f64;
        let inactive = counts[&Status::Inactive] as f64 / draws as f64;
        let on_leave = counts[&Status::OnLeave] as f64 / draws as f64;

        assert!((active - 4.0 / 6.0).abs() < 0.05, "active = {active}");
        assert!((inactive - 1.0 / 6.0).abs() < 0.05, "inactive = {inactive}");
        assert!((on_leave - 1.0 / 6.0).abs() < 0.05, "on-leave = {on_leave}");
    }

    #[test]
    fn test_deterministic_draw() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            assert_eq!(weighted_status(&mut rng1), weighted_status(&mut rng2));
        }
    }
}
