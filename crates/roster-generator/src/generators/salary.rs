//! Stepped salary generation.

use rand::Rng;

/// Lowest generated salary (inclusive).
pub const SALARY_MIN: u32 = 55_000;

/// Highest generated salary (inclusive).
pub const SALARY_MAX: u32 = 180_000;

/// Salaries are multiples of this step.
pub const SALARY_STEP: u32 = 1_000;

/// Generate a salary uniformly over {55_000, 56_000, .., 180_000}.
///
/// The draw picks a step index rather than a raw value, so every result is
/// a multiple of [`SALARY_STEP`].
pub fn salary<R: Rng>(rng: &mut R) -> u32 {
    let steps = (SALARY_MAX - SALARY_MIN) / SALARY_STEP;
    SALARY_MIN + rng.gen_range(0..=steps) * SALARY_STEP
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_salary_range_and_step() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let value = salary(&mut rng);
            assert!((SALARY_MIN..=SALARY_MAX).contains(&value));
            assert_eq!(value % SALARY_STEP, 0);
        }
    }

    #[test]
    fn test_salary_bounds_reachable() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut min_seen = u32::MAX;
        let mut max_seen = 0;
        for _ in 0..100_000 {
            let value = salary(&mut rng);
            min_seen = min_seen.min(value);
            max_seen = max_seen.max(value);
        }

        assert_eq!(min_seen, SALARY_MIN);
        assert_eq!(max_seen, SALARY_MAX);
    }

    #[test]
    fn test_deterministic_salary() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            assert_eq!(salary(&mut rng1), salary(&mut rng2));
        }
    }
}
