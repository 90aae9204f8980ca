//! Department and role selection.

use rand::seq::SliceRandom;
use rand::Rng;
use roster_core::{Catalog, Department};

/// Pick a department uniformly at random from the catalog.
pub fn pick_department<'a, R: Rng>(rng: &mut R, catalog: &'a Catalog) -> &'a Department {
    let idx = rng.gen_range(0..catalog.len());
    &catalog.departments()[idx]
}

/// Pick a role uniformly at random from the department's role list.
pub fn pick_role<'a, R: Rng>(rng: &mut R, department: &'a Department) -> &'a str {
    // Catalog construction rejects empty role lists
    department
        .roles
        .choose(rng)
        .expect("department has at least one role")
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_department_stays_in_catalog() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = Catalog::builtin();

        for _ in 0..100 {
            let department = pick_department(&mut rng, &catalog);
            assert!(catalog.get(&department.name).is_some());
        }
    }

    #[test]
    fn test_pick_role_belongs_to_department() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = Catalog::builtin();

        for _ in 0..100 {
            let department = pick_department(&mut rng, &catalog);
            let role = pick_role(&mut rng, department);
            assert!(department.roles.iter().any(|r| r == role));
        }
    }

    #[test]
    fn test_every_department_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = Catalog::builtin();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(pick_department(&mut rng, &catalog).name.clone());
        }
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn test_deterministic_selection() {
        let catalog = Catalog::builtin();

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let d1 = pick_department(&mut rng1, &catalog);
            let d2 = pick_department(&mut rng2, &catalog);
            assert_eq!(d1.name, d2.name);
        }
    }
}
