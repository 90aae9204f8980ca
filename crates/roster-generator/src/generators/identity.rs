//! Name and email generation backed by the faker.

use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// Generate a locale-formatted full name.
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

/// Generate an email address, normalized to lowercase.
pub fn email<R: Rng>(rng: &mut R) -> String {
    let address: String = FreeEmail().fake_with_rng(rng);
    address.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_non_empty() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let name = full_name(&mut rng);
            assert!(!name.trim().is_empty());
        }
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let address = email(&mut rng);
            assert!(address.contains('@'), "missing @ in {address}");
            assert!(
                address.rsplit('@').next().unwrap().contains('.'),
                "missing domain dot in {address}"
            );
        }
    }

    #[test]
    fn test_email_lowercase() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let address = email(&mut rng);
            assert!(
                !address.chars().any(|c| c.is_uppercase()),
                "uppercase in {address}"
            );
        }
    }

    #[test]
    fn test_deterministic_identity() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(full_name(&mut rng1), full_name(&mut rng2));
            assert_eq!(email(&mut rng1), email(&mut rng2));
        }
    }
}
