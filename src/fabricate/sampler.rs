//! Sampling helpers shared by the per-entity fabrication rules.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

/// Generate a random UUID v4 string using the provided RNG.
pub fn uuid<R: Rng>(rng: &mut R) -> String {
    // Generate 16 random bytes
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes).to_string()
}

/// Uniform pick from a non-empty pool.
pub fn pick<R: Rng, T: Copy>(rng: &mut R, pool: &[T]) -> T {
    pool[rng.gen_range(0..pool.len())]
}

/// Populate an optional field with the given presence probability.
///
/// The probability is an explicit per-field parameter supplied by the rule,
/// independent of the field being `Option`-typed.
pub fn maybe<R: Rng, T, F>(rng: &mut R, present: f64, value: F) -> Option<T>
where
    F: FnOnce(&mut R) -> T,
{
    if rng.gen_bool(present) {
        Some(value(rng))
    } else {
        None
    }
}

/// Random timestamp within the past `days` days.
///
/// Anchored at the current time, so this is NOT deterministic across calls
/// even with a seeded RNG.
pub fn recent<R: Rng>(rng: &mut R, days: i64) -> DateTime<Utc> {
    let window = Duration::days(days).num_seconds();
    let offset = rng.gen_range(0..=window);
    Utc::now() - Duration::seconds(offset)
}

/// Fixed-length string of random decimal digits.
pub fn digits<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uuid_is_v4() {
        let mut rng = StdRng::seed_from_u64(42);
        let id = uuid(&mut rng);
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(uuid(&mut rng1), uuid(&mut rng2));
        // Consecutive draws from the same stream stay unique
        assert_ne!(uuid(&mut rng1), uuid(&mut rng1));
    }

    #[test]
    fn test_pick_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(pool.contains(&pick(&mut rng, &pool)));
        }
    }

    #[test]
    fn test_maybe_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(maybe(&mut rng, 1.0, |_| 1).is_some());
        assert!(maybe(&mut rng, 0.0, |_| 1).is_none());
    }

    #[test]
    fn test_recent_is_in_window() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let ts = recent(&mut rng, 2);
            let age = Utc::now() - ts;
            assert!(age >= Duration::zero());
            assert!(age <= Duration::days(2) + Duration::seconds(5));
        }
    }

    #[test]
    fn test_digits_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = digits(&mut rng, 5);
        assert_eq!(s.len(), 5);
        assert!(s.chars().all(|c| c.is_ascii_digit()));
    }
}
