//! Random creature-name generator.
//!
//! Names are built from underscore-separated parts: a capitalized prefix
//! followed by up to three fully uppercased prefixes or suffixes, e.g.
//! `Storm_CLAW_FIRE`. The random source is supplied by the caller so runs can
//! be pinned with a seeded generator.

use rand::Rng;

/// Maximum length of a generated name in characters.
pub const MAX_NAME_LEN: usize = 50;

/// An over-long name is cut back at its last underscore only if that
/// underscore lies beyond this position.
const PART_CUT_MIN_POS: usize = 35;

pub const PREFIXES: [&str; 20] = [
    "char", "pika", "blast", "fire", "ice", "water", "earth", "wind", "shadow", "light", "storm",
    "flame", "frost", "volt", "rock", "steel", "dark", "psychic", "ghost", "dragon",
];

pub const SUFFIXES: [&str; 19] = [
    "mon", "izard", "chu", "saur", "tle", "gon", "ite", "eon", "achu", "mander", "puff", "lord",
    "master", "wing", "claw", "fang", "tail", "eye", "bug",
];

/// Generates a random name of at most [`MAX_NAME_LEN`] characters.
///
/// The result only contains ASCII letters and underscores and never starts
/// with an underscore.
pub fn generate_name<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    Vocabulary::DEFAULT.generate(rng)
}

/// Word lists names are assembled from.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary<'a> {
    pub prefixes: &'a [&'a str],
    pub suffixes: &'a [&'a str],
}

impl Vocabulary<'static> {
    pub const DEFAULT: Self = Self {
        prefixes: &PREFIXES,
        suffixes: &SUFFIXES,
    };
}

impl Vocabulary<'_> {
    /// Generates a name from this vocabulary.
    ///
    /// If sanitizing leaves nothing usable, a single capitalized prefix is
    /// returned instead.
    pub fn generate<R>(&self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let num_parts = rng.random_range(1..=4);
        let mut parts = Vec::with_capacity(num_parts);
        parts.push(capitalize(pick(rng, self.prefixes)));
        for _ in 1..num_parts {
            let vocabulary = if rng.random_bool(0.5) {
                self.prefixes
            } else {
                self.suffixes
            };
            parts.push(pick(rng, vocabulary).to_uppercase());
        }

        sanitize_name(&parts.join("_")).unwrap_or_else(|| {
            tracing::debug!(raw = %parts.join("_"), "falling back to a single prefix");
            capitalize(pick(rng, self.prefixes))
        })
    }
}

/// Cleans up a raw underscore-joined name.
///
/// Characters other than ASCII letters and underscores are removed, a leading
/// underscore is dropped (uppercasing the new first letter) and names longer
/// than [`MAX_NAME_LEN`] are shortened. Returns `None` if nothing usable is
/// left.
#[must_use]
pub fn sanitize_name(raw: &str) -> Option<String> {
    let mut name = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '_')
        .collect::<String>();

    if let Some(rest) = name.strip_prefix('_') {
        name = capitalize(rest);
    }

    // only ASCII is left, so byte offsets are character offsets
    if name.len() > MAX_NAME_LEN {
        name.truncate(MAX_NAME_LEN);
        if let Some(pos) = name.rfind('_').filter(|&pos| pos > PART_CUT_MIN_POS) {
            name.truncate(pos);
        }
    }

    if name.is_empty() || name.starts_with('_') {
        None
    } else {
        Some(name)
    }
}

/// Uppercases the first character, leaving the rest as is.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn pick<'a, R>(rng: &mut R, vocabulary: &[&'a str]) -> &'a str
where
    R: Rng + ?Sized,
{
    vocabulary[rng.random_range(0..vocabulary.len())]
}

#[cfg(test)]
mod tests {
    use rand::{RngCore, SeedableRng as _, rngs::StdRng};

    use super::*;

    /// Random source that only ever produces zero bits, so every draw picks
    /// the lowest option.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn is_well_formed(name: &str) -> bool {
        name.len() <= MAX_NAME_LEN
            && name.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
            && !name.starts_with('_')
            && !name.is_empty()
    }

    #[test]
    fn test_generated_names_are_well_formed() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let name = generate_name(&mut rng);
            assert!(is_well_formed(&name), "malformed name: {name:?}");
        }
    }

    #[test]
    fn test_generated_name_structure() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let name = generate_name(&mut rng);
            let parts = name.split('_').collect::<Vec<_>>();
            assert!((1..=4).contains(&parts.len()), "{name}");

            let first = parts[0];
            assert!(PREFIXES.iter().any(|p| capitalize(p) == first), "{name}");
            for part in &parts[1..] {
                let lower = part.to_lowercase();
                assert_eq!(*part, lower.to_uppercase());
                assert!(
                    PREFIXES.contains(&lower.as_str()) || SUFFIXES.contains(&lower.as_str()),
                    "{name}"
                );
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = (0..20)
            .map({
                let mut rng = StdRng::seed_from_u64(42);
                move |_| generate_name(&mut rng)
            })
            .collect::<Vec<_>>();
        let b = (0..20)
            .map({
                let mut rng = StdRng::seed_from_u64(42);
                move |_| generate_name(&mut rng)
            })
            .collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_draws_give_single_first_prefix() {
        assert_eq!(generate_name(&mut ZeroRng), "Char");
    }

    #[test]
    fn test_unusable_parts_fall_back_to_prefix() {
        let vocabulary = Vocabulary {
            prefixes: &["42", "volt"],
            suffixes: &["claw"],
        };
        // "42" sanitizes to nothing, and the fallback draws the first prefix again
        assert_eq!(vocabulary.generate(&mut ZeroRng), "42");

        let vocabulary = Vocabulary {
            prefixes: &["_ice"],
            suffixes: &["fang"],
        };
        assert_eq!(vocabulary.generate(&mut ZeroRng), "Ice");
    }

    #[test]
    fn test_sanitize_strips_invalid_characters() {
        assert_eq!(sanitize_name("Mr. Mime-2").as_deref(), Some("MrMime"));
    }

    #[test]
    fn test_sanitize_drops_leading_underscore() {
        assert_eq!(sanitize_name("_fire_CLAW").as_deref(), Some("Fire_CLAW"));
        assert_eq!(sanitize_name("_"), None);
        assert_eq!(sanitize_name("__x"), None);
        assert_eq!(sanitize_name("!!!"), None);
    }

    #[test]
    fn test_sanitize_cuts_at_late_underscore() {
        // underscore at position 40 lies past the cut boundary
        let raw = format!("{}_{}", "A".repeat(40), "B".repeat(20));
        assert_eq!(sanitize_name(&raw), Some("A".repeat(40)));
    }

    #[test]
    fn test_sanitize_keeps_hard_cut_for_early_underscore() {
        // underscore at position 10 is too early, keep the 50-character cut
        let raw = format!("{}_{}", "A".repeat(10), "B".repeat(60));
        let name = sanitize_name(&raw).unwrap();
        assert_eq!(name.len(), MAX_NAME_LEN);
        assert_eq!(name, format!("{}_{}", "A".repeat(10), "B".repeat(39)));
    }

    #[test]
    fn test_capitalize_keeps_rest() {
        assert_eq!(capitalize("pika"), "Pika");
        assert_eq!(capitalize("sHADOW"), "SHADOW");
        assert_eq!(capitalize(""), "");
    }
}
