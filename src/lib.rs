pub mod cache;
pub mod config;
pub mod error;
pub mod generate;
pub mod hash;
pub mod parse;
pub mod stars;
pub mod template;
pub mod transform;
pub mod validate;

pub use cache::{CacheStats, DEFAULT_CACHE_CAPACITY, HashCache};
pub use config::{Case, GenerationOptions, HashAlgorithm};
pub use error::{Result, StellarIdError};
pub use generate::{BatchOutcome, GeneratedId, StellarIdGenerator};
pub use parse::{IdParts, extract_parts, validate_format};
pub use stars::{DEFAULT_STAR_NAMES, STAR_CATALOG, StarRecord, get_star_info};

/// Generate an ID with a throwaway, uncached generator.
///
/// Use a [`StellarIdGenerator`] directly to keep a hash cache between calls.
///
/// # Errors
///
/// Returns `InvalidInput` or `InvalidOptions` if validation fails.
pub fn generate(input: &str, options: &GenerationOptions) -> Result<String> {
    StellarIdGenerator::with_cache(HashCache::with_capacity(0)).generate(input, options)
}

/// The default star list, in selection order.
pub const fn list_default_star_names() -> &'static [&'static str] {
    &DEFAULT_STAR_NAMES
}

/// Names of the supported hash algorithms, in declaration order.
pub fn list_hash_algorithms() -> Vec<&'static str> {
    HashAlgorithm::ALL.iter().map(|alg| alg.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_free_function() {
        assert_eq!(
            generate("hello", &GenerationOptions::new()),
            Ok("STAR-2322-ALTAIR".to_string())
        );
    }

    #[test]
    fn test_generate_free_function_matches_generator() {
        let options = GenerationOptions::new()
            .hash_algorithm(HashAlgorithm::Djb2)
            .length(24)
            .case(Case::Mixed);
        assert_eq!(
            generate("stellar", &options),
            StellarIdGenerator::new().generate("stellar", &options)
        );
    }

    #[test]
    fn test_list_default_star_names() {
        let names = list_default_star_names();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "SIRIUS");
        assert_eq!(names[9], "ALDEBARAN");
    }

    #[test]
    fn test_list_hash_algorithms() {
        assert_eq!(list_hash_algorithms(), vec!["simple", "djb2", "fnv1a"]);
    }

    #[test]
    fn test_star_info_for_generated_id() {
        let id = generate("hello", &GenerationOptions::new()).unwrap();
        let parts = extract_parts(&id).unwrap();
        let info = get_star_info(&parts.star_name).unwrap();
        assert_eq!(info.name, "Altair");
        assert_eq!(info.constellation, "Aquila");
    }
}
