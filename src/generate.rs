use crate::cache::{CacheStats, HashCache};
use crate::config::GenerationOptions;
use crate::error::{Result, StellarIdError};
use crate::hash::{hash_field, hash_number};
use crate::stars::{DEFAULT_STAR_NAMES, select_star};
use crate::template::{TemplateValues, render};
use crate::transform::{apply_case, clamp, inject_special_chars, normalize_length, utf16_prefix};
use crate::validate::{validate_input, validate_options};

/// Leading input UTF-16 units exposed to the `{input}` token.
const INPUT_TOKEN_UNITS: usize = 10;

/// A generated ID along with the values it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedId {
    pub id: String,
    /// Raw output of the hash algorithm over the salted input.
    pub hash: u32,
    /// `hash % 10000`, the value shown in the hash field.
    pub hash_number: u32,
    /// Index of the chosen star in the active name list.
    pub star_index: usize,
    pub star_name: String,
}

/// Result of [`StellarIdGenerator::generate_batch`], in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// `(input, id)` for every input that generated.
    pub generated: Vec<(String, String)>,
    /// `(input, error)` for every input that failed validation.
    pub failed: Vec<(String, StellarIdError)>,
}

/// Deterministic ID generator owning its own hash cache.
///
/// The output is a pure function of `(input, options)`; the cache only
/// skips recomputing hashes it has already seen.
#[derive(Debug, Default)]
pub struct StellarIdGenerator {
    cache: HashCache,
}

impl StellarIdGenerator {
    /// Create a generator with a default-capacity cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator backed by the given cache.
    pub const fn with_cache(cache: HashCache) -> Self {
        Self { cache }
    }

    /// Generate an ID for `input`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or `InvalidOptions` before any hashing happens.
    pub fn generate(&self, input: &str, options: &GenerationOptions) -> Result<String> {
        self.generate_detailed(input, options).map(|generated| generated.id)
    }

    /// Generate an ID and report the hash and star selection behind it.
    ///
    /// Steps, in order:
    /// 1. Validate input and options
    /// 2. Hash `input + salt` with the configured algorithm (through the cache if enabled)
    /// 3. Pick the star at `hash_number % names.len()`
    /// 4. Assemble `{prefix}-{hash}-{star}` or render the custom format
    /// 5. Normalize to `length`, apply case, inject special characters
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or `InvalidOptions` before any hashing happens.
    pub fn generate_detailed(
        &self,
        input: &str,
        options: &GenerationOptions,
    ) -> Result<GeneratedId> {
        validate_input(input)?;
        validate_options(options)?;

        let salted = match &options.salt {
            Some(salt) => format!("{input}{salt}"),
            None => input.to_string(),
        };
        let algorithm = options.hash_algorithm;
        let hash = if options.enable_cache {
            self.cache.get_or_compute(algorithm, &salted)
        } else {
            algorithm.compute(&salted)
        };
        let hash_number = hash_number(hash);
        let hash_str = hash_field(hash_number);

        let selected = match &options.custom_star_names {
            Some(names) => select_star(hash_number, names),
            None => select_star(hash_number, &DEFAULT_STAR_NAMES),
        };
        let (star_index, star_name) = selected.ok_or_else(|| {
            StellarIdError::option("custom_star_names", "must contain at least one name")
        })?;

        let mut id = match &options.format {
            Some(template) => {
                let input_head = utf16_prefix(input, INPUT_TOKEN_UNITS);
                render(
                    template,
                    &TemplateValues {
                        prefix: &options.prefix,
                        hash: &hash_str,
                        star: star_name,
                        input: &input_head,
                    },
                )
            }
            None => format!("{}-{}-{}", options.prefix, hash_str, star_name),
        };

        if let Some(length) = options.length {
            id = normalize_length(&id, length, hash_number, options.use_special_chars);
        }

        id = apply_case(&id, options.case);

        if let Some(length) = options.length {
            // Lowercasing can expand some characters
            id = clamp(&id, length);
            if options.use_special_chars {
                id = inject_special_chars(&id, hash_number, length);
            }
        }

        log::debug!("generated {id} ({algorithm}, hash field {hash_str})");

        Ok(GeneratedId {
            id,
            hash,
            hash_number,
            star_index,
            star_name: star_name.to_string(),
        })
    }

    /// Generate an ID for every input, collecting failures instead of stopping.
    pub fn generate_batch<I, S>(&self, inputs: I, options: &GenerationOptions) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = BatchOutcome::default();
        for input in inputs {
            let input = input.as_ref();
            match self.generate(input, options) {
                Ok(id) => outcome.generated.push((input.to_string(), id)),
                Err(err) => outcome.failed.push((input.to_string(), err)),
            }
        }
        log::debug!(
            "batch generated {} IDs, {} failed",
            outcome.generated.len(),
            outcome.failed.len()
        );
        outcome
    }

    /// Drop every cached hash, returning how many entries were removed.
    pub fn clear_cache(&self) -> usize {
        let removed = self.cache.clear();
        log::debug!("cleared {removed} cached hashes");
        removed
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
