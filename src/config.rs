use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StellarIdError};

pub const DEFAULT_PREFIX: &str = "STAR";

/// String hash used to derive the 4-digit hash field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Simple,
    Djb2,
    Fnv1a,
}

impl HashAlgorithm {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Djb2, Self::Fnv1a];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Djb2 => "djb2",
            Self::Fnv1a => "fnv1a",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = StellarIdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| {
                StellarIdError::option(
                    "hash_algorithm",
                    format!("unknown algorithm '{s}', expected one of simple, djb2, fnv1a"),
                )
            })
    }
}

/// Case transformation applied to the assembled ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Upper,
    Lower,
    Mixed,
}

impl Case {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = StellarIdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            "mixed" => Ok(Self::Mixed),
            other => Err(StellarIdError::option(
                "case",
                format!("unknown case '{other}', expected one of upper, lower, mixed"),
            )),
        }
    }
}

/// Options controlling how an ID is assembled.
///
/// Field names deserialize in camelCase (`hashAlgorithm`, `customStarNames`, ...)
/// and every field is optional, falling back to [`GenerationOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    pub use_special_chars: bool,
    pub case: Case,
    pub hash_algorithm: HashAlgorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_star_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    pub enable_cache: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            length: None,
            use_special_chars: false,
            case: Case::Upper,
            hash_algorithm: HashAlgorithm::Simple,
            custom_star_names: None,
            format: None,
            salt: None,
            enable_cache: true,
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub const fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub const fn use_special_chars(mut self, enabled: bool) -> Self {
        self.use_special_chars = enabled;
        self
    }

    #[must_use]
    pub const fn case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    #[must_use]
    pub const fn hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn custom_star_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_star_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }

    #[must_use]
    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    #[must_use]
    pub const fn enable_cache(mut self, enabled: bool) -> Self {
        self.enable_cache = enabled;
        self
    }
}
