use std::{fmt, str::FromStr};

use anyhow::bail;
use rand::prelude::*;
use serde_with::{DeserializeFromStr, SerializeDisplay};

const MAX_LEN: usize = 64;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Seed strings that are normalized to be case, whitespace and punctuation
/// insensitive, so trivial transcription errors like an added space can't
/// change the seed.
///
/// ```
/// # use gridkit::{Dice, RngExt, Seed};
/// assert_eq!(Seed::new("pAss Word").to_string(), "PASSWORD");
///
/// assert_eq!(
///   Dice::from_seed(&Seed::new("pAss Word")).range(0, 1000),
///   Dice::from_seed(&Seed::new("password")).range(0, 1000));
/// ```
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct Seed(String);

impl Seed {
    /// Normalize arbitrary text into a seed.
    pub fn new(s: impl AsRef<str>) -> Self {
        s.as_ref().chars().collect()
    }

    /// Generate a random seed of `len` characters.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Seed {
        (0..len.min(MAX_LEN))
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromIterator<char> for Seed {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Seed(
            iter.into_iter()
                .map(|c| c.to_ascii_uppercase())
                .filter(char::is_ascii_alphanumeric)
                .take(MAX_LEN)
                .collect(),
        )
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed(n.to_string())
    }
}

/// Parse an already normalized seed.
///
/// Use `Seed::new` to normalize free-form text instead.
impl FromStr for Seed {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_LEN {
            bail!("seed longer than {MAX_LEN} characters")
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            bail!("not a valid seed: {s:?}")
        }
        Ok(Seed(s.into()))
    }
}
