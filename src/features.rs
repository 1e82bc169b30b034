
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// The symbol standing in for "no phoneme" when costing insertions and deletions.
pub const EMPTY: &str = "";

pub type Phoneme = String;

/// Feature name to categorical value. Values are kept as raw JSON so the table
/// can use strings, numbers or booleans interchangeably.
pub type FeatureVector = BTreeMap<String, Value>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureTable {
  phonemes: BTreeMap<Phoneme, FeatureVector>
}

impl FeatureTable {
  pub fn load<P: AsRef<Path>>(path: P) -> Result<FeatureTable> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
  }

  /// A table where every symbol differs from every other symbol (and from
  /// `EMPTY`) in exactly one feature. Edit distance over it is plain Levenshtein.
  pub fn unit_cost<S: AsRef<str>>(symbols: &[S]) -> FeatureTable {
    let mut phonemes = BTreeMap::new();
    for symbol in symbols.iter().map(|s| s.as_ref()).chain(std::iter::once(EMPTY)) {
      let mut features = FeatureVector::new();
      features.insert("identity".to_owned(), Value::String(symbol.to_owned()));
      phonemes.insert(symbol.to_owned(), features);
    }
    FeatureTable { phonemes }
  }

  pub fn features(&self, symbol: &str) -> Result<&FeatureVector> {
    self.phonemes.get(symbol).ok_or_else(|| Error::MissingPhoneme(symbol.to_owned()))
  }

  pub fn contains(&self, symbol: &str) -> bool {
    self.phonemes.contains_key(symbol)
  }

  pub fn symbols(&self) -> impl Iterator<Item = &str> {
    self.phonemes.keys().map(|s| s.as_str())
  }

  pub fn len(&self) -> usize {
    self.phonemes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.phonemes.is_empty()
  }

  /// Number of features on which `a` and `b` disagree, counting only feature
  /// names both vectors carry.
  pub fn mismatch_count(&self, a: &str, b: &str) -> Result<u32> {
    let fa = self.features(a)?;
    let fb = self.features(b)?;
    Ok(fa.iter().filter(|(name, value)| {
      match fb.get(*name) {
        Some(other) => other != *value,
        None => false
      }
    }).count() as u32)
  }
}
