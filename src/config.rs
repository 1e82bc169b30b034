
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

use crate::candidates::{CandidateGenerator, Syllable};
use crate::error::{Error, Result};
use crate::features::Phoneme;
use crate::optimizer::{OptimizerSettings, WordOrder};

/// Enumeration grows as (C·V)^N, so anything past four syllables is out of reach.
pub const MAX_SYLLABLES: usize = 4;

/// Everything one vocabulary build needs. Missing keys in a TOML file fall
/// back to the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
  pub frequencies: PathBuf,
  pub pronunciations: PathBuf,
  pub features: PathBuf,
  pub word_list: Option<PathBuf>,
  pub output: PathBuf,

  pub consonants: Vec<Phoneme>,
  pub vowels: Vec<Phoneme>,
  pub reserved_syllables: Vec<Syllable>,
  pub syllable_counts: Vec<usize>,

  pub vocab_size: usize,
  pub oversampling: usize,
  pub restarts: usize,
  pub seed: u64,
  pub length_penalty: u32,
  pub order: WordOrder,
  pub parallel: bool
}

fn phonemes(ps: &[&str]) -> Vec<Phoneme> {
  ps.iter().map(|p| p.to_string()).collect()
}

impl Default for RunConfig {
  fn default() -> RunConfig {
    let optimizer = OptimizerSettings::default();
    RunConfig {
      frequencies: PathBuf::from("test.txt"),
      pronunciations: PathBuf::from("cmudict-0.7b"),
      features: PathBuf::from("ipaFeatureMapping.json"),
      word_list: None,
      output: PathBuf::from("conlangVocab.json"),

      consonants: phonemes(&["l", "n", "s", "t", "k", "v", "b"]),
      vowels: phonemes(&["ɑ", "ɛ", "oʊ", "ʌ"]),
      reserved_syllables: vec![],
      syllable_counts: vec![1, 2, 3, 4],

      vocab_size: optimizer.target_size,
      oversampling: optimizer.oversampling,
      restarts: optimizer.restarts,
      seed: optimizer.seed,
      length_penalty: optimizer.length_penalty,
      order: optimizer.order,
      parallel: optimizer.parallel
    }
  }
}

impl RunConfig {
  pub fn load<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    RunConfig::parse(&fs::read_to_string(path)?)
  }

  pub fn parse(text: &str) -> Result<RunConfig> {
    Ok(toml::from_str(text)?)
  }

  pub fn validate(&self) -> Result<()> {
    if self.consonants.is_empty() || self.vowels.is_empty() {
      return Err(Error::InvalidConfig("consonant and vowel inventories must not be empty".to_owned()));
    }
    if self.syllable_counts.is_empty() {
      return Err(Error::InvalidConfig("at least one syllable count is required".to_owned()));
    }
    if let Some(n) = self.syllable_counts.iter().find(|&&n| n == 0 || n > MAX_SYLLABLES) {
      return Err(Error::InvalidConfig(format!("syllable count {} is outside 1..={}", n, MAX_SYLLABLES)));
    }
    if self.oversampling == 0 {
      return Err(Error::InvalidConfig("oversampling must be at least 1".to_owned()));
    }
    if self.restarts == 0 {
      return Err(Error::InvalidConfig("restarts must be at least 1".to_owned()));
    }
    Ok(())
  }

  pub fn optimizer_settings(&self) -> OptimizerSettings {
    OptimizerSettings {
      target_size: self.vocab_size,
      length_penalty: self.length_penalty,
      oversampling: self.oversampling,
      restarts: self.restarts,
      seed: self.seed,
      order: self.order,
      parallel: self.parallel
    }
  }

  pub fn generator(&self) -> CandidateGenerator {
    CandidateGenerator::new(self.consonants.clone(), self.vowels.clone())
      .with_reserved(self.reserved_syllables.clone())
  }
}
