
use std::cmp::Reverse;
use std::collections::HashSet;

use float_ord::FloatOrd;
use howlong::SteadyTimer;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};

use crate::candidates::{subsample, CandidateWord};
use crate::dictionary::FrequencyTable;
use crate::distance_matrix::PhonemeDistanceMatrix;
use crate::edit_distance::weighted_distance_encoded;
use crate::error::Result;
use crate::features::Phoneme;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealWord {
  pub symbol: String,
  pub frequency: f64,
  pub phonemes: Vec<Phoneme>
}

/// Order in which real words claim candidates.
///
/// `AsSupplied` keeps the frequency table's own order even though the run is
/// later cut off at the vocabulary size, so it is not the same as picking the
/// most frequent words. `DescendingFrequency` lets the most frequent words pick first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WordOrder {
  #[default]
  AsSupplied,
  DescendingFrequency
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
  pub word: String,
  pub word_phonemes: Vec<Phoneme>,
  pub candidate: CandidateWord
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VocabAssignment {
  pub entries: Vec<Assignment>,
  pub total_loss: f64
}

impl VocabAssignment {
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, word: &str) -> Option<&CandidateWord> {
    self.entries.iter().find(|a| a.word == word).map(|a| &a.candidate)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptimizerSettings {
  pub target_size: usize,
  /// Added per candidate phoneme, biasing toward short words.
  pub length_penalty: u32,
  /// Each restart draws `target_size * oversampling` candidates.
  pub oversampling: usize,
  pub restarts: usize,
  pub seed: u64,
  pub order: WordOrder,
  pub parallel: bool
}

impl Default for OptimizerSettings {
  fn default() -> OptimizerSettings {
    OptimizerSettings {
      target_size: 10,
      length_penalty: 5,
      oversampling: 100,
      restarts: 1,
      seed: 0,
      order: WordOrder::AsSupplied,
      parallel: true
    }
  }
}

struct PoolEntry {
  word: CandidateWord,
  encoded: Vec<usize>
}

pub struct VocabularyOptimizer<'m> {
  matrix: &'m PhonemeDistanceMatrix,
  settings: OptimizerSettings
}

impl<'m> VocabularyOptimizer<'m> {
  pub fn new(matrix: &'m PhonemeDistanceMatrix, settings: OptimizerSettings) -> VocabularyOptimizer<'m> {
    VocabularyOptimizer { matrix, settings }
  }

  fn encoded_loss(&self, real: &[usize], candidate: &[usize]) -> u32 {
    weighted_distance_encoded(real, candidate, self.matrix) + self.settings.length_penalty * candidate.len() as u32
  }

  pub fn loss(&self, real: &[Phoneme], candidate: &CandidateWord) -> Result<u32> {
    Ok(self.encoded_loss(&self.matrix.encode(real)?, &self.matrix.encode(candidate.phonemes())?))
  }

  pub fn ordered<'w>(&self, words: &'w [RealWord]) -> Vec<&'w RealWord> {
    let mut ordered: Vec<&RealWord> = words.iter().collect();
    if self.settings.order == WordOrder::DescendingFrequency {
      ordered.sort_by_key(|w| Reverse(FloatOrd(w.frequency)));
    }
    ordered
  }

  // Lowest loss wins, then lowest pool index, whether or not the scan runs in parallel.
  fn best_candidate(&self, real: &[usize], pool: &[PoolEntry]) -> Option<(usize, u32)> {
    let best = if self.settings.parallel {
      pool.par_iter().enumerate().map(|(i, c)| (self.encoded_loss(real, &c.encoded), i)).min()
    }
    else {
      pool.iter().enumerate().map(|(i, c)| (self.encoded_loss(real, &c.encoded), i)).min()
    };
    best.map(|(loss, i)| (i, loss))
  }

  /// One greedy pass: each word in turn takes the cheapest remaining candidate
  /// out of `pool`. Stops at `target_size` or when the pool runs dry, so the
  /// result may be short.
  pub fn assign(&self, words: &[RealWord], pool: Vec<CandidateWord>) -> Result<VocabAssignment> {
    let mut pool: Vec<PoolEntry> = pool.into_iter().map(|word| {
      let encoded = self.matrix.encode(word.phonemes())?;
      Ok(PoolEntry { word, encoded })
    }).collect::<Result<_>>()?;

    let mut result = VocabAssignment::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for word in self.ordered(words) {
      if result.len() >= self.settings.target_size {
        break;
      }
      if !seen.insert(&word.symbol) {
        continue;
      }

      let real = self.matrix.encode(&word.phonemes)?;
      let (i, loss) = match self.best_candidate(&real, &pool) {
        Some(best) => best,
        None => {
          warn!(assigned = result.len(), target = self.settings.target_size, "candidate pool exhausted");
          break;
        }
      };

      let chosen = pool.remove(i);
      debug!(word = %word.symbol, candidate = %chosen.word.phonemes().join(""), loss, "assigned");

      result.total_loss += word.frequency * loss as f64;
      result.entries.push(Assignment {
        word: word.symbol.clone(),
        word_phonemes: word.phonemes.clone(),
        candidate: chosen.word
      });
    }

    Ok(result)
  }

  /// Runs `restarts` independent passes, each over a fresh shuffle-and-truncate
  /// of `universe`, and keeps the one with the lowest total loss (the earliest on ties).
  pub fn optimize(&self, words: &[RealWord], universe: &[CandidateWord]) -> Result<VocabAssignment> {
    let mut rng = SmallRng::seed_from_u64(self.settings.seed);
    let pool_size = self.settings.target_size.saturating_mul(self.settings.oversampling);

    let mut best: Option<VocabAssignment> = None;
    for restart in 0 .. self.settings.restarts.max(1) {
      let timer = SteadyTimer::new();
      let pool = subsample(universe, pool_size, &mut rng);
      let assignment = self.assign(words, pool)?;

      info!(
        restart,
        loss = assignment.total_loss,
        size = assignment.len(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "finished restart"
      );

      let improved = match &best {
        None => true,
        Some(b) => FloatOrd(assignment.total_loss) < FloatOrd(b.total_loss)
      };
      if improved {
        best = Some(assignment);
      }
    }

    Ok(best.unwrap_or_default())
  }

  /// Σ frequency × loss over an existing assignment. Words missing from
  /// `frequencies` count with frequency 0.
  pub fn assignment_loss(&self, entries: &[Assignment], frequencies: &FrequencyTable) -> Result<f64> {
    let mut total = 0.0;
    for a in entries {
      let frequency = frequencies.get(&a.word).unwrap_or(0.0);
      total += frequency * self.loss(&a.word_phonemes, &a.candidate)? as f64;
    }
    Ok(total)
  }
}
