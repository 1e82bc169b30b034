
use std::collections::HashMap;

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::features::{FeatureTable, Phoneme, EMPTY};

/// Pairwise phoneme costs, computed once from a feature table and read-only afterwards.
///
/// Phonemes are addressed by their row index so the edit distance inner loop
/// never hashes strings. `encode` turns a symbol sequence into indices and fails
/// on the first symbol the table does not know.
#[derive(Clone, Debug)]
pub struct PhonemeDistanceMatrix {
  symbols: Vec<Phoneme>,
  index: HashMap<Phoneme, usize>,
  costs: Array2<u32>,
  empty: usize
}

impl PhonemeDistanceMatrix {
  pub fn new(table: &FeatureTable) -> Result<PhonemeDistanceMatrix> {
    let symbols: Vec<Phoneme> = table.symbols().map(|s| s.to_owned()).collect();
    let index: HashMap<Phoneme, usize> = symbols.iter().enumerate().map(|(i, s)| (s.clone(), i)).collect();
    let empty = *index.get(EMPTY).ok_or_else(|| Error::MissingPhoneme(EMPTY.to_owned()))?;

    let n = symbols.len();
    let mut costs: Array2<u32> = Array2::zeros((n, n));
    for i in 0 .. n {
      for j in 0 .. n {
        costs[[i, j]] = table.mismatch_count(&symbols[i], &symbols[j])?;
      }
    }

    Ok(PhonemeDistanceMatrix { symbols, index, costs, empty })
  }

  pub fn index_of(&self, symbol: &str) -> Result<usize> {
    self.index.get(symbol).copied().ok_or_else(|| Error::MissingPhoneme(symbol.to_owned()))
  }

  pub fn encode<S: AsRef<str>>(&self, phonemes: &[S]) -> Result<Vec<usize>> {
    phonemes.iter().map(|p| self.index_of(p.as_ref())).collect()
  }

  pub fn cost(&self, a: &str, b: &str) -> Result<u32> {
    Ok(self.cost_at(self.index_of(a)?, self.index_of(b)?))
  }

  #[inline]
  pub fn cost_at(&self, i: usize, j: usize) -> u32 {
    self.costs[[i, j]]
  }

  #[inline]
  pub fn empty_index(&self) -> usize {
    self.empty
  }

  pub fn len(&self) -> usize {
    self.symbols.len()
  }

  pub fn is_empty(&self) -> bool {
    self.symbols.is_empty()
  }
}
