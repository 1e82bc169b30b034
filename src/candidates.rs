
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Serialize, Deserialize};

use crate::features::Phoneme;

/// A synthetic word: consonant/vowel syllables flattened into one phoneme sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateWord {
  phonemes: Vec<Phoneme>
}

impl CandidateWord {
  pub fn new(phonemes: Vec<Phoneme>) -> CandidateWord {
    CandidateWord { phonemes }
  }

  pub fn phonemes(&self) -> &[Phoneme] {
    &self.phonemes
  }

  pub fn len(&self) -> usize {
    self.phonemes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.phonemes.is_empty()
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
  pub consonant: Phoneme,
  pub vowel: Phoneme
}

impl Syllable {
  pub fn new<C: Into<Phoneme>, V: Into<Phoneme>>(consonant: C, vowel: V) -> Syllable {
    Syllable { consonant: consonant.into(), vowel: vowel.into() }
  }
}

/// Enumerates every word of N (consonant, vowel) syllables over fixed inventories.
///
/// Reserved syllables are left out at every position, so with R of them drawn
/// from the inventory one call yields (C·V - R)^N words of length 2N.
#[derive(Clone, Debug)]
pub struct CandidateGenerator {
  consonants: Vec<Phoneme>,
  vowels: Vec<Phoneme>,
  reserved: Vec<Syllable>
}

impl CandidateGenerator {
  pub fn new(consonants: Vec<Phoneme>, vowels: Vec<Phoneme>) -> CandidateGenerator {
    CandidateGenerator {
      consonants: consonants.into_iter().unique().collect(),
      vowels: vowels.into_iter().unique().collect(),
      reserved: vec![]
    }
  }

  pub fn with_reserved(mut self, reserved: Vec<Syllable>) -> CandidateGenerator {
    self.reserved = reserved;
    self
  }

  pub fn syllables(&self) -> Vec<Syllable> {
    self.consonants.iter()
      .cartesian_product(self.vowels.iter())
      .map(|(c, v)| Syllable::new(c.clone(), v.clone()))
      .filter(|s| !self.reserved.contains(s))
      .collect()
  }

  /// All words of exactly `num_syllables` syllables, first syllable varying slowest.
  /// Zero syllables yields nothing.
  pub fn generate(&self, num_syllables: usize) -> Vec<CandidateWord> {
    if num_syllables == 0 {
      return vec![];
    }

    let syllables = self.syllables();
    (0 .. num_syllables).map(|_| syllables.iter())
      .multi_cartesian_product()
      .map(|parts| {
        let mut phonemes = Vec::with_capacity(2 * num_syllables);
        for s in parts {
          phonemes.push(s.consonant.clone());
          phonemes.push(s.vowel.clone());
        }
        CandidateWord::new(phonemes)
      })
      .collect()
  }

  /// Union of `generate` over each requested syllable count, in the order given.
  pub fn generate_all(&self, syllable_counts: &[usize]) -> Vec<CandidateWord> {
    syllable_counts.iter().unique().flat_map(|&n| self.generate(n)).collect()
  }
}

/// Shuffle a copy of `universe` and keep the first `size` words.
pub fn subsample<R: Rng>(universe: &[CandidateWord], size: usize, rng: &mut R) -> Vec<CandidateWord> {
  let mut pool = universe.to_vec();
  pool.shuffle(rng);
  pool.truncate(size);
  pool
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;
  use rand::SeedableRng;
  use rand::rngs::SmallRng;

  fn word(ps: &[&str]) -> CandidateWord {
    CandidateWord::new(ps.iter().map(|p| p.to_string()).collect())
  }

  fn strings(ps: &[&str]) -> Vec<Phoneme> {
    ps.iter().map(|p| p.to_string()).collect()
  }

  fn default_generator() -> CandidateGenerator {
    CandidateGenerator::new(strings(&["l", "n", "s", "t", "k", "v", "b"]), strings(&["ɑ", "ɛ", "oʊ", "ʌ"]))
  }

  #[test]
  fn test_one_syllable() {
    let generator = CandidateGenerator::new(strings(&["l", "n"]), strings(&["a", "e"]));
    assert_eq!(generator.generate(1), vec![
      word(&["l", "a"]),
      word(&["l", "e"]),
      word(&["n", "a"]),
      word(&["n", "e"]),
    ]);
  }

  #[test]
  fn test_counts_and_lengths() {
    let generator = default_generator();
    for n in 1 .. 4 {
      let words = generator.generate(n);
      assert_eq!(words.len(), 28usize.pow(n as u32));
      assert!(words.iter().all(|w| w.len() == 2 * n));
      let distinct: HashSet<&CandidateWord> = words.iter().collect();
      assert_eq!(distinct.len(), words.len());
    }
  }

  #[test]
  fn test_alternates_consonant_vowel() {
    let generator = default_generator();
    let consonants = strings(&["l", "n", "s", "t", "k", "v", "b"]);
    for w in generator.generate(2) {
      for (i, p) in w.phonemes().iter().enumerate() {
        assert_eq!(consonants.contains(p), i % 2 == 0);
      }
    }
  }

  #[test]
  fn test_zero_syllables() {
    assert!(default_generator().generate(0).is_empty());
  }

  #[test]
  fn test_reserved_syllables_are_excluded_everywhere() {
    let generator = CandidateGenerator::new(strings(&["l", "n"]), strings(&["a", "e"]))
      .with_reserved(vec![Syllable::new("l", "a")]);
    assert_eq!(generator.generate(1).len(), 3);

    let words = generator.generate(2);
    assert_eq!(words.len(), 9);
    for w in &words {
      for pair in w.phonemes().chunks(2) {
        assert_ne!(pair, &strings(&["l", "a"])[..]);
      }
    }
  }

  #[test]
  fn test_generate_all_is_union() {
    let generator = CandidateGenerator::new(strings(&["l", "n"]), strings(&["a", "e"]));
    let words = generator.generate_all(&[1, 2, 1]);
    assert_eq!(words.len(), 4 + 16);
    assert_eq!(words[0], word(&["l", "a"]));
    assert_eq!(words[4], word(&["l", "a", "l", "a"]));
  }

  #[test]
  fn test_duplicate_inventory_entries_are_ignored() {
    let generator = CandidateGenerator::new(strings(&["l", "l", "n"]), strings(&["a", "a"]));
    assert_eq!(generator.generate(1), vec![word(&["l", "a"]), word(&["n", "a"])]);
  }

  #[test]
  fn test_subsample_is_reproducible() {
    let universe = default_generator().generate_all(&[1, 2]);
    let a = subsample(&universe, 50, &mut SmallRng::seed_from_u64(7));
    let b = subsample(&universe, 50, &mut SmallRng::seed_from_u64(7));
    assert_eq!(a.len(), 50);
    assert_eq!(a, b);
    assert!(a.iter().all(|w| universe.contains(w)));

    let all = subsample(&universe, universe.len() + 10, &mut SmallRng::seed_from_u64(7));
    assert_eq!(all.len(), universe.len());
  }
}
