
use crate::distance_matrix::PhonemeDistanceMatrix;
use crate::error::Result;

/// Weighted Levenshtein distance between two encoded phoneme sequences.
///
/// Deleting `a` costs `cost(a, EMPTY)`, inserting `b` costs `cost(EMPTY, b)`,
/// substituting costs `cost(a, b)` (zero when equal). Two rolling rows of the
/// DP table, so O(n) space and no recursion depth.
pub fn weighted_distance_encoded(a: &[usize], b: &[usize], m: &PhonemeDistanceMatrix) -> u32 {
  let empty = m.empty_index();
  let n = b.len();

  let mut v0: Vec<u32> = Vec::with_capacity(n + 1);
  v0.push(0);
  for j in 0 .. n {
    v0.push(v0[j] + m.cost_at(empty, b[j]));
  }
  let mut v1: Vec<u32> = vec![0; n + 1];

  for &ai in a {
    let deletion = m.cost_at(ai, empty);
    v1[0] = v0[0] + deletion;

    for j in 0 .. n {
      let bj = b[j];
      let deletion_cost = v0[j + 1] + deletion;
      let insertion_cost = v1[j] + m.cost_at(empty, bj);
      let substitution_cost = v0[j] + if ai == bj { 0 } else { m.cost_at(ai, bj) };
      v1[j + 1] = deletion_cost.min(insertion_cost).min(substitution_cost);
    }

    std::mem::swap(&mut v0, &mut v1);
  }

  v0[n]
}

/// Same as `weighted_distance_encoded`, looking each symbol up first.
pub fn weighted_distance<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B], m: &PhonemeDistanceMatrix) -> Result<u32> {
  Ok(weighted_distance_encoded(&m.encode(a)?, &m.encode(b)?, m))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;
  use crate::features::{FeatureTable, EMPTY};
  use crate::test_tables::ipa_table;
  use levenshtein_diff as levenshtein;
  use proptest::prelude::*;

  const NO_PHONEMES: [&str; 0] = [];

  fn ipa_matrix() -> PhonemeDistanceMatrix {
    PhonemeDistanceMatrix::new(&ipa_table()).unwrap()
  }

  fn unit_matrix() -> PhonemeDistanceMatrix {
    PhonemeDistanceMatrix::new(&FeatureTable::unit_cost(&["l", "n", "a", "e"])).unwrap()
  }

  #[test]
  fn test_empty_sequences() {
    let m = ipa_matrix();
    assert_eq!(weighted_distance(&NO_PHONEMES, &NO_PHONEMES, &m).unwrap(), 0);
  }

  #[test]
  fn test_against_empty_is_sum_of_deletions() {
    let m = ipa_matrix();
    let word = ["k", "ɑ", "t"];
    let expected: u32 = word.iter().map(|p| m.cost(p, EMPTY).unwrap()).sum();
    assert_eq!(weighted_distance(&word, &NO_PHONEMES, &m).unwrap(), expected);
    assert_eq!(weighted_distance(&NO_PHONEMES, &word, &m).unwrap(), expected);
  }

  #[test]
  fn test_single_substitution() {
    let m = unit_matrix();
    assert_eq!(weighted_distance(&["l", "a"], &["n", "a"], &m).unwrap(), 1);
    assert_eq!(weighted_distance(&["l", "a"], &["n", "e"], &m).unwrap(), 2);
    assert_eq!(weighted_distance(&["l", "a"], &["l", "a", "n", "e"], &m).unwrap(), 2);
  }

  #[test]
  fn test_prefers_cheap_substitution() {
    let m = ipa_matrix();
    // t -> d is one voicing flip, cheaper than deleting t and inserting d.
    assert_eq!(weighted_distance(&["t", "ɛ"], &["d", "ɛ"], &m).unwrap(), 1);
    let via_indel = m.cost("t", EMPTY).unwrap() + m.cost(EMPTY, "d").unwrap();
    assert!(via_indel > 1);
  }

  #[test]
  fn test_unknown_phoneme() {
    let m = ipa_matrix();
    assert!(matches!(weighted_distance(&["ʒ"], &["l"], &m), Err(Error::MissingPhoneme(s)) if s == "ʒ"));
  }

  fn phonemes() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(
      prop::sample::select(vec!["l", "n", "s", "z", "t", "d", "k", "v", "b", "ð", "ɑ", "ɛ", "oʊ", "ʌ", "i", "ɪ"]),
      0 .. 7
    )
  }

  fn unit_phonemes() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec!["l", "n", "a", "e"]), 0 .. 8)
  }

  proptest! {
    #[test]
    fn test_unit_costs_match_levenshtein(a in unit_phonemes(), b in unit_phonemes()) {
      let m = unit_matrix();
      let expected = levenshtein::distance(&a, &b).0 as u32;
      prop_assert_eq!(weighted_distance(&a, &b, &m).unwrap(), expected);
    }

    #[test]
    fn test_symmetric(a in phonemes(), b in phonemes()) {
      let m = ipa_matrix();
      prop_assert_eq!(weighted_distance(&a, &b, &m).unwrap(), weighted_distance(&b, &a, &m).unwrap());
    }

    #[test]
    fn test_identity(a in phonemes()) {
      let m = ipa_matrix();
      prop_assert_eq!(weighted_distance(&a, &a, &m).unwrap(), 0);
    }

    #[test]
    fn test_common_prefix_and_suffix_do_not_matter(
      prefix in phonemes(), a in phonemes(), b in phonemes(), suffix in phonemes()
    ) {
      let m = ipa_matrix();
      let base = weighted_distance(&a, &b, &m).unwrap();

      let wrap = |middle: &Vec<&'static str>| -> Vec<&'static str> {
        prefix.iter().chain(middle.iter()).chain(suffix.iter()).copied().collect()
      };
      prop_assert_eq!(weighted_distance(&wrap(&a), &wrap(&b), &m).unwrap(), base);
    }
  }
}
