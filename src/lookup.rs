
use std::collections::HashMap;

use crate::optimizer::Assignment;

/// Phoneme to ASCII spelling for display. Independent of the IPA
/// translation table; phonemes it lacks are shown as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct Transliteration {
  map: HashMap<String, String>
}

impl Transliteration {
  pub fn conlang() -> Transliteration {
    Transliteration::from_pairs([
      ("l", "l"), ("n", "n"), ("s", "s"), ("t", "t"),
      ("ɑ", "ah"), ("ɛ", "eh"), ("oʊ", "oh"), ("ʌ", "uh"),
    ])
  }

  pub fn from_pairs<'a, I: IntoIterator<Item = (&'a str, &'a str)>>(pairs: I) -> Transliteration {
    Transliteration {
      map: pairs.into_iter().map(|(from, to)| (from.to_owned(), to.to_owned())).collect()
    }
  }

  pub fn render<S: AsRef<str>>(&self, phonemes: &[S]) -> String {
    phonemes.iter().map(|p| {
      let p = p.as_ref();
      self.map.get(p).map(|s| s.as_str()).unwrap_or(p)
    }).collect()
  }
}

/// Entries whose word contains `query`, ignoring case, in word order.
pub fn search<'a>(entries: &'a [Assignment], query: &str) -> Vec<&'a Assignment> {
  let query = query.to_lowercase();
  let mut found: Vec<&Assignment> = entries.iter().filter(|a| a.word.to_lowercase().contains(&query)).collect();
  found.sort_by(|a, b| a.word.cmp(&b.word));
  found
}
