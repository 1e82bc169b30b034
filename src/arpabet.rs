
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::features::Phoneme;

// ER is folded into ɛ rather than ɝ.
const ARPABET_TO_IPA: [(&str, &str); 39] = [
  ("AA", "ɑ"), ("AE", "æ"), ("AH", "ʌ"), ("AO", "ɔ"), ("AW", "aʊ"), ("AY", "aɪ"),
  ("B", "b"), ("CH", "tʃ"), ("D", "d"), ("DH", "ð"), ("EH", "ɛ"), ("ER", "ɛ"),
  ("EY", "eɪ"), ("F", "f"), ("G", "ɡ"), ("HH", "h"), ("IH", "ɪ"), ("IY", "i"),
  ("JH", "dʒ"), ("K", "k"), ("L", "l"), ("M", "m"), ("N", "n"), ("NG", "ŋ"),
  ("OW", "oʊ"), ("OY", "ɔɪ"), ("P", "p"), ("R", "ɹ"), ("S", "s"), ("SH", "ʃ"),
  ("T", "t"), ("TH", "θ"), ("UH", "ʊ"), ("UW", "u"), ("V", "v"), ("W", "w"),
  ("Y", "j"), ("Z", "z"), ("ZH", "ʒ"),
];

/// Maps dictionary-alphabet symbols to IPA phonemes.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphabetTable {
  map: HashMap<String, Phoneme>
}

impl AlphabetTable {
  pub fn arpabet() -> AlphabetTable {
    AlphabetTable::from_pairs(ARPABET_TO_IPA.iter().copied())
  }

  pub fn from_pairs<'a, I: IntoIterator<Item = (&'a str, &'a str)>>(pairs: I) -> AlphabetTable {
    AlphabetTable {
      map: pairs.into_iter().map(|(from, to)| (from.to_owned(), to.to_owned())).collect()
    }
  }

  pub fn symbol(&self, symbol: &str) -> Result<&str> {
    self.map.get(symbol).map(|p| p.as_str()).ok_or_else(|| Error::UnknownSymbol(symbol.to_owned()))
  }

  pub fn translate<S: AsRef<str>>(&self, word: &[S]) -> Result<Vec<Phoneme>> {
    word.iter().map(|s| self.symbol(s.as_ref()).map(|p| p.to_owned())).collect()
  }

  pub fn len(&self) -> usize {
    self.map.len()
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }
}
