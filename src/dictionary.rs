
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

/// Word frequencies in the order the source listed them. A word seen twice
/// keeps its first position and takes the later frequency.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
  entries: Vec<(String, f64)>,
  index: HashMap<String, usize>
}

impl FrequencyTable {
  pub fn from_entries(entries: Vec<(String, f64)>) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for (word, frequency) in entries {
      table.insert(word, frequency);
    }
    table
  }

  pub fn insert(&mut self, word: String, frequency: f64) {
    match self.index.get(&word) {
      Some(&i) => self.entries[i].1 = frequency,
      None => {
        self.index.insert(word.clone(), self.entries.len());
        self.entries.push((word, frequency));
      }
    }
  }

  pub fn get(&self, word: &str) -> Option<f64> {
    self.index.get(word).map(|&i| self.entries[i].1)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
    self.entries.iter().map(|(w, f)| (w.as_str(), *f))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Exactly the listed words, in list order, each with its frequency here or 0.
  pub fn restrict_to(&self, words: &[String]) -> FrequencyTable {
    FrequencyTable::from_entries(
      words.iter().map(|w| (w.clone(), self.get(w).unwrap_or(0.0))).collect()
    )
  }
}

fn malformed(path: &Path, line_number: usize, line: &str, reason: &str) -> Error {
  Error::MalformedLine {
    path: path.to_owned(),
    line_number,
    line: line.to_owned(),
    reason: reason.to_owned()
  }
}

/// Lines of `WORD FREQUENCY`. Words are uppercased; blank lines are skipped.
pub fn parse_frequencies<R: BufRead>(reader: R, source: &Path) -> Result<FrequencyTable> {
  let mut table = FrequencyTable::default();

  for (i, line) in reader.lines().enumerate() {
    let line = line?;
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
      continue;
    }
    if tokens.len() != 2 {
      return Err(malformed(source, i + 1, &line, "expected WORD FREQUENCY"));
    }

    let frequency: f64 = tokens[1].parse()
      .map_err(|_| malformed(source, i + 1, &line, "frequency is not a number"))?;
    if !frequency.is_finite() || frequency < 0.0 {
      return Err(malformed(source, i + 1, &line, "frequency must be a non-negative number"));
    }

    table.insert(tokens[0].to_uppercase(), frequency);
  }

  Ok(table)
}

pub fn load_frequencies<P: AsRef<Path>>(path: P) -> Result<FrequencyTable> {
  let path = path.as_ref();
  parse_frequencies(BufReader::new(File::open(path)?), path)
}

/// Whitespace-separated words, uppercased, duplicates dropped.
pub fn parse_word_list<R: BufRead>(reader: R) -> Result<Vec<String>> {
  let mut seen = std::collections::HashSet::new();
  let mut words = vec![];
  for line in reader.lines() {
    for token in line?.split_whitespace() {
      let word = token.to_uppercase();
      if seen.insert(word.clone()) {
        words.push(word);
      }
    }
  }
  Ok(words)
}

pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
  parse_word_list(BufReader::new(File::open(path)?))
}

/// Word to pronunciation in the dictionary's own alphabet, stress digits removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PronunciationDictionary {
  pub words: HashMap<String, Vec<String>>
}

impl PronunciationDictionary {
  pub fn get(&self, word: &str) -> Option<&[String]> {
    self.words.get(word).map(|p| p.as_slice())
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

pub fn strip_stress(token: &str) -> String {
  lazy_static! {
    static ref DIGIT_STRIPPING_RE: Regex = Regex::new(r"\d+").unwrap();
  }

  DIGIT_STRIPPING_RE.replace_all(token, "").into_owned()
}

/// Lines of `WORD P1 P2 ...`. `;;;` comment lines and blank lines are skipped.
pub fn parse_pronunciations<R: BufRead>(reader: R, source: &Path) -> Result<PronunciationDictionary> {
  let mut words = HashMap::new();

  for (i, line) in reader.lines().enumerate() {
    let line = line?;
    if line.starts_with(";;;") {
      continue;
    }

    let mut tokens = line.split_whitespace();
    let word = match tokens.next() {
      Some(word) => word.to_uppercase(),
      None => continue
    };
    let pronunciation: Vec<String> = tokens.map(strip_stress).collect();
    if pronunciation.is_empty() {
      return Err(malformed(source, i + 1, &line, "expected WORD followed by phonemes"));
    }

    words.insert(word, pronunciation);
  }

  Ok(PronunciationDictionary { words })
}

pub fn load_pronunciations<P: AsRef<Path>>(path: P) -> Result<PronunciationDictionary> {
  let path = path.as_ref();
  parse_pronunciations(BufReader::new(File::open(path)?), path)
}
