
use tracing::{debug, info, warn};

use crate::arpabet::AlphabetTable;
use crate::config::RunConfig;
use crate::dictionary::{load_frequencies, load_pronunciations, load_word_list, FrequencyTable, PronunciationDictionary};
use crate::distance_matrix::PhonemeDistanceMatrix;
use crate::error::Result;
use crate::features::FeatureTable;
use crate::optimizer::{RealWord, VocabAssignment, VocabularyOptimizer};
use crate::vocab_file;

/// Pairs each frequency entry with its IPA pronunciation, in frequency-table
/// order. Words the dictionary lacks are skipped; untranslatable symbols are fatal.
pub fn real_words(frequencies: &FrequencyTable, dictionary: &PronunciationDictionary, alphabet: &AlphabetTable) -> Result<Vec<RealWord>> {
  let mut words = vec![];
  let mut skipped = 0;

  for (symbol, frequency) in frequencies.iter() {
    match dictionary.get(symbol) {
      Some(pronunciation) => {
        words.push(RealWord {
          symbol: symbol.to_owned(),
          frequency,
          phonemes: alphabet.translate(pronunciation)?
        });
      },
      None => {
        debug!(word = symbol, "no pronunciation, skipping");
        skipped += 1;
      }
    }
  }

  if skipped > 0 {
    warn!(skipped, kept = words.len(), "words without pronunciation were skipped");
  }
  Ok(words)
}

fn load_word_frequencies(config: &RunConfig) -> Result<FrequencyTable> {
  let frequencies = load_frequencies(&config.frequencies)?;
  info!(words = frequencies.len(), path = %config.frequencies.display(), "loaded frequencies");

  match &config.word_list {
    Some(path) => {
      let list = load_word_list(path)?;
      info!(words = list.len(), path = %path.display(), "restricting to word list");
      Ok(frequencies.restrict_to(&list))
    },
    None => Ok(frequencies)
  }
}

fn load_matrix(config: &RunConfig) -> Result<PhonemeDistanceMatrix> {
  let features = FeatureTable::load(&config.features)?;
  let matrix = PhonemeDistanceMatrix::new(&features)?;
  info!(phonemes = matrix.len(), "built distance matrix");
  Ok(matrix)
}

/// Loads every input named in `config`, runs the optimizer and writes the result to `config.output`.
pub fn build(config: &RunConfig, alphabet: &AlphabetTable) -> Result<VocabAssignment> {
  config.validate()?;

  let matrix = load_matrix(config)?;
  let frequencies = load_word_frequencies(config)?;
  let dictionary = load_pronunciations(&config.pronunciations)?;
  info!(entries = dictionary.len(), "loaded pronunciations");

  let words = real_words(&frequencies, &dictionary, alphabet)?;

  let universe = config.generator().generate_all(&config.syllable_counts);
  info!(candidates = universe.len(), "words generated");

  let optimizer = VocabularyOptimizer::new(&matrix, config.optimizer_settings());
  let assignment = optimizer.optimize(&words, &universe)?;

  if assignment.len() < config.vocab_size {
    warn!(size = assignment.len(), target = config.vocab_size, "vocabulary is smaller than requested");
  }
  info!(
    size = assignment.len(),
    loss = assignment.total_loss,
    mean_loss = if assignment.is_empty() { 0.0 } else { assignment.total_loss / assignment.len() as f64 },
    "generated dictionary"
  );

  vocab_file::save(&config.output, &assignment.entries)?;
  info!(path = %config.output.display(), "saved vocabulary");

  Ok(assignment)
}

/// Recomputes the total loss of the vocabulary already saved at `config.output`.
pub fn evaluate(config: &RunConfig) -> Result<f64> {
  let matrix = load_matrix(config)?;
  let frequencies = load_word_frequencies(config)?;
  let entries = vocab_file::load(&config.output)?;

  let optimizer = VocabularyOptimizer::new(&matrix, config.optimizer_settings());
  optimizer.assignment_loss(&entries, &frequencies)
}
