
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::candidates::CandidateWord;
use crate::error::Result;
use crate::features::Phoneme;
use crate::optimizer::Assignment;

// On disk: { "WORD": [[ipa phonemes...], [candidate phonemes...]], ... }
type Storage = BTreeMap<String, (Vec<Phoneme>, CandidateWord)>;

fn to_storage(entries: &[Assignment]) -> Storage {
  entries.iter().map(|a| (a.word.clone(), (a.word_phonemes.clone(), a.candidate.clone()))).collect()
}

fn from_storage(storage: Storage) -> Vec<Assignment> {
  storage.into_iter().map(|(word, (word_phonemes, candidate))| Assignment { word, word_phonemes, candidate }).collect()
}

/// Writes next to `path` first and renames into place, so a crash never leaves a half-written file.
pub fn save<P: AsRef<Path>>(path: P, entries: &[Assignment]) -> Result<()> {
  let path = path.as_ref();
  let dir = match path.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => dir,
    _ => Path::new(".")
  };

  let mut file = NamedTempFile::new_in(dir)?;
  {
    let mut writer = BufWriter::new(file.as_file_mut());
    serde_json::to_writer_pretty(&mut writer, &to_storage(entries))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
  }
  file.persist(path).map_err(|e| e.error)?;
  Ok(())
}

/// Entries come back sorted by word.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Assignment>> {
  let storage: Storage = serde_json::from_reader(BufReader::new(File::open(path)?))?;
  Ok(from_storage(storage))
}
