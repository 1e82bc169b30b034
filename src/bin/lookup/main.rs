
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use dialoguer::Input;
use tracing::error;

use conlang_vocab::lookup::{search, Transliteration};
use conlang_vocab::optimizer::Assignment;
use conlang_vocab::{logging, vocab_file};

#[derive(Parser, Debug)]
#[command(about = "Search a built conlang vocabulary")]
struct Args {
  #[arg(long, default_value = "conlangVocab.json")]
  vocab: PathBuf,

  /// Search once and exit instead of prompting.
  #[arg(long)]
  query: Option<String>,
}

fn show(entries: &[Assignment], query: &str, transliteration: &Transliteration) {
  let found = search(entries, query);
  if found.is_empty() {
    println!("{}", style("No matching words found in the conlang vocabulary.").dim());
    return;
  }

  println!("Search results:");
  for a in found {
    println!("Word: {}, Translated Pronunciation: {}",
      style(&a.word).bold(),
      style(transliteration.render(a.candidate.phonemes())).cyan()
    );
  }
}

fn main() -> ExitCode {
  logging::init();
  let args = Args::parse();

  let entries = match vocab_file::load(&args.vocab) {
    Ok(entries) => entries,
    Err(e) => {
      error!(path = %args.vocab.display(), "{}", e);
      return ExitCode::FAILURE;
    }
  };
  let transliteration = Transliteration::conlang();

  if let Some(query) = &args.query {
    show(&entries, query, &transliteration);
    return ExitCode::SUCCESS;
  }

  loop {
    let query: String = match Input::<String>::new()
      .with_prompt("Enter a word to search in the conlang vocabulary")
      .allow_empty(true)
      .interact_text()
    {
      Ok(query) => query,
      Err(_) => break
    };

    if query.trim().is_empty() {
      break;
    }
    show(&entries, query.trim(), &transliteration);
  }

  ExitCode::SUCCESS
}
