
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use conlang_vocab::arpabet::AlphabetTable;
use conlang_vocab::config::RunConfig;
use conlang_vocab::error::Result;
use conlang_vocab::optimizer::WordOrder;
use conlang_vocab::{logging, pipeline};

#[derive(Parser, Debug)]
#[command(about = "Map frequent real words to short synthetic words")]
struct Args {
  /// TOML file with run settings; flags below override it.
  #[arg(long)]
  config: Option<PathBuf>,

  #[arg(long)]
  frequencies: Option<PathBuf>,

  #[arg(long)]
  pronunciations: Option<PathBuf>,

  #[arg(long)]
  features: Option<PathBuf>,

  /// Restrict real words to this list.
  #[arg(long)]
  word_list: Option<PathBuf>,

  #[arg(long)]
  output: Option<PathBuf>,

  #[arg(long)]
  vocab_size: Option<usize>,

  #[arg(long)]
  restarts: Option<usize>,

  #[arg(long)]
  seed: Option<u64>,

  #[arg(long)]
  length_penalty: Option<u32>,

  #[arg(long, value_enum)]
  order: Option<WordOrder>,

  /// Scan candidates on one thread.
  #[arg(long)]
  sequential: bool,

  /// Only recompute the loss of the vocabulary already at the output path.
  #[arg(long)]
  evaluate: bool,
}

impl Args {
  fn run_config(&self) -> Result<RunConfig> {
    let mut config = match &self.config {
      Some(path) => RunConfig::load(path)?,
      None => RunConfig::default()
    };

    if let Some(p) = &self.frequencies { config.frequencies = p.clone(); }
    if let Some(p) = &self.pronunciations { config.pronunciations = p.clone(); }
    if let Some(p) = &self.features { config.features = p.clone(); }
    if let Some(p) = &self.word_list { config.word_list = Some(p.clone()); }
    if let Some(p) = &self.output { config.output = p.clone(); }
    if let Some(n) = self.vocab_size { config.vocab_size = n; }
    if let Some(n) = self.restarts { config.restarts = n; }
    if let Some(n) = self.seed { config.seed = n; }
    if let Some(n) = self.length_penalty { config.length_penalty = n; }
    if let Some(o) = self.order { config.order = o; }
    if self.sequential { config.parallel = false; }

    Ok(config)
  }
}

fn run(args: &Args) -> Result<()> {
  let config = args.run_config()?;

  if args.evaluate {
    let loss = pipeline::evaluate(&config)?;
    info!(loss, path = %config.output.display(), "evaluated saved vocabulary");
    println!("{}", loss);
    return Ok(());
  }

  pipeline::build(&config, &AlphabetTable::arpabet())?;
  Ok(())
}

fn main() -> ExitCode {
  logging::init();
  let args = Args::parse();

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{}", e);
      ExitCode::FAILURE
    }
  }
}
