use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use tknzr::{
    TokenVocab,
    Tokenizer,
    TokenizerOptions,
    io::{load_config_path, save_config_path},
};

use crate::{
    LogArgs,
    tokenizer_args::{DynTokenizer, SplitterArgs},
};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text files; each line is one text.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    splitter: SplitterArgs,

    /// Lowercase text during normalization.
    #[arg(long)]
    case_fold: bool,

    /// Max vocab size, special tokens included.
    #[arg(long, default_value = "32768")]
    max_vocab_size: usize,

    /// Minimum corpus frequency for admission.
    #[arg(long, default_value = "1")]
    min_frequency: usize,

    /// Continue from the vocabulary of a saved tokenizer config.
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Where to write the tokenizer config.
    #[arg(short, long)]
    output: PathBuf,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut tokenizer = self.init_tokenizer()?;

        log::info!("Reading corpus:");
        let mut texts = Vec::new();
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {}", path.display());
            read_text_lines(path, &mut texts)?;
        }

        let summary = tokenizer.try_build_vocab(&texts)?;
        log::info!("Build stopped: {:?}", summary.stop);

        log::info!("output: {}", self.output.display());
        save_config_path(&tokenizer.to_config()?, &self.output)?;

        Ok(())
    }

    fn options(&self) -> TokenizerOptions {
        TokenizerOptions::default()
            .with_case_fold(self.case_fold)
            .with_max_vocab_size(self.max_vocab_size)
            .with_min_frequency(self.min_frequency)
    }

    fn init_tokenizer(&self) -> Result<DynTokenizer, Box<dyn std::error::Error>> {
        let vocab = match &self.seed {
            Some(path) => {
                log::info!("Seeding vocab: {}", path.display());
                load_config_path(path)?.to_vocab()?
            }
            None => TokenVocab::new(),
        };
        Ok(Tokenizer::with_vocab(
            self.options(),
            vocab,
            self.splitter.splitter.build(),
        )?)
    }
}

/// Append the lines of a text file to `texts`.
fn read_text_lines(
    path: &Path,
    texts: &mut Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
        texts.push(line?);
    }
    Ok(())
}
