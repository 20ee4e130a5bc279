use std::path::PathBuf;

use tknzr::{
    TextSplitter,
    Tokenizer,
    io::load_config_path,
    splitting::SplitterKind,
};

/// A tokenizer whose splitter is chosen at runtime.
pub type DynTokenizer = Tokenizer<u32, Box<dyn TextSplitter + Send + Sync>>;

/// Splitter selection arg group.
#[derive(clap::Args, Debug)]
pub struct SplitterArgs {
    /// Split strategy: "char" or "whitespace".
    #[arg(long, default_value = "whitespace")]
    pub splitter: SplitterKind,
}

/// Saved tokenizer arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Path to a saved tokenizer config.
    #[arg(long)]
    pub config: PathBuf,

    #[command(flatten)]
    pub splitter: SplitterArgs,
}

impl TokenizerArgs {
    /// Load the saved tokenizer.
    pub fn load_tokenizer(&self) -> Result<DynTokenizer, Box<dyn std::error::Error>> {
        log::info!("Loading tokenizer: {}", self.config.display());
        let config = load_config_path(&self.config)?;
        let tokenizer = Tokenizer::from_config(&config, self.splitter.splitter.build())?;
        log::info!(
            "{} splitter, vocab size {}",
            self.splitter.splitter.name(),
            tokenizer.vocab_size()
        );
        Ok(tokenizer)
    }
}
