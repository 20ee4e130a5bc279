use std::io::{BufRead, Write};

use tknzr::{TextSplitter, Tokenizer};

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
    tokenizer_args::TokenizerArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Truncate or pad every encoding to this length.
    #[arg(long)]
    max_length: Option<usize>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_encode(&mut reader, &mut writer, &tokenizer, self.max_length)
    }
}

fn run_encode<S: TextSplitter>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32, S>,
    max_length: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let ids = tokenizer.try_encode(&line?, max_length)?;

        for (idx, id) in ids.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
