use std::io::{BufRead, Write};

use tknzr::{TextSplitter, Tokenizer};

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
    tokenizer_args::TokenizerArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Drop bos, eos, and pad ids before decoding.
    #[arg(long)]
    remove_special: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_decode(&mut reader, &mut writer, &tokenizer, self.remove_special)
    }
}

fn run_decode<S: TextSplitter>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32, S>,
    remove_special: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let ids = line
            .split_whitespace()
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|e| format!("line {}: bad token id {s:?}: {e}", lineno + 1))
            })
            .collect::<Result<Vec<u32>, _>>()?;

        writeln!(writer, "{}", tokenizer.decode(&ids, remove_special))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tknzr::{TokenizerOptions, splitting::WhitespaceSplitter};

    use super::*;

    fn tokenizer() -> Tokenizer<u32, WhitespaceSplitter> {
        let mut tokenizer = Tokenizer::new(TokenizerOptions::default(), WhitespaceSplitter).unwrap();
        tokenizer.try_build_vocab(["a a b"]).unwrap();
        tokenizer
    }

    #[test]
    fn test_run_decode() {
        let tokenizer = tokenizer();

        let mut output: Vec<u8> = Vec::new();
        run_decode(&mut "0 4 3 1 2\n0 5 99\n".as_bytes(), &mut output, &tokenizer, true).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "a [unk]\nb [unk]\n");

        let mut output: Vec<u8> = Vec::new();
        run_decode(&mut "0 4 1\n".as_bytes(), &mut output, &tokenizer, false).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "[bos] a [eos]\n");
    }

    #[test]
    fn test_run_decode_rejects_bad_ids() {
        let tokenizer = tokenizer();

        let mut output: Vec<u8> = Vec::new();
        let err = run_decode(&mut "0 x\n".as_bytes(), &mut output, &tokenizer, true).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
