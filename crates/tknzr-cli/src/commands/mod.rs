use crate::commands::{decode::DecodeArgs, encode::EncodeArgs, train::TrainArgs};

pub mod decode;
pub mod encode;
pub mod train;

/// Subcommands for tknzr.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from text files and save the tokenizer.
    Train(TrainArgs),

    /// Encode lines of text into lines of token ids.
    Encode(EncodeArgs),

    /// Decode lines of token ids into lines of text.
    Decode(DecodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}
