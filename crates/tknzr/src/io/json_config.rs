//! # JSON Config IO

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    errors::{TkResult, TknzrError},
    tokenizer::TokenizerConfig,
};

/// The conventional tokenizer config file name.
pub const CONFIG_FILE_NAME: &str = "tknzr.json";

/// Read a [`TokenizerConfig`] from a JSON reader.
pub fn read_config<R: Read>(reader: R) -> TkResult<TokenizerConfig> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write a [`TokenizerConfig`] as JSON.
pub fn write_config<W: Write>(
    config: &TokenizerConfig,
    mut writer: W,
) -> TkResult<()> {
    serde_json::to_writer(&mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Load a [`TokenizerConfig`] from a JSON file.
///
/// # Arguments
/// * `path` - the path to the config file.
pub fn load_config_path<P: AsRef<Path>>(path: P) -> TkResult<TokenizerConfig> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(TknzrError::InvalidConfig(format!(
            "{} is a directory",
            path.display()
        )));
    }
    read_config(BufReader::new(File::open(path)?))
}

/// Save a [`TokenizerConfig`] to a JSON file.
///
/// Missing parent directories are created.
///
/// # Arguments
/// * `config` - the config to save.
/// * `path` - the path to the config file.
pub fn save_config_path<P: AsRef<Path>>(
    config: &TokenizerConfig,
    path: P,
) -> TkResult<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(TknzrError::InvalidConfig(format!(
            "{} is a directory",
            path.display()
        )));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    log::debug!("Saving tokenizer config: {}", path.display());
    write_config(config, BufWriter::new(File::create(path)?))
}
