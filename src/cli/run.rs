//! Encrypt/decrypt command
//!
//! Turns command-line flags into a cipher request: resolves the direction,
//! reads the message, collects the key (prompting when needed), runs the
//! engine and writes the result to the terminal and the output file.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use log::{debug, warn};
use rand::Rng;
use zeroize::Zeroizing;

use super::prompt::{key_prompt, prompt_key};
use crate::ciphers::{shift, CipherKind, Direction, KeyKind};
use crate::config::settings::Settings;
use crate::engine::{CipherEngine, CipherKey, CipherRequest};
use crate::error::{CipherError, CipherResult};
use crate::storage::{read_message, read_message_from, write_text_atomic};

/// Flags for a single cipher run
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Encrypt the message
    #[arg(short, long)]
    pub encrypt: bool,

    /// Decrypt the message
    #[arg(short, long)]
    pub decrypt: bool,

    /// Cipher to use: caesar (c1), substitution (c2), polyalphabetic (c3),
    /// transposition (c4) or atbash (c5)
    #[arg(short, long)]
    pub cipher: Option<CipherKind>,

    /// Numeric key, 0-25 (shift amount or column count; defaults to the configured key)
    #[arg(short, long, allow_negative_numbers = true)]
    pub key: Option<String>,

    /// Alphabetic key for the polyalphabetic cipher or substitution decryption
    /// (prompted for when omitted)
    #[arg(short, long)]
    pub text_key: Option<String>,

    /// Read the message from this file instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Write the result to this file instead of the configured output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Don't write the result to a file
    #[arg(long)]
    pub no_output_file: bool,
}

/// Handle a cipher run against the real terminal
pub fn handle_run(settings: &Settings, args: RunArgs) -> CipherResult<()> {
    let mut engine = CipherEngine::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(settings, args, &mut engine, &mut out, prompt_key)
}

/// Run a cipher operation with injectable engine, output and key prompt
pub fn execute<R, W, P>(
    settings: &Settings,
    args: RunArgs,
    engine: &mut CipherEngine<R>,
    out: &mut W,
    prompt: P,
) -> CipherResult<()>
where
    R: Rng,
    W: Write,
    P: FnOnce(&str) -> CipherResult<Zeroizing<String>>,
{
    let direction = Direction::from_flags(args.encrypt, args.decrypt)?;
    let cipher = args.cipher.ok_or(CipherError::NoCipher)?;

    let message = match &args.file {
        Some(path) => read_message(path)?,
        None => read_message_from(io::stdin().lock())?,
    };
    writeln!(out, "Original message: {}", message)?;

    let key = resolve_key(cipher, direction, &args, settings, prompt)?;
    let request = CipherRequest::new(cipher, direction, key, message);
    let output = engine.process(&request)?;

    let label = match direction {
        Direction::Encrypt => "encrypted",
        Direction::Decrypt => "decrypted",
    };
    writeln!(out, "New {} message: {}", label, output.text)?;

    if let Some(key) = &output.generated_key {
        writeln!(out, "key is: {}", key)?;
    }

    if let Some(path) = output_path(settings, &args) {
        write_text_atomic(&path, &output.text)?;
        writeln!(out, "Message outputted to file '{}'", path.display())?;
    }

    Ok(())
}

/// Collect the key the selected cipher needs
pub fn resolve_key<P>(
    cipher: CipherKind,
    direction: Direction,
    args: &RunArgs,
    settings: &Settings,
    prompt: P,
) -> CipherResult<CipherKey>
where
    P: FnOnce(&str) -> CipherResult<Zeroizing<String>>,
{
    let kind = cipher.key_kind(direction);

    if kind != KeyKind::Numeric && args.key.is_some() {
        warn!("--key is not used by the {} cipher to {}", cipher, direction);
    }
    if kind != KeyKind::Text && args.text_key.is_some() {
        warn!("--text-key is not used by the {} cipher to {}", cipher, direction);
    }

    match kind {
        KeyKind::None => Ok(CipherKey::None),
        KeyKind::Numeric => {
            parse_numeric_key(args.key.as_deref(), settings.default_key).map(CipherKey::Numeric)
        }
        KeyKind::Text => match &args.text_key {
            Some(key) => Ok(CipherKey::text(key.as_str())),
            None => {
                debug!("prompting for {} key", cipher);
                prompt(key_prompt(cipher)).map(CipherKey::Text)
            }
        },
    }
}

/// Parse and range-check a numeric key, falling back to `default`
pub fn parse_numeric_key(raw: Option<&str>, default: i64) -> CipherResult<i64> {
    let key = match raw {
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
            CipherError::InvalidKey(format!("'{}' is not a valid integer", raw))
        })?,
        None => default,
    };
    shift::validate_shift(key)
}

fn output_path(settings: &Settings, args: &RunArgs) -> Option<PathBuf> {
    if args.no_output_file {
        return None;
    }
    match &args.output {
        Some(path) => Some(path.clone()),
        None if settings.write_output_file => Some(PathBuf::from(&settings.output_file)),
        None => None,
    }
}
