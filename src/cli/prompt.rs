//! Interactive key entry
//!
//! Keys are read without echo and held in zeroizing buffers.

use zeroize::Zeroizing;

use crate::ciphers::CipherKind;
use crate::error::{CipherError, CipherResult};

/// Prompt text for a cipher that needs a string key
pub fn key_prompt(cipher: CipherKind) -> &'static str {
    match cipher {
        CipherKind::Substitution => "Input 26 letter key: ",
        _ => "Enter alphabetic key: ",
    }
}

/// Prompt for a key (hidden input), trimming surrounding whitespace
pub fn prompt_key(prompt: &str) -> CipherResult<Zeroizing<String>> {
    let raw = rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| CipherError::Io(format!("Failed to read key: {}", e)))?;

    Ok(Zeroizing::new(raw.trim().to_string()))
}
