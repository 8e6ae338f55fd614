//! Reading whole texts from local files and remote URLs.

use crate::error::{Result, StreengError};
use std::fs;
use std::path::Path;

/// Read a whole file as text
pub fn string_from_file(path: &Path) -> Result<String> {
    let io_err = |source| StreengError::Io {
        path: path.to_path_buf(),
        source,
    };
    let abs = std::path::absolute(path).map_err(io_err)?;
    let bytes = fs::read(&abs).map_err(|source| StreengError::Io { path: abs, source })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Fetch a URL and return its body as text. Non-2xx responses are errors.
#[cfg(feature = "remote")]
pub fn string_from_url(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(StreengError::HttpStatus(status.as_u16()));
    }
    Ok(response.text()?)
}
