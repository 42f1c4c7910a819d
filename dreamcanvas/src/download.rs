//! Save a generated image to disk under a prompt-derived file name.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// File name for a downloaded image: `dreamcanvas-` plus the first 30
/// characters of the prompt with non-alphanumerics collapsed to `-`,
/// lowercased.
#[must_use]
pub fn download_filename(prompt: &str) -> String {
    let slug: String = prompt
        .chars()
        .take(30)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .to_lowercase();
    format!("dreamcanvas-{slug}.png")
}

/// Decode a `data:` URI and write the bytes into `dir`, returning the path.
///
/// # Errors
/// Returns an error when the URL is not a base64 `data:` URI or the write
/// fails.
pub fn save_image(url: &str, prompt: &str, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let payload = url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or_else(|| Error::InvalidConfig {
            message: "Only data: URIs can be saved locally".into(),
        })?;
    let bytes = STANDARD.decode(payload).map_err(|err| Error::Storage {
        message: format!("Image payload is not valid base64: {err}"),
    })?;

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(download_filename(prompt));
    fs::write(&path, bytes)?;
    Ok(path)
}
