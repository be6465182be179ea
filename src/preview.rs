//! Image preview support: a pure mapping from a selected file to a
//! displayable `data:` URI, invoked by the host when the selection changes.

use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Builds a displayable data URI for a selected file.
///
/// The MIME type is guessed from the file name, falling back to
/// `application/octet-stream`.
///
/// # Example
/// ```
/// use newsprobe::preview;
///
/// let uri = preview::data_uri("photo.png", &[1, 2, 3]);
/// assert!(uri.starts_with("data:image/png;base64,"));
/// ```
pub fn data_uri(file_name: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Reads the file at `path` and returns its data URI. The read is the only
/// suspension point; the encoding itself is synchronous.
pub fn data_uri_from_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(data_uri(&file_name, &bytes))
}
