use std::io;
use std::path::Path;

use reqwest::multipart::Part;

use super::error::MissingInput;

/// An image selected for submission: its original file name plus raw bytes.
#[derive(Debug, Clone)]
pub struct ImageFile {
    file_name: String,
    bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Reads the file at `path` into memory, keeping its file name for the
    /// multipart upload.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { file_name, bytes })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Converts the image into a multipart part with its guessed MIME type.
    pub(crate) fn into_part(self) -> Result<Part, reqwest::Error> {
        let mime = mime_guess::from_path(&self.file_name).first_or_octet_stream();
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(mime.essence_str())
    }
}

/// The pair of fields a submission is built from, captured fresh from the
/// caller at submit time and discarded after use.
///
/// Both fields must be present before a submission is attempted; use
/// [`validate`](Self::validate) to check without consuming the input.
#[derive(Debug, Clone)]
pub struct SubmissionInput {
    text: String,
    image: Option<ImageFile>,
}

/// A submission input that passed validation: trimmed non-empty text and a
/// selected image.
#[derive(Debug)]
pub(crate) struct ValidatedInput {
    pub(crate) text: String,
    pub(crate) image: ImageFile,
}

impl SubmissionInput {
    pub fn new(text: impl Into<String>, image: Option<ImageFile>) -> Self {
        Self {
            text: text.into(),
            image,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    /// Checks both fields, reporting exactly which ones are missing.
    pub fn validate(&self) -> Result<(), MissingInput> {
        let missing = MissingInput {
            text: self.text.trim().is_empty(),
            image: self.image.is_none(),
        };
        if missing.any() {
            Err(missing)
        } else {
            Ok(())
        }
    }

    /// Consumes the input, trimming the text and unwrapping the image.
    pub(crate) fn into_validated(self) -> Result<ValidatedInput, MissingInput> {
        let text = self.text.trim().to_owned();
        match (text.is_empty(), self.image) {
            (false, Some(image)) => Ok(ValidatedInput { text, image }),
            (text_missing, image) => Err(MissingInput {
                text: text_missing,
                image: image.is_none(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let input = SubmissionInput::new("some headline", Some(ImageFile::new("a.jpg", vec![1])));
        assert!(input.validate().is_ok());

        let validated = input.into_validated().unwrap();
        assert_eq!(validated.text, "some headline");
        assert_eq!(validated.image.file_name(), "a.jpg");
    }

    #[test]
    fn test_whitespace_text_is_missing() {
        let input = SubmissionInput::new("   \t\n", Some(ImageFile::new("a.jpg", vec![1])));
        let missing = input.validate().unwrap_err();
        assert_eq!(missing, MissingInput { text: true, image: false });
    }

    #[test]
    fn test_missing_image() {
        let input = SubmissionInput::new("some headline", None);
        let missing = input.validate().unwrap_err();
        assert_eq!(missing, MissingInput { text: false, image: true });
    }

    #[test]
    fn test_missing_both() {
        let input = SubmissionInput::new("", None);
        let missing = input.validate().unwrap_err();
        assert_eq!(missing, MissingInput { text: true, image: true });
    }

    #[test]
    fn test_text_is_trimmed() {
        let input = SubmissionInput::new("  padded headline  ", Some(ImageFile::new("a.jpg", vec![1])));
        let validated = input.into_validated().unwrap();
        assert_eq!(validated.text, "padded headline");
    }

    #[test]
    fn test_image_file_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"not a real png").unwrap();

        let image = ImageFile::from_path(&path).unwrap();
        assert_eq!(image.file_name(), "photo.png");
        assert_eq!(image.bytes(), b"not a real png");
    }
}
