//! Receipt file validation applied when the employee selects an upload

use thiserror::Error;

/// Receipt formats the store accepts. Matching is case-insensitive.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Rejection of a selected receipt file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    #[error("fichier '{file_name}' refusé: seuls les formats png, jpg et jpeg sont acceptés")]
    UnsupportedExtension { file_name: String },
}

/// Validate a receipt file name against the allowed extensions.
///
/// Only the final suffix counts (`scan.2024.jpeg` is accepted). A name with
/// no extension, or an extension with no stem (`.png`), is rejected.
pub fn validate_receipt_name(file_name: &str) -> Result<(), ReceiptError> {
    let rejected = || ReceiptError::UnsupportedExtension {
        file_name: file_name.to_string(),
    };

    let (stem, extension) = file_name.rsplit_once('.').ok_or_else(rejected)?;
    if stem.is_empty() {
        return Err(rejected());
    }

    if ALLOWED_EXTENSIONS
        .iter()
        .any(|allowed| extension.eq_ignore_ascii_case(allowed))
    {
        Ok(())
    } else {
        Err(rejected())
    }
}
