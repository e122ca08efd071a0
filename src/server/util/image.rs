use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::distr::{Alphanumeric, SampleString};

use crate::server::error::composition::CompositionError;

const BLOB_TOKEN_LENGTH: usize = 16;
const DEFAULT_EXTENSION: &str = "png";

/// Verify a submitted recipe image payload and derive a blob reference for it.
///
/// The payload is either a `data:image/<ext>;base64,<data>` URI or a raw base64
/// string. Pixel data is never inspected; the payload only has to decode to a
/// non-empty byte sequence. The returned reference has the shape
/// `recipes/images/<token>.<ext>`.
pub fn derive_reference(payload: &str) -> Result<String, CompositionError> {
    let (extension, data) = split_payload(payload)?;

    let bytes = STANDARD
        .decode(data)
        .map_err(|e| CompositionError::InvalidImage(format!("payload is not base64: {}", e)))?;

    if bytes.is_empty() {
        return Err(CompositionError::InvalidImage(
            "payload decodes to zero bytes".to_string(),
        ));
    }

    let token = Alphanumeric.sample_string(&mut rand::rng(), BLOB_TOKEN_LENGTH);

    Ok(format!("recipes/images/{}.{}", token, extension))
}

/// Split a payload into its extension and base64 data portion
fn split_payload(payload: &str) -> Result<(&str, &str), CompositionError> {
    if let Some(rest) = payload.strip_prefix("data:image/") {
        let (extension, data) = rest.split_once(";base64,").ok_or_else(|| {
            CompositionError::InvalidImage("malformed data URI prefix".to_string())
        })?;

        if extension.is_empty() {
            return Err(CompositionError::InvalidImage(
                "data URI is missing an image format".to_string(),
            ));
        }

        return Ok((extension, data));
    }

    Ok((DEFAULT_EXTENSION, payload))
}

#[cfg(test)]
mod tests {
    use crate::server::{error::composition::CompositionError, util::image::derive_reference};

    #[test]
    /// Expect a blob reference carrying the data URI's extension
    fn test_derive_reference_data_uri() {
        let result = derive_reference("data:image/jpeg;base64,aW1hZ2UgYnl0ZXM=");

        assert!(result.is_ok());
        let reference = result.unwrap();

        assert!(reference.starts_with("recipes/images/"));
        assert!(reference.ends_with(".jpeg"));
    }

    #[test]
    /// Expect raw base64 payloads to fall back to the default extension
    fn test_derive_reference_raw_base64() {
        let result = derive_reference("aW1hZ2UgYnl0ZXM=");

        assert!(result.is_ok());
        assert!(result.unwrap().ends_with(".png"));
    }

    #[test]
    /// Expect rejection when the payload is not valid base64
    fn test_derive_reference_invalid_base64() {
        let result = derive_reference("data:image/png;base64,not valid base64!!!");

        assert!(matches!(result, Err(CompositionError::InvalidImage(_))));
    }

    #[test]
    /// Expect rejection when the payload decodes to zero bytes
    fn test_derive_reference_empty_payload() {
        let result = derive_reference("data:image/png;base64,");

        assert!(matches!(result, Err(CompositionError::InvalidImage(_))));
    }

    #[test]
    /// Expect rejection when the data URI has no base64 marker
    fn test_derive_reference_malformed_data_uri() {
        let result = derive_reference("data:image/png,aW1n");

        assert!(matches!(result, Err(CompositionError::InvalidImage(_))));
    }
}
