use crate::error::{MendError, Result};
use crate::patch::NewlineStyle;
use encoding_rs::Encoding;
use std::path::Path;

/// Resolve a WHATWG encoding label (e.g. "utf-8", "windows-1252").
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
	Encoding::for_label(label.as_bytes()).ok_or_else(|| MendError::UnknownEncoding {
		label: label.to_string(),
	})
}

/// Resolve an encoding label for writing.
///
/// encoding_rs cannot produce UTF-16 output. Reject such labels up front
/// instead of silently falling back to UTF-8.
pub fn resolve_write_encoding(label: &str) -> Result<&'static Encoding> {
	let encoding = resolve_encoding(label)?;
	if encoding.output_encoding() != encoding {
		return Err(MendError::UnsupportedWriteEncoding {
			label: label.to_string(),
		});
	}
	Ok(encoding)
}

/// Decode raw target bytes.
///
/// A byte-order mark, if present, wins over the declared encoding and is
/// stripped. Malformed byte sequences are an error, not a lossy decode.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, path: &Path) -> Result<String> {
	let (text, _, had_errors) = encoding.decode(bytes);
	if had_errors {
		return Err(MendError::TargetDecode {
			path: path.to_path_buf(),
			encoding: encoding.name().to_string(),
		});
	}
	Ok(text.into_owned())
}

/// Encode text for writing. Characters the encoding cannot represent are an
/// error rather than a numeric-reference substitution.
pub fn encode(text: &str, encoding: &'static Encoding, path: &Path) -> Result<Vec<u8>> {
	let (bytes, _, had_errors) = encoding.encode(text);
	if had_errors {
		return Err(MendError::TargetEncode {
			path: path.to_path_buf(),
			encoding: encoding.name().to_string(),
		});
	}
	Ok(bytes.into_owned())
}

/// Force every line terminator to the given style.
pub fn normalize_newlines(text: &str, style: NewlineStyle) -> String {
	// Collapse \r\n and bare \r to \n first so the crlf pass can't double up.
	let unix = text.replace("\r\n", "\n").replace('\r', "\n");
	match style {
		NewlineStyle::Lf => unix,
		NewlineStyle::Crlf => unix.replace('\n', "\r\n"),
	}
}
