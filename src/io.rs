//! File reading and writing with encoding support.
//!
//! Karaoke-script files come from old Windows tooling and arrive in a mix
//! of regional encodings without any marker. Reads try a fixed cascade of
//! candidate encodings and take the first strict decode; writes encode
//! with a caller-specified output encoding (UTF-8 by default) and create
//! parent directories as needed.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, BIG5, EUC_JP, EUC_KR, GBK, SHIFT_JIS, UTF_8, WINDOWS_1252};

use crate::error::{Error, Result};

/// Candidate encodings tried after UTF-8, in order. Windows-1252 accepts
/// any byte sequence, so the cascade always terminates with a decode.
const REGIONAL_CASCADE: &[&Encoding] = &[SHIFT_JIS, EUC_JP, EUC_KR, GBK, BIG5, WINDOWS_1252];

/// Look up an encoding by WHATWG label (e.g. `shift_jis`, `gbk`).
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Strict decode: `None` when any byte sequence is invalid for `encoding`.
fn try_decode(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
}

/// Read a script file, trying the preferred encoding first, then UTF-8
/// (BOM tolerated), then the regional cascade.
pub fn read_script(path: &Path, preferred: Option<&'static Encoding>) -> Result<String> {
    let bytes = fs_err::read(path).map_err(|e| Error::io(e, path.to_path_buf()))?;

    if let Some(encoding) = preferred {
        if let Some(text) = try_decode(&bytes, encoding) {
            return Ok(text);
        }
        tracing::debug!(path = %path.display(), encoding = encoding.name(), "preferred encoding rejected, falling back");
    }

    let utf8_body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    if let Some(text) = try_decode(utf8_body, UTF_8) {
        return Ok(text);
    }

    for &encoding in REGIONAL_CASCADE {
        if let Some(text) = try_decode(&bytes, encoding) {
            tracing::debug!(path = %path.display(), encoding = encoding.name(), "decoded with cascade encoding");
            return Ok(text);
        }
    }

    Err(Error::Decode { path: path.to_path_buf() })
}

/// Write converted text to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, text: &str, encoding: &'static Encoding) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs_err::create_dir_all(parent).map_err(|e| Error::write(e, path))?;
        }
    }

    let (bytes, _, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        tracing::warn!(
            path = %path.display(),
            encoding = encoding.name(),
            "output encoding cannot represent some characters; they were replaced"
        );
    }
    fs_err::write(path, &bytes).map_err(|e| Error::write(e, path))
}
