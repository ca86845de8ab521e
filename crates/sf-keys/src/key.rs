//! A single `EXT-X-KEY` declaration.
//!
//! See draft-pantos-hls-rfc8216bis, section 4.4.4.4. Rendering emits:
//!
//! ```text
//! #EXT-X-KEY:METHOD=<method>[,URI="<uri>"[,IV=<iv>][,KEYFORMAT="<fmt>"][,KEYFORMATVERSIONS="<v>"]]
//! ```
//!
//! With `METHOD=NONE` every other attribute is suppressed.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Write;
use std::str::FromStr;

use crate::error::Result;
use crate::writer::FragmentWriter;

/// Encryption method of a key tag.
///
/// Parsing from text is canonical: `"NONE"` always yields [`KeyMethod::None`].
/// Methods compare and hash by their playlist text, so `Other("NONE")` is the
/// same method as `None` and [`KeyMethod::is_none`] holds for both.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum KeyMethod {
    /// Media segments are not encrypted.
    #[default]
    None,
    /// Whole-segment AES-128 CBC.
    Aes128,
    /// Sample-level AES encryption.
    SampleAes,
    /// Sample-level AES-CTR encryption.
    SampleAesCtr,
    /// Any other method identifier, kept verbatim.
    Other(String),
}

impl KeyMethod {
    /// The method identifier as it appears in the playlist.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "NONE",
            Self::Aes128 => "AES-128",
            Self::SampleAes => "SAMPLE-AES",
            Self::SampleAesCtr => "SAMPLE-AES-CTR",
            Self::Other(method) => method.as_str(),
        }
    }

    /// Whether this is the "no encryption" sentinel.
    pub fn is_none(&self) -> bool {
        self.as_str() == "NONE"
    }
}

impl PartialEq for KeyMethod {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for KeyMethod {}

impl Hash for KeyMethod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for KeyMethod {
    fn from(s: &str) -> Self {
        match s {
            "NONE" => Self::None,
            "AES-128" => Self::Aes128,
            "SAMPLE-AES" => Self::SampleAes,
            "SAMPLE-AES-CTR" => Self::SampleAesCtr,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for KeyMethod {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<KeyMethod> for String {
    fn from(method: KeyMethod) -> Self {
        match method {
            KeyMethod::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for KeyMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for KeyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Information about stream encryption, realizing the `EXT-X-KEY` tag.
///
/// Empty text means "attribute absent" for `iv`, `keyformat` and
/// `keyformatversions`. Within a [`KeyList`](crate::KeyList) the `keyformat`
/// identifies the key slot; the empty keyformat is a slot of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Key {
    /// Encryption method.
    pub method: KeyMethod,
    /// Key material location. Always emitted unless the method is NONE.
    pub uri: String,
    /// Hex initialization vector, e.g. `0x1a2b`.
    pub iv: String,
    /// Key delivery format.
    pub keyformat: String,
    /// Versions of `keyformat`, e.g. `1/2`.
    pub keyformatversions: String,
}

impl Key {
    /// Create a key with a method and URI.
    pub fn new(method: impl Into<KeyMethod>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            ..Self::default()
        }
    }

    /// Create a `METHOD=NONE` key.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the initialization vector.
    pub fn with_iv(mut self, iv: impl Into<String>) -> Self {
        self.iv = iv.into();
        self
    }

    /// Set the key format.
    pub fn with_keyformat(mut self, keyformat: impl Into<String>) -> Self {
        self.keyformat = keyformat.into();
        self
    }

    /// Set the key format versions.
    pub fn with_keyformat_versions(mut self, versions: impl Into<String>) -> Self {
        self.keyformatversions = versions.into();
        self
    }

    /// Whether this key declares no encryption.
    pub fn is_none(&self) -> bool {
        self.method.is_none()
    }

    /// Write the tag line to `w`, one write per fragment.
    ///
    /// A short write is completed by writing the remainder, not reported.
    ///
    /// Returns the bytes written. On failure no further fragments are
    /// attempted and the error carries the bytes written before it.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<u64> {
        let mut out = FragmentWriter::new(w);
        for fragment in self.fragments() {
            out.put(fragment);
        }
        out.finish()
    }

    /// Render the tag line to a string.
    pub fn render(&self) -> String {
        self.fragments().concat()
    }

    /// The tag line split into the pieces written to the sink.
    pub(crate) fn fragments(&self) -> Vec<&str> {
        let mut parts = vec!["#EXT-X-KEY:", "METHOD=", self.method.as_str()];

        if !self.method.is_none() {
            parts.extend([",URI=\"", self.uri.as_str(), "\""]);

            if !self.iv.is_empty() {
                parts.extend([",IV=", self.iv.as_str()]);
            }
            if !self.keyformat.is_empty() {
                parts.extend([",KEYFORMAT=\"", self.keyformat.as_str(), "\""]);
            }
            if !self.keyformatversions.is_empty() {
                parts.extend([
                    ",KEYFORMATVERSIONS=\"",
                    self.keyformatversions.as_str(),
                    "\"",
                ]);
            }
        }

        parts.push("\n");
        parts
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in self.fragments() {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}
