//! Record Codec Port - Object <-> Text Serialization
//!
//! The store never encodes records itself; it calls a codec. The codec
//! must be deterministic for a given value and round-trip it back to an
//! equivalent value. Cyclic data is not supported.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;

/// Field-based text codec for saveable records.
pub trait RecordCodec: Send + Sync + 'static {
  /// Encode a record as text.
  fn encode<T: Serialize>(&self, record: &T) -> Result<String, CodecError>;

  /// Decode text produced by [`encode`](Self::encode).
  fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError>;
}
