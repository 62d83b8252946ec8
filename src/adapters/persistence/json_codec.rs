//! JSON record codec backed by `serde_json`.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;
use crate::ports::codec::RecordCodec;

/// Compact JSON, fields in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn encode<T: Serialize>(&self, record: &T) -> Result<String, CodecError> {
        Ok(serde_json::to_string(record)?)
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        Ok(serde_json::from_str(text)?)
    }
}
