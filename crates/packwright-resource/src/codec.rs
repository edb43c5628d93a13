//! Versioned record envelope.
//!
//! Every structured resource is a JSON document of the form
//! `{"version": 1, "data": ...}`. The version is checked before the payload
//! is decoded into its target type, so a payload written for another format
//! revision is reported as such instead of as a field mismatch.

use crate::error::{Error, Result};
use crate::provider::ResourceProvider;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    data:    T,
}

pub fn decode<T: DeserializeOwned>(name: &str, bytes: &[u8]) -> Result<T> {
    let decode_err = |source| Error::Decode {
        name: name.to_string(),
        source,
    };
    let envelope: Envelope<Value> = serde_json::from_slice(bytes).map_err(decode_err)?;
    if envelope.version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion {
            name:     name.to_string(),
            found:    envelope.version,
            expected: FORMAT_VERSION,
        });
    }
    T::deserialize(envelope.data).map_err(decode_err)
}

pub fn encode<T: Serialize>(data: &T) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(&Envelope {
        version: FORMAT_VERSION,
        data,
    })
    .map_err(Error::Encode)
}

/// Loads and decodes a resource that must exist.
pub fn load<T: DeserializeOwned>(provider: &dyn ResourceProvider, name: &str) -> Result<T> {
    let bytes = provider.require(name)?;
    decode(name, &bytes)
}

/// Loads and decodes a resource that may be absent.
pub fn load_optional<T: DeserializeOwned>(provider: &dyn ResourceProvider, name: &str) -> Result<Option<T>> {
    provider.open(name)?.map(|bytes| decode(name, &bytes)).transpose()
}
