//! Binary data passed as hex or base64 text.

use std::ops::Deref;

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Bytes written on the command line as hexadecimal, e.g. `4F00`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct BytesHex(pub Vec<u8>);

/// Bytes written on the command line as padded standard base64, e.g. `YQ==`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct BytesBase64(pub Vec<u8>);

macro_rules! byte_wrapper {
    ($ty:ident) => {
        impl Deref for $ty {
            type Target = [u8];

            fn deref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<Vec<u8>> for $ty {
            fn from(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }
        }

        impl From<$ty> for Vec<u8> {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

byte_wrapper!(BytesHex);
byte_wrapper!(BytesBase64);

scalar_value!(
    BytesHex,
    name = "bytesHex",
    parse = |raw: &str| {
        hex::decode(raw.trim())
            .map(BytesHex)
            .map_err(|err| format!("invalid hex data '{raw}': {err}"))
    },
    render = |v: &BytesHex| hex::encode_upper(&v.0),
    default = |v: &BytesHex| (!v.0.is_empty()).then(|| hex::encode_upper(&v.0)),
);

scalar_value!(
    BytesBase64,
    name = "bytesBase64",
    parse = |raw: &str| {
        STANDARD
            .decode(raw.trim())
            .map(BytesBase64)
            .map_err(|err| format!("invalid base64 data '{raw}': {err}"))
    },
    render = |v: &BytesBase64| STANDARD.encode(&v.0),
    default = |v: &BytesBase64| (!v.0.is_empty()).then(|| STANDARD.encode(&v.0)),
);
