//! Extension traits for JSON encoding and decoding with error context.

use error_stack::ResultExt;
use serde::Deserialize;

use crate::errors::{CustomResult, ParsingError};

/// Encode a value into its JSON string form.
pub trait Encode {
    /// Serialize `self` to a JSON string.
    fn encode_to_string_of_json(&self) -> CustomResult<String, ParsingError>;
}

impl<T> Encode for T
where
    T: serde::Serialize,
{
    fn encode_to_string_of_json(&self) -> CustomResult<String, ParsingError> {
        serde_json::to_string(self).change_context(ParsingError::EncodeError("json"))
    }
}

/// Parse a byte slice into a typed payload.
pub trait ByteSliceExt {
    /// Deserialize JSON bytes into `T`, naming the target type in the error
    /// context.
    fn parse_struct<'de, T>(&'de self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: Deserialize<'de>;
}

impl ByteSliceExt for [u8] {
    fn parse_struct<'de, T>(&'de self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: Deserialize<'de>,
    {
        serde_json::from_slice(self)
            .change_context(ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from bytes"))
    }
}
