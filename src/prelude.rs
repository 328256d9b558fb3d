//! Удобные re-export'ы: `use ultrabar::prelude::*;` — и можно кодировать.

pub use crate::api::{encode, encode_id, encode_request};
pub use crate::charset::CharClass;
pub use crate::core::types::{
    BaseMode, EncodeError, EncodeRequest, EncodedSymbol, InputMode, ModeFlags, Outcome, Symbology,
    WarnLevel,
};
