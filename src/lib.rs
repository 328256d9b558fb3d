#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Публичные модули
pub mod api;       // высокий уровень: encode/encode_request
pub mod core;      // общие типы (EncodedSymbol, ошибки и пр.)
pub mod prelude;   // удобные re-export'ы

pub mod one_d;     // 1D кодировщики (семейство Code 2 of 5)
pub mod charset;   // классификация байтов по символьным классам
pub mod registry;  // статический реестр символик
pub mod normalize; // байт-протокол: сырой вход -> запрос
pub mod escape;    // escape-последовательности во входных данных
pub mod hrt;       // печатный текст под штрихами

// Реэкспорт базовых типов в корень
pub use crate::api::{encode, encode_id, encode_request};
pub use crate::core::types::{
    EncodeError, EncodeRequest, EncodedSymbol, InputMode, Outcome, Symbology,
};

/// Быстрый «сахар»: закодировать данные с настройками по умолчанию.
#[inline]
pub fn encode_simple(symbology: Symbology, data: &[u8]) -> Result<EncodedSymbol, EncodeError> {
    api::encode_request(&EncodeRequest::new(symbology, data))
}
