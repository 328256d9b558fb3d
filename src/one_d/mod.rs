//! Линейные (1D) кодировщики: семейство Code 2 of 5.
//!
//! Общая механика семейства: каждая десятичная цифра — один из десяти
//! фиксированных wide/narrow паттернов, обрамлённых старт/стоп паттерном
//! символики. Здесь же — общие контрольные цифры (GS1 и Deutsche Post)
//! и развёртка строки ширин в строку модулей.

pub mod c25;
pub mod c25_inter;

use crate::core::types::{EncodeError, EncodeRequest, EncodedSymbol, Symbology};

/// Развёртка строки ширин ('1'..'4') в строку модулей символа.
/// Модули чередуются штрих/пробел, начиная со штриха.
#[inline]
pub(crate) fn expand(dest: &str) -> Vec<u8> {
    dest.bytes().map(|c| c - b'0').collect()
}

/// Стандартная контрольная цифра GS1 (как у EAN-13): веса 3 и 1,
/// начиная с 3 у младшей (правой) цифры. Вход и выход — ASCII-цифры.
pub(crate) fn gs1_check_digit(source: &[u8]) -> u8 {
    let mut factor = if source.len() & 1 == 1 { 3u32 } else { 1 };
    let mut count = 0u32;
    for &c in source {
        count += factor * u32::from(c - b'0');
        factor = if factor == 1 { 3 } else { 1 };
    }
    b'0' + ((10 - (count % 10)) % 10) as u8
}

/// Контрольная цифра Deutsche Post (Leitcode/Identcode): веса 4 и 9,
/// начиная с 4 у младшей цифры.
pub(crate) fn dp_check_digit(source: &[u8]) -> u8 {
    let mut factor = 4u32;
    let mut count = 0u32;
    for &c in source.iter().rev() {
        count += factor * u32::from(c - b'0');
        factor ^= 0x0D; // переключение 4 <-> 9
    }
    b'0' + ((10 - (count % 10)) % 10) as u8
}

/// Диспетчеризация по символике. `data` — уже нормализованные и
/// проверенные реестром цифры.
pub fn encode_symbology(req: &EncodeRequest, data: &[u8]) -> Result<EncodedSymbol, EncodeError> {
    match req.symbology {
        Symbology::C25Standard => Ok(c25::matrix(req, data)),
        Symbology::C25Iata => Ok(c25::iata(req, data)),
        Symbology::C25Logic => Ok(c25::data_logic(req, data)),
        Symbology::C25Ind => Ok(c25::industrial(req, data)),
        Symbology::C25Inter => Ok(c25_inter::interleaved(req, data)),
        Symbology::Itf14 => c25_inter::itf14(req, data),
        Symbology::Dpleit => Ok(c25_inter::dpleit(req, data)),
        Symbology::Dpident => Ok(c25_inter::dpident(req, data)),
    }
}

/// Вспомогалка для тестов: строка модулей -> битовая строка
/// ("1" — штрих, "0" — пробел), как в эталонных векторах.
#[cfg(test)]
pub(crate) fn bin_string(row: &[u8]) -> String {
    let mut out = String::new();
    let mut bar = true;
    for &w in row {
        for _ in 0..w {
            out.push(if bar { '1' } else { '0' });
        }
        bar = !bar;
    }
    out
}
