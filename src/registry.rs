//! Статический реестр символик.
//!
//! Для каждой символики — допустимые диапазоны опций 1/2/3, границы длины
//! входа, требуемый класс символов и база кодов ошибок. Таблица строится
//! один раз и дальше только читается, никакой синхронизации не нужно.

use crate::charset::{self, CharClass};
use crate::core::types::{EncodeError, Symbology};

/// Паспорт символики. Диапазон `None` — опция неприменима.
#[derive(Clone, Copy, Debug)]
pub struct SymbologyDescriptor {
    pub symbology: Symbology,
    /// Маска «вменяемых» данных; пустая — проверка не применяется.
    pub sane_mask: CharClass,
    /// Человекочитаемое требование для текста ошибки.
    pub requirement: &'static str,
    pub option_1: Option<(i32, i32)>,
    pub option_2: Option<(i32, i32)>,
    pub option_3: Option<(i32, i32)>,
    pub len_min: usize,
    pub len_max: usize,
    /// Поддерживает ли символика переключение ECI.
    pub eci: bool,
    /// База кодов ошибок: base — слишком длинно, base+1 — плохой символ.
    pub error_base: u16,
    /// Срезать опциональный GS1-префикс AI 01 перед проверками (ITF-14).
    pub strip_ai01: bool,
}

/// Реестр. Порядок не важен, поиск — по символике.
pub static DESCRIPTORS: [SymbologyDescriptor; 8] = [
    SymbologyDescriptor {
        symbology: Symbology::C25Standard,
        sane_mask: CharClass::NEON,
        requirement: "digits only",
        option_1: None,
        option_2: Some((0, 2)),
        option_3: None,
        len_min: 1,
        len_max: 112,
        eci: false,
        error_base: 301,
        strip_ai01: false,
    },
    SymbologyDescriptor {
        symbology: Symbology::C25Inter,
        sane_mask: CharClass::NEON,
        requirement: "digits only",
        option_1: None,
        option_2: Some((0, 2)),
        option_3: None,
        len_min: 1,
        len_max: 125,
        eci: false,
        error_base: 309,
        strip_ai01: false,
    },
    SymbologyDescriptor {
        symbology: Symbology::C25Iata,
        sane_mask: CharClass::NEON,
        requirement: "digits only",
        option_1: None,
        option_2: Some((0, 2)),
        option_3: None,
        len_min: 1,
        len_max: 80,
        eci: false,
        error_base: 305,
        strip_ai01: false,
    },
    SymbologyDescriptor {
        symbology: Symbology::C25Logic,
        sane_mask: CharClass::NEON,
        requirement: "digits only",
        option_1: None,
        option_2: Some((0, 2)),
        option_3: None,
        len_min: 1,
        len_max: 113,
        eci: false,
        error_base: 307,
        strip_ai01: false,
    },
    SymbologyDescriptor {
        symbology: Symbology::C25Ind,
        sane_mask: CharClass::NEON,
        requirement: "digits only",
        option_1: None,
        option_2: Some((0, 2)),
        option_3: None,
        len_min: 1,
        len_max: 79,
        eci: false,
        error_base: 303,
        strip_ai01: false,
    },
    SymbologyDescriptor {
        symbology: Symbology::Dpleit,
        sane_mask: CharClass::NEON,
        requirement: "digits only",
        option_1: None,
        option_2: None,
        option_3: None,
        len_min: 1,
        len_max: 13,
        eci: false,
        error_base: 313,
        strip_ai01: false,
    },
    SymbologyDescriptor {
        symbology: Symbology::Dpident,
        sane_mask: CharClass::NEON,
        requirement: "digits only",
        option_1: None,
        option_2: None,
        option_3: None,
        len_min: 1,
        len_max: 11,
        eci: false,
        error_base: 315,
        strip_ai01: false,
    },
    SymbologyDescriptor {
        // 13 цифр данных + опциональная переданная контрольная цифра;
        // AI-префикс срезается раньше проверки длины.
        symbology: Symbology::Itf14,
        sane_mask: CharClass::NEON,
        requirement: "digits only",
        option_1: None,
        option_2: None,
        option_3: None,
        len_min: 1,
        len_max: 14,
        eci: false,
        error_base: 311,
        strip_ai01: true,
    },
];

/// Паспорт по символике.
#[inline]
pub fn descriptor(symbology: Symbology) -> &'static SymbologyDescriptor {
    let idx = match symbology {
        Symbology::C25Standard => 0,
        Symbology::C25Inter => 1,
        Symbology::C25Iata => 2,
        Symbology::C25Logic => 3,
        Symbology::C25Ind => 4,
        Symbology::Dpleit => 5,
        Symbology::Dpident => 6,
        Symbology::Itf14 => 7,
    };
    &DESCRIPTORS[idx]
}

/// Проверки длины и класса символов (шаги 1, 5 и 6 конвейера валидации),
/// обрыв на первой ошибке.
pub fn validate(desc: &SymbologyDescriptor, data: &[u8]) -> Result<(), EncodeError> {
    if data.len() < desc.len_min {
        return Err(EncodeError::TooShort {
            code: desc.error_base,
            length: data.len(),
            min: desc.len_min,
        });
    }
    if data.len() > desc.len_max {
        return Err(EncodeError::TooLong {
            code: desc.error_base,
            length: data.len(),
            max: desc.len_max,
        });
    }
    if !desc.sane_mask.is_empty() {
        if let Some(position) = charset::not_sane(desc.sane_mask, data) {
            return Err(EncodeError::InvalidCharacter {
                code: desc.error_base + 1,
                position,
                requirement: desc.requirement,
            });
        }
    }
    Ok(())
}
