// src/core/types.rs
//
// Общие типы движка, независимые от конкретных кодировщиков.

use bitflags::bitflags;
use thiserror::Error;

/// Тип символики. Числовые id совпадают с внешним протоколом
/// (см. `Symbology::id`) и никогда не перенумеровываются.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Symbology {
    /// Code 2 of 5 Standard (Matrix).
    C25Standard,
    /// Code 2 of 5 Interleaved.
    C25Inter,
    /// Code 2 of 5 IATA.
    C25Iata,
    /// Code 2 of 5 Data Logic.
    C25Logic,
    /// Code 2 of 5 Industrial.
    C25Ind,
    /// Deutsche Post Leitcode.
    Dpleit,
    /// Deutsche Post Identcode.
    Dpident,
    /// ITF-14 (GS1 GTIN-14 поверх Interleaved 2 of 5).
    Itf14,
}

impl Symbology {
    /// Внешний числовой идентификатор символики.
    #[inline]
    pub fn id(self) -> u32 {
        match self {
            Symbology::C25Standard => 2,
            Symbology::C25Inter => 3,
            Symbology::C25Iata => 4,
            Symbology::C25Logic => 6,
            Symbology::C25Ind => 7,
            Symbology::Dpleit => 21,
            Symbology::Dpident => 22,
            Symbology::Itf14 => 89,
        }
    }

    /// Обратное отображение id -> символика. `None` для неизвестных id.
    #[inline]
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            2 => Some(Symbology::C25Standard),
            3 => Some(Symbology::C25Inter),
            4 => Some(Symbology::C25Iata),
            6 => Some(Symbology::C25Logic),
            7 => Some(Symbology::C25Ind),
            21 => Some(Symbology::Dpleit),
            22 => Some(Symbology::Dpident),
            89 => Some(Symbology::Itf14),
            _ => None,
        }
    }
}

/// Базовый режим интерпретации входных байтов.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BaseMode {
    /// Сырые байты как есть.
    #[default]
    Data,
    /// Вход — UTF-8.
    Unicode,
    /// Вход — данные GS1 с AI-скобками.
    Gs1,
}

bitflags! {
    /// Флаги обработки входа. Значения битов — внешний протокол
    /// (младшие 3 бита зарезервированы под базовый режим).
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct ModeFlags: u32 {
        /// Обрабатывать escape-последовательности (\n, \xNN, \uNNNN и пр.).
        const ESCAPE = 1 << 3;
        /// GS1 AI в круглых скобках вместо квадратных.
        const GS1PARENS = 1 << 4;
        /// Не проверять данные GS1.
        const GS1NOCHECK = 1 << 5;
        /// Высота задана на строку (для многострочных символик).
        const HEIGHTPERROW = 1 << 6;
        /// Ускоренный режим кодирования.
        const FAST = 1 << 7;
        /// Расширенные escape-последовательности.
        const EXTRA_ESCAPE = 1 << 8;
    }
}

impl Default for ModeFlags {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Полный режим входа: базовый режим + флаги.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct InputMode {
    pub base: BaseMode,
    pub flags: ModeFlags,
}

impl InputMode {
    #[inline]
    pub fn new(base: BaseMode, flags: ModeFlags) -> Self {
        Self { base, flags }
    }
}

/// Как реагировать на предупреждения.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum WarnLevel {
    /// Предупреждение остаётся предупреждением.
    #[default]
    Default,
    /// Любое предупреждение превращается в эквивалентную ошибку.
    FailAll,
}

/// Запрос на кодирование. Живёт только на время вызова.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeRequest {
    pub symbology: Symbology,
    pub input_mode: InputMode,
    /// `None` — «по умолчанию» (внешний байт-протокол кодирует это как 255).
    pub option_1: Option<i32>,
    pub option_2: Option<i32>,
    pub option_3: Option<i32>,
    /// 0 — ECI не задан.
    pub eci: u32,
    pub warn_level: WarnLevel,
    pub data: Vec<u8>,
}

impl EncodeRequest {
    #[inline]
    pub fn new(symbology: Symbology, data: impl Into<Vec<u8>>) -> Self {
        Self {
            symbology,
            input_mode: InputMode::default(),
            option_1: None,
            option_2: None,
            option_3: None,
            eci: 0,
            warn_level: WarnLevel::default(),
            data: data.into(),
        }
    }

    #[inline]
    pub fn with_option_2(mut self, v: i32) -> Self {
        self.option_2 = Some(v);
        self
    }

    #[inline]
    pub fn with_input_mode(mut self, m: InputMode) -> Self {
        self.input_mode = m;
        self
    }

    #[inline]
    pub fn with_warn_level(mut self, w: WarnLevel) -> Self {
        self.warn_level = w;
        self
    }
}

/// Итог кодирования: успех или успех с предупреждением.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Success,
    Warning {
        code: u16,
        message: String,
    },
}

impl Outcome {
    #[inline]
    pub fn is_warning(&self) -> bool {
        matches!(self, Outcome::Warning { .. })
    }

    /// Текст предупреждения в стабильном внешнем формате.
    pub fn text(&self) -> Option<String> {
        match self {
            Outcome::Success => None,
            Outcome::Warning { code, message } => Some(format!("Warning {code}: {message}")),
        }
    }
}

/// Результат кодирования: строки модулей, ширина, HRT.
///
/// Каждая строка — ширины модулей, чередующиеся штрих/пробел,
/// начиная со штриха. Ширина символа равна ширине самой широкой строки.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedSymbol {
    pub symbology: Symbology,
    pub rows: Vec<Vec<u8>>,
    pub width: u32,
    /// Полная закодированная цифровая последовательность, как она лежит
    /// в штрихах (с контрольной цифрой, если она есть).
    pub digits: String,
    /// Вычисленная или проверенная контрольная цифра.
    pub check_digit: Option<char>,
    /// Печатный текст под штрихами.
    pub hrt: String,
    pub outcome: Outcome,
}

impl EncodedSymbol {
    /// Однострочный линейный символ; ширина выводится из строки.
    pub fn single_row(symbology: Symbology, row: Vec<u8>, digits: String) -> Self {
        let width = row.iter().map(|&w| u32::from(w)).sum();
        Self {
            symbology,
            rows: vec![row],
            width,
            digits,
            check_digit: None,
            hrt: String::new(),
            outcome: Outcome::Success,
        }
    }

    #[inline]
    pub fn with_check_digit(mut self, c: char) -> Self {
        self.check_digit = Some(c);
        self
    }

    #[inline]
    pub fn with_hrt(mut self, hrt: impl Into<String>) -> Self {
        self.hrt = hrt.into();
        self
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Машиночитаемое содержимое: всегда с контрольной цифрой,
    /// даже если HRT её скрывает.
    #[inline]
    pub fn content(&self) -> &str {
        &self.digits
    }
}

/// Ошибки кодирования. Числовые коды — внешний контракт: закреплены за
/// символикой/этапом и не перенумеровываются между версиями.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Вход длиннее объявленного максимума.
    #[error("Error {code}: Input length {length} too long (maximum {max})")]
    TooLong { code: u16, length: usize, max: usize },

    /// Вход короче объявленного минимума (нижняя граница той же проверки).
    #[error("Error {code}: Input length {length} too short (minimum {min})")]
    TooShort { code: u16, length: usize, min: usize },

    /// Байт вне допустимого класса символов; позиция с единицы.
    #[error("Error {code}: Invalid character at position {position} in input ({requirement})")]
    InvalidCharacter {
        code: u16,
        position: usize,
        requirement: &'static str,
    },

    /// Переданная контрольная цифра не совпала с вычисленной.
    #[error("Error {code}: Invalid check digit '{found}', expecting '{expected}'")]
    InvalidCheckDigit { code: u16, found: char, expected: char },

    /// Недопустимое значение опции/символики/ECI.
    #[error("Error {code}: {message}")]
    InvalidOption { code: u16, message: String },

    /// Ошибка структуры входных данных (escape-последовательности и пр.).
    #[error("Error {code}: {message}")]
    InvalidData { code: u16, message: String },
}

impl EncodeError {
    /// Стабильный числовой код ошибки.
    #[inline]
    pub fn code(&self) -> u16 {
        match *self {
            EncodeError::TooLong { code, .. }
            | EncodeError::TooShort { code, .. }
            | EncodeError::InvalidCharacter { code, .. }
            | EncodeError::InvalidCheckDigit { code, .. }
            | EncodeError::InvalidOption { code, .. }
            | EncodeError::InvalidData { code, .. } => code,
        }
    }
}
