// src/api.rs
//
// Верхнеуровневый вход движка: запрос -> символ. Чистая синхронная
// функция без состояния: таблицы и реестр только читаются, результат
// целиком принадлежит вызывающему.

use crate::core::types::{
    EncodeError, EncodeRequest, EncodedSymbol, InputMode, ModeFlags, Outcome, Symbology, WarnLevel,
};
use crate::escape;
use crate::one_d;
use crate::one_d::c25_inter;
use crate::registry;

/// Абсолютный предел длины входа, до всех реестровых проверок.
const MAX_DATA_LEN: usize = 17400;

/// Закодировать данные в символ штрих-кода.
///
/// Порядок проверок фиксирован: рамочные проверки входа -> escape ->
/// срез AI-префикса (где применимо) -> длина -> класс символов ->
/// диапазоны опций -> кодирование. Обрыв на первой ошибке, дальше
/// кодировщик не запускается.
pub fn encode(
    symbology: Symbology,
    option_1: Option<i32>,
    option_2: Option<i32>,
    option_3: Option<i32>,
    eci: u32,
    input_mode: InputMode,
    data: &[u8],
) -> Result<EncodedSymbol, EncodeError> {
    let mut req = EncodeRequest::new(symbology, data);
    req.option_1 = option_1;
    req.option_2 = option_2;
    req.option_3 = option_3;
    req.eci = eci;
    req.input_mode = input_mode;
    encode_request(&req)
}

/// То же, но по числовому id символики (внешний протокол).
pub fn encode_id(
    id: u32,
    option_1: Option<i32>,
    option_2: Option<i32>,
    option_3: Option<i32>,
    eci: u32,
    input_mode: InputMode,
    data: &[u8],
) -> Result<EncodedSymbol, EncodeError> {
    let Some(symbology) = Symbology::from_id(id) else {
        return Err(EncodeError::InvalidOption {
            code: 206,
            message: "Symbology out of range".to_owned(),
        });
    };
    encode(symbology, option_1, option_2, option_3, eci, input_mode, data)
}

/// Полный конвейер для готового запроса.
pub fn encode_request(req: &EncodeRequest) -> Result<EncodedSymbol, EncodeError> {
    if req.data.is_empty() {
        return Err(EncodeError::InvalidData {
            code: 205,
            message: "No input data".to_owned(),
        });
    }
    if req.data.len() > MAX_DATA_LEN {
        return Err(EncodeError::TooLong {
            code: 243,
            length: req.data.len(),
            max: MAX_DATA_LEN,
        });
    }

    let desc = registry::descriptor(req.symbology);

    if req.eci > 0 && !desc.eci {
        return Err(EncodeError::InvalidOption {
            code: 217,
            message: "Symbology does not support ECI switching".to_owned(),
        });
    }

    let escaped: Vec<u8>;
    let mut data: &[u8] = &req.data;
    if req.input_mode.flags.contains(ModeFlags::ESCAPE) {
        escaped = escape::process(data)?;
        data = &escaped;
    }

    if desc.strip_ai01 {
        data = c25_inter::strip_ai01(data);
    }

    registry::validate(desc, data)?;

    // Опции вне диапазона реестра молча заменяются значением по умолчанию,
    // факт подмены фиксируется предупреждением.
    let mut effective = req.clone();
    let mut outcome = Outcome::Success;
    let slots = [
        (&mut effective.option_1, desc.option_1, "option_1"),
        (&mut effective.option_2, desc.option_2, "option_2"),
        (&mut effective.option_3, desc.option_3, "option_3"),
    ];
    for (slot, range, name) in slots {
        if let (Some(v), Some((min, max))) = (*slot, range) {
            if v < min || v > max {
                *slot = None;
                if !outcome.is_warning() {
                    outcome = Outcome::Warning {
                        code: 247,
                        message: format!("Invalid {name} value '{v}' ({min} to {max} only), ignoring"),
                    };
                }
            }
        }
    }

    let mut sym = one_d::encode_symbology(&effective, data)?;

    if let Outcome::Warning { code, message } = outcome {
        if req.warn_level == WarnLevel::FailAll {
            // чистая промоция: предупреждение -> эквивалентная ошибка
            return Err(EncodeError::InvalidOption { code, message });
        }
        sym.outcome = Outcome::Warning { code, message };
    }

    Ok(sym)
}
