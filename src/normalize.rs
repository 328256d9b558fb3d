//! Нормализация «сырого» байтового входа в запрос.
//!
//! Внешний байт-протокол: опциональный ведущий байт режима, затем по байту
//! на каждую применимую опцию 1/2/3, затем байт ECI (если символика его
//! поддерживает), остаток — данные. Байт опции 255 всегда означает
//! «по умолчанию»; диапазон из двух значений выбирается младшим битом
//! (нечётный байт — нижнее значение); иначе байт зажимается в диапазон.

use crate::core::types::{BaseMode, EncodeError, EncodeRequest, InputMode, ModeFlags, Symbology, WarnLevel};
use crate::registry;

/// Приведение зарезервированных/некруговых значений ECI к допустимым:
/// 1 -> 899 (8-битные бинарные данные), всё выше 35 кроме 170 -> 35
/// (UTF-32LE), 2/15/19 -> следующее целое (зарезервированы).
#[inline]
pub fn remap_eci(value: u8) -> u32 {
    let v = u32::from(value);
    match v {
        1 => 899,
        2 | 15 | 19 => v + 1,
        v if v > 35 && v != 170 => 35,
        v => v,
    }
}

/// Разбор одного байта опции по соглашениям реестра.
#[inline]
fn resolve_option(byte: u8, min: i32, max: i32) -> Option<i32> {
    if byte == 255 {
        // 255 — всегда «по умолчанию», поверх любых соглашений
        return None;
    }
    if min + 1 == max {
        // диапазон из двух значений: выбор младшим битом
        Some(if byte & 1 == 1 { min } else { max })
    } else {
        Some(i32::from(byte).clamp(min, max))
    }
}

/// Собрать `EncodeRequest` из сырых байтов по протоколу реестра.
///
/// Базовый режим (Data/Unicode/GS1) задаёт вызывающий; байт режима несёт
/// только флаги (сдвинут на 3 бита влево, как во внешнем протоколе).
/// `no_eci` подавляет потребление байта ECI.
pub fn request_from_bytes(
    symbology: Symbology,
    base: BaseMode,
    bytes: &[u8],
    no_eci: bool,
) -> Result<EncodeRequest, EncodeError> {
    let desc = registry::descriptor(symbology);

    let mut remaining = bytes.len();
    if remaining < desc.len_min {
        return Err(EncodeError::TooShort {
            code: desc.error_base,
            length: remaining,
            min: desc.len_min,
        });
    }

    let mut pos = 0usize;

    let mut flags = ModeFlags::empty();
    if remaining > desc.len_min {
        flags = ModeFlags::from_bits_truncate(u32::from(bytes[pos]) << 3);
        pos += 1;
        remaining -= 1;
    }

    let mut options: [Option<i32>; 3] = [None, None, None];
    let ranges = [desc.option_1, desc.option_2, desc.option_3];
    for (slot, range) in ranges.iter().enumerate() {
        if remaining > desc.len_min {
            if let Some((min, max)) = *range {
                options[slot] = resolve_option(bytes[pos], min, max);
                pos += 1;
                remaining -= 1;
            }
        }
    }

    let mut eci = 0u32;
    if !no_eci && desc.eci && remaining > desc.len_min {
        eci = remap_eci(bytes[pos]);
        pos += 1;
        remaining -= 1;
    }

    Ok(EncodeRequest {
        symbology,
        input_mode: InputMode::new(base, flags),
        option_1: options[0],
        option_2: options[1],
        option_3: options[2],
        eci,
        warn_level: WarnLevel::Default,
        data: bytes[pos..].to_vec(),
    })
}
