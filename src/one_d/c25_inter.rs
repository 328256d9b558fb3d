//! Code 2 of 5 Interleaved и его производные: ITF-14, Deutsche Post
//! Leitcode и Identcode.
//!
//! Цифры пакуются парами: первая цифра пары уходит в штрихи, вторая — в
//! пробелы, их ширины перемежаются. Отсюда требование чётного числа цифр
//! после контрольной; нечётный хвост добивается ведущим нулём — это шаг
//! форматирования, а не ошибка.

use crate::core::types::{EncodeError, EncodeRequest, EncodedSymbol};
use crate::hrt;
use crate::one_d::{dp_check_digit, expand, gs1_check_digit};

// 5 ширин на цифру, сумма 9 (wide = 3).
const C25_INTER_TABLE: [&str; 10] = [
    "11331", "31113", "13113", "33111", "11313",
    "31311", "13311", "11133", "31131", "13131",
];

/// Строка модулей для чётной цифровой последовательности:
/// старт 1111, пары штрихи/пробелы вперемежку, стоп 311.
fn inter_row(digits: &[u8]) -> Vec<u8> {
    let mut dest = String::with_capacity(4 + digits.len() * 5 + 3);
    dest.push_str("1111");
    for pair in digits.chunks_exact(2) {
        let bars = C25_INTER_TABLE[usize::from(pair[0] - b'0')].as_bytes();
        let spaces = C25_INTER_TABLE[usize::from(pair[1] - b'0')].as_bytes();
        for j in 0..5 {
            dest.push(char::from(bars[j]));
            dest.push(char::from(spaces[j]));
        }
    }
    dest.push_str("311");
    expand(&dest)
}

/// Code 2 of 5 Interleaved.
pub(super) fn interleaved(req: &EncodeRequest, data: &[u8]) -> EncodedSymbol {
    let have_checkdigit = matches!(req.option_2, Some(1) | Some(2));

    let mut temp: Vec<u8> = Vec::with_capacity(data.len() + 2);
    // нечётные данные без контрольной цифры (или чётные с ней)
    // получают ведущий ноль
    if (data.len() & 1 == 1) != have_checkdigit {
        temp.push(b'0');
    }
    temp.extend_from_slice(data);

    let mut check_digit = None;
    if have_checkdigit {
        let c = gs1_check_digit(&temp);
        temp.push(c);
        check_digit = Some(char::from(c));
    }

    let digits = String::from_utf8_lossy(&temp).into_owned();
    let hide = req.option_2 == Some(2);
    let text = hrt::plain(&digits, hide && check_digit.is_some());

    let mut sym = EncodedSymbol::single_row(req.symbology, inter_row(&temp), digits).with_hrt(text);
    if let Some(c) = check_digit {
        sym = sym.with_check_digit(c);
    }
    sym
}

/// Бюджет цифр ITF-14: 13 данных + контрольная.
const ITF14_BUDGET: usize = 14;

/// Срезать опциональный GS1-префикс AI 01 (`01`, `[01]`, `(01)`), если
/// остаток всё ещё укладывается в бюджет цифр ITF-14. Голая форма `01`
/// срезается только когда без среза бюджет превышен.
pub(crate) fn strip_ai01(data: &[u8]) -> &[u8] {
    for prefix in [b"[01]".as_slice(), b"(01)".as_slice()] {
        if let Some(rest) = data.strip_prefix(prefix) {
            if !rest.is_empty() && rest.len() <= ITF14_BUDGET {
                return rest;
            }
        }
    }
    if data.len() > ITF14_BUDGET && data.len() <= ITF14_BUDGET + 2 {
        if let Some(rest) = data.strip_prefix(b"01") {
            return rest;
        }
    }
    data
}

/// ITF-14: GTIN-14 поверх Interleaved. Контрольная цифра обязательна:
/// либо вычисляется по 13 цифрам, либо переданная 14-я сверяется.
pub(super) fn itf14(req: &EncodeRequest, data: &[u8]) -> Result<EncodedSymbol, EncodeError> {
    let (payload, supplied) = if data.len() == ITF14_BUDGET {
        (&data[..13], Some(data[13]))
    } else {
        (data, None)
    };

    let mut local = vec![b'0'; 13 - payload.len()];
    local.extend_from_slice(payload);

    // та же схема, что у EAN-13
    let check = gs1_check_digit(&local);
    if let Some(found) = supplied {
        if found != check {
            return Err(EncodeError::InvalidCheckDigit {
                code: 850,
                found: char::from(found),
                expected: char::from(check),
            });
        }
    }
    local.push(check);

    let digits = String::from_utf8_lossy(&local).into_owned();
    let sym = EncodedSymbol::single_row(req.symbology, inter_row(&local), digits.clone())
        .with_check_digit(char::from(check))
        .with_hrt(digits);
    Ok(sym)
}

/// Deutsche Post Leitcode: 13 цифр (добиваются нулями слева) плюс
/// контрольная цифра Deutsche Post.
pub(super) fn dpleit(req: &EncodeRequest, data: &[u8]) -> EncodedSymbol {
    let mut local = vec![b'0'; 13 - data.len()];
    local.extend_from_slice(data);

    let check = dp_check_digit(&local);
    local.push(check);

    let digits = String::from_utf8_lossy(&local).into_owned();
    let text = hrt::leitcode(&digits);
    EncodedSymbol::single_row(req.symbology, inter_row(&local), digits)
        .with_check_digit(char::from(check))
        .with_hrt(text)
}

/// Deutsche Post Identcode: 11 цифр плюс контрольная Deutsche Post.
pub(super) fn dpident(req: &EncodeRequest, data: &[u8]) -> EncodedSymbol {
    let mut local = vec![b'0'; 11 - data.len()];
    local.extend_from_slice(data);

    let check = dp_check_digit(&local);
    local.push(check);

    let digits = String::from_utf8_lossy(&local).into_owned();
    let text = hrt::identcode(&digits);
    EncodedSymbol::single_row(req.symbology, inter_row(&local), digits)
        .with_check_digit(char::from(check))
        .with_hrt(text)
}
