//! Code 2 of 5: Standard (Matrix), Industrial, IATA и Data Logic.
//!
//! Все четыре варианта устроены одинаково: необязательная контрольная
//! цифра GS1, поцифровой паттерн из таблицы, старт/стоп своей символики.
//! Различаются только таблицей ширин и старт/стопом.

use crate::core::types::{EncodeRequest, EncodedSymbol};
use crate::hrt;
use crate::one_d::{expand, gs1_check_digit};

// Паттерны — 6 ширин на цифру, сумма 10.
const C25_MATRIX_TABLE: [&str; 10] = [
    "113311", "311131", "131131", "331111", "113131",
    "313111", "133111", "111331", "311311", "131311",
];

const C25_MATRIX_START_STOP: [&str; 2] = ["411111", "41111"];

// Industrial: информация только в штрихах, 10 ширин на цифру.
const C25_INDUST_TABLE: [&str; 10] = [
    "1111313111", "3111111131", "1131111131", "3131111111", "1111311131",
    "3111311111", "1131311111", "1111113131", "3111113111", "1131113111",
];

const C25_INDUST_START_STOP: [&str; 2] = ["313111", "31113"];

const C25_IATA_LOGIC_START_STOP: [&str; 2] = ["1111", "311"];

/// Общий ход для всей четвёрки.
fn c25_common(
    req: &EncodeRequest,
    data: &[u8],
    table: &[&str; 10],
    start_stop: &[&str; 2],
) -> EncodedSymbol {
    let have_checkdigit = matches!(req.option_2, Some(1) | Some(2));

    let mut temp: Vec<u8> = data.to_vec();
    let mut check_digit = None;
    if have_checkdigit {
        let c = gs1_check_digit(&temp);
        temp.push(c);
        check_digit = Some(char::from(c));
    }

    let mut dest = String::with_capacity(start_stop[0].len() + temp.len() * 10 + start_stop[1].len());
    dest.push_str(start_stop[0]);
    for &d in &temp {
        dest.push_str(table[usize::from(d - b'0')]);
    }
    dest.push_str(start_stop[1]);

    let digits = String::from_utf8_lossy(&temp).into_owned();
    let hide = req.option_2 == Some(2);
    let text = hrt::plain(&digits, hide && check_digit.is_some());

    let mut sym = EncodedSymbol::single_row(req.symbology, expand(&dest), digits).with_hrt(text);
    if let Some(c) = check_digit {
        sym = sym.with_check_digit(c);
    }
    sym
}

/// Code 2 of 5 Standard (Matrix).
pub(super) fn matrix(req: &EncodeRequest, data: &[u8]) -> EncodedSymbol {
    c25_common(req, data, &C25_MATRIX_TABLE, &C25_MATRIX_START_STOP)
}

/// Code 2 of 5 Industrial.
pub(super) fn industrial(req: &EncodeRequest, data: &[u8]) -> EncodedSymbol {
    c25_common(req, data, &C25_INDUST_TABLE, &C25_INDUST_START_STOP)
}

/// Code 2 of 5 IATA: таблица Industrial, лёгкий старт/стоп.
pub(super) fn iata(req: &EncodeRequest, data: &[u8]) -> EncodedSymbol {
    c25_common(req, data, &C25_INDUST_TABLE, &C25_IATA_LOGIC_START_STOP)
}

/// Code 2 of 5 Data Logic: таблица Matrix, лёгкий старт/стоп.
pub(super) fn data_logic(req: &EncodeRequest, data: &[u8]) -> EncodedSymbol {
    c25_common(req, data, &C25_MATRIX_TABLE, &C25_IATA_LOGIC_START_STOP)
}
