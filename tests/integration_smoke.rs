// tests/integration_smoke.rs
//
// Интеграционные «дымовые» тесты верхнего уровня: сквозной конвейер
// запрос -> валидация -> кодирование -> HRT, включая граничные случаи
// длины и стабильные тексты ошибок.

use ultrabar::normalize;
use ultrabar::prelude::*;

fn plain(symbology: Symbology, data: &[u8]) -> Result<EncodedSymbol, EncodeError> {
    encode(symbology, None, None, None, 0, InputMode::default(), data)
}

#[test]
fn c25_standard_at_maximum_length() {
    let data = vec![b'1'; 112];
    let sym = plain(Symbology::C25Standard, &data).unwrap();
    assert_eq!(sym.row_count(), 1);
    assert_eq!(sym.width, 1137);
    assert_eq!(sym.outcome, Outcome::Success);
}

#[test]
fn c25_standard_over_maximum_length() {
    let data = vec![b'1'; 113];
    let err = plain(Symbology::C25Standard, &data).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error 301: Input length 113 too long (maximum 112)"
    );
}

#[test]
fn every_family_member_rejects_max_plus_one() {
    let cases = [
        (Symbology::C25Standard, 112, 301),
        (Symbology::C25Inter, 125, 309),
        (Symbology::C25Iata, 80, 305),
        (Symbology::C25Logic, 113, 307),
        (Symbology::C25Ind, 79, 303),
        (Symbology::Dpleit, 13, 313),
        (Symbology::Dpident, 11, 315),
        (Symbology::Itf14, 14, 311),
    ];
    for (symbology, max, code) in cases {
        // у ITF-14 14-я цифра — контрольная, поэтому на максимум
        // подаётся корректный GTIN-14
        let at_max: Vec<u8> = if symbology == Symbology::Itf14 {
            b"12345678901231".to_vec()
        } else {
            vec![b'1'; max]
        };
        assert!(plain(symbology, &at_max).is_ok(), "{symbology:?} at max");
        let err = plain(symbology, &vec![b'1'; max + 1]).unwrap_err();
        assert_eq!(err.code(), code, "{symbology:?} over max");
        assert!(
            err.to_string().contains(&format!("(maximum {max})")),
            "{symbology:?} message cites maximum"
        );
    }
}

#[test]
fn invalid_character_cites_position_and_requirement() {
    let err = plain(Symbology::C25Standard, b"1234x6789").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error 302: Invalid character at position 5 in input (digits only)"
    );
}

#[test]
fn interleaved_odd_input_gains_leading_zero() {
    let sym = plain(Symbology::C25Inter, b"123456789").unwrap();
    assert_eq!(sym.hrt, "0123456789");

    // та же строка с запрошенной контрольной цифрой уже чётная
    let sym = encode(
        Symbology::C25Inter,
        None,
        Some(1),
        None,
        0,
        InputMode::default(),
        b"123456789",
    )
    .unwrap();
    assert_eq!(sym.hrt, "1234567895");
}

#[test]
fn interleaved_parity_property() {
    // кодирование нечётной строки без контрольной цифры эквивалентно
    // кодированию строки с ведущим нулём
    let a = ultrabar::encode_simple(Symbology::C25Inter, b"98765").unwrap();
    let b = ultrabar::encode_simple(Symbology::C25Inter, b"098765").unwrap();
    assert_eq!(a, b);
}

#[test]
fn itf14_computes_and_validates_check_digit() {
    let sym = plain(Symbology::Itf14, b"1234567890123").unwrap();
    assert_eq!(sym.check_digit, Some('1'));
    assert_eq!(sym.row_count(), 1);
    assert_eq!(sym.width, 135);

    let err = plain(Symbology::Itf14, b"12345678901234").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error 850: Invalid check digit '4', expecting '1'"
    );
}

#[test]
fn itf14_ai_prefix_is_stripped_without_penalty() {
    let bare = plain(Symbology::Itf14, b"12345678901231").unwrap();
    for prefixed in [
        b"[01]12345678901231".as_slice(),
        b"(01)12345678901231",
        b"0112345678901231",
    ] {
        assert_eq!(plain(Symbology::Itf14, prefixed).unwrap(), bare);
    }
}

#[test]
fn leitcode_and_identcode_hrt_separators() {
    let sym = plain(Symbology::Dpleit, b"5082300702800").unwrap();
    assert_eq!(sym.hrt, "50823.007.028.005");
    // разделители — косметика: машинное содержимое без них
    assert_eq!(sym.content(), "50823007028005");

    let sym = plain(Symbology::Dpident, b"39601313414").unwrap();
    assert_eq!(sym.hrt, "39.60 1.313.134 0");
    assert_eq!(sym.content(), "396013134140");
}

#[test]
fn hidden_check_digit_stays_in_content() {
    let sym = encode(
        Symbology::C25Standard,
        None,
        Some(2),
        None,
        0,
        InputMode::default(),
        b"123456789",
    )
    .unwrap();
    assert_eq!(sym.hrt, "123456789");
    assert_eq!(sym.content(), "1234567895");
    assert_eq!(sym.check_digit, Some('5'));
}

#[test]
fn check_digit_round_trip_for_the_family() {
    // контрольная цифра, выведенная заново из закодированной
    // последовательности, совпадает с добавленной в символ
    for symbology in [
        Symbology::C25Standard,
        Symbology::C25Inter,
        Symbology::C25Iata,
        Symbology::C25Logic,
        Symbology::C25Ind,
    ] {
        let sym = encode(
            symbology,
            None,
            Some(1),
            None,
            0,
            InputMode::default(),
            b"87654321",
        )
        .unwrap();
        let digits = sym.content().as_bytes();
        let expected = sym.check_digit.unwrap();
        assert_eq!(char::from(digits[digits.len() - 1]), expected, "{symbology:?}");
    }
}

#[test]
fn idempotence_across_the_family() {
    for symbology in [
        Symbology::C25Standard,
        Symbology::C25Inter,
        Symbology::C25Iata,
        Symbology::C25Logic,
        Symbology::C25Ind,
        Symbology::Dpleit,
        Symbology::Dpident,
        Symbology::Itf14,
    ] {
        let a = plain(symbology, b"87654321").unwrap();
        let b = plain(symbology, b"87654321").unwrap();
        assert_eq!(a, b, "{symbology:?}");
    }
}

#[test]
fn single_row_symbols_start_and_end_with_a_bar() {
    for symbology in [
        Symbology::C25Standard,
        Symbology::C25Inter,
        Symbology::Itf14,
        Symbology::Dpleit,
    ] {
        let sym = plain(symbology, b"12345").unwrap();
        let row = &sym.rows[0];
        // нечётное число ширин: начинается и заканчивается штрихом
        assert_eq!(row.len() % 2, 1, "{symbology:?}");
        assert_eq!(sym.width, row.iter().map(|&w| u32::from(w)).sum(), "{symbology:?}");
    }
}

#[test]
fn byte_protocol_front_end_drives_the_pipeline() {
    // [режим 0][опция 2 = 1][данные] через нормализатор
    let req = normalize::request_from_bytes(
        Symbology::C25Standard,
        BaseMode::Data,
        &[0x00, 1, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9'],
        false,
    )
    .unwrap();
    let sym = encode_request(&req).unwrap();
    assert_eq!(sym.hrt, "1234567895");

    // байт опции 255 — «по умолчанию»: контрольной цифры нет
    let req = normalize::request_from_bytes(
        Symbology::C25Standard,
        BaseMode::Data,
        &[0x00, 255, b'1', b'2', b'3'],
        false,
    )
    .unwrap();
    let sym = encode_request(&req).unwrap();
    assert_eq!(sym.hrt, "123");
}

#[test]
fn escape_processing_end_to_end() {
    let req = EncodeRequest::new(Symbology::C25Inter, b"\\x36\\x30\\x32\\x30\\x30\\x33".as_slice())
        .with_input_mode(InputMode::new(BaseMode::Data, ModeFlags::ESCAPE));
    let sym = encode_request(&req).unwrap();
    assert_eq!(sym.hrt, "602003");
    assert_eq!(sym.width, 63);
}

#[test]
fn warn_promotion_is_pure_post_processing() {
    let req = EncodeRequest::new(Symbology::C25Iata, b"1234".as_slice()).with_option_2(9);
    let sym = encode_request(&req).unwrap();
    assert!(sym.outcome.is_warning());

    let err = encode_request(&req.with_warn_level(WarnLevel::FailAll)).unwrap_err();
    assert_eq!(err.code(), 247);
}
