//! Формирование печатного текста (HRT) под штрихами.
//!
//! Правила: без контрольной цифры — данные как есть (с учётом добитых
//! нулей); «показать» — данные плюс контрольная цифра; «скрыть» —
//! контрольная цифра остаётся в штрихах, но не печатается. Leitcode и
//! Identcode вставляют декоративные разделители на стандартных позициях —
//! только косметика, на штрихи не влияет.

/// Данные как есть; при `hide_check` последняя (контрольная) цифра
/// не печатается.
pub fn plain(digits: &str, hide_check: bool) -> String {
    if hide_check {
        let mut s = digits.to_owned();
        s.pop();
        s
    } else {
        digits.to_owned()
    }
}

/// Deutsche Post Leitcode: точки после позиций 4, 7 и 10
/// (14 цифр -> `ddddd.ddd.ddd.ddc`, c — контрольная цифра).
pub fn leitcode(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + 3);
    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        if i == 4 || i == 7 || i == 10 {
            out.push('.');
        }
    }
    out
}

/// Deutsche Post Identcode: точки после позиций 1, 4, 7 и пробелы
/// после позиций 3 и 10 (12 цифр -> `dd.dd d.ddd.ddd c`).
pub fn identcode(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + 5);
    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        if i == 1 || i == 4 || i == 7 {
            out.push('.');
        } else if i == 3 || i == 10 {
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keeps_or_strips_check() {
        assert_eq!(plain("1234567895", false), "1234567895");
        assert_eq!(plain("1234567895", true), "123456789");
    }

    #[test]
    fn leitcode_separators() {
        assert_eq!(leitcode("50823007028005"), "50823.007.028.005");
        assert_eq!(leitcode("00000876543216"), "00000.876.543.216");
    }

    #[test]
    fn identcode_separators() {
        assert_eq!(identcode("396013134140"), "39.60 1.313.134 0");
        assert_eq!(identcode("000876543216"), "00.08 7.654.321 6");
    }
}
