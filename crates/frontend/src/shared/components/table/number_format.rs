//! Утилиты форматирования чисел для таблиц и полей ввода
//!
//! Thousands are separated with `,`. `parse_number` accepts anything these
//! functions produce, plus space and NBSP group separators typed by hand.

/// Вставляет разделители каждые 3 цифры целой части (знак сохраняется)
fn group_integer(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };
    let mut result = String::with_capacity(integer_part.len() + digits.len() / 3);
    result.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

fn group_formatted(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_integer(integer), fraction),
        None => group_integer(formatted),
    }
}

/// Форматирует число с разделителем тысяч и указанным количеством знаков после точки
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    group_formatted(&format!("{:.prec$}", value, prec = decimals as usize))
}

/// Денежное значение: 2 знака после точки
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Число без потери знаков: целые без дробной части, остальные как есть
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format_number_int(value)
    } else {
        group_formatted(&value.to_string())
    }
}

/// Разбирает ввод пользователя, убирая разделители групп (`,`, пробел, NBSP).
/// Пустая строка и не-числа дают `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned = strip_group_separators(text);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Целое без потери точности: `"9,007,199,254,740,993"` остаётся точным.
/// Дробные и не помещающиеся в `i64` значения дают `None`.
pub fn parse_integer(text: &str) -> Option<i64> {
    strip_group_separators(text).parse::<i64>().ok()
}

fn strip_group_separators(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{00a0}' | '\u{202f}'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_integer_is_exact() {
        assert_eq!(parse_integer("1,200"), Some(1200));
        assert_eq!(parse_integer("9,007,199,254,740,993"), Some(9_007_199_254_740_993));
        assert_eq!(parse_integer("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_integer("9223372036854775808"), None);
        assert_eq!(parse_integer("-12 000"), Some(-12_000));
        assert_eq!(parse_integer("2.5"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-123456.0, 0), "-123,456");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1,000"), Some(1000.0));
        assert_eq!(parse_number(" 1 234,5 "), Some(12345.0));
        assert_eq!(parse_number("1\u{00a0}234.5"), Some(1234.5));
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("-12"), Some(-12.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number(" , "), None);
        assert_eq!(parse_number("12a"), None);
        assert_eq!(parse_number("inf"), None);
    }

    proptest! {
        #[test]
        fn prop_integer_roundtrip(n in -1_000_000_000_000i64..1_000_000_000_000i64) {
            let text = format_number_int(n as f64);
            prop_assert_eq!(parse_number(&text), Some(n as f64));
        }

        #[test]
        fn prop_parse_is_idempotent(cents in -100_000_000_000i64..100_000_000_000i64) {
            let value = cents as f64 / 100.0;
            let once = parse_number(&format_money(value)).unwrap();
            let twice = parse_number(&format_money(once)).unwrap();
            prop_assert_eq!(once, twice);
            prop_assert!((once - value).abs() < 0.005);
        }
    }
}
