//! Display formatting for prices and areas.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits in threes with `sep`.
pub fn group_thousands(value: u64, sep: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Monthly price label. VND uses dot grouping and the `₫` sign; other
/// currencies keep their ISO code.
pub fn format_price(price: u64, currency: &str) -> String {
    if currency.eq_ignore_ascii_case("VND") {
        format!("{} ₫", group_thousands(price, '.'))
    } else {
        format!("{} {currency}", group_thousands(price, ','))
    }
}

/// Area label in square metres, without a decimal part when whole.
pub fn format_area(area: f64) -> String {
    if area.fract().abs() < f64::EPSILON {
        format!("{area:.0} m²")
    } else {
        format!("{area:.1} m²")
    }
}
