// src/domain/format.rs

/// Groups digits with `.` the way pt-BR writes integers: 1234567 -> "1.234.567".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// "R$ 1.234.567"
pub fn brl(value: u64) -> String {
    format!("R$ {}", group_thousands(value))
}

/// Value per m², rounded to whole currency units.
pub fn per_m2(value: f64) -> String {
    format!("R$ {}/m²", group_thousands(value.max(0.0).round() as u64))
}

pub fn area(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}m²", group_thousands(value as u64))
    } else {
        format!("{value:.1}m²").replace('.', ",")
    }
}
