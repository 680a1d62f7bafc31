//! Display Formatting
//!
//! Text helpers shared by the product cards and the comparison table.

/// Characters of description shown in the comparison table
pub const EXCERPT_CHARS: usize = 80;

/// US dollars with thousands separators, e.g. `$1,999.99`
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// First `EXCERPT_CHARS` characters followed by `...`, cut or not
pub fn excerpt(text: &str) -> String {
    let end = text
        .char_indices()
        .nth(EXCERPT_CHARS)
        .map_or(text.len(), |(idx, _)| idx);
    format!("{}...", &text[..end])
}
