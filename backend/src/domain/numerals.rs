//! Bengali numeral rendering for storefront labels.

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Render `value` with Bengali digits.
///
/// # Examples
/// ```
/// use storefront::domain::to_bengali_digits;
///
/// assert_eq!(to_bengali_digits(2024), "২০২৪");
/// ```
#[must_use]
pub fn to_bengali_digits(value: usize) -> String {
    value
        .to_string()
        .chars()
        .map(|ch| {
            ch.to_digit(10)
                .and_then(|digit| BENGALI_DIGITS.get(digit as usize).copied())
                .unwrap_or(ch)
        })
        .collect()
}

/// Lesson count label shown on course cards ("N টি ক্লাস").
#[must_use]
pub fn lesson_count_label(count: usize) -> String {
    format!("{} টি ক্লাস", to_bengali_digits(count))
}
