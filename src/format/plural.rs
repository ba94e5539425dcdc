//! Plural form selection
//!
//! Maps a count to a CLDR-style plural category per language. Locales are
//! matched on their primary subtag, so "ru-RU" uses the Russian rules.

/// Extract the language subtag from a locale ("en-US" -> "en")
pub fn primary_subtag(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Determine the plural form for a count under a locale's rules
pub fn plural_form(locale: &str, count: i32) -> &'static str {
    match primary_subtag(locale) {
        "ru" => {
            // Russian: one, few, many, other
            let abs_count = count.abs();
            let last_digit = abs_count % 10;
            let last_two_digits = abs_count % 100;

            if last_digit == 1 && last_two_digits != 11 {
                "one"
            } else if (2..=4).contains(&last_digit) && !(12..=14).contains(&last_two_digits) {
                "few"
            } else if last_digit == 0
                || (5..=9).contains(&last_digit)
                || (11..=14).contains(&last_two_digits)
            {
                "many"
            } else {
                "other"
            }
        }
        // English rules: one, other
        _ => {
            if count == 1 {
                "one"
            } else {
                "other"
            }
        }
    }
}
