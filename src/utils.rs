pub fn apply_to_first<F>(string: &str, func: F) -> String
where
    F: Fn(char) -> String,
{
    let mut chars = string.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => func(first) + chars.as_str(),
    }
}

/// Uppercases the first char, leaving the rest untouched.
pub fn capitalize_first(string: &str) -> String {
    apply_to_first(string, |c| c.to_uppercase().collect())
}

pub fn starts_uppercase(string: &str) -> bool {
    string.chars().next().map_or(false, char::is_uppercase)
}

pub fn starts_with_vowel(string: &str) -> bool {
    string
        .chars()
        .next()
        .map_or(false, |c| "aeiou".contains(c.to_ascii_lowercase()))
}
