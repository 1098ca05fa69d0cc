//! Attendee name handling

/// Trim and capitalise a first name
///
/// The first character is upper-cased and the rest lower-cased, so
/// `"aLLISON"` becomes `"Allison"`. A missing name becomes the empty string.
pub fn capitalize_name(raw: Option<&str>) -> String {
    let mut chars = raw.unwrap_or("").trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// File name stem for a letter: the name without whitespace, lower-cased
pub fn letter_file_stem(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
