/// Convert snake_case, kebab-case or dotted words to PascalCase.
///
/// Used to derive a service name from a schema file stem. Input that already
/// looks like PascalCase is returned unchanged.
///
/// # Examples
/// ```
/// use balgen_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("star_wars"), "StarWars");
/// assert_eq!(to_pascal_case("star-wars.schema"), "StarWarsSchema");
/// assert_eq!(to_pascal_case("StarWars"), "StarWars");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.' | ' ')
    }

    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    let has_lowercase = s.chars().any(|c| c.is_ascii_lowercase());
    if starts_uppercase && has_lowercase && !s.chars().any(is_separator) {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Whether `s` is a plain identifier: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// # Examples
/// ```
/// use balgen_core::utils::is_identifier;
/// assert!(is_identifier("user_id"));
/// assert!(!is_identifier("9lives"));
/// assert!(!is_identifier("my-service"));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
