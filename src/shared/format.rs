//! Small text helpers used when projecting records into display rows.

use uuid::Uuid;

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep at most `max` characters (not bytes)
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// `<prefix>_<uuid v7 simple>`
pub fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::now_v7().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("laptop"), "Laptop");
        assert_eq!(capitalize("élite"), "Élite");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("TV"), "TV");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_chars("abc", 40), "abc");
        assert_eq!(truncate_chars("batería dañada", 7), "batería");
        assert_eq!(truncate_chars(&"x".repeat(50), 40).len(), 40);
    }

    #[test]
    fn test_generate_id_is_prefixed_and_unique() {
        let a = generate_id("w");
        let b = generate_id("w");
        assert!(a.starts_with("w_"));
        assert_ne!(a, b);
    }
}
