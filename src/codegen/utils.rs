//! String helpers for entity code generation.
//!
//! The casing transforms split segments on non-alphanumeric boundaries only
//! and never touch characters after a segment's first letter, so `USER`
//! stays `USER` and `parentID` becomes `ParentID`. Case-conversion crates
//! also split on case boundaries and lowercase segment remainders, which
//! would rename such columns.

/// Split into alphanumeric segments, dropping separator runs
fn split_segments(s: &str) -> Vec<&str> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|seg| !seg.is_empty())
        .collect()
}

/// Uppercase the first character, leave the rest of the segment unchanged
fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a string to PascalCase: `order_items` -> `OrderItems`
pub fn to_pascal_case(s: &str) -> String {
    split_segments(s).into_iter().map(upper_first).collect()
}

/// Convert a string to camelCase: `user_id` -> `userId`
pub fn to_camel_case(s: &str) -> String {
    let mut segments = split_segments(s).into_iter();
    let mut out = String::new();
    if let Some(first) = segments.next() {
        out.push_str(&first.to_lowercase());
    }
    for segment in segments {
        out.push_str(&upper_first(segment));
    }
    out
}

/// Convert a string to CONST_CASE: `user_id` -> `USER_ID`
pub fn to_const_case(s: &str) -> String {
    split_segments(s)
        .into_iter()
        .map(str::to_uppercase)
        .collect::<Vec<String>>()
        .join("_")
}

/// Escape a string for use inside a single-quoted PHP string literal
pub fn escape_php_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("order_items"), "OrderItems");
        assert_eq!(to_pascal_case("movies"), "Movies");
        assert_eq!(to_pascal_case("db-entity"), "DbEntity");
    }

    #[test]
    fn test_pascal_case_keeps_segment_interior() {
        // Only the first letter of each segment changes
        assert_eq!(to_pascal_case("USER"), "USER");
        assert_eq!(to_pascal_case("parentID"), "ParentID");
        assert_eq!(to_pascal_case("myTable"), "MyTable");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_id"), "userId");
        assert_eq!(to_camel_case("created_at"), "createdAt");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("date_of_birth"), "dateOfBirth");
    }

    #[test]
    fn test_to_const_case() {
        assert_eq!(to_const_case("user_id"), "USER_ID");
        assert_eq!(to_const_case("name"), "NAME");
        assert_eq!(to_const_case("eid_created"), "EID_CREATED");
        assert_eq!(to_const_case("user__id"), "USER_ID");
    }

    #[test]
    fn test_transforms_on_empty_input() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_const_case(""), "");
    }

    #[test]
    fn test_escape_php_string() {
        assert_eq!(escape_php_string("user_id"), "user_id");
        assert_eq!(escape_php_string("o'brien"), "o\\'brien");
        assert_eq!(escape_php_string("a\\b"), "a\\\\b");
        assert_eq!(escape_php_string("`user`"), "`user`");
    }
}
