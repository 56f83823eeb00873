//! Shared utility functions for code generation.

/// Split an identifier into words.
///
/// Separators are any non-alphanumeric characters. Case changes start a new
/// word (`createdAt` -> `created`, `At`), and an acronym ends before its
/// last capital when a lowercase letter follows (`APIKey` -> `API`, `Key`).
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // `current` is non-empty only if chars[i - 1] was pushed to it
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Convert a string to PascalCase (e.g., "vector_store" -> "VectorStore")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "created_at" -> "createdAt")
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            if i == 0 {
                w.to_lowercase()
            } else {
                capitalize(w)
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "createdAt" -> "created_at")
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert a string to kebab-case (e.g., "VectorStore" -> "vector-store")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("createdAt"), vec!["created", "At"]);
        assert_eq!(split_words("VectorStore"), vec!["Vector", "Store"]);
        assert_eq!(split_words("file_ids"), vec!["file", "ids"]);
        assert_eq!(split_words("hello-world"), vec!["hello", "world"]);
        assert_eq!(split_words("APIKey"), vec!["API", "Key"]);
        assert_eq!(split_words("v2Beta"), vec!["v2", "Beta"]);
        assert!(split_words("").is_empty());
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("createdAt"), "CreatedAt");
        assert_eq!(to_pascal_case("apiKey"), "ApiKey");
        assert_eq!(to_pascal_case("id"), "Id");
        assert_eq!(to_pascal_case("VectorStore"), "VectorStore");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("VectorStore"), "vectorStore");
        assert_eq!(to_camel_case("created_at"), "createdAt");
        assert_eq!(to_camel_case("user-id"), "userId");
        assert_eq!(to_camel_case("fileIds"), "fileIds");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("createdAt"), "created_at");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("APIKey"), "api_key");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("VectorStore"), "vector-store");
        assert_eq!(to_kebab_case("hello_world"), "hello-world");
    }

    #[test]
    fn test_round_trip_between_cases() {
        for name in ["createdAt", "fileCountCancelled", "usageBytes", "name"] {
            assert_eq!(to_camel_case(&to_snake_case(name)), name);
        }
    }
}
