//! Naming transformations shared by every stage of the pipeline.
//!
//! All functions are pure and total. Inflection (plural/singular) is English
//! heuristic: only the last word of `blog_post` or `Blog Post` is inflected,
//! irregular and uncountable nouns come from the tables below, and everything
//! else is delegated to `Inflector`.

use inflector::Inflector;

/// Lower-case every character.
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Human label: words capitalized, underscores become spaces.
///
/// | Input        | Output         |
/// |--------------|----------------|
/// | `created_at` | `Created At`   |
/// | `Product`    | `Product`      |
/// | `BlogPost`   | `Blog Post`    |
pub fn title_case(s: &str) -> String {
    s.to_title_case()
}

/// `UserProfile` → `userProfile`, `blog_posts` → `blogPosts`.
pub fn camel_case(s: &str) -> String {
    s.to_camel_case()
}

/// PascalCase: `blog_post` → `BlogPost`.
pub fn studly_case(s: &str) -> String {
    s.to_pascal_case()
}

/// `(singular, plural)` pairs `Inflector` gets wrong or does not know.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
];

/// Same in both numbers.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "series",
    "sheep",
    "species",
];

pub fn pluralize(word: &str) -> String {
    inflect_last_word(word, |last| {
        IRREGULAR
            .iter()
            .find(|(one, many)| last == *one || last == *many)
            .map(|(_, many)| many.to_string())
            .unwrap_or_else(|| last.to_plural())
    })
}

pub fn singularize(word: &str) -> String {
    inflect_last_word(word, |last| {
        IRREGULAR
            .iter()
            .find(|(one, many)| last == *many || last == *one)
            .map(|(one, _)| one.to_string())
            .unwrap_or_else(|| last.to_singular())
    })
}

/// Apply `inflect` to the lower-cased last word of `word`, keeping the
/// prefix and the capitalisation of the word's first letter.
fn inflect_last_word(word: &str, inflect: impl Fn(&str) -> String) -> String {
    let start = word
        .rfind(|c: char| !c.is_alphanumeric())
        .map_or(0, |idx| idx + 1);
    let (head, last) = word.split_at(start);
    if last.is_empty() {
        return word.to_string();
    }

    let lowered = last.to_lowercase();
    if UNCOUNTABLE.contains(&lowered.as_str()) {
        return word.to_string();
    }

    let inflected = inflect(&lowered);
    let capitalised = last.chars().next().is_some_and(char::is_uppercase);
    let inflected = match inflected.chars().next() {
        Some(first) if capitalised => first
            .to_uppercase()
            .chain(inflected.chars().skip(1))
            .collect(),
        _ => inflected,
    };
    format!("{head}{inflected}")
}

/// Truncate `s` at the rightmost occurrence of `suffix`.
///
/// Returns the input unchanged when `suffix` does not occur (or is empty).
pub fn strip_suffix(s: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return s.to_string();
    }
    match s.rfind(suffix) {
        Some(idx) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_replaces_underscores() {
        assert_eq!(title_case("created_at"), "Created At");
        assert_eq!(title_case("email"), "Email");
        assert_eq!(title_case("Product"), "Product");
    }

    #[test]
    fn camel_case_from_pascal_and_snake() {
        assert_eq!(camel_case("Product"), "product");
        assert_eq!(camel_case("UserProfile"), "userProfile");
        assert_eq!(camel_case("blog_posts"), "blogPosts");
    }

    #[test]
    fn studly_case_from_snake() {
        assert_eq!(studly_case("blog_post"), "BlogPost");
        assert_eq!(studly_case("category"), "Category");
    }

    #[test]
    fn pluralize_regular_and_y_endings() {
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("author"), "authors");
        assert_eq!(pluralize("category"), "categories");
    }

    #[test]
    fn singularize_inverts_simple_plurals() {
        for word in ["post", "author", "category", "product", "user"] {
            assert_eq!(singularize(&pluralize(word)), word, "round trip for {word}");
        }
    }

    #[test]
    fn irregular_nouns_use_the_table() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(singularize("people"), "person");
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("people"), "people");
    }

    #[test]
    fn uncountable_nouns_are_left_alone() {
        assert_eq!(singularize("data"), "data");
        assert_eq!(pluralize("news"), "news");
        assert_eq!(pluralize("sensor_data"), "sensor_data");
    }

    #[test]
    fn only_the_last_word_is_inflected() {
        assert_eq!(pluralize("blog_post"), "blog_posts");
        assert_eq!(pluralize("sales_person"), "sales_people");
        assert_eq!(pluralize("Blog Post"), "Blog Posts");
        assert_eq!(singularize("order_items"), "order_item");
    }

    #[test]
    fn strip_suffix_only_when_present() {
        assert_eq!(strip_suffix("category_id", "_id"), "category");
        assert_eq!(strip_suffix("name", "_id"), "name");
        assert_eq!(strip_suffix("name", ""), "name");
    }

    #[test]
    fn strip_suffix_uses_rightmost_occurrence() {
        assert_eq!(strip_suffix("parent_id_id", "_id"), "parent_id");
    }

    #[test]
    fn lower_is_plain_lowercase() {
        assert_eq!(lower("BlogPost"), "blogpost");
    }
}
