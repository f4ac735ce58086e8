//! Label helpers.

/// Turns a code-style identifier into a human-readable label.
///
/// The first character is uppercased; after it, hyphens become spaces and
/// every ASCII uppercase letter gets a space in front of it.
///
/// # Examples
///
/// ```
/// use cms_fields_core::titleize;
///
/// assert_eq!(titleize("my-fancyField"), "My fancy Field");
/// assert_eq!(titleize("home"), "Home");
/// assert_eq!(titleize(""), "");
/// ```
pub fn titleize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().collect();
    for c in chars {
        match c {
            '-' => out.push(' '),
            'A'..='Z' => {
                out.push(' ');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Naive plural-to-singular: drops the final character.
pub(crate) fn singularize(word: &str) -> String {
    let mut out = word.to_string();
    out.pop();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titleize_spaces_camel_case() {
        assert_eq!(titleize("heroImage"), "Hero Image");
        assert_eq!(titleize("seoMetaTitle"), "Seo Meta Title");
    }

    #[test]
    fn test_titleize_hyphens() {
        assert_eq!(titleize("call-to-action"), "Call to action");
    }

    #[test]
    fn test_titleize_leading_uppercase_not_spaced() {
        assert_eq!(titleize("About"), "About");
        assert_eq!(titleize("URL"), "U R L");
    }

    #[test]
    fn test_titleize_keeps_digits_and_underscores() {
        assert_eq!(titleize("step_2"), "Step_2");
    }

    #[test]
    fn test_titleize_unicode_first_char() {
        assert_eq!(titleize("été"), "Été");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("posts"), "post");
        assert_eq!(singularize("categories"), "categorie");
        assert_eq!(singularize("x"), "");
        assert_eq!(singularize(""), "");
        assert_eq!(singularize("cafés"), "café");
    }
}
