//! Name derivations shared by the view, route and language artifacts.

use convert_case::{Case, Casing};
use regex_lite::Regex;

use crate::error::{CraftError, Result};

/// Reject model names that cannot become a PHP variable or a file name.
pub fn validate_model_name(name: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("model name pattern is valid");
    if re.is_match(name) {
        Ok(())
    } else {
        Err(CraftError::InvalidModelName {
            name: name.to_string(),
        })
    }
}

/// Reject language file names that are not a single plain file stem.
pub fn validate_language_file_name(name: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("language file pattern is valid");
    if re.is_match(name) {
        Ok(())
    } else {
        Err(CraftError::InvalidLanguageFileName {
            name: name.to_string(),
        })
    }
}

/// English plural of a single lower- or camel-case word.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(stem) = word.strip_suffix('y') {
        let before = stem.chars().last();
        if matches!(before, Some(c) if !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    if ["s", "sh", "ch", "x", "z"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// `BlogPost` -> `blogPost`
pub fn singular_variable(model_name: &str) -> String {
    model_name.to_case(Case::Camel)
}

/// `BlogPost` -> `blogPosts`
pub fn plural_variable(model_name: &str) -> String {
    pluralize(&singular_variable(model_name))
}

/// `BlogPost` -> `blog_post`
pub fn snake(model_name: &str) -> String {
    model_name.to_case(Case::Snake)
}

/// `BlogPost` -> `blog_posts`
pub fn plural_snake(model_name: &str) -> String {
    pluralize(&snake(model_name))
}

/// `blog_post` -> `Blog Post`
pub fn title(name: &str) -> String {
    name.to_case(Case::Title)
}

/// `BlogPost` -> `Blog Posts`
pub fn plural_title(model_name: &str) -> String {
    title(&plural_snake(model_name))
}

/// `blog_post` -> `BlogPost`
pub fn class_name(model_name: &str) -> String {
    model_name.to_case(Case::Pascal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("post", "posts")]
    #[case("category", "categories")]
    #[case("day", "days")]
    #[case("box", "boxes")]
    #[case("address", "addresses")]
    #[case("branch", "branches")]
    #[case("", "")]
    fn test_pluralize(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(pluralize(word), expected);
    }

    #[rstest]
    #[case("Post", "post", "posts", "post", "posts", "Post")]
    #[case("BlogPost", "blogPost", "blogPosts", "blog_post", "blog_posts", "Blog Post")]
    #[case("category", "category", "categories", "category", "categories", "Category")]
    fn test_model_name_forms(
        #[case] model: &str,
        #[case] singular: &str,
        #[case] plural: &str,
        #[case] snake_form: &str,
        #[case] plural_snake_form: &str,
        #[case] title_form: &str,
    ) {
        assert_eq!(singular_variable(model), singular);
        assert_eq!(plural_variable(model), plural);
        assert_eq!(snake(model), snake_form);
        assert_eq!(plural_snake(model), plural_snake_form);
        assert_eq!(title(model), title_form);
    }

    #[test]
    fn test_plural_title() {
        assert_eq!(plural_title("BlogPost"), "Blog Posts");
        assert_eq!(class_name("blog_post"), "BlogPost");
    }

    #[rstest]
    #[case("Post", true)]
    #[case("blog_post", true)]
    #[case("Post2", true)]
    #[case("2Post", false)]
    #[case("", false)]
    #[case("../etc", false)]
    #[case("Blog Post", false)]
    fn test_validate_model_name(#[case] name: &str, #[case] valid: bool) {
        assert_eq!(validate_model_name(name).is_ok(), valid);
    }

    #[rstest]
    #[case("posts", true)]
    #[case("blog_posts", true)]
    #[case("admin-posts", true)]
    #[case("../../x", false)]
    #[case("lang/posts", false)]
    #[case("posts.php", false)]
    fn test_validate_language_file_name(#[case] name: &str, #[case] valid: bool) {
        assert_eq!(validate_language_file_name(name).is_ok(), valid);
    }
}
