/// A case convention accepted by `#[reflect(rename_all = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    /// `lowercase`
    Lowercase,
    /// `UPPERCASE`
    Uppercase,
    /// `PascalCase`
    PascalCase,
    /// `camelCase`
    CamelCase,
    /// `snake_case`
    SnakeCase,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnakeCase,
    /// `kebab-case`
    KebabCase,
    /// `SCREAMING-KEBAB-CASE`
    ScreamingKebabCase,
}

impl RenameRule {
    pub const VARIANTS: &'static str = "`lowercase`, `UPPERCASE`, `PascalCase`, `camelCase`, \
        `snake_case`, `SCREAMING_SNAKE_CASE`, `kebab-case`, `SCREAMING-KEBAB-CASE`";

    pub fn parse(rule: &str) -> Option<Self> {
        match rule {
            "lowercase" => Some(Self::Lowercase),
            "UPPERCASE" => Some(Self::Uppercase),
            "PascalCase" => Some(Self::PascalCase),
            "camelCase" => Some(Self::CamelCase),
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            "SCREAMING-KEBAB-CASE" => Some(Self::ScreamingKebabCase),
            _ => None,
        }
    }

    /// Renames a field (`snake_case`) or variant (`PascalCase`) identifier.
    pub fn apply(self, name: &str) -> String {
        let words = split_into_words(name);
        match self {
            Self::Lowercase => words.concat().to_lowercase(),
            Self::Uppercase => words.concat().to_uppercase(),
            Self::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
            Self::CamelCase => words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
                .collect(),
            Self::SnakeCase => words.join("_").to_lowercase(),
            Self::ScreamingSnakeCase => words.join("_").to_uppercase(),
            Self::KebabCase => words.join("-").to_lowercase(),
            Self::ScreamingKebabCase => words.join("-").to_uppercase(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Splits on `_`, `-` and lower-to-upper case boundaries.
///
/// Runs of capitals stay together, so `HTTPServer` gives `HTTP` and `Server`.
fn split_into_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(core::mem::take(&mut current));
            }
            continue;
        }

        if ch.is_uppercase() && !current.is_empty() {
            let prev_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit();
            let next_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            let prev_upper = chars[i - 1].is_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                words.push(core::mem::take(&mut current));
            }
        }
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_fields() {
        assert_eq!(RenameRule::CamelCase.apply("user_name"), "userName");
        assert_eq!(RenameRule::PascalCase.apply("user_name"), "UserName");
        assert_eq!(RenameRule::KebabCase.apply("user_name"), "user-name");
        assert_eq!(RenameRule::ScreamingSnakeCase.apply("user_name"), "USER_NAME");
        assert_eq!(RenameRule::Lowercase.apply("user_name"), "username");
    }

    #[test]
    fn rename_variants() {
        assert_eq!(RenameRule::SnakeCase.apply("DarkRed"), "dark_red");
        assert_eq!(RenameRule::CamelCase.apply("DarkRed"), "darkRed");
        assert_eq!(RenameRule::ScreamingKebabCase.apply("DarkRed"), "DARK-RED");
        assert_eq!(RenameRule::SnakeCase.apply("HTTPServer"), "http_server");
        assert_eq!(RenameRule::Uppercase.apply("Circle"), "CIRCLE");
    }

    #[test]
    fn parse_rules() {
        assert_eq!(RenameRule::parse("kebab-case"), Some(RenameRule::KebabCase));
        assert_eq!(RenameRule::parse("Kebab"), None);
    }
}
