/// Placeholder tokens recognized in a custom format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Prefix,
    Hash,
    Star,
    Input,
}

impl Token {
    pub const ALL: [Self; 4] = [Self::Prefix, Self::Hash, Self::Star, Self::Input];

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Prefix => "{prefix}",
            Self::Hash => "{hash}",
            Self::Star => "{star}",
            Self::Input => "{input}",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Values substituted for each token.
#[derive(Debug, Clone, Copy)]
pub struct TemplateValues<'a> {
    pub prefix: &'a str,
    pub hash: &'a str,
    pub star: &'a str,
    /// Already shortened to the leading input characters.
    pub input: &'a str,
}

impl TemplateValues<'_> {
    const fn get(&self, token: Token) -> &str {
        match token {
            Token::Prefix => self.prefix,
            Token::Hash => self.hash,
            Token::Star => self.star,
            Token::Input => self.input,
        }
    }
}

/// Render `template` in a single left-to-right pass.
///
/// Each token is replaced at its first occurrence only; later repeats, and any
/// `{...}` that isn't a known token, are copied through literally. Substituted
/// values are never rescanned, so an input containing `{hash}` stays as typed.
pub fn render(template: &str, values: &TemplateValues<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut used = [false; 4];
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let token = Token::ALL
            .into_iter()
            .find(|token| !used[token.slot()] && tail.starts_with(token.placeholder()));

        match token {
            Some(token) => {
                used[token.slot()] = true;
                out.push_str(values.get(token));
                rest = &tail[token.placeholder().len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> TemplateValues<'static> {
        TemplateValues {
            prefix: "STAR",
            hash: "0120",
            star: "SIRIUS",
            input: "hello worl",
        }
    }

    #[test]
    fn test_all_tokens() {
        assert_eq!(
            render("{prefix}:{hash}:{star}:{input}", &values()),
            "STAR:0120:SIRIUS:hello worl"
        );
    }

    #[test]
    fn test_star_hash_pair() {
        assert_eq!(render("{star}_{hash}", &values()), "SIRIUS_0120");
    }

    #[test]
    fn test_only_first_occurrence_replaced() {
        assert_eq!(render("{hash}-{hash}", &values()), "0120-{hash}");
        assert_eq!(
            render("{star}{prefix}{star}", &values()),
            "SIRIUSSTAR{star}"
        );
    }

    #[test]
    fn test_template_without_tokens() {
        assert_eq!(render("plain-text", &values()), "plain-text");
        assert_eq!(render("", &values()), "");
    }

    #[test]
    fn test_unknown_braces_kept() {
        assert_eq!(render("{nope}-{hash}", &values()), "{nope}-0120");
        assert_eq!(render("{{hash}}", &values()), "{0120}");
        assert_eq!(render("trailing {", &values()), "trailing {");
    }

    #[test]
    fn test_substituted_values_not_rescanned() {
        let v = TemplateValues {
            input: "{hash}",
            ..values()
        };
        assert_eq!(render("{input}|{hash}", &v), "{hash}|0120");
    }

    #[test]
    fn test_non_ascii_template() {
        assert_eq!(render("★{star}★", &values()), "★SIRIUS★");
    }
}
