//! The closed set of format placeholders that must survive translation

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Highest positional index recognised by the vocabulary (`%20$s`)
pub const MAX_POSITION: u8 = 20;

/// Conversion character of a format specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Conversion {
    /// `s`
    String,
    /// `d`
    Integer,
    /// `@`
    Object,
}

impl Conversion {
    pub const ALL: [Conversion; 3] = [
        Conversion::String,
        Conversion::Integer,
        Conversion::Object,
    ];

    pub fn as_char(self) -> char {
        match self {
            Conversion::String => 's',
            Conversion::Integer => 'd',
            Conversion::Object => '@',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Conversion::String),
            'd' => Some(Conversion::Integer),
            '@' => Some(Conversion::Object),
            _ => None,
        }
    }
}

/// Literal escapes that are copied through verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Escape {
    /// `%%`
    Percent,
    /// The two-character `\n` sequence as written in a `.strings` file
    Newline,
}

impl Escape {
    pub fn as_str(self) -> &'static str {
        match self {
            Escape::Percent => "%%",
            Escape::Newline => "\\n",
        }
    }
}

/// One recognised placeholder token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    Escape(Escape),
    /// `%s`, `%d`, `%@`
    Bare(Conversion),
    /// `%<n>$s` and friends, `n` in `1..=MAX_POSITION`
    Positional { index: u8, conversion: Conversion },
}

impl Placeholder {
    /// Classify a token. Returns `None` for anything outside the vocabulary.
    pub fn parse(token: &str) -> Option<Self> {
        if token == Escape::Percent.as_str() {
            return Some(Placeholder::Escape(Escape::Percent));
        }
        if token == Escape::Newline.as_str() {
            return Some(Placeholder::Escape(Escape::Newline));
        }

        let body = token.strip_prefix('%')?;
        let mut chars = body.chars();
        let conversion = Conversion::from_char(chars.next_back()?)?;
        let rest = chars.as_str();
        if rest.is_empty() {
            return Some(Placeholder::Bare(conversion));
        }

        let digits = rest.strip_suffix('$')?;
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let index: u8 = digits.parse().ok()?;
        (1..=MAX_POSITION)
            .contains(&index)
            .then_some(Placeholder::Positional { index, conversion })
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Escape(escape) => f.write_str(escape.as_str()),
            Placeholder::Bare(conversion) => write!(f, "%{}", conversion.as_char()),
            Placeholder::Positional { index, conversion } => {
                write!(f, "%{index}${}", conversion.as_char())
            }
        }
    }
}

/// The full token list plus one compiled matcher over all of them
pub struct PlaceholderVocabulary {
    tokens: Vec<Placeholder>,
    matcher: Regex,
}

impl PlaceholderVocabulary {
    fn build() -> Self {
        // `%%` comes first so that `%%s` scans as an escape followed by text
        let mut tokens = vec![
            Placeholder::Escape(Escape::Percent),
            Placeholder::Escape(Escape::Newline),
        ];
        tokens.extend(Conversion::ALL.iter().copied().map(Placeholder::Bare));
        for conversion in Conversion::ALL {
            tokens.extend(
                (1..=MAX_POSITION).map(|index| Placeholder::Positional { index, conversion }),
            );
        }

        let pattern = tokens
            .iter()
            .map(|token| regex::escape(&token.to_string()))
            .collect::<Vec<_>>()
            .join("|");
        let matcher =
            Regex::new(&pattern).expect("placeholder vocabulary must compile - this is a bug");

        Self { tokens, matcher }
    }

    pub fn tokens(&self) -> &[Placeholder] {
        &self.tokens
    }

    pub(crate) fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

/// Built once on first use and shared by every scan
pub static VOCABULARY: Lazy<PlaceholderVocabulary> = Lazy::new(PlaceholderVocabulary::build);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_size() {
        // two escapes, three bare specifiers, 3 x 20 positional specifiers
        assert_eq!(VOCABULARY.tokens().len(), 65);
    }

    #[test]
    fn test_parse_accepts_vocabulary_tokens() {
        for token in ["%%", "\\n", "%s", "%d", "%@", "%1$s", "%10$d", "%20$@"] {
            assert!(Placeholder::parse(token).is_some(), "{token} should be recognised");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_tokens() {
        for token in ["%", "%21$s", "%21$d", "%21$@", "%0$s", "%01$s", "%f", "%1$f", "%$s"] {
            assert!(Placeholder::parse(token).is_none(), "{token} should not be recognised");
        }
    }

    #[test]
    fn test_parse_token_classes() {
        assert_eq!(
            Placeholder::parse("%%"),
            Some(Placeholder::Escape(Escape::Percent))
        );
        assert_eq!(
            Placeholder::parse("%@"),
            Some(Placeholder::Bare(Conversion::Object))
        );
        assert_eq!(
            Placeholder::parse("%7$d"),
            Some(Placeholder::Positional {
                index: 7,
                conversion: Conversion::Integer
            })
        );
    }

    #[test]
    fn test_display_round_trips_every_token() {
        for token in VOCABULARY.tokens() {
            assert_eq!(Placeholder::parse(&token.to_string()), Some(*token));
        }
    }
}
