use serde::{Deserialize, Serialize};
use std::iter::Peekable;
use std::str::Chars;

/// Which characters count as part of a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    /// `[0-9a-z_]` only; every other non-space character is a separator.
    #[default]
    Ascii,
    /// Any Unicode alphanumeric character or `_`.
    Unicode,
}

impl WordClass {
    pub fn is_word_char(self, c: char) -> bool {
        match self {
            WordClass::Ascii => c.is_ascii_alphanumeric() || c == '_',
            WordClass::Unicode => c.is_alphanumeric() || c == '_',
        }
    }
}

/// Lowercases `text` and replaces every character that is neither a word
/// character nor whitespace with a single space.
///
/// This is a per-character substitution, so `don't` becomes `don t`.
pub fn normalize(text: &str, class: WordClass) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if class.is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Splits normalized text into tokens on runs of whitespace.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}
impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
        }
    }

    fn next_token(&mut self) -> Option<String> {
        self.skip_whitespace();
        let first = self.chars.next()?;

        let mut word = String::new();
        word.push(first);
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                break;
            }
            word.push(c);
            self.chars.next();
        }
        Some(word)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }
}
impl<'a> Iterator for Lexer<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes already normalized text, preserving order of appearance.
pub fn tokenize(normalized: &str) -> Vec<String> {
    Lexer::new(normalized).collect()
}

/// Normalizes then tokenizes raw text.
pub fn terms(text: &str, class: WordClass) -> Vec<String> {
    tokenize(&normalize(text, class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!", WordClass::Ascii), "hello  world ");
    }

    #[test]
    fn normalize_keeps_length_in_chars() {
        let input = "a-b.c;d";
        let out = normalize(input, WordClass::Ascii);
        assert_eq!(out.chars().count(), input.chars().count());
        assert_eq!(out, "a b c d");
    }

    #[test]
    fn digits_and_underscores_are_word_characters() {
        assert_eq!(terms("snake_case 42 v1.2", WordClass::Ascii), vec!["snake_case", "42", "v1", "2"]);
    }

    #[test]
    fn apostrophe_splits_words() {
        assert_eq!(terms("don't stop", WordClass::Ascii), vec!["don", "t", "stop"]);
    }

    #[test]
    fn case_is_folded() {
        assert_eq!(terms("Cat cat CAT", WordClass::Ascii), terms("cat cat cat", WordClass::Ascii));
    }

    #[test]
    fn ascii_class_treats_accented_letters_as_separators() {
        assert_eq!(terms("café naïve", WordClass::Ascii), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn unicode_class_keeps_accented_letters() {
        assert_eq!(terms("Café NAÏVE", WordClass::Unicode), vec!["café", "naïve"]);
    }

    #[test]
    fn mixed_whitespace_splits() {
        assert_eq!(tokenize("a\tb\n\nc   d\r\n"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(terms("", WordClass::Ascii).is_empty());
        assert!(terms("   \n\t ", WordClass::Ascii).is_empty());
        assert!(terms("!!! ... ???", WordClass::Ascii).is_empty());
    }
}
