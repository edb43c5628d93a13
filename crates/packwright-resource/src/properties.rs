//! `key=value` property tables.
//!
//! Accepts `=`, `:` or whitespace as the key separator, `#` and `!` comments,
//! trailing-backslash line continuations and the usual backslash escapes
//! including `\uXXXX`.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    pub fn parse(input: &str) -> Self {
        let mut entries = BTreeMap::new();
        let mut lines = input.lines();

        while let Some(line) = lines.next() {
            let mut logical = line.trim_start().to_string();
            if logical.is_empty() || logical.starts_with('#') || logical.starts_with('!') {
                continue;
            }
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }
            let (key, value) = split_entry(&logical);
            entries.insert(unescape(key), unescape(value));
        }

        Self { entries }
    }

    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
            name: name.to_string(),
        })?;
        Ok(Self::parse(text))
    }

    pub fn get(&self, key: &str) -> Option<&str> { self.entries.get(key).map(String::as_str) }

    /// First value found among `keys`, in order.
    pub fn first_of<'a, I>(&self, keys: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter().find_map(|k| self.get(k))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    trailing % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (line[..i].trim_end(), line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[i..].trim_start();
                let rest = rest
                    .strip_prefix(['=', ':'])
                    .map(str::trim_start)
                    .unwrap_or(rest);
                return (&line[..i], rest);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separators() {
        let props = Properties::parse("a=1\nb: 2\nc 3\nd = 4\n");
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("2"));
        assert_eq!(props.get("c"), Some("3"));
        assert_eq!(props.get("d"), Some("4"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let props = Properties::parse("# comment\n! other\n\n  en=Program Files\n");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("en"), Some("Program Files"));
    }

    #[test]
    fn test_value_keeps_inner_spaces() {
        let props = Properties::parse("de=Programme Dateien");
        assert_eq!(props.get("de"), Some("Programme Dateien"));
    }

    #[test]
    fn test_escapes() {
        let props = Properties::parse("path=Program\\\\Files\nkey\\=x=y\numl=Programmi\\u00e8\n");
        assert_eq!(props.get("path"), Some("Program\\Files"));
        assert_eq!(props.get("key=x"), Some("y"));
        assert_eq!(props.get("uml"), Some("Programmiè"));
    }

    #[test]
    fn test_line_continuation() {
        let props = Properties::parse("long=Pro\\\n    gram Files\nnext=1");
        assert_eq!(props.get("long"), Some("Program Files"));
        assert_eq!(props.get("next"), Some("1"));
    }

    #[test]
    fn test_first_of_follows_order() {
        let props = Properties::parse("fr=Programmes\nen=Program Files");
        assert_eq!(props.first_of(["fr_FR", "fr", "en"]), Some("Programmes"));
        assert_eq!(props.first_of(["es_ES", "es", "en"]), Some("Program Files"));
        assert_eq!(props.first_of(["xx"]), None);
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let err = Properties::from_bytes("win32-defaultpaths.properties", &[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8 { .. }));
    }
}
