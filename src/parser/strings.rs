//! Parser for Apple `.strings` resource files

use std::path::Path;
use tracing::debug;

use super::error::ParseError;
use crate::models::ResourceRecordSet;

/// Read and parse a `.strings` file
pub fn parse_file(path: &Path) -> Result<ResourceRecordSet, ParseError> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = decode(bytes, path)?;
    let records = parse_str(&content, path)?;
    debug!("Parsed {}, keys count: {}", path.display(), records.len());
    Ok(records)
}

fn decode(bytes: Vec<u8>, path: &Path) -> Result<String, ParseError> {
    let encoding = if bytes.starts_with(&[0xff, 0xfe]) {
        "UTF-16LE"
    } else if bytes.starts_with(&[0xfe, 0xff]) {
        "UTF-16BE"
    } else {
        return String::from_utf8(bytes).map_err(|_| ParseError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "non-UTF-8",
        });
    };

    Err(ParseError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Parse `.strings` content. `path` is only used for error reporting.
pub fn parse_str(content: &str, path: &Path) -> Result<ResourceRecordSet, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    StringsParser::new(content, path).parse()
}

struct StringsParser<'a> {
    src: &'a str,
    path: &'a Path,
    pos: usize,
}

impl<'a> StringsParser<'a> {
    fn new(src: &'a str, path: &'a Path) -> Self {
        Self { src, path, pos: 0 }
    }

    fn parse(mut self) -> Result<ResourceRecordSet, ParseError> {
        let mut records = ResourceRecordSet::new();
        let mut pending_comment: Option<String> = None;

        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                break;
            }

            if rest.starts_with("/*") {
                pending_comment = Some(self.block_comment()?);
            } else if rest.starts_with("//") {
                pending_comment = Some(self.line_comment());
            } else {
                let (key, value) = self.entry()?;
                records.insert(key, value, pending_comment.take().unwrap_or_default());
            }
        }

        Ok(records)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn error(&self, offset: usize, message: &str) -> ParseError {
        ParseError::syntax(self.path, self.src, offset, message)
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn block_comment(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        let body = &self.rest()[2..];
        let end = body
            .find("*/")
            .ok_or_else(|| self.error(start, "unterminated comment"))?;
        self.pos += 2 + end + 2;
        Ok(body[..end].trim().to_string())
    }

    fn line_comment(&mut self) -> String {
        let body = &self.rest()[2..];
        let end = body.find('\n').unwrap_or(body.len());
        self.pos += 2 + end;
        body[..end].trim().to_string()
    }

    fn entry(&mut self) -> Result<(String, String), ParseError> {
        let key = self.key()?;

        self.skip_whitespace();
        self.expect('=', "expected `=` after key")?;

        self.skip_whitespace();
        if self.peek() != Some('"') {
            return Err(self.error(self.pos, "expected quoted value"));
        }
        let value = self.quoted()?;

        self.skip_whitespace();
        self.expect(';', "expected `;` after value")?;

        Ok((key, value))
    }

    fn key(&mut self) -> Result<String, ParseError> {
        if self.peek() == Some('"') {
            return self.quoted();
        }

        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '.' | '-')))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error(self.pos, "expected key"));
        }
        self.pos += len;
        Ok(rest[..len].to_string())
    }

    fn expect(&mut self, expected: char, message: &str) -> Result<(), ParseError> {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(self.error(self.pos, message))
        }
    }

    /// Read a double-quoted string, keeping escape sequences verbatim
    fn quoted(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        let body = &self.rest()[1..];
        let mut chars = body.char_indices();

        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    if chars.next().is_none() {
                        return Err(self.error(start, "unterminated string"));
                    }
                }
                '"' => {
                    self.pos += 1 + i + 1;
                    return Ok(body[..i].to_string());
                }
                _ => {}
            }
        }

        Err(self.error(start, "unterminated string"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ResourceRecordSet, ParseError> {
        parse_str(content, Path::new("Localizable.strings"))
    }

    #[test]
    fn test_utf16_file_is_rejected_with_encoding_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("Localizable.strings");
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend("\"a\" = \"b\";".encode_utf16().flat_map(u16::to_le_bytes));
        std::fs::write(&path, bytes).unwrap();

        let err = parse_file(&path).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnsupportedEncoding {
                encoding: "UTF-16LE",
                ..
            }
        ));
        assert!(err.to_string().ends_with("is UTF-16LE encoded; only UTF-8 is supported"));
    }

    #[test]
    fn test_invalid_utf8_file_is_rejected_with_encoding_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("Localizable.strings");
        std::fs::write(&path, b"\"a\" = \"\xe9\";").unwrap();

        let err = parse_file(&path).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnsupportedEncoding {
                encoding: "non-UTF-8",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_entries_in_order() {
        let records = parse(
            r#"
"greeting" = "Hello %@";
"farewell" = "Bye";
"#,
        )
        .unwrap();

        let entries: Vec<_> = records.key_values().collect();
        assert_eq!(entries, vec![("greeting", "Hello %@"), ("farewell", "Bye")]);
    }

    #[test]
    fn test_parse_comments_attach_to_next_entry() {
        let records = parse(
            r#"
/* Shown on the home screen */
"title" = "Home";

// Button label
"ok" = "OK";

"plain" = "No comment";
"#,
        )
        .unwrap();

        assert_eq!(records.comment("title"), Some("Shown on the home screen"));
        assert_eq!(records.comment("ok"), Some("Button label"));
        assert_eq!(records.comment("plain"), Some(""));
    }

    #[test]
    fn test_parse_keeps_escapes_verbatim() {
        let records = parse(r#""multi" = "Line one\nLine \"two\"";"#).unwrap();
        assert_eq!(records.value("multi"), Some(r#"Line one\nLine \"two\""#));
    }

    #[test]
    fn test_parse_unquoted_key() {
        let records = parse("app.title = \"Title\";").unwrap();
        assert_eq!(records.value("app.title"), Some("Title"));
    }

    #[test]
    fn test_parse_strips_bom() {
        let records = parse("\u{feff}\"a\" = \"b\";").unwrap();
        assert_eq!(records.value("a"), Some("b"));
    }

    #[test]
    fn test_parse_multiline_block_comment() {
        let records = parse("/*\n  Greeting\n  on launch\n*/\n\"hi\" = \"Hi\";").unwrap();
        assert_eq!(records.comment("hi"), Some("Greeting\n  on launch"));
    }

    #[test]
    fn test_missing_semicolon_reports_location() {
        let err = parse("\"a\" = \"b\"\n\"c\" = \"d\";").unwrap_err();
        assert_eq!(err.to_string(), "expected `;` after value at line 2, column 1");
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse("\"a\" = \"b;").unwrap_err();
        assert!(err.to_string().starts_with("unterminated string"));
    }

    #[test]
    fn test_unterminated_comment() {
        let err = parse("/* never closed\n\"a\" = \"b\";").unwrap_err();
        assert!(err.to_string().starts_with("unterminated comment"));
    }

    #[test]
    fn test_missing_equals() {
        let err = parse("\"a\" \"b\";").unwrap_err();
        assert_eq!(err.to_string(), "expected `=` after key at line 1, column 5");
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("/definitely/not/here/Localizable.strings")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn test_empty_file_has_no_entries() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("/* only a comment */").unwrap().is_empty());
    }
}
