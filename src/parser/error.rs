use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    #[diagnostic(code(lproj_lint::parse::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is {encoding} encoded; only UTF-8 is supported", path.display())]
    #[diagnostic(code(lproj_lint::parse::encoding), help("convert the file to UTF-8"))]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("{message} at line {line}, column {column}")]
    #[diagnostic(code(lproj_lint::parse::syntax))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
        message: String,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    pub fn syntax(path: &Path, content: &str, offset: usize, message: impl Into<String>) -> Self {
        let len = content[offset..].chars().next().map_or(0, char::len_utf8);
        let before = &content[..offset];
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit_once('\n')
            .map_or(before, |(_, tail)| tail)
            .chars()
            .count()
            + 1;

        ParseError::Syntax {
            src: crate::error_utils::create_named_source(path, content.to_string()),
            span: SourceSpan::new(offset.into(), len),
            message: message.into(),
            line,
            column,
        }
    }
}
