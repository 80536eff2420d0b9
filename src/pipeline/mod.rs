//! The document pipeline
//!
//! Mirrors the two-stage handoff: tokenize the source, render the token
//! text, read the token text back, then parse. The report is the tree
//! dump when the document is clean and the diagnostic list otherwise.

use crate::config::compile_time::file_processing::MAX_FILE_SIZE;
use crate::grammar::ValueNode;
use crate::lexical::{Lexer, LexerError, LexicalMetrics};
use crate::log_success;
use crate::logging::codes;
use crate::semantic_analysis::Diagnostic;
use crate::syntax::{Parser, SyntaxError};
use crate::tokens::{read_token_text, write_token_text, TokenStream, WireError};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {path} is {size} bytes, exceeding the {limit} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("File is empty: {path}")]
    EmptyFile { path: PathBuf },

    #[error(transparent)]
    Lexical(#[from] LexerError),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl PipelineError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            PipelineError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            PipelineError::Io { .. } => codes::file_processing::IO_ERROR,
            PipelineError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            PipelineError::EmptyFile { .. } => codes::file_processing::EMPTY_FILE,
            PipelineError::Lexical(err) => err.error_code(),
            PipelineError::Wire(err) => err.error_code(),
            PipelineError::Syntax(err) => err.error_code(),
        }
    }
}

/// Everything one document produces
#[derive(Debug)]
pub struct PipelineOutput {
    pub token_text: String,
    pub tree: ValueNode,
    pub diagnostics: Vec<Diagnostic>,
    pub metrics: LexicalMetrics,
}

impl PipelineOutput {
    /// The report written for the document: tree dump when clean,
    /// diagnostics when not
    pub fn render_report(&self) -> String {
        if self.diagnostics.is_empty() {
            self.tree.render_tree()
        } else {
            let mut report = String::new();
            for diagnostic in &self.diagnostics {
                report.push_str(&diagnostic.to_string());
                report.push('\n');
            }
            report
        }
    }
}

/// Run the full pipeline over in-memory source text
pub fn process_source(source: &str) -> Result<PipelineOutput, PipelineError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize()?;
    let metrics = lexer.metrics().clone();

    let token_text = write_token_text(tokens.iter().map(|spanned| &spanned.value));

    // Parse from the token text, not the in-memory tokens; the text
    // form is the interface between the stages
    let reread = read_token_text(&token_text)?;
    let outcome = Parser::new(TokenStream::new(reread)).parse()?;

    Ok(PipelineOutput {
        token_text,
        tree: outcome.tree,
        diagnostics: outcome.diagnostics,
        metrics,
    })
}

/// Run the pipeline over a document on disk
pub fn process_file(path: &Path) -> Result<PipelineOutput, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let size = std::fs::metadata(path)
        .map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    if size > MAX_FILE_SIZE {
        return Err(PipelineError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_FILE_SIZE,
        });
    }

    let source = std::fs::read_to_string(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if source.trim().is_empty() {
        return Err(PipelineError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let output = process_source(&source)?;

    log_success!(
        codes::success::FILE_PROCESSING_SUCCESS,
        "Document processed",
        "path" => path.display(),
        "tokens" => output.metrics.total_tokens,
        "diagnostics" => output.diagnostics.len()
    );

    Ok(output)
}

/// Write the per-document artifacts next to the input: the token text
/// file and the report file. Returns both paths.
pub fn write_artifacts(
    path: &Path,
    output: &PipelineOutput,
) -> Result<(PathBuf, PathBuf), PipelineError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let tokens_path = dir.join(format!("{}.tokens.txt", stem));
    let report_path = dir.join(format!("{}.out.txt", stem));

    std::fs::write(&tokens_path, &output.token_text).map_err(|source| PipelineError::Io {
        path: tokens_path.clone(),
        source,
    })?;
    std::fs::write(&report_path, output.render_report()).map_err(|source| PipelineError::Io {
        path: report_path.clone(),
        source,
    })?;

    Ok((tokens_path, report_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn clean_document_reports_tree() {
        let output = process_source(r#"{"a": [1, 2]}"#).unwrap();

        assert!(output.diagnostics.is_empty());
        let report = output.render_report();
        assert!(report.starts_with("Dictionary\n"));
        assert!(report.contains("Key: a"));
        assert!(report.contains("Number: 2"));
    }

    #[test]
    fn dirty_document_reports_diagnostics_instead() {
        let output = process_source(r#"{"a": 1, "a": 007}"#).unwrap();

        let report = output.render_report();
        assert!(!report.contains("Dictionary"));
        assert_eq!(
            report,
            "Type 5 Error: Duplicate key 'a' in dictionary\n\
             Type 3 Error at 007: Invalid number format - leading zeros\n"
        );
    }

    #[test]
    fn token_text_round_trips_through_the_pipeline() {
        let output = process_source(r#"[true, false]"#).unwrap();
        assert_eq!(
            output.token_text,
            "<[>\n<bool, True>\n<,>\n<bool, False>\n<]>\n"
        );
    }

    #[test]
    fn lexical_errors_abort_the_pipeline() {
        assert_matches!(
            process_source("{@}"),
            Err(PipelineError::Lexical(LexerError::InvalidCharacter {
                character: '@',
                ..
            }))
        );
    }

    #[test]
    fn structural_errors_abort_the_pipeline() {
        assert_matches!(
            process_source(r#"{"a" 1}"#),
            Err(PipelineError::Syntax(SyntaxError::UnexpectedToken { .. }))
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let err = process_file(Path::new("/nonexistent/doc.jdl")).unwrap_err();
        assert_matches!(err, PipelineError::FileNotFound { .. });
        assert_eq!(err.error_code().as_str(), "E005");
    }

    #[test]
    fn empty_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();

        assert_matches!(
            process_file(file.path()),
            Err(PipelineError::EmptyFile { .. })
        );
    }

    #[test]
    fn artifacts_land_next_to_the_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.jdl");
        std::fs::write(&input, r#"{"k": null}"#).unwrap();

        let output = process_file(&input).unwrap();
        let (tokens_path, report_path) = write_artifacts(&input, &output).unwrap();

        assert_eq!(tokens_path, dir.path().join("sample.tokens.txt"));
        assert_eq!(report_path, dir.path().join("sample.out.txt"));

        let token_text = std::fs::read_to_string(&tokens_path).unwrap();
        assert_eq!(token_text, "<{>\n<str, k>\n<:>\n<null>\n<}>\n");

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert!(report.starts_with("Dictionary\n"));
    }
}
