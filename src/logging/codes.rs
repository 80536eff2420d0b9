//! Consolidated error and success codes with classification metadata
//!
//! Single source of truth for every code the front end can emit. Each
//! error code carries severity, recoverability, and halt behavior so the
//! reporting layer treats lexical, syntactic, and semantic failures
//! uniformly.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal wrapper for error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for one code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Document I/O error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const EMPTY_FILE: Code = Code::new("E008");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
}

/// Tokenization error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const INVALID_NUMBER: Code = Code::new("E022");
    pub const STRING_TOO_LARGE: Code = Code::new("E024");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
}

/// Parsing error codes
pub mod syntax {
    use super::Code;

    pub const EMPTY_TOKEN_STREAM: Code = Code::new("E041");
    pub const GRAMMAR_VIOLATION: Code = Code::new("E043");
    pub const INVALID_TOKEN_TEXT: Code = Code::new("E044");
    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E051");
    pub const MAX_RECURSION_DEPTH: Code = Code::new("E087");
}

/// Semantic validation codes, one per rule type
pub mod validation {
    use super::Code;

    pub const DECIMAL_FORMAT: Code = Code::new("V001");
    pub const EMPTY_KEY: Code = Code::new("V002");
    pub const NUMBER_FORMAT: Code = Code::new("V003");
    pub const RESERVED_KEY: Code = Code::new("V004");
    pub const DUPLICATE_KEY: Code = Code::new("V005");
    pub const LIST_TYPE_MISMATCH: Code = Code::new("V006");
    pub const RESERVED_STRING: Code = Code::new("V007");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const TREE_CONSTRUCTION_COMPLETE: Code = Code::new("I040");
    pub const VALIDATION_COMPLETE: Code = Code::new("I070");
}

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn registry_entries() -> Vec<ErrorMetadata> {
    use Severity::*;

    vec![
        ErrorMetadata::new(
            "ERR001",
            "System",
            Critical,
            false,
            true,
            "Critical internal system error",
            "File a bug report with the input that triggered it",
        ),
        ErrorMetadata::new(
            "ERR002",
            "System",
            Critical,
            false,
            true,
            "System initialization failure",
            "Check configuration and environment variables",
        ),
        ErrorMetadata::new(
            "E005",
            "FileProcessing",
            Medium,
            false,
            true,
            "File not found at specified path",
            "Check the file path and ensure the file exists",
        ),
        ErrorMetadata::new(
            "E007",
            "FileProcessing",
            Medium,
            false,
            true,
            "File exceeds maximum size limit",
            "Reduce file size or split the document",
        ),
        ErrorMetadata::new(
            "E008",
            "FileProcessing",
            Medium,
            false,
            true,
            "File is empty when content expected",
            "Provide a file with content",
        ),
        ErrorMetadata::new(
            "E010",
            "FileProcessing",
            Medium,
            false,
            true,
            "Invalid UTF-8 encoding in file",
            "Convert the file to UTF-8",
        ),
        ErrorMetadata::new(
            "E011",
            "FileProcessing",
            Medium,
            false,
            true,
            "I/O error during file operation",
            "Check disk space and permissions",
        ),
        ErrorMetadata::new(
            "E020",
            "Lexical",
            Medium,
            false,
            true,
            "Character cannot start any token",
            "Remove the invalid character from the document",
        ),
        ErrorMetadata::new(
            "E021",
            "Lexical",
            Medium,
            false,
            true,
            "String literal not properly terminated",
            "Add the closing double quote",
        ),
        ErrorMetadata::new(
            "E022",
            "Lexical",
            Low,
            false,
            true,
            "Number span does not decode to a finite value",
            "Fix the number literal",
        ),
        ErrorMetadata::new(
            "E024",
            "Lexical",
            Low,
            false,
            true,
            "String literal exceeds maximum length",
            "Shorten the string literal",
        ),
        ErrorMetadata::new(
            "E027",
            "Lexical",
            Medium,
            false,
            true,
            "Token count exceeds processing limit",
            "Split the document into smaller pieces",
        ),
        ErrorMetadata::new(
            "E041",
            "Syntax",
            Medium,
            false,
            true,
            "Token stream is empty",
            "Provide at least one value to parse",
        ),
        ErrorMetadata::new(
            "E043",
            "Syntax",
            Medium,
            false,
            true,
            "Token cannot start a value",
            "Fix the document structure at the reported position",
        ),
        ErrorMetadata::new(
            "E044",
            "Syntax",
            Medium,
            false,
            true,
            "Malformed line in token text input",
            "Regenerate the token text file",
        ),
        ErrorMetadata::new(
            "E050",
            "Syntax",
            Medium,
            false,
            true,
            "Token does not match grammar expectation",
            "Fix the document structure at the reported position",
        ),
        ErrorMetadata::new(
            "E051",
            "Syntax",
            Medium,
            false,
            true,
            "Input ended before the value was complete",
            "Complete the document",
        ),
        ErrorMetadata::new(
            "E087",
            "Syntax",
            High,
            false,
            true,
            "Nesting exceeds maximum parse depth",
            "Flatten the document structure",
        ),
        ErrorMetadata::new(
            "V001",
            "Validation",
            Low,
            true,
            false,
            "Decimal number has malformed integer or fraction part",
            "Write the decimal as digits, one dot, digits",
        ),
        ErrorMetadata::new(
            "V002",
            "Validation",
            Low,
            true,
            false,
            "Dictionary key is empty or whitespace",
            "Use a non-empty key",
        ),
        ErrorMetadata::new(
            "V003",
            "Validation",
            Low,
            true,
            false,
            "Number violates format rules",
            "Remove leading zeros or plus signs",
        ),
        ErrorMetadata::new(
            "V004",
            "Validation",
            Low,
            true,
            false,
            "Reserved word used as dictionary key",
            "Rename the key",
        ),
        ErrorMetadata::new(
            "V005",
            "Validation",
            Low,
            true,
            false,
            "Key repeated within one dictionary",
            "Remove or rename the duplicate key",
        ),
        ErrorMetadata::new(
            "V006",
            "Validation",
            Low,
            true,
            false,
            "List mixes element types",
            "Keep list elements to a single type",
        ),
        ErrorMetadata::new(
            "V007",
            "Validation",
            Low,
            true,
            false,
            "Reserved word used as a string value",
            "Use the literal instead of a quoted string",
        ),
    ]
}

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        registry_entries()
            .into_iter()
            .map(|meta| (meta.code, meta))
            .collect()
    })
}

/// Look up complete metadata for a code
pub fn get_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_description(code: &str) -> &'static str {
    get_metadata(code).map_or("Unknown error", |m| m.description)
}

pub fn get_severity(code: &str) -> Severity {
    get_metadata(code).map_or(Severity::Medium, |m| m.severity)
}

pub fn get_category(code: &str) -> &'static str {
    get_metadata(code).map_or("Unknown", |m| m.category)
}

pub fn get_action(code: &str) -> &'static str {
    get_metadata(code).map_or("No specific action available", |m| m.recommended_action)
}

pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code).is_some_and(|m| m.recoverable)
}

pub fn requires_halt(code: &str) -> bool {
    get_metadata(code).is_some_and(|m| m.requires_halt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_code_has_metadata() {
        let all = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            file_processing::FILE_NOT_FOUND,
            file_processing::FILE_TOO_LARGE,
            file_processing::EMPTY_FILE,
            file_processing::INVALID_ENCODING,
            file_processing::IO_ERROR,
            lexical::INVALID_CHARACTER,
            lexical::UNTERMINATED_STRING,
            lexical::INVALID_NUMBER,
            lexical::STRING_TOO_LARGE,
            lexical::TOO_MANY_TOKENS,
            syntax::EMPTY_TOKEN_STREAM,
            syntax::GRAMMAR_VIOLATION,
            syntax::INVALID_TOKEN_TEXT,
            syntax::UNEXPECTED_TOKEN,
            syntax::UNEXPECTED_END_OF_INPUT,
            syntax::MAX_RECURSION_DEPTH,
            validation::DECIMAL_FORMAT,
            validation::EMPTY_KEY,
            validation::NUMBER_FORMAT,
            validation::RESERVED_KEY,
            validation::DUPLICATE_KEY,
            validation::LIST_TYPE_MISMATCH,
            validation::RESERVED_STRING,
        ];
        for code in all {
            assert!(
                get_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn validation_codes_are_recoverable() {
        assert!(is_recoverable("V005"));
        assert!(!requires_halt("V001"));
    }

    #[test]
    fn structural_codes_halt() {
        assert!(requires_halt("E050"));
        assert!(!is_recoverable("E020"));
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_category("Z999"), "Unknown");
    }
}
