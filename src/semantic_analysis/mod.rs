//! Inline semantic validation
//!
//! The parser consults this validator while it walks the grammar. Rule
//! violations never abort the parse; they accumulate here in detection
//! order and are reported after the tree is built.
//!
//! Duplicate keys are judged per object scope: the validator keeps an
//! explicit stack of key sets, pushed when an object opens and popped
//! when it closes, so identical keys in sibling or nested objects are
//! legal.

use crate::config::compile_time::semantic::MAX_DIAGNOSTICS;
use crate::log_error;
use crate::logging::codes;
use crate::tokens::TokenKind;
use std::collections::HashSet;
use std::fmt;

pub const RESERVED_WORDS: [&str; 3] = ["true", "false", "null"];

/// The seven semantic rules, numbered as they are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    DecimalFormat,
    EmptyKey,
    NumberFormat,
    ReservedKey,
    DuplicateKey,
    ListTypeMismatch,
    ReservedString,
}

impl RuleKind {
    pub fn type_number(&self) -> u8 {
        match self {
            RuleKind::DecimalFormat => 1,
            RuleKind::EmptyKey => 2,
            RuleKind::NumberFormat => 3,
            RuleKind::ReservedKey => 4,
            RuleKind::DuplicateKey => 5,
            RuleKind::ListTypeMismatch => 6,
            RuleKind::ReservedString => 7,
        }
    }

    pub fn code(&self) -> codes::Code {
        match self {
            RuleKind::DecimalFormat => codes::validation::DECIMAL_FORMAT,
            RuleKind::EmptyKey => codes::validation::EMPTY_KEY,
            RuleKind::NumberFormat => codes::validation::NUMBER_FORMAT,
            RuleKind::ReservedKey => codes::validation::RESERVED_KEY,
            RuleKind::DuplicateKey => codes::validation::DUPLICATE_KEY,
            RuleKind::ListTypeMismatch => codes::validation::LIST_TYPE_MISMATCH,
            RuleKind::ReservedString => codes::validation::RESERVED_STRING,
        }
    }
}

/// One rule violation
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: RuleKind,
    /// The offending literal text, when the report names one
    pub offending: Option<String>,
    pub message: String,
}

impl Diagnostic {
    fn new(kind: RuleKind, offending: Option<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            offending,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.offending {
            Some(value) => write!(
                f,
                "Type {} Error at {}: {}",
                self.kind.type_number(),
                value,
                self.message
            ),
            None => write!(f, "Type {} Error: {}", self.kind.type_number(), self.message),
        }
    }
}

/// Accumulates rule violations and tracks object scopes
#[derive(Debug, Default)]
pub struct Validator {
    diagnostics: Vec<Diagnostic>,
    scopes: Vec<HashSet<String>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if self.diagnostics.len() >= MAX_DIAGNOSTICS {
            return;
        }
        log_error!(diagnostic.kind.code(), &diagnostic.to_string());
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// An object opened; its keys get a fresh scope
    pub fn enter_object_scope(&mut self) {
        self.scopes.push(HashSet::new());
    }

    /// The innermost object closed
    pub fn leave_object_scope(&mut self) {
        self.scopes.pop();
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    /// Rule 1: a literal containing a dot must be digits, one dot,
    /// digits, with both sides non-empty
    pub fn check_decimal_format(&mut self, raw: &str) {
        if !raw.contains('.') {
            return;
        }

        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            self.report(Diagnostic::new(
                RuleKind::DecimalFormat,
                Some(raw.to_string()),
                "Invalid decimal number format",
            ));
        }
    }

    /// Rule 3: no leading zeros, no leading plus, no plus-signed
    /// exponent, and exponent forms must decode. The literal is judged
    /// and reported in lowercase, so `1E+5` is treated like `1e+5`.
    pub fn check_number_format(&mut self, raw: &str) {
        let literal = raw.to_lowercase();

        let violation = if let Some((_, exponent)) = literal.split_once('e') {
            if exponent.starts_with('+') {
                Some("Invalid number format - leading + in exponent")
            } else if literal.parse::<f64>().is_err() {
                Some("Invalid number format")
            } else {
                None
            }
        } else if literal.starts_with('0') && literal.len() > 1 && !literal.starts_with("0.") {
            Some("Invalid number format - leading zeros")
        } else if literal.starts_with('+') {
            Some("Invalid number format - leading + sign")
        } else {
            None
        };

        if let Some(message) = violation {
            self.report(Diagnostic::new(
                RuleKind::NumberFormat,
                Some(literal),
                message,
            ));
        }
    }

    /// Rule 2: keys must contain something other than whitespace
    pub fn check_empty_key(&mut self, key: &str) {
        if key.trim().is_empty() {
            self.report(Diagnostic::new(
                RuleKind::EmptyKey,
                None,
                "Empty dictionary key",
            ));
        }
    }

    /// Rule 4: reserved words cannot name a pair. The comparison is on
    /// the lowercase form; the report keeps the key as written.
    pub fn check_reserved_key(&mut self, key: &str) {
        if RESERVED_WORDS.contains(&key.to_lowercase().as_str()) {
            self.report(Diagnostic::new(
                RuleKind::ReservedKey,
                None,
                format!("Reserved word '{}' cannot be used as dictionary key", key),
            ));
        }
    }

    /// Rule 5: keys are unique within the innermost object scope
    pub fn check_duplicate_key(&mut self, key: &str) {
        let Some(scope) = self.scopes.last_mut() else {
            return;
        };

        if !scope.insert(key.to_string()) {
            self.report(Diagnostic::new(
                RuleKind::DuplicateKey,
                None,
                format!("Duplicate key '{}' in dictionary", key),
            ));
        }
    }

    /// Rule 6: every element of a list must start with the same token
    /// kind as the first element. Lists whose first element is itself a
    /// list or object are exempt.
    pub fn check_list_element(&mut self, first: TokenKind, current: TokenKind) {
        if matches!(first, TokenKind::LeftBracket | TokenKind::LeftBrace) {
            return;
        }

        if current != first {
            self.report(Diagnostic::new(
                RuleKind::ListTypeMismatch,
                None,
                "Inconsistent types in list",
            ));
        }
    }

    /// Rule 7: reserved words cannot appear as quoted string values.
    /// Judged on the lowercase form, reported as written.
    pub fn check_reserved_string(&mut self, value: &str) {
        if RESERVED_WORDS.contains(&value.to_lowercase().as_str()) {
            self.report(Diagnostic::new(
                RuleKind::ReservedString,
                None,
                format!("Reserved word '{}' cannot be used as a string", value),
            ));
        }
    }
}
