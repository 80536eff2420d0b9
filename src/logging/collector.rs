//! Per-document error collection for batch processing
//!
//! The driver registers each document before processing it; every error
//! logged while the document context is active lands here, so a batch
//! run can print a cargo-style summary at the end.

use super::config;
use super::events::LogEvent;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Identifies the document currently being processed on this thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProcessingContext {
    pub file_path: PathBuf,
    pub file_id: usize,
}

impl FileProcessingContext {
    pub fn new(file_path: PathBuf, file_id: usize) -> Self {
        Self { file_path, file_id }
    }
}

/// Aggregate counts across a batch run
#[derive(Debug, Clone, Default)]
pub struct ProcessingSummary {
    pub total_files: usize,
    pub files_with_errors: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl ProcessingSummary {
    pub fn is_clean(&self) -> bool {
        self.total_errors == 0
    }
}

#[derive(Default)]
struct CollectorState {
    files: Vec<PathBuf>,
    events: HashMap<PathBuf, Vec<LogEvent>>,
    total_events: usize,
}

/// Thread-safe event collector keyed by document path
pub struct ErrorCollector {
    state: Mutex<CollectorState>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CollectorState::default()),
        }
    }

    pub fn record_file_context(&self, context: FileProcessingContext) {
        let mut state = self.state.lock().unwrap();
        if !state.files.contains(&context.file_path) {
            state.files.push(context.file_path);
        }
    }

    pub fn record_event(&self, file_path: &Path, event: LogEvent) {
        let mut state = self.state.lock().unwrap();
        if state.total_events >= config::get_max_collected_events() {
            return;
        }
        state.total_events += 1;
        state
            .events
            .entry(file_path.to_path_buf())
            .or_default()
            .push(event);
    }

    pub fn get_file_errors(&self, file_path: &Path) -> Vec<LogEvent> {
        self.state
            .lock()
            .unwrap()
            .events
            .get(file_path)
            .map(|events| events.iter().filter(|e| e.is_error()).cloned().collect())
            .unwrap_or_default()
    }

    pub fn get_summary(&self) -> ProcessingSummary {
        let state = self.state.lock().unwrap();
        let mut summary = ProcessingSummary {
            total_files: state.files.len(),
            ..Default::default()
        };

        for events in state.events.values() {
            let errors = events.iter().filter(|e| e.is_error()).count();
            if errors > 0 {
                summary.files_with_errors += 1;
            }
            summary.total_errors += errors;
            summary.total_warnings += events.iter().filter(|e| e.is_warning()).count();
        }

        summary
    }

    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.files.clear();
        state.events.clear();
        state.total_events = 0;
    }
}

impl Default for ErrorCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Cargo-style per-file error report for the end of a batch run
pub fn format_batch_summary(collector: &ErrorCollector) -> String {
    let state = collector.state.lock().unwrap();
    let mut output = String::new();

    for file in &state.files {
        let Some(events) = state.events.get(file) else {
            continue;
        };
        let errors: Vec<_> = events.iter().filter(|e| e.is_error()).collect();
        if errors.is_empty() {
            continue;
        }

        output.push_str(&format!("{}: {} error(s)\n", file.display(), errors.len()));
        for event in errors {
            output.push_str(&format!("  {}\n", event.format()));
        }
    }

    let summary = collector_summary(&state);
    output.push_str(&format!(
        "{} file(s) processed, {} error(s), {} warning(s)\n",
        summary.total_files, summary.total_errors, summary.total_warnings
    ));

    output
}

fn collector_summary(state: &CollectorState) -> ProcessingSummary {
    let mut summary = ProcessingSummary {
        total_files: state.files.len(),
        ..Default::default()
    };
    for events in state.events.values() {
        summary.total_errors += events.iter().filter(|e| e.is_error()).count();
        summary.total_warnings += events.iter().filter(|e| e.is_warning()).count();
    }
    summary
}
