use jdl_compiler::{logging, pipeline};
use std::env;
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_global_logging()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.jdl|directory> [more inputs...]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let mut inputs: Vec<PathBuf> = Vec::new();
    for arg in &args[1..] {
        let path = Path::new(arg);
        if path.is_file() {
            inputs.push(path.to_path_buf());
        } else if path.is_dir() {
            inputs.extend(discover_documents(path)?);
        } else {
            eprintln!("Error: Input must be a file or directory");
            eprintln!("  Input: {}", path.display());
            std::process::exit(1);
        }
    }

    if inputs.is_empty() {
        eprintln!("Error: No documents found to process");
        std::process::exit(1);
    }

    let mut failures = 0usize;
    for (file_id, input) in inputs.iter().enumerate() {
        if !process_document(input, file_id) {
            failures += 1;
        }
    }

    if inputs.len() > 1 {
        println!();
        logging::print_batch_summary();
    }

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Run one document through the pipeline and write its artifacts.
/// Returns false when the document failed before a report could be
/// produced.
fn process_document(input: &Path, file_id: usize) -> bool {
    logging::set_file_context(input.to_path_buf(), file_id);

    let result = pipeline::process_file(input).and_then(|output| {
        let paths = pipeline::write_artifacts(input, &output)?;
        Ok((output, paths))
    });

    logging::clear_file_context();

    match result {
        Ok((output, (tokens_path, report_path))) => {
            println!("{}:", input.display());
            println!("  tokens: {}", tokens_path.display());
            println!("  report: {}", report_path.display());
            if output.diagnostics.is_empty() {
                println!("  clean, {} tokens", output.metrics.total_tokens);
            } else {
                println!("  {} rule violation(s):", output.diagnostics.len());
                for diagnostic in &output.diagnostics {
                    println!("    {}", diagnostic);
                }
            }
            true
        }
        Err(error) => {
            eprintln!("{}: FAILED [{}]", input.display(), error.error_code());
            eprintln!("  {}", error);
            eprintln!(
                "  hint: {}",
                logging::codes::get_action(error.error_code().as_str())
            );
            false
        }
    }
}

/// Collect every .jdl document directly under a directory, sorted for
/// stable output order
fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut documents: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "jdl") {
            documents.push(path);
        }
    }
    documents.sort();
    Ok(documents)
}

fn print_help(program_name: &str) {
    println!("JDL Compiler v{}", env!("CARGO_PKG_VERSION"));
    println!("Tokenizes and parses JDL documents with inline semantic validation");
    println!();
    println!("USAGE:");
    println!(
        "    {} <input.jdl>            # Process single document",
        program_name
    );
    println!(
        "    {} <directory>            # Process every .jdl file in a directory",
        program_name
    );
    println!();
    println!("OPTIONS:");
    println!("    --help    Show this help message");
    println!();
    println!("OUTPUT:");
    println!("    <input>.tokens.txt    One token per line in text form");
    println!("    <input>.out.txt       Parse tree dump, or the rule violations");
    println!();
    println!("ENVIRONMENT:");
    println!("    JDL_LOGGING_USE_STRUCTURED=true     Emit JSON log lines");
    println!("    JDL_LOGGING_MIN_LEVEL=debug         error|warning|info|debug");
    println!("    JDL_LEXICAL_DETAILED_METRICS=false  Skip token statistics");
}
