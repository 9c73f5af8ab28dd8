// Logitty: Propositional-Logic Formula Analyzer with Tree Visualization

mod export;
mod parser;
mod ui;

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use export::export;
use parser::{Analysis, Token};
use ui::App;

/// The demo formulas loaded when no file is given
fn demo_formulas() -> Vec<String> {
    [
        "p",
        "~q",
        "(p^q)",
        "(0=>(ros))",
        "^(p^q)",
        "(p<=>~p)",
        "((p=>q)^p)",
        "(*(p^(qor))os)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] [FILE]", program_name);
    eprintln!();
    eprintln!("Analyze propositional-logic formulas. With no FILE, a built-in");
    eprintln!("demo set is loaded. FILE holds one formula per line; blank");
    eprintln!("lines are skipped.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -b, --batch      Print a report per formula instead of the TUI");
    eprintln!("      --dot DIR    With --batch, write Graphviz .dot files to DIR");
    eprintln!("  -h, --help       Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {}                  # Explore the demo formulas in the TUI",
        program_name
    );
    eprintln!(
        "  {} formulas.txt     # Explore your own formulas",
        program_name
    );
    eprintln!(
        "  {} -b --dot out     # Batch report plus .dot files for the demos",
        program_name
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("logitty").to_string();

    let mut batch = false;
    let mut dot_dir: Option<PathBuf> = None;
    let mut file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage(&program_name);
                return Ok(());
            }
            "-b" | "--batch" => batch = true,
            "--dot" => {
                i += 1;
                match args.get(i) {
                    Some(dir) => dot_dir = Some(PathBuf::from(dir)),
                    None => {
                        eprintln!("Error: --dot needs a directory argument");
                        eprintln!();
                        print_usage(&program_name);
                        std::process::exit(1);
                    }
                }
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", arg);
                eprintln!();
                print_usage(&program_name);
                std::process::exit(1);
            }
            arg => {
                if file.is_some() {
                    eprintln!("Error: More than one input file given");
                    eprintln!();
                    print_usage(&program_name);
                    std::process::exit(1);
                }
                file = Some(arg.to_string());
            }
        }
        i += 1;
    }

    if dot_dir.is_some() && !batch {
        eprintln!("Error: --dot requires --batch");
        std::process::exit(1);
    }

    // Collect formulas
    let formulas: Vec<String> = match &file {
        Some(path) => {
            if !Path::new(path).exists() {
                eprintln!("Error: File '{}' not found", path);
                std::process::exit(1);
            }
            let text = fs::read_to_string(path)?;
            let formulas: Vec<String> = text
                .lines()
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| !line.trim().is_empty())
                .map(String::from)
                .collect();
            if formulas.is_empty() {
                eprintln!("Error: No formulas found in '{}'", path);
                std::process::exit(1);
            }
            formulas
        }
        None => demo_formulas(),
    };

    eprintln!("Analyzing {} formula(s)...", formulas.len());
    let analyses: Vec<Analysis> = formulas.iter().map(|f| Analysis::new(f)).collect();

    if batch {
        for analysis in &analyses {
            print_report(analysis);
        }

        if let Some(dir) = &dot_dir {
            write_dot_files(dir, &analyses)?;
        }

        let valid = analyses.iter().filter(|a| a.is_valid()).count();
        eprintln!("Done: {}/{} formulas valid.", valid, analyses.len());
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(analyses);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Print one formula's console report to stdout
fn print_report(analysis: &Analysis) {
    println!("{}", "=".repeat(40));
    println!("Formula: {}", analysis.source);
    println!("{}", "=".repeat(40));

    println!("Tokens:");
    if analysis.tokens.is_empty() {
        println!("  (none)");
    }
    for token in &analysis.tokens {
        println!("  {}: {}", token.kind_name(), token.lexeme());
    }

    if !analysis.lexical_errors.is_empty() {
        println!("Lexical errors:");
        for error in &analysis.lexical_errors {
            println!("  {}", error);
        }
    }

    match &analysis.result {
        Ok(ast) => {
            println!("Formula is VALID");
            println!("Canonical form: {}", ast);
        }
        Err(error) => {
            println!("Formula is INVALID");
            println!("  {}", error);
        }
    }
    println!();
}

/// Write `ast_<name>.dot` and `chain_<name>.dot` for each analysis
fn write_dot_files(dir: &Path, analyses: &[Analysis]) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    for analysis in analyses {
        let name = artifact_name(&analysis.source);

        if let Ok(ast) = &analysis.result {
            let path = dir.join(format!("ast_{}.dot", name));
            fs::write(&path, export(ast).to_dot())?;
            eprintln!("Wrote {}", path.display());
        }

        let path = dir.join(format!("chain_{}.dot", name));
        fs::write(&path, chain_dot(&analysis.tokens))?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}

/// Artifact file stem: spaces become `_`, parentheses are stripped
fn artifact_name(source: &str) -> String {
    source
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// The linear start→token→…→accept chain over a token stream, as DOT text.
///
/// Purely illustrative: one state per token in source order, with an ε-edge
/// from the last state into a double-circled accept state.
fn chain_dot(tokens: &[Token]) -> String {
    let mut out = String::from("digraph token_chain {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str("    node [shape=circle];\n");
    out.push_str("    start [label=\"start\"];\n");

    for (i, token) in tokens.iter().enumerate() {
        let _ = writeln!(out, "    q{} [label=\"{}\"];", i, token.lexeme());
    }
    out.push_str("    accept [label=\"accept\" shape=doublecircle];\n");

    let mut prev = String::from("start");
    for i in 0..tokens.len() {
        let _ = writeln!(out, "    {} -> q{};", prev, i);
        prev = format!("q{}", i);
    }
    let _ = writeln!(out, "    {} -> accept [label=\"ε\"];", prev);

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_formulas_match_expected_verdicts() {
        let verdicts: Vec<bool> = demo_formulas()
            .iter()
            .map(|f| Analysis::new(f).is_valid())
            .collect();
        assert_eq!(
            verdicts,
            [true, true, true, true, false, true, true, true]
        );
    }

    #[test]
    fn test_artifact_name_scheme() {
        assert_eq!(artifact_name("(p^q)"), "p^q");
        assert_eq!(artifact_name("p o q"), "p_o_q");
        assert_eq!(artifact_name("(0=>(ros))"), "0=>ros");
    }

    #[test]
    fn test_chain_dot_links_states_in_token_order() {
        let analysis = Analysis::new("~p");
        let dot = chain_dot(&analysis.tokens);
        assert!(dot.contains("q0 [label=\"~\"];"));
        assert!(dot.contains("q1 [label=\"p\"];"));
        assert!(dot.contains("start -> q0;"));
        assert!(dot.contains("q0 -> q1;"));
        assert!(dot.contains("q1 -> accept [label=\"ε\"];"));
    }

    #[test]
    fn test_chain_dot_of_empty_stream_accepts_from_start() {
        let dot = chain_dot(&[]);
        assert!(dot.contains("start -> accept [label=\"ε\"];"));
    }
}
