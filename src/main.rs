mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::io::{IsTerminal, Read};
use std::path::Path;
use subsystem_lint::config::{Config, OutputStream};
use subsystem_lint::finding::Severity;
use subsystem_lint::output::{self, OutputFormat};
use subsystem_lint::{check, input, rules};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Commits {
            format,
            markdown,
            stderr,
            input: input_path,
            config: config_path,
        } => {
            let mut config = Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            if stderr {
                config.output.stream = OutputStream::Stderr;
            }

            let format = if markdown {
                OutputFormat::Markdown
            } else {
                format
            };

            let raw = read_input(input_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let commits = input::parse_commits(&raw).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(2);
            });

            let report = check::run_check(&commits, &config.rules);

            if format == OutputFormat::Plain && config.output.stream == OutputStream::Stderr {
                colorize_for_stderr();
            }
            let formatted = output::format_report(&report, format, &config);

            match (format, config.output.stream) {
                (OutputFormat::Plain, OutputStream::Stderr) => eprint!("{formatted}"),
                _ => print!("{formatted}"),
            }

            std::process::exit(if report.passed() { 0 } else { 1 });
        }

        Commands::Title { title } => {
            let verdict = rules::title::check_title(&title);
            if let Some(diagnostic) = verdict.diagnostic() {
                eprintln!("{diagnostic}");
            }
            std::process::exit(if verdict.passed() { 0 } else { 1 });
        }

        Commands::ListRules => {
            let all = rules::all_rules();
            println!("{}", "Built-in Rules".bold().underline());
            println!();

            let mut current_checker = "";
            for rule in &all {
                if rule.checker != current_checker {
                    if !current_checker.is_empty() {
                        println!();
                    }
                    println!("  {}", rule.checker.bold());
                    current_checker = rule.checker;
                }

                println!(
                    "    [{severity}] {id:<26} {message}",
                    severity = severity_label(rule.severity),
                    id = rule.id,
                    message = rule.message,
                );
            }

            println!();
            println!("  Total: {} rules", all.len());
        }

        Commands::Explain { rule_id } => match rules::find_rule(&rule_id) {
            Some(rule) => {
                println!("{}", rule.id.bold());
                println!();
                println!("  Checker:      {}", rule.checker);
                println!("  Severity:     {}", rule.severity);
                println!("  Description:  {}", rule.message);
                println!("  Remediation:  {}", rule.remediation);
            }
            None => {
                eprintln!("Unknown rule: {rule_id}");
                eprintln!("Use 'subsystem-lint list-rules' to see all available rules.");
                std::process::exit(2);
            }
        },
    }
}

fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::Error => "ERROR".red().bold().to_string(),
        Severity::Warning => " WARN".yellow().bold().to_string(),
    }
}

/// Bases colour on stderr instead of stdout, which `colored` checks by default.
fn colorize_for_stderr() {
    let enabled = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    colored::control::set_override(enabled);
}

/// Reads the commit array from `path`, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .map_err(|e| format!("Failed to read input {}: {}", p.display(), e)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            Ok(buf)
        }
    }
}
