// Command-line interface for quizzer
//
// This binary turns pasted quiz text into stored quizzes, lets you take them in the
// terminal, and shares or exports the answers.
//
// Parsing, serialization and reports come from quizzer-babel; records live in a JSON
// file managed by quizzer-store; every knob comes from quizzer-config.
//
// Usage:
//  quizzer new <input|-> [--name <name>]         - Parse text and store a new quiz
//  quizzer list [--json]                         - List stored quizzes
//  quizzer show <id>                             - Print a quiz as editable text
//  quizzer edit <id> <input|-> [--name <name>]   - Replace a quiz's questions (and name)
//  quizzer take <id> [--resume]                  - Answer a quiz on stdin
//  quizzer share <id>                            - Print the answers report
//  quizzer export <id> [-o <file>] [--to <fmt>]  - Write the answers report to a file
//  quizzer delete <id>                           - Remove a stored quiz
//  quizzer <input> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  quizzer format <input>                        - Print quiz text in canonical form
//
// Extra Parameters:
//
// Config values can be overridden per run with --extra-<key> [value]:
//  keep-empty, label-options, store, export-dir, answer-label, unresolved-marker
// Example:
//  quizzer new notes.quiz --extra-keep-empty true

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{debug, warn};
use quizzer_babel::formats::quiz::EmptyQuestionPolicy;
use quizzer_babel::publish::{publish_with, suggested_filename, ExportSpec, PublishArtifact};
use quizzer_babel::session::QuizSession;
use quizzer_babel::{FormatError, FormatRegistry, Quiz, QuizId};
use quizzer_cli::take;
use quizzer_config::{Loader, QuizzerConfig};
use quizzer_store::{JsonFileStore, QuizStore};
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn id_arg() -> Arg {
    Arg::new("id")
        .help("Quiz id (see `quizzer list`)")
        .required(true)
        .index(1)
        .value_parser(clap::value_parser!(u64))
}

fn input_arg(index: usize) -> Arg {
    Arg::new("input")
        .help("Quiz text file, or '-' for stdin")
        .required(true)
        .index(index)
        .value_hint(ValueHint::FilePath)
}

fn name_arg() -> Arg {
    Arg::new("name")
        .long("name")
        .short('n')
        .help("Quiz name")
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("quizzer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn pasted text into quizzes, take them, and share the answers")
        .long_about(
            "quizzer parses loosely formatted quiz text into questions and options.\n\n\
            Quiz text:\n  \
            # What is 2+2?        prompts start with '#', '1.' or '1)'\n  \
            - 3                   options start with '-', '•', 'o' or 'a)'\n  \
            - 4\n\n\
            Lines matching neither are ignored.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration for one run.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            quizzer new notes.quiz --name Geography   # Store a quiz\n  \
            quizzer take 1                            # Answer it\n  \
            quizzer share 1                           # Print the answers report\n  \
            quizzer notes.quiz --to json              # Convert without storing",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quizzer.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("new")
                .about("Parse quiz text and store it as a new quiz")
                .long_about(
                    "Parse quiz text and store it as a new quiz.\n\n\
                    The quiz is only stored if at least one question is found.\n\
                    The new quiz id is printed to stdout.\n\n\
                    Examples:\n  \
                    quizzer new notes.quiz                  # Name defaults to the file stem\n  \
                    pbpaste | quizzer new - --name Biology  # Read from stdin",
                )
                .arg(input_arg(1))
                .arg(name_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input format (auto-detected from the file extension, else 'quiz')")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("list").about("List stored quizzes").arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the records as JSON")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(
            Command::new("show")
                .about("Print a stored quiz as editable quiz text")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("edit")
                .about("Replace a stored quiz's questions (and optionally its name)")
                .long_about(
                    "Replace a stored quiz's questions with freshly parsed text.\n\n\
                    Use `quizzer show <id>` to get the current text. Recorded answers are kept.\n\
                    Nothing changes if the new text contains no questions.\n\n\
                    Examples:\n  \
                    quizzer show 1 > geo.quiz && $EDITOR geo.quiz && quizzer edit 1 geo.quiz",
                )
                .arg(id_arg())
                .arg(input_arg(2))
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("take")
                .about("Answer a stored quiz, one question per line of stdin")
                .long_about(
                    "Answer a stored quiz interactively.\n\n\
                    For each question type:\n  \
                    <text>     select the option with exactly that text\n  \
                    <letter>   otherwise, select the option with that letter\n  \
                    (empty)    move on, keeping the current answer\n  \
                    -          clear the answer and move on\n  \
                    <          go back one question\n\n\
                    The answers are saved when the last question is answered or input ends.",
                )
                .arg(id_arg())
                .arg(
                    Arg::new("resume")
                        .long("resume")
                        .help("Start from the answers already recorded")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("share")
                .about("Print the answers report of a stored quiz")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Write the answers report of a stored quiz to a file")
                .long_about(
                    "Write a stored quiz to a file.\n\n\
                    Defaults to the answers report in `<export dir>/<quiz name>.txt`.\n\
                    The written path is printed to stdout.",
                )
                .arg(id_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (defaults to 'report')")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a stored quiz")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between quiz formats (default command)")
                .long_about(
                    "Convert a quiz file between formats without storing it.\n\n\
                    Supported formats:\n  \
                    - quiz:   quiz text (.quiz)\n  \
                    - json:   quiz record (.json)\n  \
                    - report: answers report (.txt, output only)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    quizzer convert notes.quiz --to json\n  \
                    quizzer notes.quiz --to report -o notes.txt",
                )
                .arg(input_arg(1))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Print quiz text in canonical form")
                .long_about(
                    "Parse quiz text and re-serialize it with '# ' prompts and '- ' options.\n\n\
                    Output is always written to stdout.",
                )
                .arg(input_arg(1)),
        )
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file argument means "convert"
            let first = cleaned_args.get(1).map(String::as_str);
            match first {
                Some(first)
                    if !first.starts_with('-')
                        && first != "help"
                        && cli.find_subcommand(first).is_none() =>
                {
                    let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                    new_args.extend_from_slice(&cleaned_args[1..]);
                    match cli.try_get_matches_from(&new_args) {
                        Ok(m) => m,
                        Err(e2) => e2.exit(),
                    }
                }
                _ => e.exit(),
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        warn!("ignoring unknown parameter --extra-{key}");
    }

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("new", sub)) => {
            let input = required(sub, "input");
            let name = sub.get_one::<String>("name").cloned();
            let from = sub.get_one::<String>("from").map(|s| s.as_str());
            handle_new_command(input, name, from, &config);
        }
        Some(("list", sub)) => handle_list_command(sub.get_flag("json"), &config),
        Some(("show", sub)) => handle_show_command(required_id(sub), &config),
        Some(("edit", sub)) => {
            let input = required(sub, "input");
            let name = sub.get_one::<String>("name").cloned();
            handle_edit_command(required_id(sub), input, name, &config);
        }
        Some(("take", sub)) => handle_take_command(required_id(sub), sub.get_flag("resume"), &config),
        Some(("share", sub)) => handle_share_command(required_id(sub), &config),
        Some(("export", sub)) => {
            let to = sub.get_one::<String>("to").map(|s| s.as_str()).unwrap_or("report");
            let output = sub.get_one::<String>("output").map(PathBuf::from);
            handle_export_command(required_id(sub), to, output, &config);
        }
        Some(("delete", sub)) => handle_delete_command(required_id(sub), &config),
        Some(("convert", sub)) => {
            let input = required(sub, "input");
            let registry = registry_from_config(&config);
            let from = match sub.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match detect_input_format(&registry, input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };
            let to = required(sub, "to");
            let output = sub.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &config);
        }
        Some(("format", sub)) => {
            handle_convert_command(required(sub, "input"), "quiz", "quiz", None, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| fail(format!("missing argument '{name}'")))
}

fn required_id(matches: &ArgMatches) -> QuizId {
    matches
        .get_one::<u64>("id")
        .copied()
        .unwrap_or_else(|| fail("missing quiz id"))
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// Handle the new command
fn handle_new_command(
    input: &str,
    name: Option<String>,
    from: Option<&str>,
    config: &QuizzerConfig,
) {
    let registry = registry_from_config(config);
    let from = from
        .map(str::to_string)
        .or_else(|| detect_input_format(&registry, input))
        .unwrap_or_else(|| "quiz".to_string());

    let source = read_source(input);
    let mut quiz = parse_or_exit(&registry, &source, &from, input, "quiz not created");
    quiz.name = name.unwrap_or_else(|| default_name(input));

    let mut store = open_store(config);
    let id = store.insert(&quiz).unwrap_or_else(|e| fail(e));
    println!("{id}");
}

/// Handle the list command
fn handle_list_command(json: bool, config: &QuizzerConfig) {
    let store = open_store(config);
    let quizzes = store.list_all().unwrap_or_else(|e| fail(e));

    if json {
        let text = serde_json::to_string_pretty(&quizzes).unwrap_or_else(|e| fail(e));
        println!("{text}");
        return;
    }

    if quizzes.is_empty() {
        println!("No quizzes stored");
        return;
    }
    for quiz in &quizzes {
        println!(
            "{}\t{}\t{} questions\t{}/{} answered",
            quiz.id.unwrap_or_default(),
            quiz.name,
            quiz.questions.len(),
            quiz.answered_count(),
            quiz.questions.len()
        );
    }
}

/// Handle the show command
fn handle_show_command(id: QuizId, config: &QuizzerConfig) {
    let quiz = load_quiz(&open_store(config), id);
    let registry = registry_from_config(config);
    let text = registry
        .serialize(&quiz, "quiz")
        .unwrap_or_else(|e| fail(e));
    println!("{text}");
}

/// Handle the edit command
fn handle_edit_command(id: QuizId, input: &str, name: Option<String>, config: &QuizzerConfig) {
    let mut store = open_store(config);
    let existing = load_quiz(&store, id);

    let registry = registry_from_config(config);
    let source = read_source(input);
    let parsed = parse_or_exit(&registry, &source, "quiz", input, "quiz left unchanged");

    let updated = Quiz {
        name: name.unwrap_or(existing.name.clone()),
        questions: parsed.questions,
        ..existing
    };
    if !store.update(&updated).unwrap_or_else(|e| fail(e)) {
        fail(format!("no quiz with id {id}"));
    }
    println!("Updated quiz {id}");
}

/// Handle the take command
fn handle_take_command(id: QuizId, resume: bool, config: &QuizzerConfig) {
    let mut store = open_store(config);
    let quiz = load_quiz(&store, id);

    let session = if resume {
        QuizSession::resume(&quiz)
    } else {
        QuizSession::start(&quiz)
    }
    .unwrap_or_else(|e| fail(e));

    let stdin = io::stdin();
    let responses =
        take::run(session, stdin.lock(), io::stdout().lock()).unwrap_or_else(|e| fail(e));

    let answered = quiz.clone().with_responses(responses);
    store.update(&answered).unwrap_or_else(|e| fail(e));
    println!(
        "\nSaved answers for quiz {id} ({}/{} answered)",
        answered.answered_count(),
        answered.questions.len()
    );
}

/// Handle the share command
fn handle_share_command(id: QuizId, config: &QuizzerConfig) {
    let quiz = load_quiz(&open_store(config), id);
    let registry = registry_from_config(config);
    match publish_with(&registry, ExportSpec::new(&quiz, "report")) {
        Ok(PublishArtifact::InMemory(text)) => print!("{text}"),
        Ok(PublishArtifact::File(path)) => println!("{}", path.display()),
        Err(e) => fail(e),
    }
}

/// Handle the export command
fn handle_export_command(
    id: QuizId,
    to: &str,
    output: Option<PathBuf>,
    config: &QuizzerConfig,
) {
    let quiz = load_quiz(&open_store(config), id);
    let registry = registry_from_config(config);
    let path =
        output.unwrap_or_else(|| config.export.directory.join(suggested_filename(&quiz.name)));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).unwrap_or_else(|e| fail(format!("{}: {e}", parent.display())));
    }

    match publish_with(&registry, ExportSpec::new(&quiz, to).with_output_path(&path)) {
        Ok(PublishArtifact::File(path)) => println!("{}", path.display()),
        Ok(PublishArtifact::InMemory(text)) => print!("{text}"),
        Err(e) => fail(e),
    }
}

/// Handle the delete command
fn handle_delete_command(id: QuizId, config: &QuizzerConfig) {
    let mut store = open_store(config);
    if !store.delete(id).unwrap_or_else(|e| fail(e)) {
        fail(format!("no quiz with id {id}"));
    }
    println!("Deleted quiz {id}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    config: &QuizzerConfig,
) {
    let registry = registry_from_config(config);

    if let Err(e) = registry.get(from) {
        fail(e);
    }
    if let Err(e) = registry.get(to) {
        fail(e);
    }

    let source = read_source(input);
    let quiz = parse_or_exit(&registry, &source, from, input, "nothing to convert");

    let mut text = registry.serialize(&quiz, to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    if to == "quiz" {
        text.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &QuizzerConfig) {
    let registry = registry_from_config(config);
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let direction = match (format.supports_parsing(), format.supports_serialization()) {
                (true, true) => "in/out",
                (true, false) => "in",
                (false, true) => "out",
                (false, false) => "-",
            };
            println!("  {name:<8} {direction:<7} {}", format.description());
        }
    }
}

fn parse_or_exit(
    registry: &FormatRegistry,
    source: &str,
    from: &str,
    input: &str,
    consequence: &str,
) -> Quiz {
    registry.parse(source, from).unwrap_or_else(|e| match e {
        FormatError::NoQuestions => fail(format!("no questions found in '{input}'; {consequence}")),
        other => fail(other),
    })
}

/// Source format for `input`, judged by its extension. Extensions of
/// output-only formats (`.txt` is the report) are read as quiz text.
fn detect_input_format(registry: &FormatRegistry, input: &str) -> Option<String> {
    let detected = registry.detect_format_from_filename(input)?;
    match registry.get(&detected) {
        Ok(format) if format.supports_parsing() => Some(detected),
        _ => Some("quiz".to_string()),
    }
}

fn read_source(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| fail(format!("could not read stdin: {e}")));
        return source;
    }
    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn default_name(input: &str) -> String {
    if input == "-" {
        return String::new();
    }
    Path::new(input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn open_store(config: &QuizzerConfig) -> JsonFileStore {
    debug!("using store {}", config.store.path.display());
    JsonFileStore::open(&config.store.path).unwrap_or_else(|e| fail(e))
}

fn load_quiz(store: &impl QuizStore, id: QuizId) -> Quiz {
    match store.get(id) {
        Ok(Some(quiz)) => quiz,
        Ok(None) => fail(format!("no quiz with id {id}")),
        Err(e) => fail(e),
    }
}

fn registry_from_config(config: &QuizzerConfig) -> FormatRegistry {
    FormatRegistry::with_rules((&config.parsing).into(), (&config.report).into())
}

fn load_cli_config(explicit_path: Option<&str>) -> QuizzerConfig {
    let loader = Loader::new().with_optional_file("quizzer.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut QuizzerConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["keep-empty", "keep-empty-questions"]) {
        config.parsing.empty_questions = if parse_bool_arg("keep-empty", &raw) {
            EmptyQuestionPolicy::Keep
        } else {
            EmptyQuestionPolicy::Drop
        };
    }
    if let Some(raw) = take_override(extra_params, &["label-options", "labels"]) {
        config.parsing.label_options = parse_bool_arg("label-options", &raw);
    }
    if let Some(path) = take_override(extra_params, &["store", "store-path"]) {
        config.store.path = PathBuf::from(path);
    }
    if let Some(dir) = take_override(extra_params, &["export-dir"]) {
        config.export.directory = PathBuf::from(dir);
    }
    if let Some(label) = take_override(extra_params, &["answer-label"]) {
        config.report.answer_label = label;
    }
    if let Some(raw) = take_override(extra_params, &["unresolved-marker"]) {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(marker), None) => config.report.unresolved_marker = marker,
            _ => {
                eprintln!("Invalid marker '{raw}' for --extra-unresolved-marker (expected one character)");
                std::process::exit(1);
            }
        }
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let input = args(&["quizzer", "list"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, input);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_value_and_flag() {
        let input = args(&[
            "quizzer",
            "new",
            "notes.quiz",
            "--extra-store",
            "/tmp/q.json",
            "--name",
            "Geo",
            "--extra-keep-empty",
        ]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, args(&["quizzer", "new", "notes.quiz", "--name", "Geo"]));
        assert_eq!(extra.len(), 2);
        assert_eq!(extra.get("store"), Some(&"/tmp/q.json".to_string()));
        assert_eq!(extra.get("keep-empty"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_flag_followed_by_option() {
        let input = args(&["quizzer", "format", "a.quiz", "--extra-labels", "--config", "c.toml"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(
            cleaned,
            args(&["quizzer", "format", "a.quiz", "--config", "c.toml"])
        );
        assert_eq!(extra.get("labels"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_allows_extras_alias() {
        let input = args(&["quizzer", "export", "1", "--extras-export-dir", "out"]);
        let (cleaned, extra) = parse_extra_args(&input);
        assert_eq!(cleaned, args(&["quizzer", "export", "1"]));
        assert_eq!(extra.get("export-dir"), Some(&"out".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("keep-empty".to_string(), "yes".to_string());
        extras.insert("labels".to_string(), "true".to_string());
        extras.insert("store".to_string(), "elsewhere.json".to_string());
        extras.insert("answer-label".to_string(), "Answer".to_string());
        extras.insert("unresolved-marker".to_string(), "*".to_string());
        extras.insert("unknown".to_string(), "value".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(config.parsing.empty_questions, EmptyQuestionPolicy::Keep);
        assert!(config.parsing.label_options);
        assert_eq!(config.store.path, PathBuf::from("elsewhere.json"));
        assert_eq!(config.report.answer_label, "Answer");
        assert_eq!(config.report.unresolved_marker, '*');
        assert_eq!(extras.len(), 1);
        assert!(extras.contains_key("unknown"));
    }

    #[test]
    fn registry_follows_config_rules() {
        let mut config = load_cli_config(None);
        config.parsing.empty_questions = EmptyQuestionPolicy::Keep;
        let registry = registry_from_config(&config);
        let quiz = registry.parse("# Lonely", "quiz").unwrap();
        assert_eq!(quiz.questions.len(), 1);
    }

    #[test]
    fn input_format_falls_back_to_quiz_text() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(detect_input_format(&registry, "notes.txt").as_deref(), Some("quiz"));
        assert_eq!(detect_input_format(&registry, "quiz.json").as_deref(), Some("json"));
        assert_eq!(detect_input_format(&registry, "geo.quiz").as_deref(), Some("quiz"));
        assert_eq!(detect_input_format(&registry, "notes.md"), None);
    }

    #[test]
    fn default_name_uses_file_stem() {
        assert_eq!(default_name("notes/geography.quiz"), "geography");
        assert_eq!(default_name("-"), "");
    }

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
