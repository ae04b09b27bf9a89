use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the subcommands from src/main.rs
// Build scripts can't reach the binary's modules
fn id_arg() -> Arg {
    Arg::new("id").required(true).index(1)
}

fn input_arg(index: usize) -> Arg {
    Arg::new("input")
        .required(true)
        .index(index)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("quizzer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn pasted text into quizzes, take them, and share the answers")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("new")
                .about("Parse quiz text and store it as a new quiz")
                .arg(input_arg(1))
                .arg(Arg::new("name").long("name").short('n'))
                .arg(Arg::new("from").long("from")),
        )
        .subcommand(
            Command::new("list")
                .about("List stored quizzes")
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("show").about("Print a stored quiz").arg(id_arg()))
        .subcommand(
            Command::new("edit")
                .about("Replace a stored quiz's questions")
                .arg(id_arg())
                .arg(input_arg(2))
                .arg(Arg::new("name").long("name").short('n')),
        )
        .subcommand(
            Command::new("take")
                .about("Answer a stored quiz")
                .arg(id_arg())
                .arg(Arg::new("resume").long("resume").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("share").about("Print the answers report").arg(id_arg()))
        .subcommand(
            Command::new("export")
                .about("Write the answers report to a file")
                .arg(id_arg())
                .arg(Arg::new("to").long("to"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("delete").about("Delete a stored quiz").arg(id_arg()))
        .subcommand(
            Command::new("convert")
                .about("Convert between quiz formats")
                .arg(input_arg(1))
                .arg(Arg::new("from").long("from"))
                .arg(Arg::new("to").long("to").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Print quiz text in canonical form")
                .arg(input_arg(1)),
        );

    generate_to(Bash, &mut cmd, "quizzer", &outdir)?;
    generate_to(Zsh, &mut cmd, "quizzer", &outdir)?;
    generate_to(Fish, &mut cmd, "quizzer", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
