use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use basil::{Interpreter, interpreter::{scope::Scope, value::core::Value}};
use clap::Parser;

/// basil is a small scripting language with numbers, strings, lists and
/// first-class functions. Without a script it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells basil to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the value of the last statement of the
    /// script.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        return repl();
    };

    let (name, script) = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => (contents, script),
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        ("<script>".to_string(), contents)
    };

    match Interpreter::new().run(&name, &script) {
        Ok(value) => {
            if args.pipe_mode
               && let Some(last) = last_statement(&value)
            {
                println!("{last}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e.render());
            ExitCode::FAILURE
        },
    }
}

/// Reads, evaluates and echoes lines until stdin closes.
///
/// All lines share one program scope, so bindings survive from one line to
/// the next.
fn repl() -> ExitCode {
    let mut interpreter = Interpreter::new();
    let session = Scope::new_enclosed(interpreter.globals());

    loop {
        print!("basil > ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {},
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
        if line.trim().is_empty() {
            continue;
        }

        match interpreter.run_in("<stdin>", line.trim_end_matches(['\n', '\r']), &session) {
            Ok(Value::List(values)) if values.borrow().len() == 1 => println!("{}", values.borrow()[0].repr()),
            Ok(value) => println!("{}", value.repr()),
            Err(e) => eprintln!("{}", e.render()),
        }
    }
}

/// The value of the last top-level statement, or the value handed to a
/// top-level `RETURN`.
fn last_statement(result: &Value) -> Option<Value> {
    match result {
        Value::List(values) => values.borrow().last().cloned(),
        other => Some(other.clone()),
    }
}
