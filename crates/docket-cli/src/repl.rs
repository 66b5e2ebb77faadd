//! Host loops feeding lines into a [`Session`].

use std::io::{BufRead, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::session::{Reply, Session};

const PROMPT: &str = "docket> ";

/// Run commands from a reader, writing output to `out`. A failing command
/// is reported and the script continues; returns the number of failures.
pub fn run_script<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> eyre::Result<usize> {
    let mut failures = 0;
    for (number, line) in input.lines().enumerate() {
        let line = line?;
        match session.execute_line(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Continue { output }) => {
                if let Some(output) = output {
                    writeln!(out, "{output}")?;
                }
            }
            Err(e) => {
                failures += 1;
                tracing::warn!(line = number + 1, "command failed");
                writeln!(out, "line {}: {e}", number + 1)?;
            }
        }
    }
    Ok(failures)
}

/// Interactive prompt with line editing and history.
pub fn run_interactive(session: &mut Session) -> eyre::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let stdout = std::io::stdout();

    if let Ok(rendered) = session.render() {
        println!("{}", rendered.text);
    }
    println!("type `help` for commands");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        match session.execute_line(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Continue { output: Some(output) }) => {
                let mut handle = stdout.lock();
                writeln!(handle, "{output}")?;
            }
            Ok(Reply::Continue { output: None }) => {}
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}
