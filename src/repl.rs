use std::{io, path::PathBuf};

use rustyline::{DefaultEditor, error::ReadlineError};
use tally::interpreter::session::Session;

const HELP: &str = "\
Enter one or more statements separated by ';', for example:
    x = 10; y = x / 2; y + 3
Operators, loosest to tightest:
    =               assignment (right-associative)
    + -             addition, subtraction
    * / %           multiplication, division, integer remainder
    + - (prefix)    sign
    **              power
Commands:
    help            show this text
    vars            list variables
    history         list previous input
    clear           clear the history
    exit, quit      leave (Ctrl-D works too)";

/// Interactive shell around a [`Session`].
pub struct Repl {
    editor:       DefaultEditor,
    session:      Session,
    prompt:       String,
    history_file: Option<PathBuf>,
}

impl Repl {
    /// Creates the editor and loads the history file, if one is given.
    ///
    /// A history file that exists but cannot be loaded is left untouched: the
    /// shell warns and does not save history on exit.
    pub fn new(prompt: String, mut history_file: Option<PathBuf>) -> rustyline::Result<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &history_file
           && let Err(e) = editor.load_history(path)
           && !is_missing_file(&e)
        {
            eprintln!("warning: history from '{}' not loaded, it will not be saved either: {e}",
                      path.display());
            history_file = None;
        }

        Ok(Self { editor,
                  session: Session::new(),
                  prompt,
                  history_file })
    }

    /// Reads and runs lines until `exit`, `quit` or end of input.
    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("Enter an expression (or 'exit' to quit, 'help' for help):");

        loop {
            let line = match self.editor.readline(&self.prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e),
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line {
                "exit" | "quit" => break,
                "help" => println!("{HELP}"),
                "vars" => self.print_variables(),
                "history" => self.print_history(),
                "clear" => self.editor.clear_history()?,
                _ => {
                    self.editor.add_history_entry(line)?;
                    self.evaluate(line);
                },
            }
        }

        if let Some(path) = &self.history_file {
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    fn evaluate(&mut self, line: &str) {
        match self.session.run(line) {
            Ok(results) => results.iter().for_each(|value| println!("{value}")),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    fn print_variables(&self) {
        let mut variables: Vec<_> = self.session.context().variables().collect();
        variables.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in variables {
            println!("{name} = {value}");
        }
    }

    fn print_history(&self) {
        for (index, entry) in self.editor.history().iter().enumerate() {
            println!("{:>4}  {entry}", index + 1);
        }
    }
}

/// `true` if loading history failed only because the file does not exist yet.
fn is_missing_file(error: &ReadlineError) -> bool {
    matches!(error, ReadlineError::Io(e) if e.kind() == io::ErrorKind::NotFound)
}
