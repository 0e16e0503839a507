//! Pipeline driver: source text in, observable effects out.
//!
//! Owns the interpreter (so globals and the side table survive across REPL
//! lines) and the two error flags the process exit code is derived from.
//! Diagnostics go to stderr; program output goes to the writer the
//! interpreter was built with.

use std::fs;
use std::io::{self, BufRead, Write as _};
use std::path::Path;

use log::{debug, info};

use crate::error::LoxError;
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::Scanner;
use crate::stmt::Stmt;
use crate::token::Token;

pub struct Lox<W: io::Write> {
    interpreter: Interpreter<W>,
    had_error: bool,
    had_runtime_error: bool,
}

impl<W: io::Write> Lox<W> {
    pub fn new(output: W) -> Self {
        Lox {
            interpreter: Interpreter::new(output),
            had_error: false,
            had_runtime_error: false,
        }
    }

    /// Any scan, parse, or resolve error so far.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Any runtime error so far.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Execute the script at `path`.  The caller maps the flags to an exit
    /// code afterwards.
    pub fn run_file(&mut self, path: &Path) -> Result<(), LoxError> {
        let source: String = fs::read_to_string(path)?;

        self.run(&source);

        Ok(())
    }

    /// Read-eval-print loop: one line at a time, error state cleared
    /// between lines, empty lines ignored.
    pub fn run_prompt(&mut self) -> Result<(), LoxError> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            let mut line: String = String::new();

            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }

            let line: &str = line.trim_end();

            if line.is_empty() {
                continue;
            }

            self.run(line);

            self.had_error = false;
            self.had_runtime_error = false;
        }
    }

    /// The linear pipeline: scan → parse → resolve → interpret, each stage
    /// fully consuming its predecessor.  Any syntax or resolve error
    /// suppresses execution.
    pub fn run(&mut self, source: &str) {
        info!("Running {} byte(s) of source", source.len());

        let scanner: Scanner = Scanner::new(source.as_bytes());

        let mut tokens: Vec<Token> = Vec::new();

        for result in scanner {
            match result {
                Ok(token) => tokens.push(token),

                Err(e) => self.report(e),
            }
        }

        let (statements, errors): (Vec<Stmt>, Vec<LoxError>) = Parser::new(tokens).parse();

        for e in errors {
            self.report(e);
        }

        if self.had_error {
            debug!("Syntax errors reported; skipping execution");
            return;
        }

        let resolve_errors: Vec<LoxError> =
            Resolver::new(&mut self.interpreter).resolve(&statements);

        for e in resolve_errors {
            self.report(e);
        }

        if self.had_error {
            debug!("Resolve errors reported; skipping execution");
            return;
        }

        if let Err(e) = self.interpreter.interpret(&statements) {
            self.report(e);
        }
    }

    fn report(&mut self, error: LoxError) {
        eprintln!("{}", error);

        match error {
            LoxError::Runtime { .. } => self.had_runtime_error = true,

            _ => self.had_error = true,
        }
    }
}
