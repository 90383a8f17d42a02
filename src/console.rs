//! Line-oriented console input.
//!
//! Factories never read stdin directly: they ask a [`FieldSource`] for each
//! value. [`Prompter`] answers from any `BufRead` (stdin in the demos) and
//! [`ScriptedAnswers`] answers from a fixed list.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::str::FromStr;

use crate::error::InputError;

pub trait FieldSource {
    /// Returns the answer for `label`, trimmed of surrounding whitespace.
    fn field(&mut self, label: &str) -> Result<String, InputError>;
}

/// Reads a field and parses it with `FromStr`.
pub fn parse_field<T>(source: &mut dyn FieldSource, label: &str) -> Result<T, InputError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = source.field(label)?;
    raw.parse::<T>()
        .map_err(|err| InputError::invalid(label, raw.as_str(), err.to_string()))
}

// =============================================================================
// Prompter: interactive answers
// =============================================================================

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Prompter::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Prints a numbered menu and asks for a choice.
    pub fn menu(&mut self, title: &str, options: &[&str]) -> Result<String, InputError> {
        writeln!(self.output, "{title}")?;
        for (idx, option) in options.iter().enumerate() {
            writeln!(self.output, "{} - {}", idx + 1, option)?;
        }
        self.field("Your choice")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> FieldSource for Prompter<R, W> {
    fn field(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput {
                label: label.to_string(),
            });
        }
        Ok(line.trim().to_string())
    }
}

// =============================================================================
// ScriptedAnswers: canned answers in order
// =============================================================================

#[derive(Debug, Default, Clone)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedAnswers {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Labels asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl FieldSource for ScriptedAnswers {
    fn field(&mut self, label: &str) -> Result<String, InputError> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| InputError::EndOfInput {
                label: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompter_trims_and_echoes_label() {
        let mut prompter = Prompter::new(Cursor::new("  Toyota \n"), Vec::new());
        let answer = prompter.field("Enter car brand").unwrap();
        assert_eq!(answer, "Toyota");

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "Enter car brand: ");
    }

    #[test]
    fn test_prompter_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let result = prompter.field("Enter number of seats");
        assert!(matches!(result, Err(InputError::EndOfInput { .. })));
    }

    #[test]
    fn test_menu_numbers_options_from_one() {
        let mut prompter = Prompter::new(Cursor::new("2\n"), Vec::new());
        let choice = prompter.menu("Choose document type:", &["Report", "Resume"]).unwrap();
        assert_eq!(choice, "2");

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.starts_with("Choose document type:\n1 - Report\n2 - Resume\n"));
        assert!(output.ends_with("Your choice: "));
    }

    #[test]
    fn test_parse_field_reports_bad_value() {
        let mut answers = ScriptedAnswers::new(["forty"]);
        let result: Result<u32, _> = parse_field(&mut answers, "Enter number of seats");
        match result {
            Err(InputError::Invalid { label, value, .. }) => {
                assert_eq!(label, "Enter number of seats");
                assert_eq!(value, "forty");
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_scripted_answers_record_labels() {
        let mut answers = ScriptedAnswers::new(["a", "b"]);
        answers.field("first").unwrap();
        answers.field("second").unwrap();
        assert_eq!(answers.asked(), ["first", "second"]);
        assert_eq!(answers.remaining(), 0);
        assert!(answers.field("third").is_err());
    }
}
