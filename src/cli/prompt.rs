//! Choice prompts for interactive sessions

use std::io::{BufRead, Write};

use crate::core::error::{CharforgeError, Result};

/// Source of user decisions during a build session
///
/// Indices returned refer to positions in the `options` slice passed in.
pub trait ChoiceProvider {
    /// Pick exactly one option
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize>;

    /// Pick `count` distinct options, in the order picked
    fn choose_many(&mut self, prompt: &str, options: &[String], count: usize) -> Result<Vec<usize>>;

    /// Free text, never empty
    fn text(&mut self, prompt: &str) -> Result<String>;

    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Numbered menus over any line reader and writer
///
/// Invalid answers re-prompt; end of input aborts the session.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<String> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CharforgeError::Aborted);
        }
        Ok(line.trim().to_string())
    }

    fn print_menu(&mut self, prompt: &str, options: &[String]) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", prompt)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {:>2}) {}", i + 1, option)?;
        }
        Ok(())
    }
}

/// 1-based menu number, or an option name typed out in full
fn parse_choice(answer: &str, options: &[String]) -> Option<usize> {
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=options.len()).contains(&n).then(|| n - 1);
    }
    options.iter().position(|o| o.eq_ignore_ascii_case(answer))
}

impl<R: BufRead, W: Write> ChoiceProvider for TerminalPrompter<R, W> {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            return Err(CharforgeError::InvalidConfig(format!("nothing to choose for '{}'", prompt)));
        }

        self.print_menu(prompt, options)?;
        loop {
            let answer = self.read_answer()?;
            match parse_choice(&answer, options) {
                Some(index) => return Ok(index),
                None => writeln!(self.output, "Enter a number from 1 to {}", options.len())?,
            }
        }
    }

    fn choose_many(&mut self, prompt: &str, options: &[String], count: usize) -> Result<Vec<usize>> {
        if count > options.len() {
            return Err(CharforgeError::InvalidConfig(format!(
                "'{}' needs {} picks from {} options",
                prompt,
                count,
                options.len()
            )));
        }

        if count == 0 {
            return Ok(Vec::new());
        }

        self.print_menu(&format!("{} (pick {}, comma separated)", prompt, count), options)?;
        loop {
            let answer = self.read_answer()?;
            let picks: Option<Vec<usize>> = answer
                .split(',')
                .map(|part| parse_choice(part.trim(), options))
                .collect();

            match picks {
                Some(picks) if picks.len() == count && !has_duplicates(&picks) => return Ok(picks),
                _ => writeln!(self.output, "Pick {} different options from 1 to {}", count, options.len())?,
            }
        }
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", prompt)?;
        loop {
            let answer = self.read_answer()?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        writeln!(self.output)?;
        writeln!(self.output, "{} [y/n]", prompt)?;
        loop {
            match self.read_answer()?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Answer y or n")?,
            }
        }
    }
}

fn has_duplicates(picks: &[usize]) -> bool {
    picks
        .iter()
        .enumerate()
        .any(|(i, pick)| picks[..i].contains(pick))
}
