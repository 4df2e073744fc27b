use std::io::{self, BufRead, Write};

use crate::types::card_data::CardSubmission;

/// Asks the operator whether to write the card. Called before every attempt.
pub trait Confirmer {
    fn confirm(&mut self, submission: &CardSubmission, attempt: u32) -> io::Result<bool>;
}

/// Always yes (`--yes`).
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&mut self, _submission: &CardSubmission, _attempt: u32) -> io::Result<bool> {
        Ok(true)
    }
}

/// Prompts on a terminal. Shows the card once, then asks `(Y/n)` per attempt.
pub struct TerminalConfirmer<R, W> {
    input: R,
    output: W,
}

impl TerminalConfirmer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn preview(&mut self, submission: &CardSubmission) -> io::Result<()> {
        let fields = &submission.fields;
        writeln!(self.output, "=============== card ({}) ===============", submission.deck_name)?;
        writeln!(self.output, "Front: {}", fields.front)?;
        writeln!(self.output, "Back:  {}", fields.back)?;
        writeln!(self.output, "Extra: {}", fields.extra)?;
        if !submission.audio.is_empty() {
            let names: Vec<&str> = submission.audio.iter().map(|a| a.display_name.as_str()).collect();
            writeln!(self.output, "Audio: {}", names.join(", "))?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Confirmer for TerminalConfirmer<R, W> {
    fn confirm(&mut self, submission: &CardSubmission, attempt: u32) -> io::Result<bool> {
        if attempt == 1 {
            self.preview(submission)?;
        }
        write!(self.output, "Add card to Anki? (Y/n): ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            // End of input: nobody is there to say yes
            writeln!(self.output)?;
            return Ok(false);
        }
        let answer = answer.trim().to_lowercase();
        Ok(!(answer == "n" || answer == "no"))
    }
}
