//! Hints typed in by a person playing the real game

use super::{HintProvider, HintResult, ProviderError};
use crate::core::{Hint, Word};
use std::io::{self, BufRead, Write};

/// Provider that asks a human for the game's feedback
///
/// Accepted answers:
/// - a hint such as `GY-GY`, `21021` or `🟩🟨⬜🟩🟨`
/// - `win` when the game shows all greens
/// - `reject` when the game does not accept the word
/// - `quit` to stop
pub struct ManualInputProvider {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl ManualInputProvider {
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Read from stdin and prompt on stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }

    fn read_line(&mut self) -> Result<String, ProviderError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ProviderError::Aborted);
        }
        Ok(line.trim().to_lowercase())
    }
}

impl HintProvider for ManualInputProvider {
    fn provide(&mut self, guess: &Word, attempt: usize) -> Result<HintResult, ProviderError> {
        writeln!(
            self.output,
            "Guess {}: {}",
            attempt + 1,
            guess.text().to_uppercase()
        )?;

        loop {
            write!(self.output, "Feedback (G/Y/-, 'win', 'reject', 'quit'): ")?;
            self.output.flush()?;

            let answer = self.read_line()?;
            match answer.as_str() {
                "quit" | "q" | "exit" => return Err(ProviderError::Aborted),
                "reject" | "r" | "invalid" => return Ok(HintResult::Rejected),
                "win" | "correct" | "solved" => return Ok(HintResult::Hint(Hint::SOLVED)),
                _ => match answer.parse::<Hint>() {
                    Ok(hint) => return Ok(HintResult::Hint(hint)),
                    Err(e) => writeln!(self.output, "❌ {e}")?,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn provider(script: &str) -> ManualInputProvider {
        ManualInputProvider::new(Cursor::new(script.to_string()), io::sink())
    }

    fn salet() -> Word {
        Word::new("salet").unwrap()
    }

    #[test]
    fn parses_hint_line() {
        let mut p = provider("gy-gy\n");
        assert_eq!(
            p.provide(&salet(), 0).unwrap(),
            HintResult::Hint("GY-GY".parse().unwrap())
        );
    }

    #[test]
    fn win_and_reject_keywords() {
        let mut p = provider("WIN\nreject\n");
        assert_eq!(p.provide(&salet(), 0).unwrap(), HintResult::Hint(Hint::SOLVED));
        assert_eq!(p.provide(&salet(), 1).unwrap(), HintResult::Rejected);
    }

    #[test]
    fn reprompts_after_bad_input() {
        let mut p = provider("nonsense\ngg\n-----\n");
        assert_eq!(
            p.provide(&salet(), 0).unwrap(),
            HintResult::Hint("-----".parse().unwrap())
        );
    }

    #[test]
    fn quit_and_eof_abort() {
        assert!(matches!(
            provider("quit\n").provide(&salet(), 0),
            Err(ProviderError::Aborted)
        ));
        assert!(matches!(
            provider("").provide(&salet(), 0),
            Err(ProviderError::Aborted)
        ));
    }
}
