//! Terminal rendering and input.
//!
//! The progress line is redrawn in place with a carriage return, so each
//! frame is padded to at least the width of the one before it.

use std::io::{BufRead, Write};

use crate::timer::{Console, PromptKind};

pub const DEFAULT_BAR_WIDTH: usize = 30;

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const FILLED: char = '█';
const EMPTY: char = '░';

/// Stateful single-line progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    width: usize,
    /// Char count of the previous frame.
    last_len: usize,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_WIDTH)
    }
}

impl ProgressBar {
    pub fn new(width: usize) -> Self {
        Self { width, last_len: 0 }
    }

    /// Build the next frame, e.g. `/ [█████░░░░░] 50%`.
    pub fn frame(&mut self, elapsed_secs: u64, horizon_secs: f64) -> String {
        let spinner = SPINNER_FRAMES[(elapsed_secs % SPINNER_FRAMES.len() as u64) as usize];
        let progress = if horizon_secs > 0.0 {
            (elapsed_secs as f64 / horizon_secs).min(1.0)
        } else {
            1.0
        };
        let filled = (progress * self.width as f64) as usize;
        let bar: String = std::iter::repeat(FILLED)
            .take(filled)
            .chain(std::iter::repeat(EMPTY).take(self.width - filled))
            .collect();
        let pct = (progress * 100.0) as u32;

        let mut out = format!("{spinner} [{bar}] {pct}%");
        let len = out.chars().count();
        if len < self.last_len {
            out.extend(std::iter::repeat(' ').take(self.last_len - len));
        }
        self.last_len = out.chars().count();
        out
    }

    /// Forget the previous frame, e.g. after the cursor left the line.
    pub fn reset(&mut self) {
        self.last_len = 0;
    }
}

/// [`Console`] over any line reader and writer; stdin/stdout in the binary.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    bar: ProgressBar,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, bar: ProgressBar) -> Self {
        Self { input, output, bar }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn render(&mut self, elapsed_secs: u64, horizon_secs: f64) {
        let frame = self.bar.frame(elapsed_secs, horizon_secs);
        // Rendering failures never stop the timer.
        if write!(self.output, "\r{frame}")
            .and_then(|()| self.output.flush())
            .is_err()
        {
            tracing::debug!("failed to draw progress line");
        }
    }

    fn prompt(&mut self, kind: PromptKind) {
        self.bar.reset();
        if writeln!(self.output, "\n{}", kind.prompt_text())
            .and_then(|()| self.output.flush())
            .is_err()
        {
            tracing::warn!("failed to write confirmation prompt");
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                tracing::debug!(error = %e, "stdin read failed, treating as end of input");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn frame_shows_spinner_bar_and_percentage() {
        let mut bar = ProgressBar::new(10);
        assert_eq!(bar.frame(0, 60.0), "| [░░░░░░░░░░] 0%");
        assert_eq!(bar.frame(30, 60.0), "- [█████░░░░░] 50%");
        assert_eq!(bar.frame(61, 60.0), "/ [██████████] 100%");
    }

    #[test]
    fn shorter_frame_is_padded_to_previous_length() {
        let mut bar = ProgressBar::new(4);
        let long = bar.frame(4, 4.0);
        assert_eq!(long, "| [████] 100%");
        let short = bar.frame(1, 100.0);
        assert_eq!(short.chars().count(), long.chars().count());
        assert!(short.starts_with("/ [░░░░] 1%"));
        assert!(short.ends_with("  "));
    }

    #[test]
    fn render_writes_carriage_return_frames() {
        let mut console =
            TerminalConsole::new(Cursor::new(""), Vec::new(), ProgressBar::new(2));
        console.render(1, 2.0);
        console.render(2, 2.0);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "\r/ [█░] 50%\r- [██] 100%");
    }

    #[test]
    fn prompt_starts_on_new_line() {
        let mut console =
            TerminalConsole::new(Cursor::new(""), Vec::new(), ProgressBar::default());
        console.prompt(PromptKind::BackToWork);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "\nBack to work!\nPress 'Y' to continue.\n");
    }

    #[test]
    fn read_line_returns_lines_then_none() {
        let mut console =
            TerminalConsole::new(Cursor::new("y\n\n"), Vec::new(), ProgressBar::default());
        assert_eq!(console.read_line().as_deref(), Some("y\n"));
        assert_eq!(console.read_line().as_deref(), Some("\n"));
        assert_eq!(console.read_line(), None);
    }
}
