//! Interactive read loop: prompt, read a line, print its tokens.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::reader::{Lexicon, Tokenizer};

/// Settings for [`repl`].
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Printed before each line is read.
    pub prompt: String,
    /// A raw line equal to this ends the loop, after its tokens are printed.
    pub quit_command: String,
    pub lexicon: Lexicon,
    /// Maximum characters in one run; see [`Tokenizer::with_run_limit`].
    pub max_run: Option<usize>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "andy> ".to_owned(),
            quit_command: "quit".to_owned(),
            lexicon: Lexicon::default(),
            max_run: None,
        }
    }
}

impl ReplConfig {
    fn tokenizer<'a>(&'a self, line: &'a str) -> Tokenizer<'a> {
        let tokenizer = Tokenizer::new(&self.lexicon, line);
        match self.max_run {
            Some(limit) => tokenizer.with_run_limit(limit),
            None => tokenizer,
        }
    }
}

/// Run the read loop until the quit command or the end of input.
///
/// Each token is written to `output` as `KIND,TEXT` on its own line.
/// Input that is not UTF-8 is read lossily.
pub fn repl(
    input: &mut impl BufRead,
    output: &mut impl Write,
    config: &ReplConfig,
) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            debug!("end of input");
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buffer);
        let line = strip_newline(&line);
        debug!("read line {line:?}");

        for token in config.tokenizer(line) {
            writeln!(output, "{token}")?;
        }

        if line == config.quit_command {
            debug!("quit command received");
            return Ok(());
        }
    }
}

/// Drop the trailing newline; anything before it, `\r` included, is part of the line.
fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}
