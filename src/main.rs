//! Tokenize command lines interactively.
//!
//! Reads lines from stdin, and prints each line's tokens on stdout as
//! `KIND,TEXT`, one per line. Entering `quit` ends the session.
//! Logging goes to stderr; set `RUST_LOG=andy=trace` to see each token.
//!
//! ```ignore
//! echo 'num(x, 3)' | andy
//! ```

use andy::{Lexicon, ReplConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Tokenize lines of the andy command language")]
struct Args {
    /// Prompt printed before each line.
    #[arg(long, default_value = "andy> ")]
    prompt: String,

    /// Line that ends the session.
    #[arg(long, default_value = "quit")]
    quit_command: String,

    /// Additional keyword; may be repeated.
    #[arg(long = "keyword", value_name = "WORD")]
    keywords: Vec<String>,

    /// Maximum number of characters in one identifier or value.
    #[arg(long)]
    max_run: Option<usize>,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let lexicon = args
        .keywords
        .into_iter()
        .fold(Lexicon::default(), |lexicon, keyword| {
            lexicon.with_keyword(keyword)
        });
    let config = ReplConfig {
        prompt: args.prompt,
        quit_command: args.quit_command,
        lexicon,
        max_run: args.max_run,
    };

    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    andy::repl(&mut stdin, &mut stdout, &config)
}
