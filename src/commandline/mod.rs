use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "Classifies every character of a text source into a lexical token kind")]
pub struct Options {
    /// File to read. Reads standard input when omitted or `-`.
    pub file: Option<PathBuf>,
    /// Increase logging verbosity (may be repeated)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Silence all logging
    #[clap(short, long)]
    pub quiet: bool,
    /// Print per-line token counts instead of every token
    #[clap(long)]
    pub summary: bool,
}

impl Options {
    /// The input file, or `None` if standard input should be read.
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
