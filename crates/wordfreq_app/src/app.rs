use std::io::Write;

use anyhow::Context;
use wordfreq_core::{report, word_frequency, REPORT_WORDS};
use wordfreq_logging::{freq_debug, freq_error, freq_info};

/// Text counted when the binary runs.
pub const DEFAULT_TEXT: &str = "Four, One two two three Three three four four  four";

/// What to count and which words to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub text: &'static str,
    pub words: &'static [&'static str],
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT,
            words: &REPORT_WORDS,
        }
    }
}

pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> anyhow::Result<()> {
    freq_debug!("counting {} bytes of input", config.text.len());
    let counts = word_frequency(config.text);
    if let Err(err) = report(&counts, config.words, out) {
        freq_error!("report write failed: {err}");
        return Err(err).context("printing word counts");
    }
    freq_info!(
        "reported {} of {} distinct words",
        config.words.iter().filter(|w| counts.contains(w)).count(),
        counts.len()
    );
    Ok(())
}
