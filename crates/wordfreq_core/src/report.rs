use std::fmt::Write as _;
use std::io::{self, Write};

use thiserror::Error;
use wordfreq_logging::freq_trace;

use crate::frequency::FrequencyMap;

/// Words reported by the binary, in print order.
pub const REPORT_WORDS: [&str; 4] = ["one", "two", "three", "four"];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Render one `"<word> => <count>"` line per word in `order`. Missing words count as 0.
pub fn format_report(map: &FrequencyMap, order: &[&str]) -> String {
    let mut rendered = String::with_capacity(order.len() * 16);
    for word in order {
        let _ = writeln!(&mut rendered, "{word} => {}", map.get(word));
    }
    rendered
}

/// Write the rendered report to `out` in a single write, then flush.
pub fn report<W: Write>(map: &FrequencyMap, order: &[&str], out: &mut W) -> Result<(), ReportError> {
    let rendered = format_report(map, order);
    freq_trace!("writing report for {} words", order.len());
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
