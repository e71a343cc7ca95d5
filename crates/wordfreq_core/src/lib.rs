//! Wordfreq core: normalize, tokenize, count and report word frequencies.
mod frequency;
mod normalize;
mod report;
mod token;

pub use frequency::{count, word_frequency, FrequencyMap};
pub use normalize::normalize;
pub use report::{format_report, report, ReportError, REPORT_WORDS};
pub use token::{tokenize, Tokens};
