//! Per-cookie line counts and the end-of-input summary.

use std::collections::BTreeMap;
use std::io::{self, Write};

use fibs_cookie::Cookie;
use serde::Serialize;

use crate::config::SummaryFormat;

/// Counts how often each cookie was seen.
///
/// Only cookies that actually occurred are stored, in code order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    lines: u64,
    counts: BTreeMap<Cookie, u64>,
}

#[derive(Serialize)]
struct Summary {
    lines: u64,
    cookies: Vec<SummaryEntry>,
}

#[derive(Serialize)]
struct SummaryEntry {
    code: u16,
    name: &'static str,
    count: u64,
}

impl Tally {
    /// Records one classified line.
    pub fn record(&mut self, cookie: Cookie) {
        self.lines += 1;
        *self.counts.entry(cookie).or_default() += 1;
    }

    /// Total lines recorded.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Number of distinct cookies seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[cfg(test)]
    pub fn count(&self, cookie: Cookie) -> u64 {
        self.counts.get(&cookie).copied().unwrap_or(0)
    }

    /// Writes the summary in the requested format.
    pub fn write<W: Write>(&self, format: SummaryFormat, out: &mut W) -> io::Result<()> {
        match format {
            SummaryFormat::Text => self.write_text(out),
            SummaryFormat::Json => self.write_json(out),
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "--------------")?;
        for (cookie, count) in &self.counts {
            writeln!(out, "{:>3} {:>4}", cookie.code(), count)?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let summary = Summary {
            lines: self.lines,
            cookies: self
                .counts
                .iter()
                .map(|(cookie, count)| SummaryEntry {
                    code: cookie.code(),
                    name: cookie.as_str(),
                    count: *count,
                })
                .collect(),
        };
        serde_json::to_writer(&mut *out, &summary)?;
        writeln!(out)
    }
}
