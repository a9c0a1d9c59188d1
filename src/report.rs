use crate::{ProbeConfig, ProbeResult};
use std::io::{self, Write};

/// Prints unentered meets as `<label> <url>` lines.
#[derive(Debug, Clone)]
pub struct Reporter {
    label: String,
    quick_limit: Option<usize>,
    summary_threshold: usize,
}

impl Reporter {
    pub fn new(label: impl Into<String>, config: &ProbeConfig) -> Self {
        Self {
            label: label.into(),
            quick_limit: config.quick.then_some(config.quick_limit),
            summary_threshold: config.summary_threshold,
        }
    }

    /// Writes the report to `out`. A reader that goes away early (a closed
    /// pipe) ends the report quietly.
    pub fn report<W, S>(&self, out: &mut W, meets: &[S]) -> ProbeResult<()>
    where
        W: Write,
        S: AsRef<str>,
    {
        match self.write_lines(out, meets) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            result => Ok(result?),
        }
    }

    fn write_lines<W, S>(&self, out: &mut W, meets: &[S]) -> io::Result<()>
    where
        W: Write,
        S: AsRef<str>,
    {
        let count = meets.len();
        let shown = match self.quick_limit {
            Some(limit) => &meets[..count.min(limit)],
            None => meets,
        };

        for url in shown {
            writeln!(out, "{} {}", self.label, url.as_ref().replace(' ', "%20"))?;
        }

        if count > self.summary_threshold {
            writeln!(out, "{} {} meets remaining.", self.label, count)?;
        }

        out.flush()
    }
}

/// Reports `meets` on stdout.
pub fn print_meets<S: AsRef<str>>(
    label: &str,
    meets: &[S],
    config: &ProbeConfig,
) -> ProbeResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Reporter::new(label, config).report(&mut out, meets)
}
