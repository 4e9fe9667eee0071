//! CLI surface: a single concurrency-level parameter.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of worker threads (default: auto-detect)
    #[arg(short = 't', long = "threads", value_name = "N")]
    pub threads: Option<usize>,
}

impl Args {
    /// Resolved worker count: the explicit value, or one worker per
    /// available execution unit. Zero means auto-detect.
    pub fn worker_count(&self) -> usize {
        match self.threads {
            Some(n) if n > 0 => n,
            _ => std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4),
        }
    }
}
