use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }
}

/// One line of the timing log. Describes the run as a whole.
#[derive(Debug, Clone, Serialize)]
pub struct RunTiming {
    pub timestamp: String,
    pub target: String,
    pub checks_run: usize,
    pub exit_code: i32,
    pub failed_check: Option<String>,
    pub elapsed_ms: u64,
}

pub fn utc_now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn write_timing(path: &Path, timing: &RunTiming) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let line = serde_json::to_string(timing)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

/// Append a record; a failed write never affects the run's exit code.
pub fn append_timing(path: &Path, timing: &RunTiming) {
    if let Err(error) = write_timing(path, timing) {
        tracing::warn!(path = %path.display(), %error, "could not write timing record");
    }
}
