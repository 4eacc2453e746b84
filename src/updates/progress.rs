//! Arithmetic and formatting for the download progress readout.

use chrono::{DateTime, Local};
use std::fmt;
use std::time::Duration;

const KB_PER_MB: f64 = 1024.0;
const KB_PER_GB: f64 = 1_024_000.0;
const DISPLAY_LIMIT: usize = 99;

pub fn kilobytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Megabytes rounded to two decimals.
pub fn megabytes(bytes: u64) -> f64 {
    (kilobytes(bytes) / 1024.0 * 100.0).round() / 100.0
}

/// Whole percent received; 0 when the total is unknown.
pub fn percent(received: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (received as u128 * 100) / total as u128;
    pct.min(100) as u8
}

pub fn rate_kb_per_sec(received: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    kilobytes(received) / secs
}

/// Seconds left at the current rate, `None` while it cannot be estimated.
pub fn remaining_secs(received: u64, total: u64, rate_kb_per_sec: f64) -> Option<u64> {
    if total == 0 || rate_kb_per_sec <= 0.0 || !rate_kb_per_sec.is_finite() {
        return None;
    }
    let left_kb = kilobytes(total.saturating_sub(received));
    Some((left_kb / rate_kb_per_sec).floor() as u64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferRate {
    KiloBytes(u64),
    MegaBytes(u64),
    GigaBytes(u64),
}

impl TransferRate {
    pub fn from_kb_per_sec(rate: f64) -> Self {
        let rate = if rate.is_finite() { rate.max(0.0) } else { 0.0 };
        if rate >= KB_PER_GB {
            TransferRate::GigaBytes((rate / KB_PER_GB).floor() as u64)
        } else if rate >= KB_PER_MB {
            TransferRate::MegaBytes((rate / KB_PER_MB).floor() as u64)
        } else {
            TransferRate::KiloBytes(rate.floor() as u64)
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            TransferRate::KiloBytes(_) => "KB/s",
            TransferRate::MegaBytes(_) => "MB/s",
            TransferRate::GigaBytes(_) => "GB/s",
        }
    }

    pub fn magnitude(&self) -> u64 {
        match *self {
            TransferRate::KiloBytes(n) | TransferRate::MegaBytes(n) | TransferRate::GigaBytes(n) => n,
        }
    }
}

impl fmt::Display for TransferRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude(), self.unit())
    }
}

/// `DD Days HH Hours MM Minutes SS Seconds`, dropping leading zero units.
pub fn format_duration(total_secs: u64) -> String {
    let (minutes, seconds) = (total_secs / 60, total_secs % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let (days, hours) = (hours / 24, hours % 24);

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{:02} Days", days));
    }
    if !parts.is_empty() || hours > 0 {
        parts.push(format!("{:02} Hours", hours));
    }
    if !parts.is_empty() || minutes > 0 {
        parts.push(format!("{:02} Minutes", minutes));
    }
    parts.push(format!("{:02} Seconds", seconds));
    parts.join(" ")
}

fn format_timestamp(t: &DateTime<Local>) -> String {
    t.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn truncate(s: &str) -> String {
    s.chars().take(DISPLAY_LIMIT).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub url: String,
    pub destination: String,
    pub started: DateTime<Local>,
    pub now: DateTime<Local>,
    pub elapsed_secs: u64,
    pub remaining_secs: Option<u64>,
    pub received_mb: f64,
    pub total_mb: f64,
    pub rate: TransferRate,
    pub percent: u8,
}

impl ProgressReport {
    pub fn remaining_label(&self) -> String {
        self.remaining_secs
            .map(format_duration)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Progress bar position in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.percent.min(100)) / 100.0
    }

    /// One line for the tray menu.
    pub fn summary(&self) -> String {
        format!(
            "Updating: {}% ({:.2} of {:.2} MB, {}, {} left)",
            self.percent,
            self.received_mb,
            self.total_mb,
            self.rate,
            self.remaining_label()
        )
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Downloading")?;
        writeln!(f, "From: {}", truncate(&self.url))?;
        writeln!(f, "To: {}", truncate(&self.destination))?;
        writeln!(f, "Started: {}", format_timestamp(&self.started))?;
        writeln!(f, "Actual: {}", format_timestamp(&self.now))?;
        writeln!(f, "Elapsed: {}", format_duration(self.elapsed_secs))?;
        writeln!(f, "Remaining: {}", self.remaining_label())?;
        writeln!(f, "Received: {} MegaBytes", self.received_mb)?;
        writeln!(f, "Total: {} MegaBytes", self.total_mb)?;
        writeln!(f, "Speed: {}", self.rate)?;
        write!(f, "Percent: {}%", self.percent)
    }
}
