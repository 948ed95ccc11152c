// Shared test helpers: a scripted MX resolver and CSV fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

#![allow(dead_code)] // Not every test file uses every helper

use async_trait::async_trait;
use mx_filter::dns::{DnsError, MxResolver, MxResult};
use mx_filter::{Config, LogFormat, LogLevel};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// MX resolver double.
///
/// Answers from a fixed table (unknown domains are `Absent`), records every
/// call in order, and tracks the peak number of concurrent lookups.
#[derive(Default)]
pub struct StubResolver {
    answers: HashMap<String, Result<MxResult, String>>,
    calls: Mutex<Vec<String>>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found(mut self, domain: &str, hosts: &[&str]) -> Self {
        self.answers.insert(
            domain.to_string(),
            Ok(MxResult::Found(hosts.iter().map(|h| h.to_string()).collect())),
        );
        self
    }

    pub fn absent(mut self, domain: &str) -> Self {
        self.answers
            .insert(domain.to_string(), Ok(MxResult::Absent));
        self
    }

    pub fn failing(mut self, domain: &str, message: &str) -> Self {
        self.answers
            .insert(domain.to_string(), Err(message.to_string()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Domains looked up, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, domain: &str) -> usize {
        self.calls().iter().filter(|d| d.as_str() == domain).count()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MxResolver for StubResolver {
    async fn resolve(&self, domain: &str) -> Result<MxResult, DnsError> {
        self.calls.lock().unwrap().push(domain.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match self.answers.get(domain) {
            Some(Ok(mx)) => Ok(mx.clone()),
            Some(Err(message)) => Err(DnsError::Lookup {
                domain: domain.to_string(),
                message: message.clone(),
            }),
            None => Ok(MxResult::Absent),
        }
    }
}

/// Header used by every fixture: the email address is the sixth column.
pub const HEADER: &str = "id,first,last,company,title,email";

/// Builds a data line with the given id and email field.
pub fn line(id: usize, email: &str) -> String {
    format!("{id},First{id},Last{id},Co{id},Title{id},{email}")
}

/// Writes `HEADER` plus `lines` to `input.csv` in `dir`.
pub fn write_input(dir: &Path, lines: &[String]) -> PathBuf {
    let path = dir.join("input.csv");
    let mut contents = String::from(HEADER);
    contents.push('\n');
    for l in lines {
        contents.push_str(l);
        contents.push('\n');
    }
    std::fs::write(&path, contents).expect("Failed to write input fixture");
    path
}

/// Config with every output inside `dir` and quiet logging.
pub fn test_config(dir: &Path, input: PathBuf, batch_size: usize, workers: usize) -> Config {
    Config {
        input,
        output: dir.join("filtered.csv"),
        deny_list: dir.join("deny.txt"),
        ignore_list: dir.join("ignored.txt"),
        batch_size,
        workers,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

/// Non-empty lines of a text file.
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
