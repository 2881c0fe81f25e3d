//! Timing and memory instrumentation for batch resolution runs.
//!
//! The resolver itself emits nothing; the evaluation harness wraps each
//! `process` call with a [`PerformanceProfiler`] to report throughput,
//! worst-case latency and resident memory at the end of a run.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Accumulates per-operation timings across a run.
#[derive(Debug)]
pub struct PerformanceProfiler {
    start_time: Instant,
    operation_count: AtomicUsize,
    total_resolve_time: AtomicUsize, // microseconds
    max_resolve_time: AtomicUsize,   // microseconds
}

impl PerformanceProfiler {
    /// Create a new profiler; the run clock starts now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            operation_count: AtomicUsize::new(0),
            total_resolve_time: AtomicUsize::new(0),
            max_resolve_time: AtomicUsize::new(0),
        }
    }

    /// Record one resolve operation.
    pub fn record_resolve_operation(&self, duration: Duration) {
        let micros = duration.as_micros() as usize;
        self.operation_count.fetch_add(1, Ordering::Relaxed);
        self.total_resolve_time.fetch_add(micros, Ordering::Relaxed);
        self.max_resolve_time.fetch_max(micros, Ordering::Relaxed);
    }

    /// Get a summary of the run so far.
    pub fn summary(&self) -> PerformanceSummary {
        let operation_count = self.operation_count.load(Ordering::Relaxed);
        let total_resolve_time_us = self.total_resolve_time.load(Ordering::Relaxed);
        let max_resolve_time_us = self.max_resolve_time.load(Ordering::Relaxed);

        PerformanceSummary {
            total_operations: operation_count,
            total_runtime: self.start_time.elapsed(),
            average_resolve_time: if operation_count > 0 {
                Duration::from_micros((total_resolve_time_us / operation_count) as u64)
            } else {
                Duration::ZERO
            },
            max_resolve_time: Duration::from_micros(max_resolve_time_us as u64),
            current_memory_usage: sample_system_memory(),
        }
    }

    /// Reset all counters; the run clock keeps its original start.
    pub fn reset(&self) {
        self.operation_count.store(0, Ordering::Relaxed);
        self.total_resolve_time.store(0, Ordering::Relaxed);
        self.max_resolve_time.store(0, Ordering::Relaxed);
    }
}

impl Default for PerformanceProfiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of performance metrics for one run.
#[derive(Debug, Clone)]
pub struct PerformanceSummary {
    /// Total number of resolve operations performed
    pub total_operations: usize,
    /// Wall-clock time since the profiler was created
    pub total_runtime: Duration,
    /// Average time per resolve operation
    pub average_resolve_time: Duration,
    /// Slowest single resolve operation
    pub max_resolve_time: Duration,
    /// Current resident memory in bytes, if the platform exposes it
    pub current_memory_usage: Option<usize>,
}

impl PerformanceSummary {
    /// Calculate resolve operations per second.
    pub fn operations_per_second(&self) -> f64 {
        if self.total_runtime.as_secs_f64() > 0.0 {
            self.total_operations as f64 / self.total_runtime.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Format memory usage as a human-readable string.
    pub fn format_memory_usage(&self) -> String {
        if let Some(bytes) = self.current_memory_usage {
            format_bytes(bytes)
        } else {
            "Unknown".to_string()
        }
    }
}

/// Sample current resident memory from the operating system.
pub fn sample_system_memory() -> Option<usize> {
    #[cfg(target_os = "linux")]
    {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        for line in status.lines() {
            if line.starts_with("VmRSS:") {
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() >= 2 {
                    let kb = parts[1].parse::<usize>().ok()?;
                    return Some(kb * 1024);
                }
            }
        }
        None
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Format bytes as a human-readable string.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
