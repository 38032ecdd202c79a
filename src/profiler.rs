// profiler.rs
// Per-phase timing of model ticks, compiled in with the `profiling` feature

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Frames accumulated before `end_frame` logs a report.
pub const REPORT_EVERY_FRAMES: u64 = 120;

/// Accumulated timing for one named phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseStats {
    pub total: Duration,
    pub calls: u64,
    pub longest: Duration,
}

impl PhaseStats {
    fn add(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.calls += 1;
        self.longest = self.longest.max(elapsed);
    }

    pub fn mean(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.total / self.calls as u32
        }
    }
}

/// Phase timings gathered over a window of frames.
#[derive(Debug)]
pub struct Profiler {
    phases: HashMap<&'static str, PhaseStats>,
    frames: u64,
    report_every: u64,
}

impl Default for Profiler {
    fn default() -> Self {
        Self::with_report_interval(REPORT_EVERY_FRAMES)
    }
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report_interval(frames: u64) -> Self {
        Self {
            phases: HashMap::new(),
            frames: 0,
            report_every: frames.max(1),
        }
    }

    pub fn record(&mut self, phase: &'static str, elapsed: Duration) {
        self.phases.entry(phase).or_default().add(elapsed);
    }

    pub fn phase(&self, phase: &str) -> Option<PhaseStats> {
        self.phases.get(phase).copied()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Phases by total time, slowest first; ties by name.
    pub fn report(&self) -> Vec<(&'static str, PhaseStats)> {
        let mut rows: Vec<_> = self.phases.iter().map(|(n, s)| (*n, *s)).collect();
        rows.sort_by(|a, b| b.1.total.cmp(&a.1.total).then(a.0.cmp(b.0)));
        rows
    }

    /// Close one frame. Logs and starts a new window once the window is full.
    /// Returns whether a report was emitted.
    pub fn end_frame(&mut self) -> bool {
        self.frames += 1;
        if self.frames < self.report_every {
            return false;
        }
        for (phase, stats) in self.report() {
            log::debug!(
                "[profile] {:<28} {:>10.3?}/frame  mean {:>9.3?}  max {:>9.3?}  ({} calls)",
                phase,
                stats.total / self.frames as u32,
                stats.mean(),
                stats.longest,
                stats.calls
            );
        }
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        self.phases.clear();
        self.frames = 0;
    }
}

/// Times a phase until dropped.
pub struct PhaseTimer {
    phase: &'static str,
    started: Instant,
}

pub fn start(phase: &'static str) -> PhaseTimer {
    PhaseTimer {
        phase,
        started: Instant::now(),
    }
}

#[cfg(feature = "profiling")]
impl Drop for PhaseTimer {
    fn drop(&mut self) {
        crate::PROFILER.lock().record(self.phase, self.started.elapsed());
    }
}

/// Time the rest of the enclosing scope; a no-op without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::profiler::start($name);
    };
}
