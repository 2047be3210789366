use std::sync::atomic::{AtomicU64, Ordering};

pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancelled as soon as the shared counter moves past the job's generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    latest: &'a AtomicU64,
    job_generation: u64,
}

impl<'a> GenerationToken<'a> {
    pub fn new(latest: &'a AtomicU64, job_generation: u64) -> Self {
        Self {
            latest,
            job_generation,
        }
    }

    pub fn job_generation(&self) -> u64 {
        self.job_generation
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.latest.load(Ordering::Acquire) != self.job_generation
    }
}
