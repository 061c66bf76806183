//! integrate::observe — optional progress logging for the quadrature engine.
//!
//! With the `obs_slog` feature and `verbose = true`, the engine reports the
//! standardized problem, every completed level and the final status through
//! a non-blocking terminal `slog` logger. Without the feature every method is
//! a no-op and `verbose` is ignored.

use crate::integrate::outcome::QuadStatus;

#[cfg(feature = "obs_slog")]
use slog::{Drain, Logger, info, o};

/// Snapshot of one finished refinement level.
#[cfg_attr(not(feature = "obs_slog"), allow(dead_code))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct LevelRecord {
    pub n: usize,
    pub h: f64,
    pub points: usize,
    pub feval: usize,
    pub estimate: f64,
    pub rerr: Option<f64>,
}

/// Per-run logging handle owned by the engine.
pub(crate) struct LevelObserver {
    #[cfg(feature = "obs_slog")]
    logger: Option<Logger>,
}

impl LevelObserver {
    pub(crate) fn new(verbose: bool) -> Self {
        #[cfg(feature = "obs_slog")]
        {
            LevelObserver { logger: verbose.then(term_noblock) }
        }
        #[cfg(not(feature = "obs_slog"))]
        {
            let _ = verbose;
            LevelObserver {}
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        #[cfg(feature = "obs_slog")]
        {
            self.logger.is_some()
        }
        #[cfg(not(feature = "obs_slog"))]
        {
            false
        }
    }

    pub(crate) fn problem(&self, a: f64, b: f64, feval_factor: usize) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(logger, "standardized problem"; "a" => a, "b" => b, "feval_factor" => feval_factor);
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = (a, b, feval_factor);
    }

    pub(crate) fn level(&self, record: &LevelRecord) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            let rerr = record.rerr.unwrap_or(f64::NAN);
            info!(logger, "level completed";
                "n" => record.n,
                "h" => record.h,
                "points" => record.points,
                "feval" => record.feval,
                "Sn" => record.estimate,
                "rerr" => rerr
            );
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = record;
    }

    pub(crate) fn terminated(&self, status: QuadStatus, feval: usize, integral: f64) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(logger, "terminated";
                "status" => status.code(),
                "feval" => feval,
                "integral" => integral
            );
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = (status, feval, integral);
    }
}

#[cfg(feature = "obs_slog")]
fn term_noblock() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // A quiet observer accepts every event without side effects.
    //
    // Given
    // -----
    // - `verbose = false`.
    //
    // Expect
    // ------
    // - Inactive; all methods return normally.
    fn quiet_observer_is_inactive_and_accepts_events() {
        let observer = LevelObserver::new(false);

        observer.problem(0.0, 1.0, 1);
        observer.level(&LevelRecord {
            n: 0,
            h: 1.0,
            points: 14,
            feval: 14,
            estimate: 0.5,
            rerr: None,
        });
        observer.terminated(QuadStatus::Converged, 14, 0.5);

        assert!(!observer.is_active());
    }

    #[cfg(not(feature = "obs_slog"))]
    #[test]
    fn verbose_is_ignored_without_logging_feature() {
        assert!(!LevelObserver::new(true).is_active());
    }
}
