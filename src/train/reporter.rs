use std::sync::mpsc;

use tracing::{info, warn};

use crate::error::{NnError, Result};
use crate::train::epoch_report::EpochReport;

/// Receives the progress records produced by `train_loop`.
pub trait Reporter {
    fn report(&mut self, report: &EpochReport);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, report: &EpochReport) {
        (**self).report(report);
    }
}

/// Collects every report in order.
impl Reporter for Vec<EpochReport> {
    fn report(&mut self, report: &EpochReport) {
        self.push(report.clone());
    }
}

/// Streams reports to another thread. A dropped receiver only means nobody
/// is listening any more; training carries on.
impl Reporter for mpsc::Sender<EpochReport> {
    fn report(&mut self, report: &EpochReport) {
        let _ = self.send(report.clone());
    }
}

/// Writes one `info!` line per report.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, report: &EpochReport) {
        info!("{report}");
    }
}

/// Forwards reports to `inner` and remembers the first one whose loss is not
/// finite, so the caller can abort a run that blew up.
#[derive(Debug)]
pub struct DivergenceGuard<R> {
    inner: R,
    diverged: Option<(usize, f64)>,
}

impl<R: Reporter> DivergenceGuard<R> {
    pub fn new(inner: R) -> Self {
        DivergenceGuard { inner, diverged: None }
    }

    pub fn diverged(&self) -> bool {
        self.diverged.is_some()
    }

    /// Returns the wrapped reporter, or `NumericDivergence` for the first
    /// non-finite loss seen.
    pub fn finish(self) -> Result<R> {
        match self.diverged {
            Some((epoch, loss)) => Err(NnError::NumericDivergence { epoch, loss }),
            None => Ok(self.inner),
        }
    }
}

impl<R: Reporter> Reporter for DivergenceGuard<R> {
    fn report(&mut self, report: &EpochReport) {
        if self.diverged.is_none() && !report.is_finite() {
            warn!(epoch = report.epoch, loss = report.loss, "loss is no longer finite");
            self.diverged = Some((report.epoch, report.loss));
        }
        self.inner.report(report);
    }
}
