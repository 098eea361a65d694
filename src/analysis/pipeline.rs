//! Pipeline orchestration
//!
//! Runs the full analysis sequence for one file — decode, downmix,
//! spectral peak detection — and assembles the [`Report`]. A failure in
//! any stage short-circuits the run and partial results are discarded.
//!
//! The long-running stages are bracketed by observer notifications so a
//! host can drive a busy indicator: `started` fires before the decode
//! begins, `finished` fires after the run completes or fails, exactly once
//! per `started` on every path.

use std::path::Path;
use std::time::Instant;

use crate::analysis::result::{Report, ReportMetadata};
use crate::error::PipelineError;
use crate::features::spectrum::analyze_spectrum;
use crate::io::decoder::decode_file;
use crate::preprocessing::channel_mixer::downmix_to_mono;

/// Advisory notifications bracketing one pipeline run
///
/// Hosts implement this to show busy state while a file is analyzed (the
/// desktop equivalent is a wait cursor). Callbacks run synchronously on
/// the calling thread and should return quickly.
pub trait AnalysisObserver {
    /// Called once, immediately before the decode stage begins
    fn started(&mut self) {}

    /// Called exactly once per [`started`](Self::started), after the run
    /// completed or failed
    fn finished(&mut self) {}
}

/// Observer that ignores all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl AnalysisObserver for NullObserver {}

/// Synchronous analysis pipeline for audio files
///
/// A pipeline owns no decode state between runs: the decode handle is
/// acquired inside each run and released before it returns, so the
/// pipeline is inert while idle and a second run observes nothing left
/// over from the first.
pub struct Pipeline {
    observer: Box<dyn AnalysisObserver>,
}

impl Pipeline {
    /// Create a pipeline with no observer
    pub fn new() -> Self {
        Self {
            observer: Box::new(NullObserver),
        }
    }

    /// Create a pipeline that notifies `observer` around each run
    pub fn with_observer(observer: Box<dyn AnalysisObserver>) -> Self {
        Self { observer }
    }

    /// Analyze one audio file
    ///
    /// Stage order: decode → empty-stream validation → downmix → spectral
    /// analysis → report assembly. The call blocks until the whole
    /// sequence completes; stages run strictly in order with no streaming
    /// of partial buffers.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the audio file to analyze
    ///
    /// # Returns
    ///
    /// The assembled [`Report`] on success
    ///
    /// # Errors
    ///
    /// * [`PipelineError::OpenFailed`] if the file cannot be opened or
    ///   decoded
    /// * [`PipelineError::UnsupportedChannelLayout`] if the stream has a
    ///   channel count other than 1 or 2
    /// * [`PipelineError::EmptySignal`] if the decoded stream contains no
    ///   sample frames
    pub fn run(&mut self, path: &Path) -> Result<Report, PipelineError> {
        self.observer.started();
        let outcome = run_stages(path);
        self.observer.finished();
        outcome
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// The fallible stage sequence, separated from [`Pipeline::run`] so the
/// observer notifications pair up on every exit path
fn run_stages(path: &Path) -> Result<Report, PipelineError> {
    let start_time = Instant::now();
    log::debug!("Starting analysis of {}", path.display());

    let decoded = decode_file(path)?;
    let info = decoded.info;

    if info.frames == 0 {
        return Err(PipelineError::EmptySignal);
    }

    let mono = downmix_to_mono(&decoded.samples, info.channels);
    // The interleaved buffer has served its purpose once the mono signal
    // exists.
    drop(decoded);

    let spectrum = analyze_spectrum(&mono, info.sample_rate);

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::debug!(
        "Analysis of {} finished in {:.2} ms (peak magnitude {:.6})",
        path.display(),
        processing_time_ms,
        spectrum.peak_magnitude()
    );

    Ok(Report {
        stream: info,
        spectrum,
        metadata: ReportMetadata {
            duration_seconds: info.duration_seconds(),
            processing_time_ms,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingObserver {
        started: Rc<Cell<u32>>,
        finished: Rc<Cell<u32>>,
    }

    impl AnalysisObserver for CountingObserver {
        fn started(&mut self) {
            self.started.set(self.started.get() + 1);
        }

        fn finished(&mut self) {
            self.finished.set(self.finished.get() + 1);
        }
    }

    #[test]
    fn test_observer_pairs_even_when_open_fails() {
        let started = Rc::new(Cell::new(0));
        let finished = Rc::new(Cell::new(0));
        let mut pipeline = Pipeline::with_observer(Box::new(CountingObserver {
            started: Rc::clone(&started),
            finished: Rc::clone(&finished),
        }));

        let result = pipeline.run(Path::new("/definitely/not/a/real/file.wav"));

        assert!(matches!(result, Err(PipelineError::OpenFailed(_))));
        assert_eq!(started.get(), 1);
        assert_eq!(finished.get(), 1);
    }

    #[test]
    fn test_observer_pairs_accumulate_per_run() {
        let started = Rc::new(Cell::new(0));
        let finished = Rc::new(Cell::new(0));
        let mut pipeline = Pipeline::with_observer(Box::new(CountingObserver {
            started: Rc::clone(&started),
            finished: Rc::clone(&finished),
        }));

        for _ in 0..3 {
            let _ = pipeline.run(Path::new("/definitely/not/a/real/file.wav"));
        }

        assert_eq!(started.get(), 3);
        assert_eq!(finished.get(), 3);
    }
}
