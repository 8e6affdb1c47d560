//! Background highlighting
//!
//! Moves highlighting off the caller's thread. Every submitted request
//! gets a generation number; only the result for the newest submission
//! is ever handed back, superseded results are dropped on arrival.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::error::{HighlightError, Result};
use crate::syntax::{AnnotatedText, SyntaxManager, ThemeMode};

/// Inputs for one highlight computation
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightRequest {
    pub language: String,
    pub text: String,
    pub font_size: f32,
    pub mode: ThemeMode,
}

struct Job {
    generation: u64,
    request: HighlightRequest,
}

struct Finished {
    generation: u64,
    result: Result<Arc<AnnotatedText>>,
}

/// Worker thread running requests against a manager
pub struct HighlightWorker {
    jobs: Option<Sender<Job>>,
    results: Receiver<Finished>,
    handle: Option<JoinHandle<()>>,
    /// Generation of the newest submitted request
    latest: u64,
    /// Generation whose result was last handed out
    delivered: u64,
    /// Output handed out for `delivered`, if it succeeded
    last_output: Option<Arc<AnnotatedText>>,
}

impl HighlightWorker {
    /// Start the worker thread
    pub fn spawn(manager: Arc<SyntaxManager>) -> Result<Self> {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (done_tx, done_rx) = mpsc::channel::<Finished>();

        let handle = thread::Builder::new()
            .name("hilite-worker".to_string())
            .spawn(move || {
                for job in job_rx {
                    let req = job.request;
                    let result =
                        manager.get_or_compute(&req.language, &req.text, req.font_size, req.mode);
                    if done_tx
                        .send(Finished {
                            generation: job.generation,
                            result,
                        })
                        .is_err()
                    {
                        break;
                    }
                }
                debug!("highlight worker stopped");
            })?;

        Ok(Self {
            jobs: Some(job_tx),
            results: done_rx,
            handle: Some(handle),
            latest: 0,
            delivered: 0,
            last_output: None,
        })
    }

    /// Queue a request, superseding every earlier one
    pub fn submit(&mut self, request: HighlightRequest) -> Result<u64> {
        let jobs = self.jobs.as_ref().ok_or(HighlightError::WorkerClosed)?;
        let generation = self.latest + 1;
        jobs.send(Job {
            generation,
            request,
        })
        .map_err(|_| HighlightError::WorkerClosed)?;
        self.latest = generation;
        Ok(generation)
    }

    /// Result for the newest request if it has finished, without blocking
    ///
    /// Returns `None` once that result has already been handed out.
    pub fn latest(&mut self) -> Option<Result<Arc<AnnotatedText>>> {
        if self.delivered == self.latest {
            return None;
        }
        loop {
            match self.results.try_recv() {
                Ok(done) if done.generation == self.latest => return Some(self.deliver(done)),
                Ok(done) => debug!(generation = done.generation, "discarding stale result"),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    return Some(Err(HighlightError::WorkerClosed));
                }
            }
        }
    }

    /// Block until the newest request has finished
    ///
    /// If `latest` already handed the result out, the same value is
    /// returned again without waiting.
    pub fn wait_latest(&mut self) -> Result<Arc<AnnotatedText>> {
        if self.latest == 0 {
            return Err(HighlightError::Message("no request submitted".to_string()));
        }
        if self.delivered == self.latest {
            return self
                .last_output
                .clone()
                .ok_or_else(|| HighlightError::Message("latest result already taken".to_string()));
        }
        loop {
            let done = self
                .results
                .recv()
                .map_err(|_| HighlightError::WorkerClosed)?;
            if done.generation == self.latest {
                return self.deliver(done);
            }
            debug!(generation = done.generation, "discarding stale result");
        }
    }

    /// Mark a finished result as handed out
    fn deliver(&mut self, done: Finished) -> Result<Arc<AnnotatedText>> {
        self.delivered = done.generation;
        self.last_output = done.result.as_ref().ok().cloned();
        done.result
    }
}

impl Drop for HighlightWorker {
    fn drop(&mut self) {
        // Closing the job channel ends the worker loop
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("highlight worker panicked");
            }
        }
    }
}
