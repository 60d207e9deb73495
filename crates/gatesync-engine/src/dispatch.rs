//! Rate-limited dispatch of remote write operations.
//!
//! Every write the engine issues goes through one delivery loop: units of
//! work are sent strictly in order, one at a time, with a fixed pause after
//! each success and an unbounded retry-after-cooldown whenever NextDNS
//! answers 429. Any other failure aborts the run on the spot.

use gatesync_core::{GateError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Default chunk size for bulk endpoints
const DEFAULT_BATCH_SIZE: usize = 50;

/// Default pause after each successful call
const DEFAULT_THROTTLE: Duration = Duration::from_secs(4);

/// Default pause after a rate-limit rejection; the NextDNS limiter resets
/// 60 seconds after the last request
const DEFAULT_COOLDOWN: Duration = Duration::from_secs(60);

/// Pacing knobs for the dispatcher
#[derive(Debug, Clone)]
pub struct Pacing {
    /// Items per call on bulk endpoints
    pub batch_size: usize,

    /// Pause after every successful call
    pub throttle: Duration,

    /// Pause after a rate-limit rejection, before retrying the same call
    pub cooldown: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            throttle: DEFAULT_THROTTLE,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// Outcome classification of one remote call
#[derive(Debug)]
pub enum Attempt {
    /// Call succeeded
    Done,
    /// Call rejected by the rate limiter; retry the same call after cooldown
    RateLimited,
    /// Any other failure; abort the run
    Fatal(GateError),
}

impl From<Result<()>> for Attempt {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::Done,
            Err(err) if err.is_rate_limited() => Self::RateLimited,
            Err(err) => Self::Fatal(err),
        }
    }
}

/// Executes write operations in input order under the pacing policy
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    pacing: Pacing,
}

impl Dispatcher {
    /// Create a dispatcher with the given pacing
    #[must_use]
    pub const fn new(pacing: Pacing) -> Self {
        Self { pacing }
    }

    /// Deliver `items` in chunks of `batch_size`, one call per chunk.
    ///
    /// Returns the number of successful calls.
    pub async fn run_batched<T, F, Fut>(&self, items: &[T], send: F) -> Result<usize>
    where
        T: Clone,
        F: FnMut(Vec<T>) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let units = items
            .chunks(self.pacing.batch_size.max(1))
            .map(<[T]>::to_vec)
            .collect();
        self.deliver(units, send).await
    }

    /// Deliver `items` one call per item.
    ///
    /// Returns the number of successful calls.
    pub async fn run_each<T, F, Fut>(&self, items: &[T], send: F) -> Result<usize>
    where
        T: Clone,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        self.deliver(items.to_vec(), send).await
    }

    /// The single delivery loop both call shapes share.
    ///
    /// A unit is attempted until it succeeds or fails fatally; it is never
    /// skipped or reordered.
    async fn deliver<U, F, Fut>(&self, units: Vec<U>, mut send: F) -> Result<usize>
    where
        U: Clone,
        F: FnMut(U) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let mut sent = 0;
        for unit in units {
            loop {
                match Attempt::from(send(unit.clone()).await) {
                    Attempt::Done => {
                        sent += 1;
                        debug!(sent, "call succeeded, throttling");
                        sleep(self.pacing.throttle).await;
                        break;
                    }
                    Attempt::RateLimited => {
                        warn!(
                            cooldown_secs = self.pacing.cooldown.as_secs(),
                            "rate limit hit, cooling down"
                        );
                        sleep(self.pacing.cooldown).await;
                    }
                    Attempt::Fatal(err) => return Err(err),
                }
            }
        }
        Ok(sent)
    }
}
