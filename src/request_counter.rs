use std::sync::{
  Arc,
  atomic::{AtomicU64, Ordering},
};

/// Shared tally of outbound API requests. Injected into the client so the
/// shell can report request usage without any global state.
#[derive(Clone, Debug, Default)]
pub(crate) struct RequestCounter(Arc<AtomicU64>);

impl RequestCounter {
  pub(crate) fn increment(&self) {
    self.0.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn total(&self) -> u64 {
    self.0.load(Ordering::Relaxed)
  }
}
