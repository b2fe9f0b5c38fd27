use super::*;

/// Running result budget. Arithmetic is signed because a page can push the
/// tally past the budget, and reply accounting can credit the budget back
/// when a page returns fewer items than the fetch threshold.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Quota {
  got: i64,
  max_results: i64,
}

impl Quota {
  pub(crate) fn is_satisfied(self) -> bool {
    self.remaining() <= 0
  }

  pub(crate) fn new(max_results: u32) -> Self {
    Self {
      got: 0,
      max_results: i64::from(max_results),
    }
  }

  /// Size for the next page request: the remaining budget, clamped to the
  /// API hard maximum. Only meaningful while the quota is unsatisfied.
  pub(crate) fn page_size(self) -> u32 {
    self.remaining().clamp(1, i64::from(MAX_PAGE_SIZE)) as u32
  }

  pub(crate) fn record(&mut self, count: i64) {
    self.got += count;
  }

  pub(crate) fn remaining(self) -> i64 {
    self.max_results - self.got
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_quota_is_unsatisfied() {
    let quota = Quota::new(1);

    assert!(!quota.is_satisfied());
    assert_eq!(quota.remaining(), 1);
  }

  #[test]
  fn page_size_tracks_remaining_budget() {
    let mut quota = Quota::new(42);

    assert_eq!(quota.page_size(), 42);

    quota.record(40);

    assert_eq!(quota.page_size(), 2);
  }

  #[test]
  fn page_size_clamps_to_api_maximum() {
    assert_eq!(Quota::new(5000).page_size(), 100);
  }

  #[test]
  fn overshoot_leaves_quota_satisfied() {
    let mut quota = Quota::new(3);

    quota.record(10);

    assert!(quota.is_satisfied());
    assert_eq!(quota.remaining(), -7);
  }

  #[test]
  fn negative_record_credits_the_budget() {
    let mut quota = Quota::new(10);

    quota.record(8);
    quota.record(-3);

    assert_eq!(quota.remaining(), 5);
    assert!(!quota.is_satisfied());
  }

  #[test]
  fn exact_satisfaction_stops_paging() {
    let mut quota = Quota::new(4);

    quota.record(4);

    assert!(quota.is_satisfied());
  }
}
