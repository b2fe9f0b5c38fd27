use super::*;

/// Comments represented by a batch of threads: one per thread plus every
/// reply attached so far. Under-counts threads whose replies have not been
/// fetched, so the tree builder recomputes it over the final list instead
/// of trusting the running tally.
pub(crate) fn count_comments(threads: &[CommentThread]) -> i64 {
  threads
    .iter()
    .map(|thread| thread.reply_count() as i64)
    .sum::<i64>()
    + threads.len() as i64
}
