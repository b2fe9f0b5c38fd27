use super::*;

/// Collects at least `max_results` comments for a video when that many are
/// available, trimmed only by page granularity, and shapes them into the
/// output tree. Aborts on the first fetch failure.
pub(crate) async fn comments_tree<A: CommentApi>(
  api: &A,
  video_id: &str,
  max_results: u32,
) -> Result<CommentTree, FetchError> {
  let threads = Collector::new(api, max_results)
    .collect_threads(video_id)
    .await?;

  Ok(CommentTree::new(video_id, threads))
}

pub(crate) struct Collector<'a, A> {
  api: &'a A,
  quota: Quota,
}

impl<'a, A: CommentApi> Collector<'a, A> {
  /// Inner pagination loop: drains reply pages for one thread until its
  /// pages run out or the quota is met, appending each page in fetch
  /// order.
  async fn collect_replies(
    &mut self,
    thread: &mut CommentThread,
  ) -> Result<(), FetchError> {
    let mut page_token: Option<String> = None;

    loop {
      let page = self
        .api
        .fetch_reply_page(&thread.id, self.quota.page_size(), page_token.as_deref())
        .await?;

      page_token = page.next_page_token.filter(|token| !token.is_empty());

      let fetched = page.items.len() as i64;

      thread.attach_replies(page.items);

      // The thread itself already advanced the quota by one; only the
      // overage past the fetch threshold counts here. The threshold and
      // the subtraction constant must stay the same value.
      self
        .quota
        .record(fetched - i64::from(REPLY_FETCH_THRESHOLD));

      if self.quota.is_satisfied() || page_token.is_none() {
        return Ok(());
      }
    }
  }

  /// Outer pagination loop over thread pages. Reply collection for a page
  /// runs to completion, one thread at a time, before the page is appended
  /// and the next stop decision is made, so the quota and the accumulator
  /// only ever have a single writer.
  pub(crate) async fn collect_threads(
    mut self,
    video_id: &str,
  ) -> Result<Vec<CommentThread>, FetchError> {
    let mut collected = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
      let page = self
        .api
        .fetch_thread_page(video_id, self.quota.page_size(), page_token.as_deref())
        .await?;

      page_token = page.next_page_token.filter(|token| !token.is_empty());

      let mut threads = page
        .items
        .into_iter()
        .map(CommentThread::from)
        .collect::<Vec<_>>();

      // The count the server actually returned is authoritative, not the
      // size we asked for.
      self.quota.record(count_comments(&threads));

      for thread in &mut threads {
        if thread.total_reply_count > REPLY_FETCH_THRESHOLD
          && !self.quota.is_satisfied()
        {
          self.collect_replies(thread).await?;
        }
      }

      collected.append(&mut threads);

      if self.quota.is_satisfied() || page_token.is_none() {
        return Ok(collected);
      }
    }
  }

  pub(crate) fn new(api: &'a A, max_results: u32) -> Self {
    Self {
      api,
      quota: Quota::new(max_results),
    }
  }
}
