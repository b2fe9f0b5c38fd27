use super::*;

/// A top-level comment. `replies` stays `None` until the reply collector
/// runs for this thread, which it only does when `total_reply_count`
/// exceeds the fetch threshold.
#[derive(Clone, Debug)]
pub(crate) struct CommentThread {
  pub(crate) id: String,
  pub(crate) replies: Option<Vec<Reply>>,
  pub(crate) text: String,
  pub(crate) total_reply_count: u32,
}

impl CommentThread {
  /// Appends a fetched page of replies, preserving fetch order across
  /// pages.
  pub(crate) fn attach_replies(&mut self, items: Vec<ReplyItem>) {
    self
      .replies
      .get_or_insert_with(Vec::new)
      .extend(items.into_iter().map(Reply::from));
  }

  pub(crate) fn reply_count(&self) -> usize {
    self.replies.as_ref().map_or(0, Vec::len)
  }
}

impl From<ThreadItem> for CommentThread {
  fn from(item: ThreadItem) -> Self {
    Self {
      id: item.id,
      replies: None,
      text: item.snippet.top_level_comment.snippet.text_display,
      total_reply_count: item.snippet.total_reply_count,
    }
  }
}
