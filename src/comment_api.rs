use super::*;

/// The page-fetch capability the collectors depend on. Both operations are
/// idempotent reads; implementations clamp `page_size` to the API hard
/// maximum and must report failures instead of returning an empty page.
pub(crate) trait CommentApi {
  async fn fetch_reply_page(
    &self,
    parent_id: &str,
    page_size: u32,
    page_token: Option<&str>,
  ) -> Result<ReplyPage, FetchError>;

  async fn fetch_thread_page(
    &self,
    video_id: &str,
    page_size: u32,
    page_token: Option<&str>,
  ) -> Result<ThreadPage, FetchError>;
}
