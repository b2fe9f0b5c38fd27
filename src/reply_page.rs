use super::*;

/// One page of the `comments.list` endpoint for a parent thread.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ReplyPage {
  #[serde(default)]
  pub(crate) items: Vec<ReplyItem>,
  #[serde(rename = "nextPageToken")]
  pub(crate) next_page_token: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ReplyItem {
  pub(crate) id: String,
  pub(crate) snippet: ReplySnippet,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ReplySnippet {
  #[serde(rename = "textDisplay")]
  pub(crate) text_display: String,
}
