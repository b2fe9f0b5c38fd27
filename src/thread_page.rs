use super::*;

/// One page of the `commentThreads.list` endpoint.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ThreadPage {
  #[serde(default)]
  pub(crate) items: Vec<ThreadItem>,
  #[serde(rename = "nextPageToken")]
  pub(crate) next_page_token: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ThreadItem {
  pub(crate) id: String,
  pub(crate) snippet: ThreadSnippet,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ThreadSnippet {
  #[serde(rename = "topLevelComment")]
  pub(crate) top_level_comment: TopLevelComment,
  #[serde(rename = "totalReplyCount")]
  pub(crate) total_reply_count: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TopLevelComment {
  pub(crate) snippet: TopLevelSnippet,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TopLevelSnippet {
  #[serde(rename = "textDisplay")]
  pub(crate) text_display: String,
}
