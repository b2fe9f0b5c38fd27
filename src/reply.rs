use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Reply {
  pub(crate) id: String,
  pub(crate) text: String,
}

impl From<ReplyItem> for Reply {
  fn from(item: ReplyItem) -> Self {
    Self {
      id: item.id,
      text: item.snippet.text_display,
    }
  }
}
