use super::*;

/// The output entity handed back to the caller.
#[derive(Debug, Serialize)]
pub(crate) struct CommentTree {
  pub(crate) comments: Vec<TreeComment>,
  pub(crate) metadata: Metadata,
}

#[derive(Debug, Serialize)]
pub(crate) struct Metadata {
  pub(crate) kind: &'static str,
  #[serde(rename = "totalCount")]
  pub(crate) total_count: i64,
  #[serde(rename = "totalThreads")]
  pub(crate) total_threads: usize,
  #[serde(rename = "videoId")]
  pub(crate) video_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TreeComment {
  pub(crate) id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) replies: Option<Vec<TreeReply>>,
  pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TreeReply {
  pub(crate) id: String,
  pub(crate) text: String,
}

impl CommentTree {
  pub(crate) fn new(video_id: &str, threads: Vec<CommentThread>) -> Self {
    // Recounted over the final, reply-augmented list; the running tally
    // used for paging decisions is only an approximation.
    let metadata = Metadata {
      kind: "comments",
      total_count: count_comments(&threads),
      total_threads: threads.len(),
      video_id: video_id.to_string(),
    };

    Self {
      comments: threads.into_iter().map(TreeComment::from).collect(),
      metadata,
    }
  }
}

impl From<CommentThread> for TreeComment {
  fn from(thread: CommentThread) -> Self {
    Self {
      id: thread.id,
      replies: thread
        .replies
        .map(|replies| replies.into_iter().map(TreeReply::from).collect()),
      text: thread.text,
    }
  }
}

impl From<Reply> for TreeReply {
  fn from(reply: Reply) -> Self {
    Self {
      id: reply.id,
      text: reply.text,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn reply(id: &str) -> Reply {
    Reply {
      id: id.to_string(),
      text: format!("reply {id}"),
    }
  }

  fn thread(id: &str, replies: Option<Vec<Reply>>) -> CommentThread {
    CommentThread {
      id: id.to_string(),
      replies,
      text: format!("thread {id}"),
      total_reply_count: 0,
    }
  }

  #[test]
  fn metadata_is_recounted_over_the_final_list() {
    let tree = CommentTree::new(
      "vid",
      vec![
        thread("t1", Some(vec![reply("r1"), reply("r2"), reply("r3")])),
        thread("t2", None),
      ],
    );

    assert_eq!(tree.metadata.kind, "comments");
    assert_eq!(tree.metadata.total_count, 5);
    assert_eq!(tree.metadata.total_threads, 2);
    assert_eq!(tree.metadata.video_id, "vid");
  }

  #[test]
  fn replies_key_is_omitted_when_none_were_fetched() {
    let tree =
      CommentTree::new("vid", vec![thread("t1", None), thread("t2", Some(vec![reply("r1")]))]);

    let value = serde_json::to_value(&tree).expect("serialize tree");

    assert!(value["comments"][0].get("replies").is_none());
    assert!(value["comments"][1].get("replies").is_some());
  }

  #[test]
  fn serializes_the_expected_json_shape() {
    let tree = CommentTree::new(
      "dQw4w9WgXcQ",
      vec![thread("t1", Some(vec![reply("r1")])), thread("t2", None)],
    );

    assert_eq!(
      serde_json::to_value(&tree).expect("serialize tree"),
      json!({
        "comments": [
          {
            "id": "t1",
            "replies": [{ "id": "r1", "text": "reply r1" }],
            "text": "thread t1",
          },
          { "id": "t2", "text": "thread t2" },
        ],
        "metadata": {
          "kind": "comments",
          "totalCount": 3,
          "totalThreads": 2,
          "videoId": "dQw4w9WgXcQ",
        },
      })
    );
  }
}
