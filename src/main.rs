use {
  anyhow::{Context, bail},
  client::Client,
  collector::comments_tree,
  comment_api::CommentApi,
  comment_thread::CommentThread,
  count::count_comments,
  fetch_error::FetchError,
  quota::Quota,
  reply::Reply,
  reply_page::{ReplyItem, ReplyPage},
  request_counter::RequestCounter,
  serde::{Deserialize, Serialize},
  std::{env, process},
  thread_page::{ThreadItem, ThreadPage},
  tree::CommentTree,
};

mod client;
mod collector;
mod comment_api;
mod comment_thread;
mod count;
mod fetch_error;
mod quota;
mod reply;
mod reply_page;
mod request_counter;
mod thread_page;
mod tree;

const MAX_PAGE_SIZE: u32 = 100;

const REPLY_FETCH_THRESHOLD: u32 = 5;

const USAGE: &str = "usage: ytc <video-id> <max-results>";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let mut args = env::args().skip(1);

  let (video_id, max_results) = match (args.next(), args.next()) {
    (Some(video_id), Some(max_results)) => (video_id, max_results),
    _ => bail!("missing video id or max results\n{USAGE}"),
  };

  let max_results = max_results
    .parse::<u32>()
    .ok()
    .filter(|&n| n >= 1)
    .with_context(|| {
      format!("max-results must be a positive integer, got `{max_results}`")
    })?;

  let api_key = env::var("YOUTUBE_API_KEY")
    .context("YOUTUBE_API_KEY environment variable is not set")?;

  let requests = RequestCounter::default();

  let client = Client::new(api_key, requests.clone())?;

  let tree = comments_tree(&client, &video_id, max_results)
    .await
    .context("could not fetch the comment tree")?;

  println!("{}", serde_json::to_string_pretty(&tree)?);

  eprintln!(
    "{} threads, {} comments, {} API request(s)",
    tree.metadata.total_threads,
    tree.metadata.total_count,
    requests.total()
  );

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, cause) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {cause}");
    }

    process::exit(1);
  }
}
