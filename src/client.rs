use {super::*, serde::de::DeserializeOwned, std::time::Duration};

/// Production page-fetch capability backed by the YouTube Data API v3.
pub(crate) struct Client {
  api_key: String,
  base_url: String,
  http: reqwest::Client,
  requests: RequestCounter,
}

#[derive(Deserialize)]
struct ErrorBody {
  error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
  message: String,
}

impl Client {
  const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

  const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

  async fn get_page<T: DeserializeOwned>(
    &self,
    endpoint: &str,
    query: &[(&str, &str)],
  ) -> Result<T, FetchError> {
    self.requests.increment();

    let response = self
      .http
      .get(format!("{}/{endpoint}", self.base_url))
      .query(query)
      .send()
      .await?;

    let status = response.status();

    if !status.is_success() {
      let message = response.json::<ErrorBody>().await.map_or_else(
        |_| "no error detail".to_string(),
        |body| body.error.message,
      );

      return Err(FetchError::Api { message, status });
    }

    Ok(response.json::<T>().await?)
  }

  pub(crate) fn new(
    api_key: String,
    requests: RequestCounter,
  ) -> Result<Self, FetchError> {
    Self::with_base_url(api_key, Self::API_BASE_URL.to_string(), requests)
  }

  pub(crate) fn with_base_url(
    api_key: String,
    base_url: String,
    requests: RequestCounter,
  ) -> Result<Self, FetchError> {
    let http = reqwest::Client::builder()
      .timeout(Self::REQUEST_TIMEOUT)
      .build()?;

    Ok(Self {
      api_key,
      base_url,
      http,
      requests,
    })
  }
}

impl CommentApi for Client {
  async fn fetch_reply_page(
    &self,
    parent_id: &str,
    page_size: u32,
    page_token: Option<&str>,
  ) -> Result<ReplyPage, FetchError> {
    let page_size = page_size.min(MAX_PAGE_SIZE).to_string();

    let mut query = vec![
      ("parentId", parent_id),
      ("maxResults", page_size.as_str()),
      ("part", "snippet"),
      ("key", self.api_key.as_str()),
    ];

    if let Some(token) = page_token {
      query.push(("pageToken", token));
    }

    self.get_page("comments", &query).await
  }

  async fn fetch_thread_page(
    &self,
    video_id: &str,
    page_size: u32,
    page_token: Option<&str>,
  ) -> Result<ThreadPage, FetchError> {
    let page_size = page_size.min(MAX_PAGE_SIZE).to_string();

    let mut query = vec![
      ("videoId", video_id),
      ("maxResults", page_size.as_str()),
      ("part", "snippet"),
      ("order", "relevance"),
      ("key", self.api_key.as_str()),
    ];

    if let Some(token) = page_token {
      query.push(("pageToken", token));
    }

    self.get_page("commentThreads", &query).await
  }
}
