//! Upstream Adapter - posts 上游客户端实现

mod fake_posts_client;
mod http_posts_client;

pub use fake_posts_client::{FakePostsClient, RecordedCall};
pub use http_posts_client::*;
