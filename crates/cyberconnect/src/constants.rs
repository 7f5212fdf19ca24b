/// Object key the whole post list is written under by the snapshot routes.
pub const FEED_SNAPSHOT_KEY: &str = "feed/posts.json";
