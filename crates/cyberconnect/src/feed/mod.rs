pub mod types;

use chrono::TimeZone;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub use types::{NewPost, Post, UserRole};

pub const TRENDING_TOPICS: [&str; 3] = ["#CyberImplants", "#NeonNights", "#VirtualReality"];

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Unknown post: {0}")]
    UnknownPost(Uuid),
}

/// In-memory feed state. Mutations live for the process lifetime only;
/// nothing is written to storage unless a snapshot is requested
/// explicitly through the routes.
pub struct Feed {
    posts: RwLock<Vec<Post>>,
}

impl Feed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts: RwLock::new(posts) }
    }

    /// The demo posts every fresh instance starts with.
    pub fn seeded() -> Self {
        Self::new(seed_posts())
    }

    /// Posts visible to `role`. VIP posts are filtered out for normal
    /// users.
    pub async fn visible_posts(&self, role: UserRole) -> Vec<Post> {
        let posts = self.posts.read().await;
        posts
            .iter()
            .filter(|post| !post.is_vip || matches!(role, UserRole::Vip | UserRole::Admin))
            .cloned()
            .collect()
    }

    pub async fn create_post(&self, new_post: NewPost) -> Post {
        let post = Post {
            id: Uuid::new_v4(),
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            timestamp: Utc::now(),
            is_vip: new_post.is_vip,
            likes: 0,
            comments: Vec::new(),
            attachments: new_post.attachments,
        };

        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        post
    }

    pub async fn like(&self, id: Uuid) -> Result<Post, FeedError> {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|post| post.id == id).ok_or(FeedError::UnknownPost(id))?;
        post.likes += 1;
        Ok(post.clone())
    }

    pub async fn comment(&self, id: Uuid, comment: String) -> Result<Post, FeedError> {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|post| post.id == id).ok_or(FeedError::UnknownPost(id))?;
        post.comments.push(comment);
        Ok(post.clone())
    }

    /// Full copy of the current post list, in feed order.
    pub async fn snapshot(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Replaces the whole feed with `posts`.
    pub async fn replace(&self, posts: Vec<Post>) {
        *self.posts.write().await = posts;
    }
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: Uuid::new_v4(),
            title: "Welcome to CyberConnect".to_string(),
            content: "Dive into the neon-lit world of our cyberpunk social platform. Share your augmented \
                      reality experiences and connect with fellow netrunners."
                .to_string(),
            author: "CyberMod".to_string(),
            timestamp: Utc.with_ymd_and_hms(2023, 6, 10, 10, 0, 0).unwrap(),
            is_vip: false,
            likes: 42,
            comments: vec!["Awesome platform!".to_string(), "Can't wait to explore more!".to_string()],
            attachments: vec!["/images/cyber-world.jpg".to_string()],
        },
        Post {
            id: Uuid::new_v4(),
            title: "VIP Exclusive: Upcoming Cyber Enhancements".to_string(),
            content: "Get a sneak peek at the latest neural implants and cybernetic upgrades. Only for our VIP \
                      members."
                .to_string(),
            author: "TechGuru".to_string(),
            timestamp: Utc.with_ymd_and_hms(2023, 6, 11, 14, 30, 0).unwrap(),
            is_vip: true,
            likes: 78,
            comments: vec!["Mind-blowing tech!".to_string(), "When can we pre-order?".to_string()],
            attachments: vec!["/images/cyber-implants.jpg".to_string()],
        },
    ]
}
