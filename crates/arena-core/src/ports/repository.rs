use async_trait::async_trait;

use crate::domain::{
    BlogDraft, BlogPatch, BlogPost, Match, MatchDraft, MatchPatch, NewsArticle, NewsDraft,
    NewsPatch,
};
use crate::error::RepoError;

/// News collection port.
///
/// Listings are ordered by publish date descending; lookups return `Ok(None)`
/// when the record is absent, while `update`/`delete` on an unknown id fail
/// with [`RepoError::NotFound`] and leave the collection unchanged.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<NewsArticle>, RepoError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<NewsArticle>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<NewsArticle>, RepoError>;

    /// Featured articles, capped at [`crate::domain::FEATURED_LIMIT`].
    async fn list_featured(&self) -> Result<Vec<NewsArticle>, RepoError>;

    async fn create(&self, draft: NewsDraft) -> Result<NewsArticle, RepoError>;

    async fn update(&self, id: &str, patch: NewsPatch) -> Result<NewsArticle, RepoError>;

    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}

/// Blog collection port - symmetric with [`NewsRepository`].
#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError>;

    async fn list_featured(&self) -> Result<Vec<BlogPost>, RepoError>;

    async fn create(&self, draft: BlogDraft) -> Result<BlogPost, RepoError>;

    async fn update(&self, id: &str, patch: BlogPatch) -> Result<BlogPost, RepoError>;

    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}

/// Match collection port. Matches have no slug or featured flag; instead the
/// schedule views filter by status.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Match>, RepoError>;

    /// Upcoming matches, soonest first, capped at 4.
    async fn list_upcoming(&self) -> Result<Vec<Match>, RepoError>;

    /// Completed matches, most recent first, capped at 4.
    async fn list_completed(&self) -> Result<Vec<Match>, RepoError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Match>, RepoError>;

    async fn create(&self, draft: MatchDraft) -> Result<Match, RepoError>;

    async fn update(&self, id: &str, patch: MatchPatch) -> Result<Match, RepoError>;

    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}

/// Cap applied by the match schedule views.
pub const SCHEDULE_LIMIT: usize = 4;
