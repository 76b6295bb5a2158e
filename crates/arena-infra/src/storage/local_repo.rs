//! Repository implementations over [`LocalStore`].

use std::path::Path;

use async_trait::async_trait;

use arena_core::domain::{
    BlogDraft, BlogPatch, BlogPost, FEATURED_LIMIT, Match, MatchDraft, MatchPatch, MatchStatus,
    NewsArticle, NewsDraft, NewsPatch, SluggedRecord, sort_newest_first, sort_oldest_first,
};
use arena_core::error::RepoError;
use arena_core::ports::{BlogRepository, MatchRepository, NewsRepository, SCHEDULE_LIMIT};

use super::local::LocalStore;
use super::seed;

// File names mirror the storage keys of the legacy browser-storage layout.
const NEWS_FILE: &str = "arenabulls_news.json";
const BLOG_FILE: &str = "arenabulls_blog.json";
const MATCHES_FILE: &str = "arenabulls_matches.json";

/// News collection backed by [`LocalStore`].
pub struct LocalNewsRepository {
    store: LocalStore<NewsArticle>,
}

impl LocalNewsRepository {
    pub fn in_memory() -> Self {
        Self {
            store: LocalStore::in_memory(seed::sample_news()),
        }
    }

    pub fn file_backed(data_dir: &Path) -> Self {
        Self {
            store: LocalStore::file_backed(data_dir.join(NEWS_FILE), seed::sample_news()),
        }
    }
}

#[async_trait]
impl NewsRepository for LocalNewsRepository {
    async fn list(&self) -> Result<Vec<NewsArticle>, RepoError> {
        let mut articles = self.store.snapshot().await;
        sort_newest_first(&mut articles);
        Ok(articles)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<NewsArticle>, RepoError> {
        Ok(self.store.find(|a| a.id == id).await)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<NewsArticle>, RepoError> {
        Ok(self.store.find(|a| a.slug == slug).await)
    }

    async fn list_featured(&self) -> Result<Vec<NewsArticle>, RepoError> {
        let mut featured: Vec<_> = self
            .store
            .snapshot()
            .await
            .into_iter()
            .filter(|a| a.is_featured())
            .collect();
        featured.truncate(FEATURED_LIMIT);
        Ok(featured)
    }

    async fn create(&self, draft: NewsDraft) -> Result<NewsArticle, RepoError> {
        self.store.insert(|id| NewsArticle::create(id, draft)).await
    }

    async fn update(&self, id: &str, patch: NewsPatch) -> Result<NewsArticle, RepoError> {
        self.store.update(id, |article| article.apply(patch)).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        self.store.remove(id).await
    }
}

/// Blog collection backed by [`LocalStore`].
pub struct LocalBlogRepository {
    store: LocalStore<BlogPost>,
}

impl LocalBlogRepository {
    pub fn in_memory() -> Self {
        Self {
            store: LocalStore::in_memory(seed::sample_blog_posts()),
        }
    }

    pub fn file_backed(data_dir: &Path) -> Self {
        Self {
            store: LocalStore::file_backed(data_dir.join(BLOG_FILE), seed::sample_blog_posts()),
        }
    }
}

#[async_trait]
impl BlogRepository for LocalBlogRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        let mut posts = self.store.snapshot().await;
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.store.find(|p| p.id == id).await)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.store.find(|p| p.slug == slug).await)
    }

    async fn list_featured(&self) -> Result<Vec<BlogPost>, RepoError> {
        let mut featured: Vec<_> = self
            .store
            .snapshot()
            .await
            .into_iter()
            .filter(|p| p.is_featured())
            .collect();
        featured.truncate(FEATURED_LIMIT);
        Ok(featured)
    }

    async fn create(&self, draft: BlogDraft) -> Result<BlogPost, RepoError> {
        self.store.insert(|id| BlogPost::create(id, draft)).await
    }

    async fn update(&self, id: &str, patch: BlogPatch) -> Result<BlogPost, RepoError> {
        self.store.update(id, |post| post.apply(patch)).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        self.store.remove(id).await
    }
}

/// Match collection backed by [`LocalStore`].
pub struct LocalMatchRepository {
    store: LocalStore<Match>,
}

impl LocalMatchRepository {
    pub fn in_memory() -> Self {
        Self {
            store: LocalStore::in_memory(seed::sample_matches()),
        }
    }

    pub fn file_backed(data_dir: &Path) -> Self {
        Self {
            store: LocalStore::file_backed(data_dir.join(MATCHES_FILE), seed::sample_matches()),
        }
    }
}

#[async_trait]
impl MatchRepository for LocalMatchRepository {
    async fn list(&self) -> Result<Vec<Match>, RepoError> {
        let mut matches = self.store.snapshot().await;
        sort_newest_first(&mut matches);
        Ok(matches)
    }

    async fn list_upcoming(&self) -> Result<Vec<Match>, RepoError> {
        let mut upcoming: Vec<_> = self
            .store
            .snapshot()
            .await
            .into_iter()
            .filter(|m| m.status == MatchStatus::Upcoming)
            .collect();
        sort_oldest_first(&mut upcoming);
        upcoming.truncate(SCHEDULE_LIMIT);
        Ok(upcoming)
    }

    async fn list_completed(&self) -> Result<Vec<Match>, RepoError> {
        let mut completed: Vec<_> = self
            .store
            .snapshot()
            .await
            .into_iter()
            .filter(|m| m.status == MatchStatus::Completed)
            .collect();
        sort_newest_first(&mut completed);
        completed.truncate(SCHEDULE_LIMIT);
        Ok(completed)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Match>, RepoError> {
        Ok(self.store.find(|m| m.id == id).await)
    }

    async fn create(&self, draft: MatchDraft) -> Result<Match, RepoError> {
        self.store.insert(|id| Match::create(id, draft)).await
    }

    async fn update(&self, id: &str, patch: MatchPatch) -> Result<Match, RepoError> {
        self.store.update(id, |m| m.apply(patch)).await
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        self.store.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::domain::NewsCategory;
    use arena_core::slug::unique_slug;

    fn draft(title: &str, date: &str, featured: bool) -> NewsDraft {
        NewsDraft {
            title: title.to_string(),
            content: "İçerik".to_string(),
            excerpt: "Özet".to_string(),
            image: String::new(),
            category: NewsCategory::Haber,
            date: date.to_string(),
            slug: unique_slug(title),
            featured,
            author: "Arena Bulls Medya".to_string(),
        }
    }

    fn empty_news_repo() -> LocalNewsRepository {
        LocalNewsRepository {
            store: LocalStore::in_memory(Vec::new()),
        }
    }

    #[tokio::test]
    async fn created_ids_are_unique_and_timestamped() {
        let repo = empty_news_repo();
        let a = repo.create(draft("Birinci", "2024-03-01", false)).await.unwrap();
        let b = repo.create(draft("İkinci", "2024-03-02", false)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("news-"));
        assert_eq!(a.created_at, a.updated_at);
    }

    #[tokio::test]
    async fn list_is_sorted_by_date_descending() {
        let repo = empty_news_repo();
        repo.create(draft("Eski", "2024-01-05", false)).await.unwrap();
        repo.create(draft("Yeni", "2024-02-10", false)).await.unwrap();
        repo.create(draft("Orta", "2024-01-20", false)).await.unwrap();

        let dates: Vec<_> = repo.list().await.unwrap().iter().map(|a| a.date.clone()).collect();
        assert_eq!(dates, vec!["2024-02-10", "2024-01-20", "2024-01-05"]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_leaves_collection_unchanged() {
        let repo = empty_news_repo();
        let created = repo.create(draft("Tek", "2024-03-01", false)).await.unwrap();

        let patch = NewsPatch {
            title: Some("Değişti".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            repo.update("news-0", patch).await,
            Err(RepoError::NotFound)
        ));

        let unchanged = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(unchanged.title, "Tek");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found_and_leaves_collection_unchanged() {
        let repo = empty_news_repo();
        repo.create(draft("Tek", "2024-03-01", false)).await.unwrap();

        assert!(matches!(repo.delete("news-0").await, Err(RepoError::NotFound)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_merges_fields_and_refreshes_timestamp() {
        let repo = empty_news_repo();
        let created = repo.create(draft("Başlık", "2024-03-01", false)).await.unwrap();

        let patch = NewsPatch {
            featured: Some(true),
            excerpt: Some("Yeni özet".to_string()),
            ..Default::default()
        };
        let updated = repo.update(&created.id, patch).await.unwrap();

        assert!(updated.featured);
        assert_eq!(updated.excerpt, "Yeni özet");
        assert_eq!(updated.title, "Başlık");
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn created_record_round_trips_through_slug_lookup() {
        let repo = empty_news_repo();
        let created = repo.create(draft("Test Haber", "2024-03-01", true)).await.unwrap();

        let (base, suffix) = created.slug.rsplit_once('-').unwrap();
        assert_eq!(base, "test-haber");
        assert_eq!(suffix.len(), 4);

        let fetched = repo.find_by_slug(&created.slug).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Test Haber");
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.content, created.content);
        assert_eq!(fetched.excerpt, created.excerpt);
        assert_eq!(fetched.category, created.category);
        assert_eq!(fetched.date, created.date);
        assert_eq!(fetched.featured, created.featured);
        assert_eq!(fetched.author, created.author);
    }

    #[tokio::test]
    async fn featured_listing_is_capped_at_six() {
        let repo = empty_news_repo();
        for i in 0..9 {
            repo.create(draft(&format!("Haber {i}"), "2024-03-01", true))
                .await
                .unwrap();
        }
        assert_eq!(repo.list_featured().await.unwrap().len(), FEATURED_LIMIT);
    }

    #[tokio::test]
    async fn file_backend_survives_reload() {
        let dir = std::env::temp_dir().join(format!(
            "arena-store-test-{}",
            uuid::Uuid::new_v4()
        ));

        let created = {
            let repo = LocalNewsRepository {
                store: LocalStore::file_backed(dir.join(NEWS_FILE), Vec::new()),
            };
            repo.create(draft("Kalıcı Haber", "2024-03-01", false))
                .await
                .unwrap()
        };

        let reloaded = LocalNewsRepository {
            store: LocalStore::file_backed(dir.join(NEWS_FILE), Vec::new()),
        };
        let fetched = reloaded.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Kalıcı Haber");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn seeded_repositories_start_populated() {
        let news = LocalNewsRepository::in_memory();
        assert!(!news.list().await.unwrap().is_empty());

        let blogs = LocalBlogRepository::in_memory();
        assert!(!blogs.list().await.unwrap().is_empty());

        let matches = LocalMatchRepository::in_memory();
        assert!(!matches.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upcoming_matches_are_soonest_first() {
        let repo = LocalMatchRepository::in_memory();
        let upcoming = repo.list_upcoming().await.unwrap();
        assert!(upcoming.len() <= SCHEDULE_LIMIT);
        assert!(upcoming.iter().all(|m| m.status == MatchStatus::Upcoming));
        for pair in upcoming.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }
}
