//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use arena_core::domain::{
    BlogDraft, BlogPatch, BlogPost, FEATURED_LIMIT, Match, MatchDraft, MatchPatch, MatchStatus,
    NewsArticle, NewsDraft, NewsPatch, Record,
};
use arena_core::error::RepoError;
use arena_core::ports::{BlogRepository, MatchRepository, NewsRepository, SCHEDULE_LIMIT};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::matches::{self, Entity as MatchEntity};
use super::entity::news::{self, Entity as NewsEntity};

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

fn insert_err(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Entity already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

/// Mint a `"<prefix>-<millis>"` identifier. Collisions within the same
/// millisecond surface as a primary-key constraint violation on insert.
fn mint_id<T: Record>() -> String {
    format!("{}-{}", T::ID_PREFIX, Utc::now().timestamp_millis())
}

/// PostgreSQL news repository.
pub struct PostgresNewsRepository {
    db: DbConn,
}

impl PostgresNewsRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn list(&self) -> Result<Vec<NewsArticle>, RepoError> {
        let rows = NewsEntity::find()
            .order_by_desc(news::Column::Date)
            .order_by_desc(news::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<NewsArticle>, RepoError> {
        let row = NewsEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<NewsArticle>, RepoError> {
        tracing::debug!(slug, "Finding news by slug");
        let row = NewsEntity::find()
            .filter(news::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(row.map(Into::into))
    }

    async fn list_featured(&self) -> Result<Vec<NewsArticle>, RepoError> {
        let rows = NewsEntity::find()
            .filter(news::Column::Featured.eq(true))
            .order_by_desc(news::Column::Date)
            .limit(FEATURED_LIMIT as u64)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: NewsDraft) -> Result<NewsArticle, RepoError> {
        let article = NewsArticle::create(mint_id::<NewsArticle>(), draft);
        let active: news::ActiveModel = article.into();
        let model = active.insert(&self.db).await.map_err(insert_err)?;
        Ok(model.into())
    }

    async fn update(&self, id: &str, patch: NewsPatch) -> Result<NewsArticle, RepoError> {
        let mut article: NewsArticle = NewsEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
            .ok_or(RepoError::NotFound)?
            .into();
        article.apply(patch);

        let active: news::ActiveModel = article.into();
        let model = active.update(&self.db).await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let result = NewsEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// PostgreSQL blog repository.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        let rows = BlogEntity::find()
            .order_by_desc(blog::Column::Date)
            .order_by_desc(blog::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError> {
        let row = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        tracing::debug!(slug, "Finding blog post by slug");
        let row = BlogEntity::find()
            .filter(blog::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(row.map(Into::into))
    }

    async fn list_featured(&self) -> Result<Vec<BlogPost>, RepoError> {
        let rows = BlogEntity::find()
            .filter(blog::Column::Featured.eq(true))
            .order_by_desc(blog::Column::Date)
            .limit(FEATURED_LIMIT as u64)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: BlogDraft) -> Result<BlogPost, RepoError> {
        let post = BlogPost::create(mint_id::<BlogPost>(), draft);
        let active: blog::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(insert_err)?;
        Ok(model.into())
    }

    async fn update(&self, id: &str, patch: BlogPatch) -> Result<BlogPost, RepoError> {
        let mut post: BlogPost = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
            .ok_or(RepoError::NotFound)?
            .into();
        post.apply(patch);

        let active: blog::ActiveModel = post.into();
        let model = active.update(&self.db).await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let result = BlogEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// PostgreSQL match repository.
pub struct PostgresMatchRepository {
    db: DbConn,
}

impl PostgresMatchRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MatchRepository for PostgresMatchRepository {
    async fn list(&self) -> Result<Vec<Match>, RepoError> {
        let rows = MatchEntity::find()
            .order_by_desc(matches::Column::Date)
            .order_by_desc(matches::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_upcoming(&self) -> Result<Vec<Match>, RepoError> {
        let rows = MatchEntity::find()
            .filter(matches::Column::Status.eq(MatchStatus::Upcoming.as_str()))
            .order_by_asc(matches::Column::Date)
            .limit(SCHEDULE_LIMIT as u64)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_completed(&self) -> Result<Vec<Match>, RepoError> {
        let rows = MatchEntity::find()
            .filter(matches::Column::Status.eq(MatchStatus::Completed.as_str()))
            .order_by_desc(matches::Column::Date)
            .limit(SCHEDULE_LIMIT as u64)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Match>, RepoError> {
        let row = MatchEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, draft: MatchDraft) -> Result<Match, RepoError> {
        let m = Match::create(mint_id::<Match>(), draft);
        let active: matches::ActiveModel = m.into();
        let model = active.insert(&self.db).await.map_err(insert_err)?;
        Ok(model.into())
    }

    async fn update(&self, id: &str, patch: MatchPatch) -> Result<Match, RepoError> {
        let mut m: Match = MatchEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
            .ok_or(RepoError::NotFound)?
            .into();
        m.apply(patch);

        let active: matches::ActiveModel = m.into();
        let model = active.update(&self.db).await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let result = MatchEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
