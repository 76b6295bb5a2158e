use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Record, SluggedRecord};
use crate::error::DomainError;

/// Editorial category of a news article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Haber,
    Duyuru,
    Transfer,
    Etkinlik,
    Sponsorluk,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Haber => "haber",
            NewsCategory::Duyuru => "duyuru",
            NewsCategory::Transfer => "transfer",
            NewsCategory::Etkinlik => "etkinlik",
            NewsCategory::Sponsorluk => "sponsorluk",
        }
    }
}

impl FromStr for NewsCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haber" => Ok(NewsCategory::Haber),
            "duyuru" => Ok(NewsCategory::Duyuru),
            "transfer" => Ok(NewsCategory::Transfer),
            "etkinlik" => Ok(NewsCategory::Etkinlik),
            "sponsorluk" => Ok(NewsCategory::Sponsorluk),
            other => Err(DomainError::Validation(format!(
                "unknown news category: {other}"
            ))),
        }
    }
}

/// News article entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub category: NewsCategory,
    /// Publish date, `YYYY-MM-DD`.
    pub date: String,
    /// URL-safe lookup key derived from the title.
    pub slug: String,
    pub featured: bool,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a news article.
#[derive(Debug, Clone)]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub category: NewsCategory,
    pub date: String,
    pub slug: String,
    pub featured: bool,
    pub author: String,
}

/// Partial update for a news article; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct NewsPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub category: Option<NewsCategory>,
    pub date: Option<String>,
    pub slug: Option<String>,
    pub featured: Option<bool>,
    pub author: Option<String>,
}

impl NewsArticle {
    /// Materialize a draft into an article with a minted id and fresh timestamps.
    pub fn create(id: String, draft: NewsDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            content: draft.content,
            excerpt: draft.excerpt,
            image: draft.image,
            category: draft.category,
            date: draft.date,
            slug: draft.slug,
            featured: draft.featured,
            author: draft.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update and refresh the update timestamp.
    pub fn apply(&mut self, patch: NewsPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        self.updated_at = Utc::now();
    }
}

impl Record for NewsArticle {
    const ID_PREFIX: &'static str = "news";

    fn id(&self) -> &str {
        &self.id
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl SluggedRecord for NewsArticle {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}
