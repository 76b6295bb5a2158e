use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Record, SluggedRecord};
use crate::error::DomainError;

/// Editorial category of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlogCategory {
    #[serde(rename = "analiz")]
    Analiz,
    #[serde(rename = "strateji")]
    Strateji,
    #[serde(rename = "röportaj")]
    Roportaj,
    #[serde(rename = "rehber")]
    Rehber,
    #[serde(rename = "teknoloji")]
    Teknoloji,
    #[serde(rename = "sektör")]
    Sektor,
}

impl BlogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogCategory::Analiz => "analiz",
            BlogCategory::Strateji => "strateji",
            BlogCategory::Roportaj => "röportaj",
            BlogCategory::Rehber => "rehber",
            BlogCategory::Teknoloji => "teknoloji",
            BlogCategory::Sektor => "sektör",
        }
    }
}

impl FromStr for BlogCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analiz" => Ok(BlogCategory::Analiz),
            "strateji" => Ok(BlogCategory::Strateji),
            "röportaj" => Ok(BlogCategory::Roportaj),
            "rehber" => Ok(BlogCategory::Rehber),
            "teknoloji" => Ok(BlogCategory::Teknoloji),
            "sektör" => Ok(BlogCategory::Sektor),
            other => Err(DomainError::Validation(format!(
                "unknown blog category: {other}"
            ))),
        }
    }
}

/// Estimated reading time in minutes, derived from content length.
pub fn estimate_read_time(content: &str) -> u32 {
    (content.chars().count().div_ceil(1000) * 2) as u32
}

/// Blog post entity - a news-shaped record with read time and tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub category: BlogCategory,
    pub date: String,
    pub slug: String,
    pub featured: bool,
    pub author: String,
    pub read_time: u32,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub category: BlogCategory,
    pub date: String,
    pub slug: String,
    pub featured: bool,
    pub author: String,
    pub read_time: u32,
    pub tags: Vec<String>,
}

/// Partial update for a blog post; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub category: Option<BlogCategory>,
    pub date: Option<String>,
    pub slug: Option<String>,
    pub featured: Option<bool>,
    pub author: Option<String>,
    pub read_time: Option<u32>,
    pub tags: Option<Vec<String>>,
}

impl BlogPost {
    pub fn create(id: String, draft: BlogDraft) -> Self {
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
            read_time: draft.read_time,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: BlogPatch) {
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
        if let Some(read_time) = patch.read_time {
            self.read_time = read_time;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }
}

impl Record for BlogPost {
    const ID_PREFIX: &'static str = "blog";

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

impl SluggedRecord for BlogPost {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_time_scales_with_content_length() {
        assert_eq!(estimate_read_time(""), 0);
        assert_eq!(estimate_read_time(&"a".repeat(500)), 2);
        assert_eq!(estimate_read_time(&"a".repeat(1000)), 2);
        assert_eq!(estimate_read_time(&"a".repeat(1001)), 4);
        assert_eq!(estimate_read_time(&"a".repeat(5500)), 12);
    }

    #[test]
    fn category_round_trips_through_str() {
        for raw in ["analiz", "strateji", "röportaj", "rehber", "teknoloji", "sektör"] {
            let category: BlogCategory = raw.parse().unwrap();
            assert_eq!(category.as_str(), raw);
        }
        assert!("spor".parse::<BlogCategory>().is_err());
    }
}
