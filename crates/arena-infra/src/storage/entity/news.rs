//! News entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use arena_core::domain::{NewsArticle, NewsCategory};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub category: String,
    pub date: String,
    pub slug: String,
    pub featured: bool,
    pub author: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain article. A category value the
/// domain no longer knows falls back to the general news category.
impl From<Model> for NewsArticle {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            excerpt: model.excerpt,
            image: model.image,
            category: model.category.parse().unwrap_or(NewsCategory::Haber),
            date: model.date,
            slug: model.slug,
            featured: model.featured,
            author: model.author,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from the domain article to a SeaORM ActiveModel.
impl From<NewsArticle> for ActiveModel {
    fn from(article: NewsArticle) -> Self {
        Self {
            id: Set(article.id),
            title: Set(article.title),
            content: Set(article.content),
            excerpt: Set(article.excerpt),
            image: Set(article.image),
            category: Set(article.category.as_str().to_string()),
            date: Set(article.date),
            slug: Set(article.slug),
            featured: Set(article.featured),
            author: Set(article.author),
            created_at: Set(article.created_at.into()),
            updated_at: Set(article.updated_at.into()),
        }
    }
}
