//! Blog post entity for SeaORM. Tags are stored as a JSON array.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use arena_core::domain::{BlogCategory, BlogPost};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
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
    pub read_time: i32,
    pub tags: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            excerpt: model.excerpt,
            image: model.image,
            category: model.category.parse().unwrap_or(BlogCategory::Analiz),
            date: model.date,
            slug: model.slug,
            featured: model.featured,
            author: model.author,
            read_time: model.read_time.max(0) as u32,
            tags: serde_json::from_value(model.tags).unwrap_or_default(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            excerpt: Set(post.excerpt),
            image: Set(post.image),
            category: Set(post.category.as_str().to_string()),
            date: Set(post.date),
            slug: Set(post.slug),
            featured: Set(post.featured),
            author: Set(post.author),
            read_time: Set(post.read_time as i32),
            tags: Set(serde_json::to_value(&post.tags).unwrap_or_default()),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
