//! Batch blog import - fetches source files over HTTP and stores the
//! parsed posts.

use arena_core::domain::{BlogDraft, BlogPost, estimate_read_time};
use arena_core::import::parse_blog_source;
use arena_core::ports::BlogRepository;
use arena_core::slug::unique_slug;
use arena_shared::dto::{ImportFailure, ImportReport};

use crate::handlers::today;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600&text=Blog+Image";

/// Fetches blog source files and turns them into stored posts.
#[derive(Clone)]
pub struct BlogImporter {
    http: reqwest::Client,
}

impl BlogImporter {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Import every URL in the batch. Failures are collected per URL; one bad
    /// source never aborts the rest.
    pub async fn import(
        &self,
        repo: &dyn BlogRepository,
        urls: &[String],
    ) -> ImportReport<BlogPost> {
        let mut posts = Vec::new();
        let mut errors = Vec::new();

        for url in urls {
            match self.import_one(repo, url).await {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!(%url, error = %e, "Blog import failed");
                    errors.push(ImportFailure {
                        url: url.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        ImportReport {
            imported: posts.len(),
            failed: errors.len(),
            posts,
            errors,
        }
    }

    async fn import_one(&self, repo: &dyn BlogRepository, url: &str) -> anyhow::Result<BlogPost> {
        let raw = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let source = parse_blog_source(&raw);
        let draft = BlogDraft {
            slug: unique_slug(&source.title),
            date: today(),
            read_time: estimate_read_time(&source.content),
            image: PLACEHOLDER_IMAGE.to_string(),
            title: source.title,
            content: source.content,
            excerpt: source.excerpt,
            category: source.category,
            featured: source.featured,
            author: source.author,
            tags: source.tags,
        };

        let post = repo.create(draft).await?;
        Ok(post)
    }
}

impl Default for BlogImporter {
    fn default() -> Self {
        Self::new()
    }
}
