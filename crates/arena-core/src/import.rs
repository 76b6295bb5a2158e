//! Parsing of blog source files.
//!
//! Imported posts arrive as plain text with an optional front-matter header:
//!
//! ```text
//! ---
//! title: Yeni Sezon Analizi
//! category: analiz
//! tags: valorant, meta
//! featured: true
//! ---
//! Body text...
//! ```

use crate::domain::BlogCategory;

pub const DEFAULT_AUTHOR: &str = "Arena Bulls Medya";

/// Metadata and body extracted from a blog source file.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogSource {
    pub title: String,
    pub excerpt: String,
    pub category: BlogCategory,
    pub author: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub content: String,
}

/// Parse a blog source file. Missing or malformed metadata falls back to
/// defaults; a file without a front-matter header is treated as all body.
pub fn parse_blog_source(raw: &str) -> BlogSource {
    let lines: Vec<&str> = raw.lines().collect();

    let mut title = None;
    let mut excerpt = None;
    let mut category = None;
    let mut author = None;
    let mut tags = None;
    let mut featured = None;
    let mut body_start = 0;

    if lines.first() == Some(&"---") {
        for (i, line) in lines.iter().enumerate().skip(1) {
            if *line == "---" {
                body_start = i + 1;
                break;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "title" => title = Some(value.to_string()),
                "excerpt" => excerpt = Some(value.to_string()),
                "category" => category = value.parse().ok(),
                "author" => author = Some(value.to_string()),
                "tags" => {
                    tags = Some(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|t| !t.is_empty())
                            .map(str::to_string)
                            .collect(),
                    )
                }
                "featured" => featured = Some(value.eq_ignore_ascii_case("true")),
                _ => {}
            }
        }
    }

    BlogSource {
        title: title.unwrap_or_else(|| "Untitled".to_string()),
        excerpt: excerpt.unwrap_or_default(),
        category: category.unwrap_or(BlogCategory::Analiz),
        author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        tags: tags.unwrap_or_default(),
        featured: featured.unwrap_or(false),
        content: lines[body_start.min(lines.len())..].join("\n").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_front_matter_and_body() {
        let raw = "---\n\
                   title: Meta Analizi\n\
                   excerpt: Kısa özet\n\
                   category: strateji\n\
                   author: Analiz Ekibi\n\
                   tags: valorant, meta , \n\
                   featured: True\n\
                   ---\n\
                   \n\
                   İlk paragraf.\n\
                   İkinci paragraf.";

        let source = parse_blog_source(raw);
        assert_eq!(source.title, "Meta Analizi");
        assert_eq!(source.excerpt, "Kısa özet");
        assert_eq!(source.category, BlogCategory::Strateji);
        assert_eq!(source.author, "Analiz Ekibi");
        assert_eq!(source.tags, vec!["valorant", "meta"]);
        assert!(source.featured);
        assert_eq!(source.content, "İlk paragraf.\nİkinci paragraf.");
    }

    #[test]
    fn file_without_header_is_all_body() {
        let source = parse_blog_source("Sadece gövde metni.\nBaşlık yok.");
        assert_eq!(source.title, "Untitled");
        assert_eq!(source.category, BlogCategory::Analiz);
        assert_eq!(source.author, DEFAULT_AUTHOR);
        assert!(source.tags.is_empty());
        assert!(!source.featured);
        assert_eq!(source.content, "Sadece gövde metni.\nBaşlık yok.");
    }

    #[test]
    fn value_with_colon_is_kept_whole() {
        let raw = "---\ntitle: Soru: Meta Nedir?\n---\nGövde";
        let source = parse_blog_source(raw);
        assert_eq!(source.title, "Soru: Meta Nedir?");
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        let raw = "---\ntitle: X\ncategory: spor\n---\nGövde";
        assert_eq!(parse_blog_source(raw).category, BlogCategory::Analiz);
    }
}
