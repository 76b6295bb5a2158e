//! Domain entities - the core business objects.

mod blog;
mod matches;
mod news;
mod record;
mod user;

pub use blog::{BlogCategory, BlogDraft, BlogPatch, BlogPost, estimate_read_time};
pub use matches::{Game, Match, MatchDraft, MatchPatch, MatchResult, MatchStatus, MatchTeam};
pub use news::{NewsArticle, NewsCategory, NewsDraft, NewsPatch};
pub use record::{FEATURED_LIMIT, Record, SluggedRecord, sort_newest_first, sort_oldest_first};
pub use user::{Role, User};
