//! Match entity for SeaORM. Team sides are flattened into columns.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use arena_core::domain::{Game, Match, MatchStatus, MatchTeam};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub game: String,
    pub tournament: String,
    pub date: String,
    pub time: String,
    pub team_a_name: String,
    pub team_a_logo: String,
    pub team_a_score: Option<i32>,
    pub team_b_name: String,
    pub team_b_logo: String,
    pub team_b_score: Option<i32>,
    pub status: String,
    pub result: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Match {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            game: model.game.parse().unwrap_or(Game::Valorant),
            tournament: model.tournament,
            date: model.date,
            time: model.time,
            team_a: MatchTeam {
                name: model.team_a_name,
                logo: model.team_a_logo,
                score: model.team_a_score,
            },
            team_b: MatchTeam {
                name: model.team_b_name,
                logo: model.team_b_logo,
                score: model.team_b_score,
            },
            status: model.status.parse().unwrap_or(MatchStatus::Upcoming),
            result: model.result.and_then(|r| r.parse().ok()),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Match> for ActiveModel {
    fn from(m: Match) -> Self {
        Self {
            id: Set(m.id),
            game: Set(m.game.as_str().to_string()),
            tournament: Set(m.tournament),
            date: Set(m.date),
            time: Set(m.time),
            team_a_name: Set(m.team_a.name),
            team_a_logo: Set(m.team_a.logo),
            team_a_score: Set(m.team_a.score),
            team_b_name: Set(m.team_b.name),
            team_b_logo: Set(m.team_b.logo),
            team_b_score: Set(m.team_b.score),
            status: Set(m.status.as_str().to_string()),
            result: Set(m.result.map(|r| r.as_str().to_string())),
            created_at: Set(m.created_at.into()),
            updated_at: Set(m.updated_at.into()),
        }
    }
}
