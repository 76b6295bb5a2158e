use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::error::DomainError;

/// Titles the organization competes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    #[serde(rename = "VALORANT")]
    Valorant,
    #[serde(rename = "LEAGUE OF LEGENDS")]
    LeagueOfLegends,
    #[serde(rename = "FC 25")]
    Fc25,
    #[serde(rename = "COUNTER STRIKE 2")]
    CounterStrike2,
    #[serde(rename = "APEX LEGENDS")]
    ApexLegends,
    #[serde(rename = "ROCKET LEAGUE")]
    RocketLeague,
}

impl Game {
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Valorant => "VALORANT",
            Game::LeagueOfLegends => "LEAGUE OF LEGENDS",
            Game::Fc25 => "FC 25",
            Game::CounterStrike2 => "COUNTER STRIKE 2",
            Game::ApexLegends => "APEX LEGENDS",
            Game::RocketLeague => "ROCKET LEAGUE",
        }
    }
}

impl FromStr for Game {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VALORANT" => Ok(Game::Valorant),
            "LEAGUE OF LEGENDS" => Ok(Game::LeagueOfLegends),
            "FC 25" => Ok(Game::Fc25),
            "COUNTER STRIKE 2" => Ok(Game::CounterStrike2),
            "APEX LEGENDS" => Ok(Game::ApexLegends),
            "ROCKET LEAGUE" => Ok(Game::RocketLeague),
            other => Err(DomainError::Validation(format!("unknown game: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
        }
    }
}

impl FromStr for MatchStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(MatchStatus::Upcoming),
            "live" => Ok(MatchStatus::Live),
            "completed" => Ok(MatchStatus::Completed),
            other => Err(DomainError::Validation(format!(
                "unknown match status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Win => "win",
            MatchResult::Loss => "loss",
        }
    }
}

impl FromStr for MatchResult {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(MatchResult::Win),
            "loss" => Ok(MatchResult::Loss),
            other => Err(DomainError::Validation(format!(
                "unknown match result: {other}"
            ))),
        }
    }
}

/// One side of a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeam {
    pub name: String,
    pub logo: String,
    pub score: Option<i32>,
}

/// Match record entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub game: Game,
    pub tournament: String,
    /// Match date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub time: String,
    pub team_a: MatchTeam,
    pub team_b: MatchTeam,
    pub status: MatchStatus,
    pub result: Option<MatchResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MatchDraft {
    pub game: Game,
    pub tournament: String,
    pub date: String,
    pub time: String,
    pub team_a: MatchTeam,
    pub team_b: MatchTeam,
    pub status: MatchStatus,
    pub result: Option<MatchResult>,
}

/// Partial update for a match. The outer `Option` on `result` distinguishes
/// "leave unchanged" from "clear the result".
#[derive(Debug, Clone, Default)]
pub struct MatchPatch {
    pub game: Option<Game>,
    pub tournament: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub team_a: Option<MatchTeam>,
    pub team_b: Option<MatchTeam>,
    pub status: Option<MatchStatus>,
    pub result: Option<Option<MatchResult>>,
}

impl Match {
    pub fn create(id: String, draft: MatchDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            game: draft.game,
            tournament: draft.tournament,
            date: draft.date,
            time: draft.time,
            team_a: draft.team_a,
            team_b: draft.team_b,
            status: draft.status,
            result: draft.result,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: MatchPatch) {
        if let Some(game) = patch.game {
            self.game = game;
        }
        if let Some(tournament) = patch.tournament {
            self.tournament = tournament;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(team_a) = patch.team_a {
            self.team_a = team_a;
        }
        if let Some(team_b) = patch.team_b {
            self.team_b = team_b;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(result) = patch.result {
            self.result = result;
        }
        self.updated_at = Utc::now();
    }
}

impl Record for Match {
    const ID_PREFIX: &'static str = "match";

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
