//! Match schedule handlers.

use actix_web::{HttpResponse, web};

use arena_core::domain::{MatchDraft, MatchPatch, MatchTeam, Role};
use arena_shared::ApiResponse;
use arena_shared::dto::{CreateMatchRequest, MatchTeamDto, UpdateMatchRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn team_from_dto(dto: MatchTeamDto) -> MatchTeam {
    MatchTeam {
        name: dto.name,
        logo: dto.logo,
        score: dto.score,
    }
}

/// GET /api/matches
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let matches = state.matches.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(matches)))
}

/// GET /api/matches/upcoming
pub async fn list_upcoming(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let matches = state.matches.list_upcoming().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(matches)))
}

/// GET /api/matches/completed
pub async fn list_completed(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let matches = state.matches.list_completed().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(matches)))
}

/// POST /api/matches - Protected (editor or above)
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateMatchRequest>,
) -> AppResult<HttpResponse> {
    identity.require(Role::Editor)?;
    let req = body.into_inner();

    if req.tournament.trim().is_empty() {
        return Err(AppError::BadRequest("Tournament is required".to_string()));
    }

    // An empty result string means "no result yet".
    let result = match req.result.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(raw.parse()?),
    };

    let draft = MatchDraft {
        game: req.game.parse()?,
        tournament: req.tournament,
        date: req.date,
        time: req.time,
        team_a: team_from_dto(req.team_a),
        team_b: team_from_dto(req.team_b),
        status: req.status.parse()?,
        result,
    };

    let record = state.matches.create(draft).await?;
    tracing::info!(id = %record.id, "Match created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(record)))
}

/// PUT /api/matches/{id} - Protected (editor or above)
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateMatchRequest>,
) -> AppResult<HttpResponse> {
    identity.require(Role::Editor)?;
    let id = path.into_inner();
    let req = body.into_inner();

    // Absent result leaves it unchanged; an empty string clears it.
    let result = match req.result.as_deref() {
        None => None,
        Some("") => Some(None),
        Some(raw) => Some(Some(raw.parse()?)),
    };

    let patch = MatchPatch {
        game: req.game.map(|g| g.parse()).transpose()?,
        tournament: req.tournament,
        date: req.date,
        time: req.time,
        team_a: req.team_a.map(team_from_dto),
        team_b: req.team_b.map(team_from_dto),
        status: req.status.map(|s| s.parse()).transpose()?,
        result,
    };

    let record = state.matches.update(&id, patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(record)))
}

/// DELETE /api/matches/{id} - Protected (admin only)
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    identity.require(Role::Admin)?;
    let id = path.into_inner();

    state.matches.delete(&id).await?;
    tracing::info!(%id, "Match deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Match deleted")))
}
