use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{build_profile, brief_summary, RankError, Ranker};
use crate::models::{
    CandidateProfile, ErrorResponse, HealthResponse, RankRequest, RankResponse, RankedCandidate,
    SemanticSearchRequest, SemanticSearchResponse,
};
use crate::services::{IndexDocument, SemanticIndex};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
    /// None when the embedding backend failed its startup probe; the
    /// service then runs with semantic search disabled.
    pub semantic: Option<Arc<SemanticIndex>>,
    pub max_top_k: u16,
}

/// Configure all ranking-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/rank", web::post().to(rank_candidates))
        .route("/semantic/search", web::post().to(semantic_search));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        semantic_search: state.semantic.is_some(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank endpoint
///
/// POST /api/v1/rank
///
/// Scores every candidate against the job description and returns them
/// best-first. When `includeSemantic` is set and the embedding backend is
/// available, candidates are added to the similarity index and a top-K
/// neighbor list is attached as supplementary output — it is never blended
/// into the composite ranking.
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let top_k = req.top_k.min(state.max_top_k) as usize;

    let jd = match state.ranker.parse_job_description(&req.job_description) {
        Ok(jd) => jd,
        Err(e) => return precondition_failed(e),
    };

    tracing::info!(
        "Ranking {} candidates against a job description with {} extracted skills",
        req.candidates.len(),
        jd.skills.len()
    );

    // Incomplete inputs are completed from their text; degraded candidates
    // proceed with defaults rather than being dropped.
    let profiles: Vec<CandidateProfile> = req
        .candidates
        .into_iter()
        .map(|input| build_profile(input, state.ranker.vocabulary()))
        .collect();

    // Index at ingestion time, best-effort: a backend failure here reduces
    // functionality but never fails the ranking request.
    let semantic_requested = req.include_semantic;
    if semantic_requested {
        if let Some(index) = state.semantic.as_ref() {
            let documents: Vec<IndexDocument> = profiles
                .iter()
                .map(|p| IndexDocument {
                    identifier: p.name.clone(),
                    text: p.text.clone(),
                    source_file: p.source_file.clone(),
                })
                .collect();

            match index.add_batch(&documents) {
                Ok(added) => tracing::debug!("Indexed {} candidates", added),
                Err(e) => tracing::warn!("Semantic indexing degraded, continuing without: {}", e),
            }
        }
    }

    let outcome = match state.ranker.rank(&jd, profiles) {
        Ok(outcome) => outcome,
        Err(e) => return precondition_failed(e),
    };

    // Rounding happens here, after the sort, so near-ties keep their order.
    let results: Vec<RankedCandidate> = outcome
        .ranked
        .iter()
        .enumerate()
        .map(|(position, (candidate, breakdown))| {
            let display = breakdown.rounded();
            RankedCandidate {
                rank: position + 1,
                name: candidate.name.clone(),
                skills: candidate.skills.clone(),
                years_experience: candidate.years_experience,
                summary: brief_summary(candidate),
                skill_score: display.skill_score,
                experience_score: display.experience_score,
                text_similarity_score: display.text_score,
                composite_score: display.composite,
            }
        })
        .collect();

    let semantic_matches = if semantic_requested {
        state.semantic.as_ref().map(|index| {
            match index.query_top_k(&jd.text, top_k) {
                Ok(neighbors) => neighbors,
                Err(e) => {
                    tracing::warn!("Semantic query failed, returning no neighbors: {}", e);
                    Vec::new()
                }
            }
        })
    } else {
        None
    };

    tracing::info!(
        "Returning {} ranked candidates (semantic: {})",
        results.len(),
        semantic_matches.as_ref().map_or(0, |m| m.len())
    );

    HttpResponse::Ok().json(RankResponse {
        results,
        total_candidates: outcome.total_candidates,
        semantic_enabled: state.semantic.is_some(),
        semantic_matches,
    })
}

/// Semantic search endpoint
///
/// POST /api/v1/semantic/search
///
/// Queries the similarity index populated by previous rank calls. With the
/// embedding backend unavailable this reports reduced functionality (an
/// empty result with `semanticEnabled: false`), not an error.
async fn semantic_search(
    state: web::Data<AppState>,
    req: web::Json<SemanticSearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let top_k = req.top_k.min(state.max_top_k) as usize;

    let Some(index) = state.semantic.as_ref() else {
        return HttpResponse::Ok().json(SemanticSearchResponse {
            matches: Vec::new(),
            total_indexed: 0,
            semantic_enabled: false,
        });
    };

    let matches = match index.query_top_k(&req.query, top_k) {
        Ok(neighbors) => neighbors,
        Err(e) => {
            tracing::warn!("Semantic query failed, returning no neighbors: {}", e);
            Vec::new()
        }
    };

    HttpResponse::Ok().json(SemanticSearchResponse {
        matches,
        total_indexed: index.len(),
        semantic_enabled: true,
    })
}

fn precondition_failed(error: RankError) -> HttpResponse {
    tracing::info!("Rank precondition failed: {}", error);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid input".to_string(),
        message: error.to_string(),
        status_code: 400,
    })
}
