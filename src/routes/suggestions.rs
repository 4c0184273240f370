use crate::core::Ranker;
use crate::models::{
    ErrorResponse, HealthResponse, InvalidateRequest, InvalidateResponse, SuggestionsRequest,
    SuggestionsResponse,
};
use crate::services::{CacheKey, CacheManager, PostgresClient};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub cache: Arc<CacheManager>,
    pub ranker: Ranker,
}

/// Configure all suggestion-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/suggestions/find", web::post().to(find_suggestions))
        .route("/suggestions/invalidate", web::post().to(invalidate_suggestions));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank trial suggestions for a patient
///
/// POST /api/v1/suggestions/find
///
/// Request body:
/// ```json
/// {
///   "patientId": "string",
///   "limit": 20
/// }
/// ```
async fn find_suggestions(
    state: web::Data<AppState>,
    req: web::Json<SuggestionsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_suggestions request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let patient_id = &req.patient_id;
    // Cap limit at 100 to keep responses bounded
    let limit = req.limit.min(100) as usize;

    tracing::info!("Ranking suggestions for patient: {}, limit: {}", patient_id, limit);

    // Cached lists are stored untruncated so one entry serves any limit
    let cache_key = CacheKey::suggestions(patient_id);
    if let Ok(mut cached) = state.cache.get::<SuggestionsResponse>(&cache_key).await {
        tracing::debug!("Serving cached suggestions for {}", patient_id);
        cached.suggestions.truncate(limit);
        return HttpResponse::Ok().json(cached);
    }

    let patient = match state.postgres.get_patient_by_id(patient_id).await {
        Ok(patient) => patient,
        Err(e) if e.is_not_found() => {
            tracing::info!("Patient {} not found", patient_id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Patient not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to load patient {}: {}", patient_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load patient".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let trials = match state.postgres.list_recruiting_trials().await {
        Ok(trials) => trials,
        Err(e) => {
            tracing::error!("Failed to load recruiting trials: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load recruiting trials".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let result = state.ranker.rank(&patient, trials);

    let mut response = SuggestionsResponse {
        patient_id: patient_id.clone(),
        suggestions: result.suggestions,
        total_trials: result.total_trials,
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache suggestions for {}: {}", patient_id, e);
    }

    response.suggestions.truncate(limit);

    tracing::info!(
        "Returning {} suggestions for patient {} (from {} recruiting trials)",
        response.suggestions.len(),
        patient_id,
        response.total_trials
    );

    HttpResponse::Ok().json(response)
}

/// Drop a patient's cached suggestions
///
/// POST /api/v1/suggestions/invalidate
///
/// Called by the intake platform after a patient's profile changes, so the
/// next ranking request recomputes against fresh data.
async fn invalidate_suggestions(
    state: web::Data<AppState>,
    req: web::Json<InvalidateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let cache_key = CacheKey::suggestions(&req.patient_id);
    match state.cache.delete(&cache_key).await {
        Ok(()) => {
            tracing::debug!("Invalidated cached suggestions for {}", req.patient_id);
            HttpResponse::Ok().json(InvalidateResponse { success: true })
        }
        Err(e) => {
            tracing::error!("Failed to invalidate cache for {}: {}", req.patient_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to invalidate cache".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
