use crate::error::{AppError, Result};
use crate::models::{
    LeaderboardQuery, LeaderboardResponse, SearchQuery, SearchResponse, StatsResponse,
    StatusResponse,
};
use crate::services::Leaderboard;
use actix_web::{get, web, HttpResponse};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const MAX_PAGE_SIZE: usize = 100;

/// Lenient integer parsing: anything unparsable falls back to the default.
fn parse_param(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}

/// `page` below 1 becomes 1.
pub fn normalize_page(raw: Option<&str>) -> usize {
    match parse_param(raw) {
        Some(page) if page >= 1 => usize::try_from(page).unwrap_or(DEFAULT_PAGE),
        _ => DEFAULT_PAGE,
    }
}

/// `pageSize` outside `[1, MAX_PAGE_SIZE]` falls back to the default.
pub fn normalize_page_size(raw: Option<&str>) -> usize {
    match parse_param(raw) {
        Some(size) if (1..=MAX_PAGE_SIZE as i64).contains(&size) => size as usize,
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Paginated leaderboard
/// GET /api/leaderboard?page=1&pageSize=50
#[get("/leaderboard")]
pub async fn get_leaderboard(
    leaderboard: web::Data<Leaderboard>,
    query: web::Query<LeaderboardQuery>,
) -> HttpResponse {
    let page = normalize_page(query.page.as_deref());
    let page_size = normalize_page_size(query.page_size.as_deref());

    let users = leaderboard.get_page(page, page_size);

    HttpResponse::Ok().json(LeaderboardResponse {
        users,
        page,
        page_size,
        total_users: leaderboard.total_count(),
    })
}

/// Case-insensitive handle search
/// GET /api/search?q=raj
#[get("/search")]
pub async fn search_users(
    leaderboard: web::Data<Leaderboard>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let term = query
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("query parameter 'q' is required".to_string()))?;

    let results = leaderboard.search(term);
    let count = results.len();

    Ok(HttpResponse::Ok().json(SearchResponse { results, count }))
}

/// GET /api/stats
#[get("/stats")]
pub async fn get_stats(leaderboard: web::Data<Leaderboard>) -> HttpResponse {
    HttpResponse::Ok().json(StatsResponse {
        total_users: leaderboard.total_count(),
        status: "healthy".to_string(),
    })
}

/// GET /
#[get("/")]
pub async fn root_status(leaderboard: web::Data<Leaderboard>) -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        status: "running".to_string(),
        message: "Leaderboard API is live!".to_string(),
        users: leaderboard.total_count(),
    })
}
