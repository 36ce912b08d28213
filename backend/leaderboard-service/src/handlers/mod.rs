pub mod leaderboard;

use actix_web::web;

pub use leaderboard::{get_leaderboard, get_stats, root_status, search_users};

/// Register every route. API routes are mounted under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root_status).service(
        web::scope("/api")
            .service(get_leaderboard)
            .service(search_users)
            .service(get_stats),
    );
}
