use actix_web::web;

pub mod game;
pub mod health;
pub mod leaderboard;
pub mod views;

/// Register every endpoint. Shared by `main.rs` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Quiz flow: /, /start, /game, /submit
    cfg.configure(game::configure_routes);

    // Leaderboard: /leaderboard
    cfg.configure(leaderboard::configure_routes);

    // Health check: /health
    cfg.configure(health::configure_routes);
}
