//! Kuchikomi server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware;
use kuchikomi_api::{middleware::AppState, router as api_router};
use kuchikomi_common::Config;
use kuchikomi_core::{
    CommentService, CuisineService, LikeService, PhotoService, PriceRangeService,
    RestaurantService, UserService,
};
use kuchikomi_db::repositories::{
    CommentRepository, CuisineRepository, LikeRepository, PhotoUrlRepository,
    PriceRangeRepository, RestaurantRepository, UserRepository,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kuchikomi=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting kuchikomi server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database
    let db = kuchikomi_db::init(&config).await?;
    info!("Connected to database");

    // Run migrations
    info!("Running database migrations...");
    kuchikomi_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize repositories
    let db = Arc::new(db);
    let user_repo = UserRepository::new(Arc::clone(&db));
    let restaurant_repo = RestaurantRepository::new(Arc::clone(&db));
    let photo_repo = PhotoUrlRepository::new(Arc::clone(&db));
    let cuisine_repo = CuisineRepository::new(Arc::clone(&db));
    let price_range_repo = PriceRangeRepository::new(Arc::clone(&db));
    let like_repo = LikeRepository::new(Arc::clone(&db));
    let comment_repo = CommentRepository::new(Arc::clone(&db));

    // Initialize services
    let user_service = UserService::new(user_repo.clone());
    let comment_service = CommentService::new(
        comment_repo,
        restaurant_repo.clone(),
        user_repo.clone(),
    );
    let restaurant_service = RestaurantService::new(
        restaurant_repo.clone(),
        photo_repo.clone(),
        user_repo,
        cuisine_repo.clone(),
        price_range_repo.clone(),
        like_repo.clone(),
        comment_service.clone(),
    );
    let like_service = LikeService::new(like_repo, restaurant_repo.clone());
    let cuisine_service = CuisineService::new(cuisine_repo);
    let price_range_service = PriceRangeService::new(price_range_repo);
    let photo_service = PhotoService::new(photo_repo, restaurant_repo);

    // Create app state
    let state = AppState {
        user_service,
        restaurant_service,
        like_service,
        comment_service,
        cuisine_service,
        price_range_service,
        photo_service,
    };

    // Build router
    let app = api_router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            kuchikomi_api::middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
