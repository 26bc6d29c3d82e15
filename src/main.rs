use std::sync::Arc;

use waypoint::config::Config;
use waypoint::http::request::Request;
use waypoint::http::response::Response;
use waypoint::router::{HandlerRef, Router};
use waypoint::server;

fn hello(_req: &Request, res: &mut Response) -> anyhow::Result<()> {
    res.set_header("Content-Type", "text/plain");
    res.write_body(b"Hello from Waypoint\n");
    Ok(())
}

fn health(_req: &Request, res: &mut Response) -> anyhow::Result<()> {
    res.set_header("Content-Type", "text/plain");
    res.write_body(b"ok\n");
    Ok(())
}

fn build_router() -> Router {
    let not_found: HandlerRef = Arc::new(|_req: &Request, res: &mut Response| {
        *res = Response::not_found();
        Ok(())
    });

    let mut router = Router::new(not_found);
    router
        .route("/hello", Arc::new(hello) as HandlerRef)
        .route("/health", Arc::new(health) as HandlerRef);
    router
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let router = Arc::new(build_router());

    tokio::select! {
        res = server::listener::run(&cfg, router) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
