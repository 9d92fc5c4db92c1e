use std::net::SocketAddr;
use lambda_http::{run, Error};
use library_catalog::catalog::controller::build_router;
use library_catalog::core::controller::AppState;
use library_catalog::core::domain::{Configuration, RuntimeMode};
use library_catalog::utils::logging::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(&config)?;
    tracing::info!(environment = config.environment.as_str(), runtime = %config.runtime,
        id_strategy = %config.id_strategy, events = %config.events, "starting catalog");

    let runtime = config.runtime;
    let bind_address = config.bind_address.clone();
    let state = AppState::new(config);

    match runtime {
        RuntimeMode::Lambda => run(build_router::<lambda_http::Body>(state)).await,
        RuntimeMode::Local => {
            let addr: SocketAddr = bind_address.parse()?;
            tracing::info!(%addr, "listening");
            axum::Server::bind(&addr)
                .serve(build_router::<axum::body::Body>(state).into_make_service())
                .await?;
            Ok(())
        }
    }
}
