//! `hookrelay run`: start the relay server.
//!
//! Loads the route configuration from the environment, validates it,
//! builds the immutable route registry and the Telegram sink, then serves
//! HTTP until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::RunArgs;
use crate::config::model::SinkSettings;
use crate::config::{load_routes_from_env, validation};
use crate::error::RelayError;
use crate::logging;
use crate::registry::RouteRegistry;
use crate::server::{self, AppState};
use crate::shape::{Flattener, DEFAULT_MAX_DEPTH};
use crate::sink::TelegramSink;

pub async fn execute(args: RunArgs) -> Result<(), RelayError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let route_config = load_routes_from_env(args.routes.url_path.as_deref());
    let sink_settings = SinkSettings::new(
        &args.routes.tg_api_base,
        args.tg_api_token,
        args.tg_chat_id,
        args.sink_timeout,
    );
    validation::validate(&route_config, &sink_settings)
        .map_err(|errors| RelayError::ConfigValidation { errors })?;

    if !sink_settings.has_credentials() {
        tracing::warn!("Telegram API token or chat ID is missing, messages will not be delivered");
    }

    let registry = RouteRegistry::from_definitions(&route_config.routes);
    for entry in registry.iter() {
        tracing::info!(
            route = %entry.key(),
            filter = %entry.filter(),
            "route registered"
        );
    }
    let route_count = registry.len();

    let max_depth = usize::try_from(args.max_depth).unwrap_or(DEFAULT_MAX_DEPTH);
    let state = Arc::new(AppState {
        registry,
        sink: Arc::new(TelegramSink::new(server::build_http_client(), sink_settings)),
        flattener: Flattener::new(max_depth),
        delivery_policy: args.delivery_policy,
    });

    let router = server::build_router(state, args.max_body);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        routes = route_count,
        "hookrelay started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("hookrelay stopped");
    Ok(())
}
