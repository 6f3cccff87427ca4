//! `hookrelay validate`: check the route configuration for errors.
//!
//! Reads `URL_PATH` and the per-route filter variables from the
//! environment, validates them, and reports the effective routes in
//! either human-readable text or machine-readable JSON format.

use crate::cli::{ValidateArgs, ValidateFormat};
use crate::config::model::SinkSettings;
use crate::config::{load_routes_from_env, validation};
use crate::error::RelayError;
use crate::registry::RouteRegistry;

pub fn execute(args: &ValidateArgs) -> Result<(), RelayError> {
    let route_config = load_routes_from_env(args.routes.url_path.as_deref());
    // Credentials are not needed to validate routes
    let sink_settings = SinkSettings::new(&args.routes.tg_api_base, None, None, 0);

    if let Err(errors) = validation::validate(&route_config, &sink_settings) {
        match args.format {
            ValidateFormat::Text => {
                eprintln!("\u{2717} route config has {} errors\n", errors.len());
                for error in &errors {
                    eprintln!("{error}");
                }
            }
            ValidateFormat::Json => {
                let json_errors: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "route": e.route,
                            "field": e.field,
                            "message": e.message,
                            "suggestion": e.suggestion,
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "valid": false,
                        "errors": json_errors,
                    })
                );
            }
        }
        return Err(RelayError::ConfigValidation { errors });
    }

    let registry = RouteRegistry::from_definitions(&route_config.routes);

    match args.format {
        ValidateFormat::Text => {
            println!(
                "\u{2713} {}",
                validation::format_validation_report(&registry)
            );
        }
        ValidateFormat::Json => {
            let routes: Vec<_> = registry.iter().collect();
            println!(
                "{}",
                serde_json::json!({
                    "valid": true,
                    "routes": routes,
                })
            );
        }
    }

    Ok(())
}
