//! Cross-origin policy layer.
//!
//! Builds the `CorsLayer` applied to the whole router, so every response,
//! including preflight responses, carries the policy before any route logic
//! runs.
//!
//! The permissive policy (wildcard origins) has two renditions depending on
//! whether credentials are allowed. A literal `Access-Control-Allow-Origin: *`
//! cannot be combined with `Access-Control-Allow-Credentials: true`, so the
//! credentialed wildcard echoes the request's origin, methods, and headers
//! back instead. The effect is the same: every origin is permitted.

use std::time::Duration;

use http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::config::{ConfigError, CorsConfig, CORS_PREFLIGHT_MAX_AGE_SECS};

/// Build the CORS layer from configuration.
///
/// Fails only when an explicit origin allow-list contains a value that is not
/// a valid header value.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let layer = if config.is_wildcard() {
        if config.allow_credentials {
            // Credentialed wildcard: mirror the request so the browser accepts
            // the response for any origin.
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    ConfigError::Validation(format!("Invalid CORS origin: {origin}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(config.allow_credentials)
    };

    Ok(layer.max_age(Duration::from_secs(CORS_PREFLIGHT_MAX_AGE_SECS)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorsConfig;

    #[test]
    fn default_policy_builds() {
        cors_layer(&CorsConfig::default()).unwrap();
    }

    #[test]
    fn explicit_origin_list_builds() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.example.com".to_string()],
            allow_credentials: true,
        };
        cors_layer(&config).unwrap();
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let config = CorsConfig {
            allowed_origins: vec!["https://bad\norigin".to_string()],
            allow_credentials: false,
        };
        assert!(matches!(
            cors_layer(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
