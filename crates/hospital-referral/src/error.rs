use crate::config::ConfigError;
use crate::referral::{CatalogError, HourError, ProviderError, ReferralServiceError, SnapshotError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Catalog(CatalogError),
    Hour(HourError),
    Snapshot(SnapshotError),
    Provider(ProviderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "keyword catalog error: {}", err),
            AppError::Hour(err) => write!(f, "invalid hour: {}", err),
            AppError::Snapshot(err) => write!(f, "invalid snapshot: {}", err),
            AppError::Provider(err) => write!(f, "snapshot provider error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Hour(err) => Some(err),
            AppError::Snapshot(err) => Some(err),
            AppError::Provider(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Catalog(_) | AppError::Hour(_) | AppError::Snapshot(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Provider(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        let body = match &self {
            AppError::Snapshot(err) => json!({
                "error": message,
                "facility": err.facility(),
                "field": err.field(),
            }),
            AppError::Hour(_) => json!({ "error": message, "field": "hour" }),
            _ => json!({ "error": message }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<HourError> for AppError {
    fn from(value: HourError) -> Self {
        Self::Hour(value)
    }
}

impl From<SnapshotError> for AppError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<ProviderError> for AppError {
    fn from(value: ProviderError) -> Self {
        Self::Provider(value)
    }
}

impl From<ReferralServiceError> for AppError {
    fn from(value: ReferralServiceError) -> Self {
        match value {
            ReferralServiceError::Hour(err) => Self::Hour(err),
            ReferralServiceError::Snapshot(err) => Self::Snapshot(err),
            ReferralServiceError::Provider(err) => Self::Provider(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::referral::FacilityId;

    #[test]
    fn validation_failures_map_to_unprocessable() {
        let error = AppError::from(ReferralServiceError::Snapshot(
            SnapshotError::UnknownFacility {
                facility: FacilityId::new("RS404"),
            },
        ));
        assert!(error.to_string().contains("RS404"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn snapshot_errors_name_facility_and_field() {
        let error = AppError::from(SnapshotError::CapacityOverflow {
            facility: FacilityId::new("RS003"),
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collected");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["facility"], "RS003");
        assert_eq!(body["field"], "beds");
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.starts_with("invalid snapshot:")));
    }

    #[test]
    fn provider_outage_maps_to_service_unavailable() {
        let error = AppError::from(ProviderError::Unavailable("feed offline".to_string()));
        assert_eq!(
            error.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
