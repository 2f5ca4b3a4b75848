use axum::http::StatusCode;

use scribe_gateway::domain::ErrorKind;
use scribe_gateway::presentation::handlers::status_for;

#[test]
fn given_validation_kinds_when_mapping_status_then_bad_request() {
    for kind in [
        ErrorKind::MissingFile,
        ErrorKind::OversizedFile,
        ErrorKind::UnsupportedFormat,
    ] {
        assert_eq!(status_for(kind), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn given_upstream_failures_when_mapping_status_then_internal_server_error() {
    assert_eq!(
        status_for(ErrorKind::UpstreamAuthFailure),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        status_for(ErrorKind::UnknownFailure),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn given_capacity_refusal_when_mapping_status_then_service_unavailable() {
    assert_eq!(
        status_for(ErrorKind::UpstreamUnavailable),
        StatusCode::SERVICE_UNAVAILABLE
    );
}
