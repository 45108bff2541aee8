use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::infra::{error::InfraError, upstream::UpstreamError};

/// Diagnostic payload attached to error responses so the logging middleware
/// can report the full cause chain without leaking it to the client.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub status: StatusCode,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, status: StatusCode, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self {
            source,
            status,
            messages,
        }
    }

    pub fn from_message(
        source: &'static str,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            status,
            messages: vec![message.into()],
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

/// A join failed because one of its upstream legs failed. The failing leg is
/// recorded for diagnostics; the client only ever sees one aggregate error.
#[derive(Debug, Error)]
#[error("upstream leg `{leg}` failed")]
pub struct JoinError {
    pub leg: &'static str,
    #[source]
    pub source: UpstreamError,
}

impl JoinError {
    pub fn leg(leg: &'static str) -> impl FnOnce(UpstreamError) -> Self {
        move |source| Self { leg, source }
    }
}

/// Process-level startup errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}
