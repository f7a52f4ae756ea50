// ABOUTME: Unified error handling for the goal-template engine
// ABOUTME: Defines ErrorCode, AppError, AppResult, and the serializable ErrorResponse envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible engine operation returns [`AppResult`]. Errors carry a stable
//! [`ErrorCode`] so a hosting REST layer can map them to HTTP statuses without
//! string matching.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric input outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Template id does not name a catalog template
    #[serde(rename = "UNKNOWN_TEMPLATE")]
    UnknownTemplate = 4001,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidFormat | Self::ValueOutOfRange => 400,
            Self::ResourceNotFound | Self::UnknownTemplate => 404,
            Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::UnknownTemplate => "The requested goal template does not exist",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Identifier of the resource the error refers to, if any
    pub resource_id: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
        }
    }

    /// Attach the identifier of the offending resource
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Whether this error means a template id did not resolve in the catalog
    #[must_use]
    pub fn is_unknown_template(&self) -> bool {
        self.code == ErrorCode::UnknownTemplate
    }
}

/// Convenience constructors for the errors the engine raises
impl AppError {
    /// Template id does not resolve to a `category.subtype` pair in the catalog
    pub fn unknown_template(template_id: impl Into<String>) -> Self {
        let template_id = template_id.into();
        Self::new(ErrorCode::UnknownTemplate, format!("no template '{template_id}'"))
            .with_resource_id(template_id)
    }

    /// Recurrence string matches neither `<n>x <period>` nor `<period>`
    pub fn invalid_recurrence(spec: impl Into<String>) -> Self {
        let spec = spec.into();
        Self::new(
            ErrorCode::InvalidFormat,
            format!("Unrecognized recurrence '{spec}'"),
        )
        .with_resource_id(spec)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error envelope for callers exposing errors over JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Offending resource identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                resource_id: error.resource_id,
            },
        }
    }
}
