//! Load state of the catalog for one session.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::models::{DeviceConfigResponse, StyleCategory};
use crate::provider::{FailureKind, FetchError};

use super::CatalogIndex;

/// Distinguishes "still loading" from "failed" from "loaded" (possibly empty).
#[derive(Debug, Clone)]
pub enum CatalogState {
    /// Fetch in flight
    Loading,
    /// Fetch succeeded
    Loaded {
        /// Index over the fetched catalog
        index: CatalogIndex,
        /// When the fetch completed
        fetched_at: DateTime<Local>,
    },
    /// Fetch failed; the catalog is treated as absent
    Failed(FetchError),
}

impl CatalogState {
    /// Wraps a fetched catalog.
    #[must_use]
    pub fn loaded(response: DeviceConfigResponse) -> Self {
        Self::Loaded {
            index: CatalogIndex::new(Arc::new(response)),
            fetched_at: Local::now(),
        }
    }

    /// Converts a provider result into a state.
    #[must_use]
    pub fn from_result(result: Result<DeviceConfigResponse, FetchError>) -> Self {
        match result {
            Ok(response) => Self::loaded(response),
            Err(err) => Self::Failed(err),
        }
    }

    /// Returns true while the fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Index when loaded.
    #[must_use]
    pub const fn index(&self) -> Option<&CatalogIndex> {
        match self {
            Self::Loaded { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Categories when loaded; empty while loading or after a failure.
    #[must_use]
    pub fn categories(&self) -> &[StyleCategory] {
        match self.index() {
            Some(index) => index.categories(),
            None => &[],
        }
    }

    /// Failure when failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Failure kind when failed.
    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure().map(FetchError::kind)
    }

    /// Short connection label for status displays.
    #[must_use]
    pub fn status_label(&self) -> String {
        match self {
            Self::Loading => "Connecting".to_string(),
            Self::Loaded { index, .. } if index.is_empty() => "Connected (no styles)".to_string(),
            Self::Loaded { .. } => "Connected".to_string(),
            Self::Failed(err) => format!("Failed: {}", err.kind()),
        }
    }
}
