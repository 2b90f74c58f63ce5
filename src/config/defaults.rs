// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Expanded-viewer zoom bounds and gesture steps
//! - **Listing**: Records table page size bounds
//! - **API**: Remote service location

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom scale applied when the expanded viewer opens (1.0 = original size).
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Minimum allowed zoom scale.
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum allowed zoom scale.
pub const MAX_ZOOM: f32 = 5.0;

/// Zoom change per discrete wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Zoom change per press of the explicit zoom in/out controls.
pub const CONTROL_ZOOM_STEP: f32 = 0.25;

// ==========================================================================
// Listing Defaults
// ==========================================================================

/// Default number of search records shown per table page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Minimum records per table page.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Maximum records per table page.
pub const MAX_PAGE_SIZE: u32 = 100;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default root of the adverse-news service. The versioned API prefix is
/// appended by the client.
pub const DEFAULT_API_ROOT: &str = "http://localhost:8000";

/// Path prefix of the versioned API, appended to the service root.
pub const API_PREFIX: &str = "/api/v1";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM > 0.0);
    assert!(MIN_ZOOM < DEFAULT_ZOOM);
    assert!(MAX_ZOOM > DEFAULT_ZOOM);
    assert!(WHEEL_ZOOM_STEP > 0.0);
    assert!(CONTROL_ZOOM_STEP > 0.0);
    assert!(WHEEL_ZOOM_STEP < MAX_ZOOM - MIN_ZOOM);
    assert!(CONTROL_ZOOM_STEP < MAX_ZOOM - MIN_ZOOM);

    // Listing validation
    assert!(MIN_PAGE_SIZE > 0);
    assert!(MAX_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);

    // API validation
    assert!(!DEFAULT_API_ROOT.is_empty());
    assert!(!API_PREFIX.is_empty());
};
