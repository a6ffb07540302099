// ABOUTME: HTTP middleware for CORS, request ids and request tracing
// ABOUTME: Layers applied around every route of the assessment API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::{allow_headers_layer, allow_methods_layer, setup_cors};

// Request tracing and correlation
pub use tracing::{
    create_request_span, log_requests, propagate_request_id_layer,
    set_request_id_layer, REQUEST_ID_HEADER,
};
