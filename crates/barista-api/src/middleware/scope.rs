// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Per-route permission enforcement middleware.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{header, Request},
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};

use crate::auth::{check_permission, AuthContext, AuthError, Permission, TokenVerifier};
use crate::error::ApiError;

// =============================================================================
// ScopeLayer
// =============================================================================

/// Layer guarding a route with a required permission.
///
/// Each protected route declares the permission it needs as data; the layer
/// verifies the bearer token, checks the claim, and stores an
/// [`AuthContext`] in request extensions for handlers to read.
#[derive(Clone)]
pub struct ScopeLayer {
    verifier: Arc<TokenVerifier>,
    required: Permission,
}

impl ScopeLayer {
    /// Creates a layer requiring the given permission.
    pub fn require(verifier: Arc<TokenVerifier>, required: Permission) -> Self {
        Self { verifier, required }
    }
}

impl<S> Layer<S> for ScopeLayer {
    type Service = ScopeMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ScopeMiddleware {
            inner,
            verifier: self.verifier.clone(),
            required: self.required,
        }
    }
}

// =============================================================================
// ScopeMiddleware
// =============================================================================

/// Middleware enforcing a single required permission.
#[derive(Clone)]
pub struct ScopeMiddleware<S> {
    inner: S,
    verifier: Arc<TokenVerifier>,
    required: Permission,
}

impl<S> Service<Request<Body>> for ScopeMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let verifier = self.verifier.clone();
        let required = self.required;
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    tracing::debug!(permission = %required, "missing or malformed authorization header");
                    return Ok(
                        ApiError::Auth(AuthError::MissingOrMalformedHeader).into_response()
                    );
                }
            };

            let claims = match verifier.verify(&token).await {
                Ok(claims) => claims,
                Err(e) => {
                    tracing::debug!(error = %e, permission = %required, "token verification failed");
                    return Ok(ApiError::Auth(e).into_response());
                }
            };

            if let Err(e) = check_permission(&claims, required) {
                tracing::debug!(sub = %claims.sub, error = %e, "permission check failed");
                return Ok(ApiError::Auth(e).into_response());
            }

            req.extensions_mut().insert(AuthContext::from_claims(&claims));

            inner.call(req).await
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Extracts the bearer token from the Authorization header.
///
/// The scheme match is case-insensitive per RFC 7235.
fn extract_bearer_token<B>(req: &Request<B>) -> Option<String> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        let mut req = Request::builder().uri("/drinks").body(Body::empty()).unwrap();

        // No header
        assert!(extract_bearer_token(&req).is_none());

        // Wrong scheme
        req.headers_mut()
            .insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(extract_bearer_token(&req).is_none());

        // Empty token
        req.headers_mut()
            .insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer"));
        assert!(extract_bearer_token(&req).is_none());

        // Valid bearer token
        req.headers_mut().insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer mytoken123"),
        );
        assert_eq!(extract_bearer_token(&req), Some("mytoken123".to_string()));

        // Scheme is case-insensitive
        req.headers_mut().insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("bearer mytoken123"),
        );
        assert_eq!(extract_bearer_token(&req), Some("mytoken123".to_string()));
    }
}
