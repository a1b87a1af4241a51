//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts JWT tokens from the Authorization header,
//! verifies their validity, and injects the user context into requests.
//! Token issuance is owned by the account service; this side only
//! verifies signatures with the shared secret.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

/// JWT claims carried by access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Expiry as a unix timestamp
    pub exp: i64,
    /// Issued-at as a unix timestamp
    pub iat: i64,
}

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: &Claims) -> Result<Self, Error> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ErrorUnauthorized("Invalid token subject"))?;
        Ok(Self { user_id })
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().cloned();
        ready(context.ok_or_else(|| ErrorUnauthorized("Authentication required")))
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    /// Secret used to verify token signatures
    jwt_secret: String,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware reading `JWT_SECRET`
    pub fn new() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or_default(),
        }
    }

    /// Creates a new JWT authentication middleware with a specific secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
        }
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            jwt_secret: Rc::new(self.jwt_secret.clone()),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    jwt_secret: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let jwt_secret = Rc::clone(&self.jwt_secret);

        Box::pin(async move {
            let token = extract_bearer_token(&req)?;

            let mut validation = Validation::new(Algorithm::HS256);
            validation.leeway = 30;
            let token_data = decode::<Claims>(
                &token,
                &DecodingKey::from_secret(jwt_secret.as_bytes()),
                &validation,
            )
            .map_err(|e| {
                tracing::debug!("Token verification failed: {}", e);
                ErrorUnauthorized("Invalid or expired token")
            })?;

            let context = AuthContext::from_claims(&token_data.claims)?;
            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}

fn extract_bearer_token(req: &ServiceRequest) -> Result<String, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| ErrorUnauthorized("Missing Authorization header"))?;
    let header = header
        .to_str()
        .map_err(|_| ErrorUnauthorized("Invalid Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .map(str::to_owned)
        .ok_or_else(|| ErrorUnauthorized("Expected Bearer token"))
}
