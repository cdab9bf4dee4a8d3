//! Per-route access-control middleware.
//!
//! Routes declare an [`AccessPolicy`]; the middleware runs the guard stages
//! in a fixed order and halts at the first failure:
//!
//! 1. session cookie present and valid (401 otherwise)
//! 2. `SelfOnly`: `?email=` equals the session identity (403 otherwise)
//! 3. `Admin`: session identity is a stored admin (403 otherwise)
//!
//! On success the [`SessionClaims`] are stored in the request extensions.

use std::collections::HashMap;
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};

use crate::constants::{ERR_MISSING_APP_DATA, IDENTITY_QUERY_PARAM, SESSION_COOKIE};
use crate::errors::ApiError;
use crate::models::SessionClaims;
use crate::services::{SessionService, UserService};

use super::guards::{authenticate, require_admin, require_self};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// A valid session speaking for the identity named in the query string.
    SelfOnly,
    /// A valid session whose identity holds the admin role.
    Admin,
}

pub struct AccessControl {
    policy: AccessPolicy,
}

impl AccessControl {
    fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    pub fn self_only() -> Self {
        Self::new(AccessPolicy::SelfOnly)
    }

    pub fn admin() -> Self {
        Self::new(AccessPolicy::Admin)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessControl
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessControlService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AccessControlService {
            service: Rc::new(service),
            policy: self.policy,
        })
    }
}

pub struct AccessControlService<S> {
    service: Rc<S>,
    policy: AccessPolicy,
}

impl<S, B> Service<ServiceRequest> for AccessControlService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let policy = self.policy;

        Box::pin(async move {
            let outcome = authorize(&req, policy).await;
            match outcome {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                // Answer directly so the chain halts here with a normal response.
                Err(err) => Ok(req.error_response(err).map_into_right_body()),
            }
        })
    }
}

async fn authorize(req: &ServiceRequest, policy: AccessPolicy) -> Result<SessionClaims, ApiError> {
    let sessions = app_data::<SessionService>(req)?;
    let cookie = req.cookie(SESSION_COOKIE);
    let claims = authenticate(&sessions, cookie.as_ref().map(|c| c.value()))?;

    match policy {
        AccessPolicy::SelfOnly => require_self(&claims, requested_identity(req).as_deref())?,
        AccessPolicy::Admin => {
            let users = app_data::<UserService>(req)?;
            require_admin(&users, &claims).await?;
        }
    }

    Ok(claims)
}

fn app_data<T: 'static>(req: &ServiceRequest) -> Result<web::Data<T>, ApiError> {
    req.app_data::<web::Data<T>>()
        .cloned()
        .ok_or_else(|| ApiError::InternalServerError(ERR_MISSING_APP_DATA.to_string()))
}

fn requested_identity(req: &ServiceRequest) -> Option<String> {
    web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.into_inner().remove(IDENTITY_QUERY_PARAM))
}
