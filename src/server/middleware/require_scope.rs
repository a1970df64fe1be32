//! Authentication gate
//!
//! Verifies the bearer credential and enforces a minimum account-level
//! scope before the inner service runs.

use crate::auth::is_user_sub_scope;
use crate::core::models::UserScope;
use actix_web::HttpMessage;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::debug;

use super::AuthenticatedUser;
use super::helpers::{authenticate_request, forbidden};

/// Middleware requiring a minimum account scope on the protected route
pub struct RequireScope {
    scope: UserScope,
}

impl RequireScope {
    /// Gate the route behind the given minimum scope
    pub fn new(scope: UserScope) -> Self {
        Self { scope }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireScope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequireScopeService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireScopeService {
            service: Rc::new(service),
            scope: self.scope,
        }))
    }
}

/// Service implementation for the authentication gate
pub struct RequireScopeService<S> {
    service: Rc<S>,
    scope: UserScope,
}

impl<S, B> Service<ServiceRequest> for RequireScopeService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let scope = self.scope;

        Box::pin(async move {
            let user = match authenticate_request(&req).await? {
                Ok(user) => user,
                Err(response) => return Ok(req.into_response(response).map_into_right_body()),
            };

            if !is_user_sub_scope(user.role, scope) {
                debug!("Account scope reject for user {}", user.id);
                let response = forbidden("Unauthorized");
                return Ok(req.into_response(response).map_into_right_body());
            }

            req.extensions_mut().insert(AuthenticatedUser(user));
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}
