//! Self-access gate
//!
//! Restricts a route to the account whose id matches the `id` path
//! parameter, unless the caller's account scope dominates the override
//! scope. Runs inside [`super::RequireScope`], which attaches the
//! principal.

use crate::auth::is_user_sub_scope;
use crate::core::models::UserScope;
use actix_web::HttpMessage;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use super::AuthenticatedUser;
use super::helpers::{bad_request, forbidden};

/// Middleware restricting a route to the resource's own subject
pub struct RequireSelf {
    override_scope: UserScope,
}

impl RequireSelf {
    /// Allow non-matching callers holding at least `override_scope`
    pub fn new(override_scope: UserScope) -> Self {
        Self { override_scope }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireSelf
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequireSelfService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSelfService {
            service: Rc::new(service),
            override_scope: self.override_scope,
        }))
    }
}

/// Service implementation for the self-access gate
pub struct RequireSelfService<S> {
    service: Rc<S>,
    override_scope: UserScope,
}

impl<S, B> Service<ServiceRequest> for RequireSelfService<S>
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
        let override_scope = self.override_scope;

        Box::pin(async move {
            let user = req
                .extensions()
                .get::<AuthenticatedUser>()
                .map(|principal| principal.0.clone());

            let Some(user) = user else {
                let response = bad_request("No user object attached");
                return Ok(req.into_response(response).map_into_right_body());
            };

            let path_id = req
                .match_info()
                .get("id")
                .filter(|id| !id.is_empty())
                .map(|id| id.to_string());
            let Some(path_id) = path_id else {
                let response = bad_request("Invalid URL id");
                return Ok(req.into_response(response).map_into_right_body());
            };

            if user.id.to_string() != path_id
                && !is_user_sub_scope(user.role, override_scope)
            {
                let response = forbidden("Unauthorized");
                return Ok(req.into_response(response).map_into_right_body());
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}
