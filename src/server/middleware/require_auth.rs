//! Plain authentication gate
//!
//! Verifies the bearer credential and attaches the principal without any
//! scope requirement. Used where any authenticated account may proceed,
//! regardless of verification state.

use actix_web::HttpMessage;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use super::AuthenticatedUser;
use super::helpers::authenticate_request;

/// Middleware requiring only a valid bearer credential
#[derive(Default)]
pub struct RequireAuth;

impl RequireAuth {
    /// Gate the route behind authentication alone
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequireAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for the plain authentication gate
pub struct RequireAuthService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthService<S>
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

        Box::pin(async move {
            let user = match authenticate_request(&req).await? {
                Ok(user) => user,
                Err(response) => return Ok(req.into_response(response).map_into_right_body()),
            };

            req.extensions_mut().insert(AuthenticatedUser(user));
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}
