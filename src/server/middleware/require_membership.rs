//! Membership gate
//!
//! Enforces that the principal holds at least the required team scope,
//! through the site-admin override path: admins must themselves hold a
//! membership whose scope dominates the requirement. Ordinary accounts
//! pass through here untouched; their scoping happens in the
//! params-filtered queries downstream.

use crate::auth::is_team_sub_scope;
use crate::core::models::TeamScope;
use crate::storage::database::MembershipParams;
use actix_web::HttpMessage;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::debug;

use super::AuthenticatedUser;
use super::helpers::{app_state, authenticate_request, forbidden};

/// Middleware requiring a minimum team scope on the protected route
pub struct RequireMembership {
    scope: TeamScope,
}

impl RequireMembership {
    /// Gate the route behind the given minimum team scope
    pub fn new(scope: TeamScope) -> Self {
        Self { scope }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireMembership
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequireMembershipService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireMembershipService {
            service: Rc::new(service),
            scope: self.scope,
        }))
    }
}

/// Service implementation for the membership gate
pub struct RequireMembershipService<S> {
    service: Rc<S>,
    scope: TeamScope,
}

impl<S, B> Service<ServiceRequest> for RequireMembershipService<S>
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

            // Override if site admin: the admin must hold some membership,
            // and the first one found is checked against the requirement.
            if user.is_admin() {
                let state = app_state(&req)?;
                let memberships = state
                    .storage
                    .database
                    .get_memberships(MembershipParams {
                        user_id: Some(user.id),
                        ..MembershipParams::default()
                    })
                    .await?;

                if memberships.is_empty() {
                    debug!("No membership found");
                    let response = forbidden("Unauthorized: not a team member");
                    return Ok(req.into_response(response).map_into_right_body());
                }
                if !is_team_sub_scope(memberships[0].role, scope) {
                    debug!("Team scope reject");
                    let response = forbidden("Unauthorized");
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            req.extensions_mut().insert(AuthenticatedUser(user));
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}
