use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest,
};

use crate::middleware::auth::Claims;

/// Extractor for handlers behind `AuthMiddleware`; pulls the decoded claims
/// back out of the request extensions.
#[derive(Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: String,
    pub email: String,
}

impl FromRequest for AuthenticatedAdmin {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(claims) = req.extensions().get::<Claims>() {
            ready(Ok(AuthenticatedAdmin {
                admin_id: claims.admin_id.clone(),
                email: claims.sub.clone(),
            }))
        } else {
            ready(Err(ErrorUnauthorized("Not authenticated")))
        }
    }
}
