//! Request guards applied around route scopes.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;

/// Header carrying the API key on `/api` requests.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Rejects requests that do not carry the configured API key, answering 401
/// before the wrapped service runs.
#[derive(Clone)]
pub struct RequireApiKey {
    key: Rc<String>,
}

impl RequireApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Rc::new(key.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireApiKey
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireApiKeyMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireApiKeyMiddleware {
            service,
            key: Rc::clone(&self.key),
        }))
    }
}

pub struct RequireApiKeyMiddleware<S> {
    service: S,
    key: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for RequireApiKeyMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let provided = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        if provided != Some(self.key.as_str()) {
            log::warn!("Rejected API request with missing or invalid API key");
            let (req, _) = req.into_parts();
            let response = HttpResponse::Unauthorized()
                .body("Unauthorized - Invalid API Key")
                .map_into_right_body();
            return Box::pin(async move { Ok(ServiceResponse::new(req, response)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}
