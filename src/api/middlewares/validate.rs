use core::fmt::Debug;
use std::ops::Deref;

use crate::domain::error::{AppError, message};
use actix_web::dev::{JsonBody, Payload};
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{FromRequest, HttpRequest};
use futures::future::{FutureExt, LocalBoxFuture, ready};
use serde::de::DeserializeOwned;
use tracing::error;
use validator::Validate;

const PAYLOAD_LIMIT: usize = 32768;

/// JSON body extractor that requires `Content-Type: application/json`,
/// decodes into `T` and validates it. Every failure is a client error.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Json<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// The header must be exactly `application/json`; parameters such as a
/// charset are rejected too.
pub fn check_content_type(req: &HttpRequest) -> Result<(), AppError> {
    let content_type = req.headers().get(CONTENT_TYPE);

    match content_type.map(|value| value.to_str()) {
        Some(Ok(value)) if value == mime::APPLICATION_JSON.as_ref() => Ok(()),
        _ => {
            error!("Invalid Content-Type: {:?}", content_type);
            Err(AppError::UnsupportedMediaType(
                message::UNSUPPORTED_MEDIA_TYPE,
            ))
        }
    }
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if let Err(err) = check_content_type(req) {
            return ready(Err(err)).boxed_local();
        }

        JsonBody::new(req, payload, Some(&|mime| mime == mime::APPLICATION_JSON), false)
            .limit(PAYLOAD_LIMIT)
            .map(|res: Result<T, _>| match res {
                Ok(payload) => payload
                    .validate()
                    .map(|_| Json(payload))
                    .map_err(AppError::from),
                Err(err) => Err(AppError::from(err)),
            })
            .boxed_local()
    }
}
