use crate::error::{Error, ServerError};
use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates any response whose status is not `200 OK`
/// into an [`Error::ServerError`](crate::error::Error).
///
/// The DDEX API reports application failures inside `200 OK` bodies, so every
/// other status, including the rest of the 2xx range, is a server failure.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("Failed HTTP request. Status code: {}", status);

            return Err(Error::ServerError(server_error(status)).into());
        }

        Ok(response)
    }
}

fn server_error(status: StatusCode) -> ServerError {
    ServerError {
        status: status.as_u16(),
        status_text: status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string(),
    }
}
