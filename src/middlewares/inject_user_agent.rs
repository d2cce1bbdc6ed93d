use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

static CRATE_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Middleware stamping every outgoing request with a `User-Agent`.
///
/// The crate's own product token always comes last, e.g. `market-maker/2.1 ddex-rust/0.1.0`,
/// so DDEX can tell both the application and the client version apart.
pub struct InjectUserAgentMiddleware {
    user_agent: HeaderValue,
}

impl InjectUserAgentMiddleware {
    pub fn new(application: Option<&HeaderValue>) -> Self {
        let crate_user_agent = HeaderValue::from_static(CRATE_USER_AGENT);

        let user_agent = match application {
            Some(application) if !application.is_empty() => {
                let mut bytes = application.as_bytes().to_vec();
                bytes.push(b' ');
                bytes.extend_from_slice(CRATE_USER_AGENT.as_bytes());
                HeaderValue::from_bytes(&bytes).unwrap_or(crate_user_agent)
            }
            _ => crate_user_agent,
        };

        Self { user_agent }
    }
}

#[async_trait]
impl Middleware for InjectUserAgentMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Overrides any default User-Agent set on the underlying reqwest client
        req.headers_mut()
            .insert(USER_AGENT, self.user_agent.clone());

        next.run(req, extensions).await
    }
}
