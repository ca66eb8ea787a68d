use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

use business::domain::shared::value_objects::UserId;

/// Caller identity forwarded by the hosting backend.
///
/// Users are authenticated upstream; this only requires the header to carry
/// a non-blank id. Requests without one are answered with 401.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-User-Id",
    key_in = "header",
    checker = "user_id_checker"
)]
pub struct UserHeader(pub UserId);

async fn user_id_checker(_req: &Request, api_key: ApiKey) -> Option<UserId> {
    let user_id = parse_user_id(&api_key.key);
    if user_id.is_none() {
        tracing::warn!("Rejected request with a blank X-User-Id header");
    }
    user_id
}

fn parse_user_id(raw: &str) -> Option<UserId> {
    let user_id = UserId::new(raw.trim());
    (!user_id.is_blank()).then_some(user_id)
}
