use crate::{Res, spotify::ApiClient, success};

/// Performs one token exchange to verify the configured credentials and
/// prints the token's expiry.
pub fn auth(client: &mut ApiClient) -> Res<()> {
    let token = client.tokens().get_valid_token()?;
    success!(
        "Credentials accepted, token valid until {}.",
        token.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(())
}
