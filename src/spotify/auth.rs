use reqwest::{Client, Request};

use crate::{error::Error, types::Token};

/// Builds the refresh-token grant request without sending it.
///
/// The client credentials travel as HTTP basic auth and the grant as a
/// form-encoded body.
pub fn refresh_request(
    http: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<Request, Error> {
    Ok(http
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .build()?)
}

/// Exchanges the long-lived refresh token for a fresh access token.
///
/// Uses Spotify's token endpoint with the `refresh_token` grant and the
/// application's client credentials as HTTP basic auth.
///
/// # Errors
///
/// - [`Error::Http`] for network failures or an unreadable response body
/// - [`Error::Auth`] when Spotify rejects the grant (revoked or malformed
///   refresh token, wrong client secret) or answers without an access token
///
/// # Example
///
/// ```
/// let token = refresh_token(&http, token_url, "id", "secret", "AQC...").await?;
/// println!("expires in {} seconds", token.expires_in);
/// ```
pub async fn refresh_token(
    http: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<Token, Error> {
    let request = refresh_request(http, token_url, client_id, client_secret, refresh_token)?;
    let res = http.execute(request).await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::Auth(format!("{}: {}", status, body)));
    }

    let token: Token = res.json().await?;
    if token.access_token.is_empty() {
        return Err(Error::Auth("token response had no access token".to_string()));
    }

    Ok(token)
}
