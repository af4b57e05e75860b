//! Identity Provider Client
//!
//! Hosted auth(Supabase Auth) REST 호출. 현재는 sign out만 사용.

use anyhow::{bail, Result};

/// Identity provider 클라이언트
pub struct IdentityClient {
    base_url: String,
    anon_key: String,
    http: reqwest::Client,
}

impl IdentityClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// `POST /auth/v1/logout`
    pub fn logout_url(&self) -> String {
        format!("{}/auth/v1/logout", self.base_url)
    }

    /// 세션 종료 (provider 측 refresh token 폐기)
    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let resp = self
            .http
            .post(self.logout_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !resp.status().is_success() {
            bail!("logout rejected with status {}", resp.status());
        }

        Ok(())
    }
}
