//! The typed API client.

use reqwest::{header, Method, RequestBuilder, Response};

use hemolink_core::model::{
    AuthResponse, BloodRequest, Donation, DonorPledge, DonorProfile, LoginRequest, NewBloodRequest,
    NewDonation, NewDonorPledge, NewDonorProfile, RegisterRequest, User,
};

use crate::error::{Error, Result};
use crate::session::Session;
use crate::validate;

/// Async client over the Hemolink REST API.
///
/// Holds the [`Session`]; once `login` (or `register`) succeeds, every
/// subsequent request carries the bearer token.
pub struct HemolinkClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HemolinkClient {
    /// Create a client for the given server base URL
    /// (e.g. `http://localhost:3002`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session: Session::default(),
        }
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resume a session with a previously issued token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.session.set_token(token);
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Validate and submit a sign-up form, then log in with the new
    /// credentials so the session is ready to use.
    pub async fn register(&mut self, form: &RegisterRequest) -> Result<AuthResponse> {
        validate::signup(form)?;

        let response = self
            .request(Method::POST, "/api/auth/register")
            .json(form)
            .send()
            .await?;
        let _: AuthResponse = check(response).await?.json().await?;
        log::info!("registration successful for {}", form.email);

        self.login(&form.email, &form.password).await
    }

    /// Log in and store the token and user in the session.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, "/api/auth/login")
            .json(&body)
            .send()
            .await?;
        let auth: AuthResponse = check(response).await?.json().await?;

        self.session.set_token(auth.token.clone());
        self.session.set_current_user(auth.clone());
        log::debug!("login successful for {email}");
        Ok(auth)
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// All users.
    pub async fn users(&self) -> Result<Vec<User>> {
        self.get_json("/api/users").await
    }

    /// Find a user by email, case-insensitively. The server has no lookup
    /// endpoint, so this filters the full listing client-side.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users().await?;
        Ok(users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    /// Delete a user by id.
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/users/{user_id}"))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Donor profiles
    // ------------------------------------------------------------------

    /// Validate and submit a donor profile form.
    pub async fn submit_profile(&self, form: &NewDonorProfile) -> Result<DonorProfile> {
        validate::profile(form)?;
        self.post_json("/api/donor_profiles", form).await
    }

    /// All donor profiles.
    pub async fn donor_profiles(&self) -> Result<Vec<DonorProfile>> {
        self.get_json("/api/donor_profiles").await
    }

    // ------------------------------------------------------------------
    // Blood requests
    // ------------------------------------------------------------------

    /// All blood requests.
    pub async fn blood_requests(&self) -> Result<Vec<BloodRequest>> {
        self.get_json("/api/blood_requests").await
    }

    /// Create a blood request.
    pub async fn create_blood_request(&self, form: &NewBloodRequest) -> Result<BloodRequest> {
        self.post_json("/api/blood_requests", form).await
    }

    /// Delete a blood request by id.
    pub async fn delete_blood_request(&self, request_id: i64) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/blood_requests/{request_id}"))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Donor pledges
    // ------------------------------------------------------------------

    /// Pledge a donor profile against a blood request.
    pub async fn create_pledge(&self, form: &NewDonorPledge) -> Result<DonorPledge> {
        self.post_json("/api/donor_pledges", form).await
    }

    /// All pledges, with details.
    pub async fn pledges(&self) -> Result<Vec<DonorPledge>> {
        self.get_json("/api/donor_pledges").await
    }

    /// Pledges against one blood request.
    pub async fn pledges_by_request(&self, request_id: i64) -> Result<Vec<DonorPledge>> {
        self.get_json(&format!("/api/donor_pledges/by_request/{request_id}"))
            .await
    }

    // ------------------------------------------------------------------
    // Donations
    // ------------------------------------------------------------------

    /// Record a completed donation.
    pub async fn create_donation(&self, form: &NewDonation) -> Result<Donation> {
        self.post_json("/api/donations", form).await
    }

    /// All donations, with details.
    pub async fn donations(&self) -> Result<Vec<Donation>> {
        self.get_json("/api/donations").await
    }

    /// Delete a donation by id.
    pub async fn delete_donation(&self, donation_id: i64) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/donations/{donation_id}"))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.token() {
            builder = builder.header(header::AUTHORIZATION, ensure_bearer(token));
        }
        builder
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Prefix `Bearer ` exactly once.
pub fn ensure_bearer(token: &str) -> String {
    if token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bearer {token}")
    }
}

/// Turn a non-success response into [`Error::Api`], pulling the message
/// out of the server's `{"error": ...}` body when there is one.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"));

    log::warn!("server error ({status}): {message}");
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_bearer_prefixes_once() {
        assert_eq!(ensure_bearer("abc"), "Bearer abc");
        assert_eq!(ensure_bearer("Bearer abc"), "Bearer abc");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = HemolinkClient::new("http://localhost:3002/");
        assert_eq!(client.base_url, "http://localhost:3002");
    }

    #[test]
    fn test_new_client_has_no_session() {
        let client = HemolinkClient::new("http://localhost:3002");
        assert!(client.session().token().is_none());
    }

    #[test]
    fn test_set_token_resumes_session() {
        let mut client = HemolinkClient::new("http://localhost:3002");
        client.set_token("abc.def.ghi");
        assert_eq!(client.session().token(), Some("abc.def.ghi"));
    }
}
