// src/core/net.rs
// Page session: the portal login plus authenticated GETs (blocking, cookie-backed).

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::config::consts::{HTTP_TIMEOUT_SECS, LOGIN_ID_FIELD, LOGIN_PW_FIELD, USER_AGENT};
use crate::config::options::Credentials;
use crate::error::{Error, Result};

/// What the scraper needs from a browser-ish session.
pub trait PageSession {
    /// Authenticate. Later `fetch` calls reuse the session.
    fn login(&mut self, credentials: &Credentials) -> Result<()>;

    /// Return the document body at `url`.
    fn fetch(&mut self, url: &str) -> Result<String>;

    /// Release the session. Called once at the end of a run, on every path.
    fn close(&mut self) {}
}

pub struct HttpSession {
    client: Option<Client>,
    logged_in: bool,
}

impl HttpSession {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client: Some(client), logged_in: false })
    }

    fn client(&self) -> Result<&Client> {
        self.client
            .as_ref()
            .ok_or_else(|| Error::transport("page session already closed"))
    }
}

fn check_status(resp: Response, what: &str) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::transport(format!("{what}: HTTP {status} {}", resp.url())));
    }
    Ok(resp)
}

impl PageSession for HttpSession {
    fn login(&mut self, credentials: &Credentials) -> Result<()> {
        let client = self.client()?;

        // Load the form first so the portal hands out its session cookie
        let form = client.get(&credentials.login_url).send()?;
        check_status(form, "login page")?;

        let resp = client
            .post(&credentials.login_url)
            .form(&[
                (LOGIN_ID_FIELD, credentials.login_id.as_str()),
                (LOGIN_PW_FIELD, credentials.password.as_str()),
            ])
            .send()?;
        let resp = check_status(resp, "login")?;
        let body = resp.text()?;

        // A rejected login lands back on the form
        if body.contains(&format!("name=\"{LOGIN_PW_FIELD}\"")) {
            return Err(Error::transport("login rejected: still on the login form"));
        }

        self.logged_in = true;
        logf!("Logged in as {}", credentials.login_id);
        Ok(())
    }

    fn fetch(&mut self, url: &str) -> Result<String> {
        if !self.logged_in {
            return Err(Error::transport("fetch before login"));
        }
        let resp = self.client()?.get(url).send()?;
        let body = check_status(resp, "report page")?.text()?;
        logd!("GET {url} -> {} bytes", body.len());
        Ok(body)
    }

    fn close(&mut self) {
        if self.client.take().is_some() {
            logd!("Page session closed");
        }
        self.logged_in = false;
    }
}

impl Drop for HttpSession {
    fn drop(&mut self) {
        self.close();
    }
}
