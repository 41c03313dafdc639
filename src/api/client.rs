use std::rc::Rc;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Client;

use crate::{
    config,
    session::{BrowserSession, Session, SessionStore},
};

/// HTTP client bound to a session store. The store is injected so tests can
/// substitute an in-memory fake for localStorage.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    store: Rc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_store(Rc::new(BrowserSession))
    }

    pub fn with_store(store: Rc<dyn SessionStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            store,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, store: Rc<dyn SessionStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            store,
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn store(&self) -> &dyn SessionStore {
        &*self.store
    }

    pub(crate) fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::api_base_url(),
        }
    }

    pub fn session(&self) -> Session {
        Session::load(self.store())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.session().token
    }

    /// Bearer header from the stored token. Absent or malformed tokens leave
    /// the map empty; the server rejects the request and the loaders fall
    /// back to demo data.
    pub(crate) fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.auth_token() {
            if let Ok(value) = format!("Bearer {}", token).parse() {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
