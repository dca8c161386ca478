use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use tracing::error;

use crate::controller::session::{CREDENTIAL_KEY, CredentialStore};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Change {
    Set(String),
    Clear,
}

/// The ParPass code carried in a browser cookie. Reads come from the
/// request; writes are collected and applied to the response.
#[derive(Debug, Clone, Default)]
pub struct CookieCredentials {
    current: Option<String>,
    change: Option<Change>,
}

impl CookieCredentials {
    #[must_use]
    pub fn from_request(req: &HttpRequest) -> Self {
        Self {
            current: req.cookie(CREDENTIAL_KEY).map(|c| c.value().to_string()),
            change: None,
        }
    }

    #[must_use]
    pub fn apply(self, mut resp: HttpResponse) -> HttpResponse {
        let result = match self.change {
            Some(Change::Set(code)) => resp.add_cookie(
                &Cookie::build(CREDENTIAL_KEY, code)
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .finish(),
            ),
            Some(Change::Clear) => {
                resp.add_removal_cookie(&Cookie::build(CREDENTIAL_KEY, "").path("/").finish())
            }
            None => Ok(()),
        };
        if let Err(err) = result {
            error!(%err, "could not write credential cookie");
        }
        resp
    }
}

impl CredentialStore for CookieCredentials {
    fn load(&self) -> Option<String> {
        match &self.change {
            Some(Change::Set(code)) => Some(code.clone()),
            Some(Change::Clear) => None,
            None => self.current.clone(),
        }
    }

    fn store(&mut self, code: &str) {
        self.change = Some(Change::Set(code.to_string()));
    }

    fn clear(&mut self) {
        self.change = Some(Change::Clear);
    }
}
