use actix_web::{cookie::Cookie, dev::Payload, FromRequest, HttpRequest, HttpResponseBuilder};
use std::convert::Infallible;
use std::future::{ready, Ready};

pub const CLIENT_ID_COOKIE: &str = "client_id";
pub const CLIENT_ID_HEADER: &str = "X-Client-Id";

/// Identity of the client whose storage a request reads and writes
///
/// Taken from the `X-Client-Id` header, then the `client_id` cookie. A
/// request carrying neither gets a fresh id, which is handed back as a
/// cookie by handlers that write storage.
#[derive(Debug, Clone)]
pub struct ClientId {
    id: String,
    fresh: bool,
}

impl ClientId {
    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Attach the id cookie to a response when the client did not send one
    pub fn remember(&self, response: &mut HttpResponseBuilder) {
        if self.fresh {
            let cookie = Cookie::build(CLIENT_ID_COOKIE, self.id.clone())
                .path("/")
                .http_only(true)
                .finish();
            response.cookie(cookie);
        }
    }
}

impl FromRequest for ClientId {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let from_header = req
            .headers()
            .get(CLIENT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        let existing = from_header.or_else(|| {
            req.cookie(CLIENT_ID_COOKIE)
                .map(|c| c.value().to_string())
                .filter(|v| !v.is_empty())
        });

        let client = match existing {
            Some(id) => ClientId { id, fresh: false },
            None => ClientId {
                id: uuid::Uuid::new_v4().to_string(),
                fresh: true,
            },
        };

        ready(Ok(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_header_wins_over_cookie() {
        let req = TestRequest::default()
            .insert_header((CLIENT_ID_HEADER, "from-header"))
            .cookie(Cookie::new(CLIENT_ID_COOKIE, "from-cookie"))
            .to_http_request();

        let client = ClientId::extract(&req).await.unwrap();
        assert_eq!(client.as_str(), "from-header");
        assert!(!client.is_fresh());
    }

    #[actix_web::test]
    async fn test_cookie_used_without_header() {
        let req = TestRequest::default()
            .cookie(Cookie::new(CLIENT_ID_COOKIE, "from-cookie"))
            .to_http_request();

        let client = ClientId::extract(&req).await.unwrap();
        assert_eq!(client.as_str(), "from-cookie");
    }

    #[actix_web::test]
    async fn test_fresh_id_generated() {
        let req = TestRequest::default().to_http_request();

        let client = ClientId::extract(&req).await.unwrap();
        assert!(client.is_fresh());
        assert!(uuid::Uuid::parse_str(client.as_str()).is_ok());
    }
}
