use crate::errors::SdkError;
use crate::utils::redact::{is_sensitive_header, redact_object};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// A fully resolved HTTP request, ready to be handed to a transport.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequestSpec {
    pub(crate) method: Method,
    pub(crate) scheme: String,
    pub(crate) host: String,
    pub(crate) port: Option<u16>,
    pub(crate) path: String,
    pub(crate) query: String,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) body: String,
}

impl HttpRequestSpec {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Percent-encoded path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Url-encoded query string without the leading `?`. Empty when there is none.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn url(&self) -> Result<Url, SdkError> {
        let mut raw = format!("{}://{}", self.scheme, self.host);
        if let Some(port) = self.port {
            raw.push_str(&format!(":{}", port));
        }
        raw.push_str(&self.path);
        if !self.query.is_empty() {
            raw.push('?');
            raw.push_str(&self.query);
        }
        Ok(Url::parse(&raw)?)
    }

    /// Converts into a `reqwest::Request` without sending it.
    pub fn to_reqwest(&self) -> Result<reqwest::Request, SdkError> {
        let mut request = reqwest::Request::new(self.method.clone(), self.url()?);
        *request.headers_mut() = headers_to_headermap(&self.headers)?;
        if !self.body.is_empty() {
            *request.body_mut() = Some(reqwest::Body::from(self.body.clone()));
        }
        Ok(request)
    }

    /// JSON view with credentials masked, safe to log.
    pub fn redacted(&self) -> Value {
        redact_object(&serde_json::json!({
            "method": self.method.as_str(),
            "scheme": self.scheme,
            "host": self.host,
            "port": self.port,
            "path": self.path,
            "query": self.query,
            "headers": self.headers,
            "body_bytes": self.body.len(),
        }))
    }
}

impl fmt::Debug for HttpRequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .iter()
            .map(|(key, value)| {
                let shown = if is_sensitive_header(key) {
                    "[REDACTED]"
                } else {
                    value.as_str()
                };
                (key.as_str(), shown)
            })
            .collect();
        f.debug_struct("HttpRequestSpec")
            .field("method", &self.method)
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

fn headers_to_headermap(headers: &BTreeMap<String, String>) -> Result<HeaderMap, SdkError> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| SdkError::configuration(format!("Invalid header name `{}`", key)))?;
        let val = HeaderValue::from_str(value)
            .map_err(|_| SdkError::configuration(format!("Invalid value for header `{}`", key)))?;
        map.insert(name, val);
    }
    Ok(map)
}
