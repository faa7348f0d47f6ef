//! Declarative endpoint descriptors
//!
//! Every remote operation is one [`Endpoint`] value: where it lives, which
//! verb and path template it uses, how its body is read, and whether it
//! needs a credential. The facades in [`crate::api`] only pick an endpoint
//! and fill in its parameters.

use reqwest::Method;

use crate::error::{Error, Result};
use crate::normalize::ResponseMode;
use crate::resolver::UrlResolver;

/// Which base URL an endpoint is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Named microservice behind the gateway
    Service(&'static str),
    /// Gateway root, no service segment
    Gateway,
    /// Standalone project/research API
    ProjectApi,
}

impl Target {
    pub fn resolve(&self, resolver: &UrlResolver, path: &str) -> String {
        match self {
            Target::Service(name) => resolver.resolve_service_url(name, path),
            Target::Gateway => resolver.resolve_url(path),
            Target::ProjectApi => resolver.resolve_project_url(path),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Anonymous,
    Authenticated,
}

/// One remote operation
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Stable name used in logs, e.g. `documents.get`
    pub name: &'static str,
    pub target: Target,
    pub method: Method,
    /// Path with `{param}` placeholders
    pub path: &'static str,
    pub mode: ResponseMode,
    pub access: Access,
}

impl Endpoint {
    /// Placeholder names in template order
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    names.push(&after[..close]);
                    rest = &after[close + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Fill the template and append the query string.
    ///
    /// Every interpolated value and query pair is percent-encoded.
    pub fn render(&self, params: &[(&str, String)], query: &[(&str, String)]) -> Result<String> {
        let mut out = String::with_capacity(self.path.len() + 16);
        let mut rest = self.path;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                Error::Template(format!("unclosed placeholder in {}", self.path))
            })?;
            let name = &after[..close];
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value)
                .ok_or_else(|| {
                    Error::Template(format!("missing parameter '{}' for {}", name, self.name))
                })?;
            out.push_str(&urlencoding::encode(value));
            rest = &after[close + 1..];
        }
        out.push_str(rest);

        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect();
            out.push('?');
            out.push_str(&pairs.join("&"));
        }

        Ok(out)
    }
}
