//! High-level ScholarAI client

use bytes::Bytes;
use scholar_config::ClientConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug_span, Instrument};

use crate::api::{
    AiAssistanceApi, DocumentsApi, ExtractionApi, ProjectsApi, ScholarBotApi, SummariesApi,
};
use crate::auth::{CredentialProvider, SessionTokenStore};
use crate::dispatch::{AuthenticatedDispatcher, Dispatcher, HttpDispatcher, OutboundRequest};
use crate::endpoint::{Access, Endpoint};
use crate::error::Result;
use crate::normalize::{normalize, Payload};
use crate::resolver::UrlResolver;

/// Parameters for one endpoint call
#[derive(Debug, Clone, Default)]
pub struct Call {
    params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
}

impl Call {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a `{name}` placeholder
    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// Serialize `body` as the JSON request body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

struct ClientInner {
    resolver: UrlResolver,
    anonymous: Arc<dyn Dispatcher>,
    authenticated: Arc<dyn Dispatcher>,
    session: Option<Arc<SessionTokenStore>>,
}

/// Entry point to every ScholarAI service.
///
/// Cheap to clone; clones share configuration, HTTP connections and session.
#[derive(Clone)]
pub struct ScholarClient {
    inner: Arc<ClientInner>,
}

impl ScholarClient {
    /// Client with the reqwest dispatcher and a session store seeded from `auth.token`
    pub fn new(config: ClientConfig) -> Result<Self> {
        ClientBuilder::new(config).build()
    }

    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    pub fn resolver(&self) -> &UrlResolver {
        &self.inner.resolver
    }

    /// Session store, when the client owns one (the default)
    pub fn session(&self) -> Option<&Arc<SessionTokenStore>> {
        self.inner.session.as_ref()
    }

    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    pub fn ai(&self) -> AiAssistanceApi<'_> {
        AiAssistanceApi::new(self)
    }

    pub fn extraction(&self) -> ExtractionApi<'_> {
        ExtractionApi::new(self)
    }

    pub fn summaries(&self) -> SummariesApi<'_> {
        SummariesApi::new(self)
    }

    pub fn bot(&self) -> ScholarBotApi<'_> {
        ScholarBotApi::new(self)
    }

    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Absolute URL an endpoint call would hit
    pub fn url_for(&self, endpoint: &Endpoint, call: &Call) -> Result<String> {
        let path = endpoint.render(&call.params, &call.query)?;
        Ok(endpoint.target.resolve(&self.inner.resolver, &path))
    }

    /// Resolve, dispatch and normalize one endpoint call
    pub async fn call(&self, endpoint: &Endpoint, call: Call) -> Result<Payload> {
        let url = self.url_for(endpoint, &call)?;
        let mut request = OutboundRequest::new(endpoint.method.clone(), url);
        if let Some(body) = call.body {
            request = request.with_json(body);
        }

        let dispatcher = match endpoint.access {
            Access::Anonymous => &self.inner.anonymous,
            Access::Authenticated => &self.inner.authenticated,
        };

        let span = debug_span!("call", endpoint = endpoint.name);
        let raw = dispatcher.dispatch(request).instrument(span).await?;
        normalize(raw, endpoint.mode)
    }

    pub(crate) async fn call_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        call: Call,
    ) -> Result<T> {
        self.call(endpoint, call).await?.into_json()
    }

    pub(crate) async fn call_bytes(&self, endpoint: &Endpoint, call: Call) -> Result<Bytes> {
        self.call(endpoint, call).await?.into_bytes()
    }
}

/// Builder for [`ScholarClient`] with injectable dispatch and credentials
pub struct ClientBuilder {
    config: ClientConfig,
    dispatcher: Option<Arc<dyn Dispatcher>>,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl ClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            dispatcher: None,
            credentials: None,
        }
    }

    /// Use a custom dispatcher for all calls
    pub fn with_dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Use a custom credential source instead of the built-in session store
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn build(self) -> Result<ScholarClient> {
        self.config.validate()?;

        let anonymous: Arc<dyn Dispatcher> = match self.dispatcher {
            Some(dispatcher) => dispatcher,
            None => Arc::new(HttpDispatcher::from_config(&self.config.http)?),
        };

        let (credentials, session) = match self.credentials {
            Some(credentials) => (credentials, None),
            None => {
                let store = Arc::new(SessionTokenStore::new());
                if let Some(token) = &self.config.auth.token {
                    store.set_token(token.clone(), None);
                }
                (store.clone() as Arc<dyn CredentialProvider>, Some(store))
            }
        };

        let authenticated: Arc<dyn Dispatcher> =
            Arc::new(AuthenticatedDispatcher::new(anonymous.clone(), credentials));

        Ok(ScholarClient {
            inner: Arc::new(ClientInner {
                resolver: UrlResolver::new(self.config),
                anonymous,
                authenticated,
                session,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints;
    use scholar_config::DeploymentEnvironment;

    #[test]
    fn test_url_for_prod_document() {
        let config = ClientConfig {
            environment: DeploymentEnvironment::Prod,
            ..Default::default()
        };
        let client = ScholarClient::new(config).unwrap();
        let url = client
            .url_for(&endpoints::DOCUMENT_GET, &Call::new().param("id", "42"))
            .unwrap();
        assert_eq!(url, "http://4.247.29.26:8989/project-service/api/documents/42");
    }

    #[test]
    fn test_session_seeded_from_config() {
        let mut config = ClientConfig::default();
        config.auth.token = Some("seeded".to_string());
        let client = ScholarClient::new(config).unwrap();
        assert_eq!(client.session().unwrap().current().as_deref(), Some("seeded"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ClientConfig::default();
        config.project_api.base_url = "localhost:8083".to_string();
        assert!(ScholarClient::new(config).is_err());
    }
}
