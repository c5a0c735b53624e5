use crate::config::Config;

/// Location and credentials of the remote content store's mutate endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityEndpoint {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
}

impl SanityEndpoint {
    /// Endpoint for `config`, or `None` when no project is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let project_id = config.sanity_project_id.clone()?;
        Some(Self {
            project_id,
            dataset: config.sanity_dataset.clone(),
            api_version: config.sanity_api_version.clone(),
            token: config.sanity_token.clone(),
        })
    }

    /// Mutate URL. `returnIds` makes the store report what each mutation did.
    pub fn mutate_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/{}/data/mutate/{}?returnIds=true",
            self.project_id, self.api_version, self.dataset
        )
    }

    /// `Authorization` header value, when a token is configured.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}
