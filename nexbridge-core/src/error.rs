/// Errors produced by the `nexbridge-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Neither credential variable holds a non-empty value.
    #[error("no Nexla credential found in NEXLA_SERVICE_KEY or NEXLA_ACCESS_TOKEN")]
    MissingCredentials,
}
