use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The remote client cannot determine which account to operate against.
    #[error("Initialization failed! You need to set the CLOUDINARY_URL environment variable.")]
    MissingCredential,

    /// Structured error returned by the admin API.
    #[error("{http_code}: {message}")]
    Api { http_code: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_formats_as_code_and_message() {
        let err = Error::Api {
            http_code: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "500: internal error");
    }

    #[test]
    fn missing_credential_mentions_the_env_var() {
        assert!(Error::MissingCredential
            .to_string()
            .contains("CLOUDINARY_URL"));
    }
}
