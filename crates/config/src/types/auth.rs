//! Authentication strategies.
//!
//! Responsibilities:
//! - Model the two ways of obtaining a bearer credential as a tagged union.
//!
//! Does NOT handle:
//! - Exchanging client credentials for a token (see the client crate).
//!
//! Invariants:
//! - Tokens and client secrets are `SecretString` and never appear in `Debug` output.
//! - `Token` values are stored already trimmed of surrounding whitespace.

use secrecy::SecretString;

/// Strategy for obtaining the bearer credential sent to Infisical.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// A pre-issued service or personal token, used verbatim.
    Token { token: SecretString },
    /// Machine identity client credentials, exchanged for an access token
    /// through the universal auth login endpoint.
    UniversalAuth {
        client_id: String,
        client_secret: SecretString,
    },
}

impl AuthStrategy {
    /// Short name of the strategy, safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Token { .. } => "token",
            Self::UniversalAuth { .. } => "universal-auth",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_not_exposed_in_debug() {
        let secret = "st.secret-service-token-123";
        let strategy = AuthStrategy::Token {
            token: SecretString::new(secret.to_string().into()),
        };

        let debug_output = format!("{:?}", strategy);
        assert!(!debug_output.contains(secret));
        assert!(debug_output.contains("Token"));
    }

    #[test]
    fn test_client_secret_not_exposed_in_debug() {
        let strategy = AuthStrategy::UniversalAuth {
            client_id: "machine-identity-id".to_string(),
            client_secret: SecretString::new("client-secret-456".to_string().into()),
        };

        let debug_output = format!("{:?}", strategy);
        assert!(!debug_output.contains("client-secret-456"));
        // The client id is not a secret
        assert!(debug_output.contains("machine-identity-id"));
    }

    #[test]
    fn test_kind() {
        let token = AuthStrategy::Token {
            token: SecretString::new("t".to_string().into()),
        };
        assert_eq!(token.kind(), "token");
    }
}
