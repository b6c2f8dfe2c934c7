use contracts::system::auth::{Role, TokenClaims, Viewer};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Turns the auth cookie into a `Viewer` for the route guard.
#[derive(Clone)]
pub struct TokenVerifier {
    key: Option<DecodingKey>,
}

impl TokenVerifier {
    /// With a secret, HS256 signatures and expiry are checked; without one the
    /// claims are read as-is.
    pub fn new(secret: Option<&str>) -> Self {
        Self {
            key: secret
                .filter(|s| !s.trim().is_empty())
                .map(|s| DecodingKey::from_secret(s.as_bytes())),
        }
    }

    pub fn verifies_signatures(&self) -> bool {
        self.key.is_some()
    }

    pub fn viewer(&self, token: Option<&str>) -> Viewer {
        let Some(key) = &self.key else {
            return Viewer::from_token(token);
        };
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            return Viewer::Anonymous;
        };

        match decode::<TokenClaims>(token, key, &Validation::new(Algorithm::HS256)) {
            Ok(data) => Viewer::Authenticated(Role::from_claim(data.claims.role.as_deref())),
            Err(e) => {
                tracing::warn!("route guard: token rejected: {}", e);
                Viewer::Malformed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn mint(secret: &str, role: &str) -> String {
        let claims = TokenClaims {
            sub: Some("1".into()),
            role: Some(role.into()),
            exp: Some((chrono::Utc::now().timestamp() + 3600).into()),
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[test]
    fn test_unverified_mode_reads_claims() {
        let verifier = TokenVerifier::new(None);
        assert!(!verifier.verifies_signatures());
        assert_eq!(
            verifier.viewer(Some(&mint("anything", "ADMIN"))),
            Viewer::Authenticated(Role::Admin)
        );
        assert_eq!(verifier.viewer(None), Viewer::Anonymous);
    }

    #[test]
    fn test_verified_mode_checks_signature() {
        let verifier = TokenVerifier::new(Some("s3cret"));
        assert_eq!(
            verifier.viewer(Some(&mint("s3cret", "USER"))),
            Viewer::Authenticated(Role::User)
        );
        assert_eq!(verifier.viewer(Some(&mint("other", "ADMIN"))), Viewer::Malformed);
        assert_eq!(verifier.viewer(Some("garbage")), Viewer::Malformed);
        assert_eq!(verifier.viewer(Some(" ")), Viewer::Anonymous);
    }

    #[test]
    fn test_blank_secret_means_unverified() {
        assert!(!TokenVerifier::new(Some("  ")).verifies_signatures());
    }
}
