//! Storefront access tokens.
//!
//! A storefront is reached with one of two credentials, each sent in its own
//! header. The service runs server-side, so a private token is preferred
//! when both are configured (see [`StorefrontConfig::from_env`]).
//!
//! [`StorefrontConfig::from_env`]: crate::StorefrontConfig::from_env

use std::fmt;

/// Header carrying a public storefront access token.
pub const PUBLIC_HEADER_NAME: &str = "X-Shopify-Storefront-Access-Token";

/// Header carrying a private (server-side) storefront access token.
pub const PRIVATE_HEADER_NAME: &str = "Shopify-Storefront-Private-Token";

/// A Storefront API access token.
///
/// `Debug` never prints the secret:
///
/// ```rust
/// use storefront_bff::StorefrontToken;
///
/// let token = StorefrontToken::Private("shpat_secret".to_string());
/// assert_eq!(token.header_name(), "Shopify-Storefront-Private-Token");
/// assert_eq!(format!("{token:?}"), "StorefrontToken::Private(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum StorefrontToken {
    /// Public token, the one a browser storefront would also use.
    Public(String),
    /// Private token, only ever held by a server.
    Private(String),
}

impl StorefrontToken {
    /// Returns the header this token is sent in.
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        match self {
            Self::Public(_) => PUBLIC_HEADER_NAME,
            Self::Private(_) => PRIVATE_HEADER_NAME,
        }
    }

    /// Returns the raw token.
    #[must_use]
    pub fn header_value(&self) -> &str {
        match self {
            Self::Public(token) | Self::Private(token) => token,
        }
    }

    /// Short label for log lines: `"public"` or `"private"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Public(_) => "public",
            Self::Private(_) => "private",
        }
    }
}

impl fmt::Debug for StorefrontToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public(_) => f.write_str("StorefrontToken::Public(*****)"),
            Self::Private(_) => f.write_str("StorefrontToken::Private(*****)"),
        }
    }
}
