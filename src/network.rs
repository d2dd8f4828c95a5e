//! Network URL constants for the Plisio SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://plisio.net/api/v1";

/// Environment variable holding the secret API key.
pub const API_KEY_ENV: &str = "PLISIO_API_KEY";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "PLISIO_API_URL";

/// Query parameter carrying the secret key on every request.
pub const API_KEY_PARAM: &str = "api_key";
