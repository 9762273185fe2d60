pub mod claims;
pub mod errors;
pub mod handler;
pub mod secret;

pub use claims::AccessToken;
pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use handler::DEFAULT_TOKEN_TTL_SECONDS;
pub use secret::SigningSecret;
