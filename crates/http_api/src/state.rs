use rand::{RngCore, rngs::OsRng};

use app_api::AppContext;

const CSRF_TOKEN_BYTES: usize = 16;

#[derive(Clone)]
pub struct HttpState {
    pub context: AppContext,
    pub csrf_token: String,
}

impl HttpState {
    pub fn new(context: AppContext, csrf_token: String) -> Self {
        Self {
            context,
            csrf_token,
        }
    }
}

/// Random per-process token clients must echo in the CSRF header.
pub fn generate_csrf_token() -> String {
    let mut bytes = [0u8; CSRF_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::generate_csrf_token;

    #[test]
    fn tokens_are_hex_and_unique() {
        let first = generate_csrf_token();
        let second = generate_csrf_token();
        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }
}
