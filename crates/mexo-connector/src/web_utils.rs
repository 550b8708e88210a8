//! URL builders over the domain-templated constants.

use crate::constants::{
    PRIVATE_API_VERSION, PUBLIC_API_VERSION, REST_URL, USER_DATA_STREAM_URL, WSS_URL,
};

fn with_domain(template: &str, domain: &str) -> String {
    template.replacen("{}", domain, 1)
}

/// Join a path onto the REST base.
///
/// Paths starting with `/` are bare endpoint names and get `version`
/// prepended (`/account` -> `v1/account`). Other paths such as
/// `quote/v1/depth` already carry their version and are appended as-is.
fn rest_url(path_url: &str, domain: &str, version: &str) -> String {
    let base = with_domain(REST_URL, domain);
    if path_url.starts_with('/') {
        format!("{base}{version}{path_url}")
    } else {
        format!("{base}{path_url}")
    }
}

/// Full URL for a public REST endpoint.
pub fn public_rest_url(path_url: &str, domain: &str) -> String {
    rest_url(path_url, domain, PUBLIC_API_VERSION)
}

/// Full URL for a private (signed) REST endpoint.
pub fn private_rest_url(path_url: &str, domain: &str) -> String {
    rest_url(path_url, domain, PRIVATE_API_VERSION)
}

/// Public market-data websocket.
pub fn wss_url(domain: &str) -> String {
    with_domain(WSS_URL, domain)
}

/// Private user-data websocket.
pub fn user_stream_url(domain: &str) -> String {
    with_domain(USER_DATA_STREAM_URL, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        ACCOUNTS_PATH_URL, DEFAULT_DOMAIN, EXCHANGE_INFO_PATH_URL, SNAPSHOT_PATH_URL,
    };

    #[test]
    fn test_versioned_path_is_appended_directly() {
        assert_eq!(
            public_rest_url(SNAPSHOT_PATH_URL, DEFAULT_DOMAIN),
            "https://api.mexo.io/openapi/quote/v1/depth"
        );
    }

    #[test]
    fn test_bare_path_gets_version() {
        assert_eq!(
            public_rest_url(EXCHANGE_INFO_PATH_URL, DEFAULT_DOMAIN),
            "https://api.mexo.io/openapi/v1/brokerInfo"
        );
        assert_eq!(
            private_rest_url(ACCOUNTS_PATH_URL, "us"),
            "https://api.mexo.us/openapi/v1/account"
        );
    }

    #[test]
    fn test_websocket_urls_follow_domain() {
        assert_eq!(wss_url("io"), "wss://wsapi.mexo.io/openapi/quote/ws/v1");
        assert_eq!(user_stream_url("us"), "wss://wsapi.mexo.us/openapi/ws");
    }
}
