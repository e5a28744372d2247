use {
    chrono::{DateTime, Utc},
    sha2::{Digest, Sha256},
};

/// Hour precision timestamp format, `YYYYMMDDHH`.
pub const AUTH_WINDOW_FORMAT: &str = "%Y%m%d%H";

/// Derives the authentication token for `api_key` and `api_secret` valid
/// during the UTC hour that contains `at`.
///
/// The token is the lowercase hex SHA-256 digest of
/// `{api_key}:{api_secret}:{YYYYMMDDHH}`. Tokens computed within the same hour
/// are identical.
pub fn generate_auth_token(api_key: &str, api_secret: &str, at: DateTime<Utc>) -> String {
    let window = at.format(AUTH_WINDOW_FORMAT);
    let digest = Sha256::digest(format!("{api_key}:{api_secret}:{window}").as_bytes());

    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use {super::*, chrono::TimeZone};

    const API_KEY: &str = "11123548cd3a5e5613325132112becf";
    const API_SECRET: &str = "kata rahasia";
    const AUTH_TOKEN: &str = "e910361e42dafdfd100b19701c2ef403858cab640fd699afc67b78c7603ddb1b";

    fn stub_date_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2011, 7, 20, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_generate_auth_token() {
        let token = generate_auth_token(API_KEY, API_SECRET, stub_date_time());

        assert_eq!(token, AUTH_TOKEN);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_same_hour_same_token() {
        let start = Utc.with_ymd_and_hms(2011, 7, 20, 15, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2011, 7, 20, 15, 59, 59).unwrap();

        assert_eq!(
            generate_auth_token(API_KEY, API_SECRET, start),
            generate_auth_token(API_KEY, API_SECRET, end)
        );
    }

    #[test]
    fn test_token_changes_with_inputs() {
        let base = generate_auth_token(API_KEY, API_SECRET, stub_date_time());
        let next_hour = Utc.with_ymd_and_hms(2011, 7, 20, 16, 0, 0).unwrap();

        assert_ne!(base, generate_auth_token(API_KEY, API_SECRET, next_hour));
        assert_ne!(base, generate_auth_token("other", API_SECRET, stub_date_time()));
        assert_ne!(base, generate_auth_token(API_KEY, "other", stub_date_time()));
    }
}
