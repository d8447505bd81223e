use super::*;

#[test]
fn default_points_at_relative_bff() {
    let config = BffConfig::default();
    assert_eq!(config.base_url(), "/bff");
    assert_eq!(config.user_url(), "/bff/user");
    assert_eq!(config.login_url(), "/bff/login");
    assert_eq!(config.logout_url(), "/bff/logout");
}

#[test]
fn trailing_slash_is_trimmed() {
    let config = BffConfig::new("https://portal.example.com/bff/ ");
    assert_eq!(config.user_url(), "https://portal.example.com/bff/user");
}

#[test]
fn api_url_accepts_paths_with_or_without_leading_slash() {
    let config = BffConfig::default();
    assert_eq!(config.api_url("profile"), "/bff/api/profile");
    assert_eq!(config.api_url("/orders"), "/bff/api/orders");
}

#[test]
fn public_url_nests_service_name() {
    let config = BffConfig::default();
    assert_eq!(config.public_url("profile", "register"), "/bff/public/profile/register");
    assert_eq!(config.public_url("profile", "/confirm"), "/bff/public/profile/confirm");
}
