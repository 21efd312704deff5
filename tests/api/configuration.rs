use login_client::configuration;
use login_client::constant::TOKEN_KEY;

#[test]
fn the_default_configuration_targets_the_login_endpoint() {
    let config = configuration::get_configuration().expect("Failed to read configuration");

    let url = config
        .auth_client
        .client()
        .expect("Failed to build auth client")
        .login_url()
        .expect("Failed to build login url");

    assert_eq!(url.path(), "/auth/login");
    assert_eq!(config.session.token_key, TOKEN_KEY);
}
