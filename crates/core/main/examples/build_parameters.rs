//! Builds the parameters of a few Authentication API calls and prints them.
//!
//! Run with: cargo run --example build_parameters

use auth0::prelude::*;

fn main() -> Result<(), ParamsError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let config = ClientConfig::from_toml_str(
        r#"
        [auth0]
        client_id = "demo-client"
        domain = "demo.auth0.com"
        "#,
    )?;

    // Hand-built parameters for a password realm login
    let builder = ParameterBuilder::new_authentication_builder()
        .set_client_id(config.client_id.as_str())
        .set_grant_type(GrantType::PasswordRealm)
        .set_realm(config.database_connection.as_str());
    println!("login: {:?}", builder.as_dictionary());

    // The same builder, extended for an offline access request
    let builder = builder.set_scope(SCOPE_OFFLINE_ACCESS);
    println!("offline login: {:?}", builder.as_dictionary());

    // Recipes assemble whole requests
    let api = AuthenticationApi::new(config).with_telemetry(&Telemetry::for_crate())?;
    let start = api.passwordless_with_email("alice@example.com", PasswordlessType::Code, None);
    println!("{} {}", start.method(), api.url_for(&start));
    println!("passwordless start: {:?}", start.parameters());

    let social = api.login_with_oauth_access_token("{IDP_ACCESS_TOKEN}", "facebook");
    println!("social login: {:?}", social.parameters());

    let refresh = api.renew_auth("{REFRESH_TOKEN}");
    println!("{} {}", refresh.method(), api.url_for(&refresh));

    Ok(())
}
