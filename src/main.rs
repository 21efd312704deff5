use clap::Parser;
use login_client::configuration;
use login_client::telemetry;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the user-facing messages, logs go to stderr
    let subscriber =
        telemetry::get_subscriber("login-client".into(), "warn".into(), std::io::stderr);
    telemetry::init_subscriber(subscriber)?;

    let args = cli::Cli::parse();
    let config = configuration::get_configuration()?;
    cli::run(args, config).await
}
