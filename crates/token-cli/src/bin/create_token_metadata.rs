use std::process::ExitCode;

use clap::Parser;
use token22_cli::command::{
    create_metadata::CreateMetadataCommand, init_tracing, report_failure,
};

#[derive(Debug, Parser)]
#[command(term_width = 0)]
#[command(version = option_env!("BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")))]
#[command(about = "Create a Token-2022 fungible token and its metadata", long_about = None)]
struct CreateTokenMetadataApp {
    #[command(flatten)]
    command: CreateMetadataCommand,
}

#[tokio::main]
async fn main() -> ExitCode {
    let CreateTokenMetadataApp { command } = CreateTokenMetadataApp::parse();

    let settings = match command.common.try_load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            init_tracing("info");
            return report_failure(&err);
        }
    };

    init_tracing(&settings.log);

    match command.try_into_execute(&settings).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}
