use std::process::ExitCode;

use clap::Parser;
use token22_cli::command::{init_tracing, mint::MintCommand, report_failure};

#[derive(Debug, Parser)]
#[command(term_width = 0)]
#[command(version = option_env!("BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")))]
#[command(about = "Mint Token-2022 tokens into the signer's associated token account", long_about = None)]
struct MintTokenApp {
    #[command(flatten)]
    command: MintCommand,
}

#[tokio::main]
async fn main() -> ExitCode {
    let MintTokenApp { command } = MintTokenApp::parse();

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
