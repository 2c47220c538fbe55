// copcomplete CLI entry point

use copcomplete_cli::{output, router::CommandRouter};

#[tokio::main]
async fn main() {
    if let Err(e) = CommandRouter::route().await {
        tracing::debug!(error = %e.technical_details(), "command failed");
        output::print_error(&e.user_message());
        std::process::exit(1);
    }
}
