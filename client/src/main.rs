use clearfile::prelude::*;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    if !args.server.starts_with("http://") && !args.server.starts_with("https://") {
        warn!("Server url {} has no http(s) scheme, requests will probably fail", args.server);
    }

    let mut renderer = TerminalRenderer::new(io::stdout());
    if let Err(e) = run(&args, &mut renderer).await {
        error!("{e}");
        std::process::exit(1);
    }
}
