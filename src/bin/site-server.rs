// site-server - Serve the portfolio site
//
// GET / and /index.html return the home document, /style.css the
// stylesheet; any other path falls back to the home document.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use starfield_engine::server::{router, SiteConfig};
    use tracing_subscriber::EnvFilter;

    #[derive(Parser, Debug)]
    #[command(name = "site-server", about = "Static responder for the portfolio site")]
    struct Args {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Directory holding index.html and style.css
        #[arg(long, default_value = "site")]
        site_dir: PathBuf,
    }

    pub async fn run() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();

        let args = Args::parse();
        let addr = format!("{}:{}", args.host, args.port);
        let app = router(SiteConfig { root: args.site_dir });

        // Crash early if the server can't start
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .expect("failed to bind listener");

        tracing::info!("serving on http://{addr}");
        tracing::info!("press Ctrl+C to stop");

        axum::serve(listener, app).await.expect("server error");
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    native::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {}
