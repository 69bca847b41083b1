//! arXiv Lens - Entry Point

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_lens::{
    ArxivClient,
    config::{Config, generation},
    models::GenerationParams,
    search::SearchService,
    server::Server,
    translate::{HttpTranslationEngine, SerializedEngine, TranslationEngine, Translator},
};

#[derive(Parser, Debug)]
#[command(name = "arxiv-lens")]
#[command(about = "arXiv search with keyword suggestions and English-to-Japanese translation")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: IpAddr,

    /// HTTP server port
    #[arg(long, default_value = "8080", env = "PORT")]
    port: u16,

    /// arXiv query endpoint
    #[arg(long, env = "ARXIV_API_URL")]
    arxiv_api_url: Option<String>,

    /// Translation inference endpoint
    #[arg(long, env = "TRANSLATION_API_URL")]
    translation_api_url: Option<String>,

    /// Bearer token for the translation endpoint
    #[arg(long, env = "TRANSLATION_API_TOKEN", hide_env_values = true)]
    translation_api_token: Option<String>,

    /// Maximum input length in tokens; longer sentences are truncated by the engine
    #[arg(long, default_value_t = generation::MAX_INPUT_LENGTH)]
    max_input_length: u32,

    /// Beam width
    #[arg(long, default_value_t = generation::NUM_BEAMS)]
    num_beams: u32,

    /// Size of n-grams that may not repeat in a translation
    #[arg(long, default_value_t = generation::NO_REPEAT_NGRAM_SIZE)]
    no_repeat_ngram_size: u32,

    /// Keep generating until the beam limit instead of stopping early
    #[arg(long)]
    no_early_stopping: bool,

    /// Allow concurrent engine calls (only if the engine is known to be safe)
    #[arg(long)]
    concurrent_inference: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(url) = &cli.arxiv_api_url {
        config.arxiv_api_url.clone_from(url);
    }
    if let Some(url) = &cli.translation_api_url {
        config.translation_api_url.clone_from(url);
    }
    if cli.translation_api_token.is_some() {
        config.translation_api_token.clone_from(&cli.translation_api_token);
    }

    config.generation = GenerationParams {
        max_input_length: cli.max_input_length,
        num_beams: cli.num_beams,
        no_repeat_ngram_size: cli.no_repeat_ngram_size,
        early_stopping: !cli.no_early_stopping,
    };
    config.serialize_inference = !cli.concurrent_inference;

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting arXiv Lens");

    let config = build_config(&cli)?;

    let client = ArxivClient::new(&config)?;
    let search = SearchService::new(Arc::new(client));

    let engine = HttpTranslationEngine::new(&config)?;
    tracing::info!(
        endpoint = %config.translation_api_url,
        serialized = config.serialize_inference,
        "Translation engine ready"
    );
    let engine: Arc<dyn TranslationEngine> = if config.serialize_inference {
        Arc::new(SerializedEngine::new(engine))
    } else {
        Arc::new(engine)
    };
    let translator = Translator::new(engine, config.generation);

    let server = Server::new(search, translator);
    server.run(SocketAddr::new(cli.host, cli.port)).await?;

    Ok(())
}
