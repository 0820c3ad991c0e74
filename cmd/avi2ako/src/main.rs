mod writer;

use anyhow::Context;
use clap::Parser;
use pkg_constants::api::DEFAULT_PROXY_ANNOTATION;
use pkg_constants::paths::{DEFAULT_CONFIG_FILE, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR};
use pkg_metrics::RuleTally;
use pkg_rules::source::items_from_list;
use pkg_types::config::{ConverterConfigFile, load_config_file};
use pkg_types::ingress::IngressList;
use tracing::info;
use tracing_subscriber::EnvFilter;
use writer::{OutputWriter, write_all};

#[derive(Parser, Debug)]
#[command(
    name = "avi2ako",
    about = "Convert avi_proxy ingress annotations into HostRule, HTTPRule and GSLBHostRule CRDs"
)]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Ingress list YAML to convert
    #[arg(long, short)]
    file: Option<String>,

    /// Directory under which hostrules/, httprules/ and gslbrules/ are created
    #[arg(long, short)]
    output_dir: Option<String>,

    /// Annotation key holding the JSON proxy configuration
    #[arg(long)]
    annotation: Option<String>,
}

/// Effective settings after merging CLI args, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    file: String,
    output_dir: String,
    annotation: String,
}

impl Settings {
    /// Merge: CLI args > config file > defaults
    fn resolve(cli: Cli, file_cfg: ConverterConfigFile) -> Self {
        Self {
            file: cli
                .file
                .or(file_cfg.file)
                .unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string()),
            output_dir: cli
                .output_dir
                .or(file_cfg.output_dir)
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            annotation: cli
                .annotation
                .or(file_cfg.annotation)
                .unwrap_or_else(|| DEFAULT_PROXY_ANNOTATION.to_string()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: ConverterConfigFile = load_config_file(&cli.config)?;
    info!("Config file: {}", cli.config);

    let settings = Settings::resolve(cli, file_cfg);
    info!("Converting {}", settings.file);
    info!("  Output dir:  {}", settings.output_dir);
    info!("  Annotation:  {}", settings.annotation);

    let content = std::fs::read_to_string(&settings.file)
        .with_context(|| format!("couldn't read {}", settings.file))?;
    let list = IngressList::from_yaml(&content)
        .with_context(|| format!("couldn't parse ingress list {}", settings.file))?;

    let items = items_from_list(&list, &settings.annotation);
    info!("Loaded {} ingress items", items.len());

    let conversion = pkg_rules::convert(&items)?;
    info!(
        "Derived {} documents, skipped {}",
        conversion.documents.len(),
        conversion.skipped.len()
    );

    let writer = OutputWriter::new(&settings.output_dir);
    writer.prepare()?;
    info!("Writing CRDs under {}", writer.root().display());

    let mut tally = RuleTally::new();
    write_all(&writer, &conversion.documents, &mut tally)?;
    info!("Wrote {} documents", tally.total());

    println!();
    print!("{}", tally.render());

    Ok(())
}
