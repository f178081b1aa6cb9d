use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use plutus_fixtures_core::{
    catalog, load_script, BundledSource, FilesystemSource, FixturesConfig, ScriptSource,
    SourceKind, CATALOG,
};

/// plutus-fixtures - Plutus script fixture loader
#[derive(Parser, Debug, Clone)]
#[command(name = "plutus-fixtures")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script names to print (e.g. AlwaysSucceeds)
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// Path to fixtures.yaml configuration file
    #[arg(short, long, value_name = "FILE")]
    project: Option<PathBuf>,

    /// List the script catalog instead of printing scripts
    #[arg(long)]
    list: bool,

    /// Load from the bundled registry instead of the filesystem
    #[arg(long)]
    bundled: bool,

    /// Base directory for filesystem loading
    #[arg(long, value_name = "DIR")]
    fixtures_dir: Option<PathBuf>,

    /// Verify that bundled and filesystem contents agree for every script
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG=debug for detailed logs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    debug!("resolved config: {:?}", config);

    if cli.list {
        list_catalog();
        return Ok(());
    }

    if cli.check {
        check_parity(&config)?;
        return Ok(());
    }

    if cli.names.is_empty() {
        eprintln!("Error: No script names specified. Use --help for usage information.");
        std::process::exit(1);
    }

    let source = config.into_source();
    print_scripts(source.as_ref(), &cli.names)
}

/// Resolve the effective configuration: file first, then flag overrides.
fn load_config(cli: &Cli) -> anyhow::Result<FixturesConfig> {
    let mut config = match &cli.project {
        Some(path) => FixturesConfig::from_file(path)?,
        None => FixturesConfig::default(),
    };
    if cli.bundled {
        config.source = SourceKind::Bundled;
    }
    if let Some(dir) = &cli.fixtures_dir {
        config.fixtures_dir = dir.clone();
    }
    Ok(config)
}

fn list_catalog() {
    for id in CATALOG {
        println!("{}\t{}\t{}", id.name, id.bundle_key, id.rel_path);
    }
}

fn print_scripts(source: &dyn ScriptSource, names: &[String]) -> anyhow::Result<()> {
    for name in names {
        let id = catalog::find(name)
            .ok_or_else(|| anyhow::anyhow!("unknown script: {name} (try --list)"))?;
        let script = load_script(source, id)?;
        info!("{} loaded from {} source", id.name, source.label());
        print!("{}", script.text());
    }
    Ok(())
}

/// Load every catalog entry from both sources and compare byte-for-byte.
fn check_parity(config: &FixturesConfig) -> anyhow::Result<()> {
    let bundled = BundledSource::new();
    let filesystem = FilesystemSource::new(config.fixtures_dir.clone());
    let mut drifted = 0usize;

    for id in CATALOG {
        let from_bundle = load_script(&bundled, id)?;
        let from_disk = load_script(&filesystem, id)?;
        if from_bundle.text() == from_disk.text() {
            info!("{}: in sync", id.name);
        } else {
            eprintln!("{}: bundled and filesystem contents differ", id.name);
            drifted += 1;
        }
    }

    if drifted > 0 {
        anyhow::bail!("{drifted} script(s) out of sync; re-bundle the fixtures");
    }
    println!("{} script(s) in sync", CATALOG.len());
    Ok(())
}
