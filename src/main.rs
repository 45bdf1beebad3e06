use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
mod config;
mod error;
mod events;
mod mappings;
mod services;
mod utils;

use config::Config;
use error::LayersError;
use services::{ConfigParser, LatticePrinter, SubmapRegistry};

#[derive(Parser, Debug)]
#[command(name = "hypr-layers", version)]
#[command(about = "Генерирует многослойные submap-биндинги из hyprland.conf")]
struct Args {
    /// Путь к hyprland.conf
    input: PathBuf,

    /// Записать результат в файл вместо stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Путь к файлу конфигурации генератора
    #[arg(short, long, default_value = "hypr-layers.toml")]
    config: PathBuf,

    /// Уровень логирования (перекрывает конфигурацию)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Ошибка: {:#}", e);
        let code = e.downcast_ref::<LayersError>().map_or(1, LayersError::exit_code);
        std::process::exit(code);
    }
}

/// `--help` и `--version` завершают процесс сами, остальные ошибки clap
/// превращаются в ошибку использования с кодом 1
fn parse_args() -> error::Result<Args> {
    Args::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => LayersError::Usage(e.render().to_string()),
    })
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(&args.config, args.log_level.as_deref())?;
    init_tracing(&config.logging.level)?;

    info!("Запуск hypr-layers v{}", env!("CARGO_PKG_VERSION"));
    info!("Входной файл: {:?}", args.input);

    let registry = read_input(&args.input, &config)?;
    if registry.is_empty() {
        warn!("Во входном файле не найдено ни одного bind или #alias");
    }
    let printer = LatticePrinter::new(&registry, &config.generator);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Не удалось создать {:?}", path))?;
            let mut out = BufWriter::new(file);
            printer.print(&mut out)?;
            out.flush()?;
            info!("Результат записан в {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            printer.print(&mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Загрузить конфигурацию; `--log-level` проходит ту же проверку, что и TOML
fn load_config(path: &Path, log_level: Option<&str>) -> error::Result<Config> {
    let mut config = Config::load(path).map_err(LayersError::Config)?;

    if let Some(level) = log_level {
        config.logging.level = level.to_string();
        config.validate().map_err(LayersError::Config)?;
    }

    Ok(config)
}

fn read_input(path: &Path, config: &Config) -> Result<SubmapRegistry> {
    let file = File::open(path).with_context(|| format!("Не удалось открыть {:?}", path))?;

    let registry = ConfigParser::new(&config.generator)
        .parse(BufReader::new(file))
        .with_context(|| format!("Ошибка чтения {:?}", path))?;

    Ok(registry)
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // stdout занят сгенерированной конфигурацией
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr),
        )
        .init();

    Ok(())
}
