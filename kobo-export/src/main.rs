use clap::Parser;
use kobo_common::config::DEFAULT_MOUNT_POINT;
use kobo_common::{CitationStyle, ExportConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(about = "Export highlights and notes from a mounted Kobo eReader")]
struct Cli {
    /// Where the Kobo eReader volume is mounted
    #[arg(long, env = "KOBO_MOUNT_POINT", default_value = DEFAULT_MOUNT_POINT)]
    mount_point: PathBuf,

    /// The reader database to export from, defaults to `.kobo/KoboReader.sqlite` on the device
    #[arg(long, env = "KOBO_DATABASE")]
    database: Option<PathBuf>,

    /// Directory the per-book annotation files are appended to, relative to the working
    /// directory unless absolute. Defaults to a directory named after the style.
    #[arg(long, env = "KOBO_EXPORT_DIR")]
    export_dir: Option<PathBuf>,

    /// How each annotation is written out
    #[arg(long, env = "KOBO_CITATION_STYLE", value_enum, default_value_t = CitationStyle::Plain)]
    style: CitationStyle,
}

impl Cli {
    fn into_config(self) -> ExportConfig {
        let mut config = ExportConfig::new(self.mount_point, self.style);

        if let Some(database) = self.database {
            config = config.with_database_path(database);
        }

        if let Some(export_dir) = self.export_dir {
            config = config.with_export_dir(export_dir);
        }

        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = Cli::parse().into_config();

    match kobo_common::export(&config).await {
        Ok(_) => {}
        Err(e) if e.is_fatal() => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => error!("Annotation export aborted: {}", e),
    }

    info!("Annotation export completed.");
    ExitCode::SUCCESS
}
