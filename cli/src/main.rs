mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use records::JobKind;
use rest::{ApiClient, ApiConfig, ApiError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("cannot read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("records must be JSON objects (line {line})")]
    NotAnObject { line: usize },
    #[error("no records found in input")]
    NoRecords,
    #[error("{0} cannot be exported")]
    NotExportable(JobKind),
    #[error("job {id} ended with status {status}: {message}")]
    JobFailed { id: String, status: String, message: String },
}

#[derive(Parser, Debug)]
#[command(name = "passport-cli", about = "Battery passport compliance backend CLI")]
struct Cli {
    #[arg(long, env = "API_BASE_URL", default_value = rest::config::DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Passports(PassportCommand),
    Import(ImportArgs),
    Export(ExportArgs),
    Jobs(JobsCommand),
    Audit {
        #[arg(long, help = "Show at most this many entries")]
        limit: Option<usize>,
    },
}

#[derive(Args, Debug)]
struct PassportCommand {
    #[command(subcommand)]
    command: PassportSubcommand,
}

#[derive(Subcommand, Debug)]
enum PassportSubcommand {
    List,
    Get {
        id: String,
        #[arg(long, default_value_t = false, help = "Fetch the public projection only")]
        public: bool,
    },
}

#[derive(Args, Debug)]
struct ImportArgs {
    #[arg(long)]
    kind: JobKind,

    #[arg(long, help = "JSON array, single object, or one object per line")]
    file: PathBuf,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(long)]
    kind: JobKind,

    #[arg(long, help = "Write the exported data here instead of stdout")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct JobsCommand {
    #[command(subcommand)]
    command: JobsSubcommand,
}

#[derive(Subcommand, Debug)]
enum JobsSubcommand {
    Imports,
    Exports,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = ApiClient::new(ApiConfig::new(&cli.base_url).with_api_key(cli.api_key));
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Passports(passports) => match passports.command {
            PassportSubcommand::List => commands::list_passports(&client, &mut out).await,
            PassportSubcommand::Get { id, public } => commands::get_passport(&client, &id, public, &mut out).await,
        },
        Command::Import(args) => {
            let text = std::fs::read_to_string(&args.file)
                .map_err(|source| CliError::ReadFile { path: args.file.clone(), source })?;
            commands::run_import(&client, args.kind, &text, &mut out).await
        }
        Command::Export(args) => match args.output {
            Some(path) => {
                let mut file = std::fs::File::create(&path)?;
                commands::run_export(&client, args.kind, &mut file).await
            }
            None => commands::run_export(&client, args.kind, &mut out).await,
        },
        Command::Jobs(jobs) => match jobs.command {
            JobsSubcommand::Imports => commands::list_jobs(&client, JobDirection::Imports, &mut out).await,
            JobsSubcommand::Exports => commands::list_jobs(&client, JobDirection::Exports, &mut out).await,
        },
        Command::Audit { limit } => commands::audit(&client, limit, &mut out).await,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum JobDirection {
    Imports,
    Exports,
}
