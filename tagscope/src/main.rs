use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod context;
mod format;
mod logging;

/// tagscope - Registry Tag Resolver
///
/// Finds which tags point at an image digest in a Docker Registry v2 compatible registry.
#[derive(Parser, Debug)]
#[command(name = "tagscope")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every subcommand
#[derive(clap::Args, Debug)]
struct GlobalArgs {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output
    #[arg(long, global = true, value_enum)]
    color: Option<format::ColorWhen>,

    /// Configuration file (default: <config dir>/tagscope/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Registry base URL (overrides registry.url)
    #[arg(short, long, global = true)]
    registry: Option<String>,

    /// Request timeout in seconds (overrides network.timeout)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long, global = true)]
    insecure: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tags pointing at a digest
    Tags {
        /// Repository name (e.g., library/alpine)
        repository: String,
        /// Content digest (e.g., sha256:...)
        digest: String,
        /// Output format (default: output.format from config)
        #[arg(short, long, value_enum)]
        format: Option<format::OutputFormat>,
        /// Show only tag names
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show the manifest record of a digest
    Show {
        /// Repository name (e.g., library/alpine)
        repository: String,
        /// Content digest (e.g., sha256:...)
        digest: String,
        /// Output format (default: output.format from config)
        #[arg(short, long, value_enum)]
        format: Option<format::OutputFormat>,
    },
    /// List every digest of a repository with its tags
    #[command(visible_alias = "ls")]
    List {
        /// Repository name (e.g., library/alpine)
        repository: String,
        /// Show full digests
        #[arg(long)]
        no_trunc: bool,
        /// Output format (default: output.format from config)
        #[arg(short, long, value_enum)]
        format: Option<format::OutputFormat>,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.global.verbose);

    match cli.command {
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "tagscope", &mut std::io::stdout());
        }
        Commands::Tags {
            repository,
            digest,
            format,
            quiet,
        } => {
            let ctx = build_context(cli.global);
            let fmt = ctx.output_format(format);
            let result = commands::tags::handle_tags(&ctx, &repository, &digest, fmt, quiet).await;
            finish(&ctx, result);
        }
        Commands::Show {
            repository,
            digest,
            format,
        } => {
            let ctx = build_context(cli.global);
            let fmt = ctx.output_format(format);
            let result = commands::tags::handle_show(&ctx, &repository, &digest, fmt).await;
            finish(&ctx, result);
        }
        Commands::List {
            repository,
            no_trunc,
            format,
        } => {
            let ctx = build_context(cli.global);
            let fmt = ctx.output_format(format);
            let result = commands::list::handle_list(&ctx, &repository, fmt, no_trunc).await;
            finish(&ctx, result);
        }
    }
}

/// Build context with precedence: defaults > config file > env vars > CLI flags
fn build_context(global: GlobalArgs) -> context::AppContext {
    let color = global.color.map(libtagscope::config::ColorChoice::from);
    let overrides = context::Overrides {
        registry: global.registry,
        timeout: global.timeout,
        insecure: global.insecure,
        color,
    };

    match context::AppContext::build(global.config.as_deref(), overrides) {
        Ok(ctx) => ctx,
        Err(e) => {
            format::error(color.unwrap_or_default(), &e.to_string());
            std::process::exit(1);
        }
    }
}

/// Prints a command's output, or its error and exits with status 1.
fn finish(ctx: &context::AppContext, result: Result<String, String>) {
    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(message) => {
            format::error(ctx.config.output.color, &message);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
