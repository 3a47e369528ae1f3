use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use swagger_md_core::config::{self, CONFIG_FILE_NAME, ProjectConfig};
use swagger_md_core::{
    CurlExecutor, DocumentInputs, OfflineExecutor, RequestExecutor, SpecificationSource,
};

#[derive(Parser)]
#[command(
    name = "swagger-md",
    about = "Render Swagger resource listings as Markdown API documentation",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Args)]
struct GenerateArgs {
    /// API name used in the document title
    #[arg(short, long)]
    name: Option<String>,

    /// Resource listing (resources.json)
    #[arg(short, long)]
    resources: Option<PathBuf>,

    /// Example parameter values (parameters.json)
    #[arg(short, long)]
    parameters: Option<PathBuf>,

    /// Output Markdown file, overwritten if it exists
    #[arg(short = 'o', long)]
    markdown: Option<PathBuf>,

    /// Specification files, comma-separated, in resource order or as name=path
    #[arg(short, long, value_delimiter = ',')]
    specification: Vec<String>,

    /// Config file
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// curl-compatible program used for example requests
    #[arg(long)]
    curl: Option<String>,

    /// Skip example requests; responses are left out of the document
    #[arg(long)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new swagger-md configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        None => cmd_generate(cli.generate),

        Some(Commands::Init { force }) => cmd_init(force),

        Some(Commands::Completions { shell }) => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swagger-md", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Merge command-line flags over the config file.
fn resolve_inputs(args: &GenerateArgs, cfg: &ProjectConfig) -> Result<DocumentInputs> {
    let name = args
        .name
        .clone()
        .or_else(|| cfg.name.clone())
        .with_context(|| missing("--name", "name"))?;
    let resources = args
        .resources
        .clone()
        .or_else(|| cfg.resources.clone())
        .with_context(|| missing("--resources", "resources"))?;
    let markdown = args
        .markdown
        .clone()
        .or_else(|| cfg.markdown.clone())
        .with_context(|| missing("--markdown", "markdown"))?;
    let parameters = args.parameters.clone().or_else(|| cfg.parameters.clone());

    let specifications = if args.specification.is_empty() {
        cfg.specifications
            .clone()
            .with_context(|| missing("--specification", "specifications"))?
    } else {
        SpecificationSource::from_entries(&args.specification)?
    };

    Ok(DocumentInputs {
        name,
        resources,
        parameters,
        markdown,
        specifications,
    })
}

fn missing(flag: &str, key: &str) -> String {
    format!("missing {flag} (or `{key}` in {CONFIG_FILE_NAME})")
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let cfg = config::load_config(&args.config)?.unwrap_or_default();
    let inputs = resolve_inputs(&args, &cfg)?;

    let executor: Box<dyn RequestExecutor> = if args.offline || cfg.client.offline {
        log::info!("offline: example requests are skipped");
        Box::new(OfflineExecutor)
    } else {
        let program = args.curl.clone().unwrap_or_else(|| cfg.client.curl.clone());
        Box::new(CurlExecutor::new(program))
    };

    eprintln!("Documenting {} → {}", inputs.name, inputs.markdown.display());
    let report = swagger_md_core::generate(&inputs, executor.as_ref())
        .with_context(|| format!("failed to generate {}", inputs.markdown.display()))?;

    eprintln!("  wrote {}", inputs.markdown.display());
    eprintln!(
        "Documented {} resources, {} operations",
        report.resources, report.operations
    );
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("swagger-md").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_is_consistent() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "-n", "Petstore", "-r", "resources.json", "-o", "api.md", "-s", "pets.json,users.json",
        ]);
        let cfg = ProjectConfig {
            name: Some("From Config".to_string()),
            parameters: Some(PathBuf::from("params.json")),
            ..ProjectConfig::default()
        };
        let inputs = resolve_inputs(&cli.generate, &cfg).unwrap();
        assert_eq!(inputs.name, "Petstore");
        assert_eq!(inputs.parameters, Some(PathBuf::from("params.json")));
        assert_eq!(
            inputs.specifications,
            SpecificationSource::Ordered(vec![PathBuf::from("pets.json"), PathBuf::from("users.json")])
        );
    }

    #[test]
    fn test_missing_resources_is_reported() {
        let cli = parse(&["-n", "Petstore", "-o", "api.md", "-s", "pets.json"]);
        let err = resolve_inputs(&cli.generate, &ProjectConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--resources"));
    }

    #[test]
    fn test_subcommand_parses() {
        let cli = parse(&["init", "--force"]);
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }
}
