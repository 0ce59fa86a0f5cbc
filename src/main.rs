use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vetiver_site::{config, generate, output, page::RenderContext};

#[derive(Parser)]
#[command(name = "vetiver-site")]
#[command(about = "Static site generator for the Shiva Sakthi Bio Company landing page")]
#[command(long_about = "\
Static site generator for the Shiva Sakthi Bio Company landing page

Renders one self-contained index.html: header, hero, about, products,
gallery, testimonials, contact, blog, and footer. All copy comes from the
stock defaults, overridden by an optional config.toml.

Content structure:

  content/
  ├── config.toml        # Optional, sparse overrides (unknown keys rejected)
  └── assets/            # Optional, copied as-is to the output root
      ├── favicon.ico
      └── img/
          └── field.jpg  # Reference as \"img/field.jpg\" in config.toml

Run 'vetiver-site gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render index.html and copy assets into the output directory
    Build,
    /// Validate config.toml and show the page outline without writing
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the resolved config (defaults + overrides) as JSON
    Inspect,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            output::print_site_output(&site_config);

            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(
                &site_config,
                &cli.source,
                &cli.output,
                &RenderContext::now(),
            )?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            output::print_site_output(&site_config);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Inspect => {
            let site_config = config::load_config(&cli.source)?;
            println!("{}", serde_json::to_string_pretty(&site_config)?);
        }
    }

    Ok(())
}
