use clap::{Parser, Subcommand};
use photo_manifest::{config, generate, manifest, output, rename, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-manifest")]
#[command(about = "JSON manifest builder for photo portfolio websites")]
#[command(long_about = "\
JSON manifest builder for photo portfolio websites

Your filesystem is the data source. Each category folder under images/
becomes a manifest file, root-level images become the home slideshow, and
the site's gallery scripts fetch the results from data/.

Site structure:

  <root>/
  ├── config.toml              # Build config (optional)
  ├── images/
  │   ├── home01-01.jpg        # Home slideshow pool (root-level files)
  │   ├── home01-02.jpg
  │   ├── street/              # Category folder
  │   │   ├── strt01-01.jpg    # Numeric suffix drives the sort order
  │   │   └── strt01-02.jpg
  │   ├── landscape/
  │   └── architecture/        # Missing folder = empty category, not an error
  └── data/                    # Output (created if absent)
      ├── street.json          # JSON array of web paths per category
      ├── home.json
      └── manifest.json        # Combined: { <category>: [...], home: [...] }

Emitted paths are web-relative with the filename percent-encoded:
images/street/strt01-01.jpg, images/my%20shot.jpg.

Run 'photo-manifest gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site root containing the images/ directory and config.toml
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Output directory for the JSON manifests (relative paths resolve
    /// against the site root)
    #[arg(long, default_value = "data", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan images/ and write the JSON manifests
    Build,
    /// Scan and report without writing anything
    Check,
    /// Rename category files to the <prefix>-NN.<ext> convention
    Rename {
        /// Print planned renames without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let images_root = cli.root.join("images");
    let out_dir = if cli.output.is_absolute() {
        cli.output.clone()
    } else {
        cli.root.join(&cli.output)
    };

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.root)?;
            let listing = scan::scan(&images_root, &config)?;
            output::print_notes(&listing.notes);

            let manifest = manifest::build(&listing, &config);
            let report = generate::write_manifests(&manifest, &out_dir)?;
            output::print_write_report(&report);

            if !report.failures.is_empty() {
                std::process::exit(1);
            }
        }
        Command::Check => {
            let config = config::load_config(&cli.root)?;
            println!("==> Checking {}", images_root.display());
            let listing = scan::scan(&images_root, &config)?;
            output::print_notes(&listing.notes);

            let manifest = manifest::build(&listing, &config);
            output::print_summary(&manifest);
            println!("==> Content is valid");
        }
        Command::Rename { dry_run } => {
            let config = config::load_config(&cli.root)?;
            if config.prefixes.is_empty() {
                println!("No [prefixes] configured; nothing to rename.");
                return Ok(());
            }
            let ops = rename::plan(&images_root, &config)?;
            if ops.is_empty() {
                println!("All files already conform; nothing to rename.");
                return Ok(());
            }
            if !dry_run {
                rename::apply(&ops)?;
            }
            output::print_rename_ops(&ops, dry_run);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
