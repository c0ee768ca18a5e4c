//! Ledenlijst CLI - membership list tables and exports
//!
//! ```bash
//! ledenlijst --filepath leden.xlsx -d              # all bans as tables
//! ledenlijst --filepath leden.xlsx -d knapen LD    # selected bans
//! ledenlijst --filepath leden.xlsx -e              # bans_export.xlsx, one sheet per ban
//! ledenlijst --filepath leden.xlsx -e Leiding      # leiding.xlsx
//! ledenlijst --filepath leden.xlsx --json          # registry as JSON
//! ```
//!
//! Ban arguments match ban names or short codes, ignoring case.

use clap::Parser;
use ledenlijst::{
    export_all, export_bans, load_registry, logging, render_all, render_ban, Ban, BanRegistry,
    ExportOptions, PostcodeDirectory, Settings,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ledenlijst")]
#[command(about = "Normalize a membership spreadsheet and group it per ban", long_about = None)]
struct Cli {
    /// Membership file (xlsx, xls, ods or csv)
    #[arg(long)]
    filepath: PathBuf,

    /// Print all bans, or only the given ones
    #[arg(short, long, num_args = 0.., value_name = "BAN")]
    dump: Option<Vec<String>>,

    /// Export all bans to one workbook, or one workbook per given ban
    #[arg(short, long, num_args = 0.., value_name = "BAN")]
    export: Option<Vec<String>>,

    /// Directory for exported workbooks
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// CSV with extra postcode;gemeente rows
    #[arg(long)]
    postcodes: Option<PathBuf>,

    /// Print the grouped members as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::from_env()?;
    if let Some(dir) = cli.output_dir {
        settings.output_dir = dir;
    }
    if let Some(csv) = cli.postcodes {
        settings.postcodes = Some(csv);
    }

    let postcodes = match &settings.postcodes {
        Some(path) => PostcodeDirectory::with_overrides(path)?,
        None => PostcodeDirectory::builtin(),
    };

    eprintln!("📄 Reading: {}", cli.filepath.display());
    let result = load_registry(&cli.filepath, &postcodes)?;
    if let Some(sheet) = &result.info.sheet {
        eprintln!("   Sheet: {}", sheet);
    }
    if let Some(encoding) = &result.info.encoding {
        eprintln!("   Encoding: {}", encoding);
    }
    eprintln!("   Rows: {}", result.info.row_count);
    eprintln!("✅ Placed {} members", result.summary.inserted);
    if result.summary.duplicates > 0 {
        eprintln!("   Duplicates skipped: {}", result.summary.duplicates);
    }
    if result.summary.unrecognized > 0 {
        eprintln!("⚠️  Unrecognized ban: {}", result.summary.unrecognized);
    }

    let registry = result.registry;

    if let Some(names) = &cli.dump {
        cmd_dump(&registry, names);
    }

    if let Some(names) = &cli.export {
        cmd_export(&registry, names, &ExportOptions::from(&settings))?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&registry.to_json())?);
    }

    Ok(())
}

fn cmd_dump(registry: &BanRegistry, names: &[String]) {
    if names.is_empty() {
        print!("{}", render_all(registry));
        return;
    }

    for ban in resolve_bans(names) {
        print!("{}", render_ban(registry, ban));
    }
}

fn cmd_export(
    registry: &BanRegistry,
    names: &[String],
    options: &ExportOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if names.is_empty() {
        let path = export_all(registry, options)?;
        eprintln!("💾 Written: {}", path.display());
        return Ok(());
    }

    for path in export_bans(registry, &resolve_bans(names), options)? {
        eprintln!("💾 Written: {}", path.display());
    }
    Ok(())
}

/// Known bans in argument order; unknown names are warned about and dropped.
fn resolve_bans(names: &[String]) -> Vec<Ban> {
    names
        .iter()
        .filter_map(|name| {
            let ban = Ban::from_cli(name);
            if ban.is_none() {
                tracing::warn!("Ban '{}' is not recognized", name);
            }
            ban
        })
        .collect()
}
