//! Prints how a mesh file would be loaded, without loading it.
//!
//! ```bash
//! # Plan a COLLADA file relative to the working directory
//! meshleaf-probe meshes/arm.dae
//!
//! # Only consider the binary cache variant, pretend a comma decimal separator
//! meshleaf-probe --cache-ext .osgb --decimal-point , meshes/arm.dae
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use meshleaf::orchestrator::{ensure_readable, plan};
use meshleaf::{AssetContext, FixedLocale, LeafConfig, PluginRegistry, Resolution};
use meshleaf_vfs::FileSystemProvider;

#[derive(Parser, Debug)]
#[command(
    name = "meshleaf-probe",
    about = "Show how meshleaf would load a mesh file",
    long_about = "Resolves cache variants and reader options for a mesh file and \
        prints the result. No mesh loader is invoked.\n\n\
        EXAMPLES:\n\
          meshleaf-probe meshes/arm.dae\n\
          meshleaf-probe --root assets --cache-ext .osgb,.osg arm.dae",
    version
)]
struct Args {
    /// Mesh file to probe.
    path: String,

    /// Directory paths are resolved against.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Cache-variant suffixes to probe, in priority order.
    #[arg(long = "cache-ext", value_delimiter = ',')]
    cache_extensions: Vec<String>,

    /// Decimal separator to assume instead of the process locale's.
    #[arg(long = "decimal-point", env = "MESHLEAF_DECIMAL_POINT")]
    decimal_point: Option<char>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    meshleaf_core::init();
    let args = Args::parse();

    let fs = match &args.root {
        Some(root) => FileSystemProvider::new(root),
        None => FileSystemProvider::native(),
    };

    let mut config = LeafConfig::default();
    if !args.cache_extensions.is_empty() {
        config = config.with_cache_extensions(args.cache_extensions.iter().cloned());
    }

    let mut context = AssetContext::new(Arc::new(fs), Arc::new(PluginRegistry::new()))
        .with_config(config);
    if let Some(decimal_point) = args.decimal_point {
        context = context.with_locale(Arc::new(FixedLocale(decimal_point)));
    }

    let planned = ensure_readable(&context, &args.path).and_then(|()| plan(&context, &args.path));
    let plan = match planned {
        Ok(plan) => plan,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("requested:  {}", plan.requested());
    match plan.resolution() {
        Resolution::Cached { path, suffix } => println!("resolved:   {path} (cache {suffix})"),
        Resolution::Original => println!("resolved:   {} (no cache variant)", plan.load_path()),
    }
    println!("extension:  {}", plan.extension());
    match plan.options() {
        Some(options) => println!("options:    {options}"),
        None => println!("options:    default"),
    }
    if let Some(decimal_point) = plan.locale_mismatch() {
        println!("warning:    numeric locale uses '{decimal_point}' as decimal point");
    }
    if plan.is_locale_sensitive() {
        println!(
            "hint:       {}",
            context.config().conversion_hint(plan.requested())
        );
    }

    ExitCode::SUCCESS
}
