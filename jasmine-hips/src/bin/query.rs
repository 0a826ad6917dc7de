use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use jasmine_core::coords::{parse_dec, parse_ra};
use jasmine_core::SkyCoordinate;
use jasmine_hips::catalog::{lookup, CatalogEntry, FsTileSource, HttpTileSource};
use jasmine_hips::config::QueryConfig;
use jasmine_hips::survey::{HipsProperties, SurveyLayout};
use jasmine_hips::tiling::{catalog_tile_path, npix, TileResolution, TileResolver};
use jasmine_hips::Selection;
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "jasmine-query")]
#[command(about = "Resolve sky coordinates to HiPS catalog tiles and rows")]
struct Cli {
    /// JSON file with default order, depth, survey URL and id column
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log resolutions and fetches to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Target {
    /// Right ascension (degrees, or HMS e.g. 05h34m31.94s, 5:34:31.94)
    #[arg(allow_negative_numbers = true)]
    ra: String,
    /// Declination (degrees, or DMS e.g. +22d00m52.2s, -5:22:30)
    #[arg(allow_hyphen_values = true)]
    dec: String,
    /// Order of the catalog tiles
    #[arg(long)]
    order: Option<u8>,
    /// Levels between the tile order and the row order
    #[arg(long)]
    depth: Option<u8>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the coarse pixel and relative index for a coordinate
    Resolve {
        #[command(flatten)]
        target: Target,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print the viewer selection and data-product URLs for a coordinate
    Locate {
        #[command(flatten)]
        target: Target,
        /// Survey base URL or directory
        #[arg(long)]
        survey: Option<String>,
        /// Fetch the catalog row to name the data products
        #[arg(long)]
        fetch: bool,
        /// Particle component for the point cloud URL (e.g. gas, stars)
        #[arg(long, requires = "feature")]
        component: Option<String>,
        /// Particle feature for the point cloud URL (e.g. density)
        #[arg(long, requires = "component")]
        feature: Option<String>,
    },
    /// Fetch the catalog row for a coordinate
    Lookup {
        #[command(flatten)]
        target: Target,
        /// Catalog tile root (directory or URL)
        #[arg(long)]
        catalog_root: String,
        /// Column holding the object identifier
        #[arg(long)]
        id_column: Option<String>,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print a HiPS properties file
    Properties {
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => QueryConfig::from_file(path)
            .with_context(|| format!("Cannot load config {}", path.display()))?,
        None => QueryConfig::default(),
    };
    let resolver = TileResolver::new();

    match cli.command {
        Commands::Resolve { target, format } => {
            let tile = resolve_target(&resolver, &config, &target)?;
            match format {
                OutputFormat::Table => print_resolution(&tile),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tile)?),
            }
        }
        Commands::Locate {
            target,
            survey,
            fetch,
            component,
            feature,
        } => {
            let layout = survey
                .map(SurveyLayout::new)
                .or_else(|| config.survey_url.clone())
                .context("No survey given: pass --survey or set survey_url in the config")?;
            let (coord, order, depth) = target_args(&config, &target)?;
            let selection = layout.select(&resolver, &coord, order, depth)?;

            println!("{}", selection.to_json()?);
            println!("model:      {}", layout.model_url());
            println!("projection: {}", layout.projection_url());
            println!("catalog:    {}", layout.catalog_url());

            if fetch {
                let entry = fetch_entry(&selection)?;
                let id = entry.get(&config.id_column).with_context(|| {
                    format!("Row has no '{}' column", config.id_column)
                })?;
                println!("id:         {}", id);
                println!("cutout:     {}", layout.cutout_url(id));
                if let (Some(component), Some(feature)) = (component, feature) {
                    println!(
                        "cloud:      {}",
                        layout.point_cloud_url(&component, &feature, id)
                    );
                }
            }
        }
        Commands::Lookup {
            target,
            catalog_root,
            id_column,
            format,
        } => {
            let tile = resolve_target(&resolver, &config, &target)?;
            let selection = Selection::new(
                catalog_tile_path(&catalog_root, tile.order, tile.coarse_pixel),
                tile.relative_index,
            );
            let entry = fetch_entry(&selection)?;
            let id_column = id_column.unwrap_or(config.id_column);

            match format {
                OutputFormat::Table => print_entry(&entry, &id_column),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
            }
        }
        Commands::Properties { file } => {
            let props = HipsProperties::from_file(&file)
                .with_context(|| format!("Cannot read {}", file.display()))?;
            print!("{}", props);
            if let Ok(order) = props.hips_order() {
                println!("\n{} tiles at order {}", npix(order)?, order);
            }
        }
    }

    Ok(())
}

fn target_args(config: &QueryConfig, target: &Target) -> anyhow::Result<(SkyCoordinate, u8, u8)> {
    let ra = parse_ra(&target.ra).with_context(|| format!("Cannot parse RA '{}'", target.ra))?;
    let dec =
        parse_dec(&target.dec).with_context(|| format!("Cannot parse Dec '{}'", target.dec))?;
    let coord = SkyCoordinate::new(ra, dec)?;
    Ok((
        coord,
        target.order.unwrap_or(config.order),
        target.depth.unwrap_or(config.hierarchy_depth),
    ))
}

fn resolve_target(
    resolver: &TileResolver,
    config: &QueryConfig,
    target: &Target,
) -> anyhow::Result<TileResolution> {
    let (coord, order, depth) = target_args(config, target)?;
    let tile = resolver
        .resolve(&coord, order, depth)
        .with_context(|| format!("Cannot resolve {}", coord))?;
    Ok(tile)
}

fn fetch_entry(selection: &Selection) -> anyhow::Result<CatalogEntry> {
    let url = &selection.csv_url;
    let entry = if url.starts_with("http://") || url.starts_with("https://") {
        lookup(&HttpTileSource::new(), selection)
    } else {
        lookup(&FsTileSource::new("."), selection)
    };
    entry.with_context(|| format!("Lookup failed for row {} of {}", selection.csv_idx, url))
}

fn print_resolution(tile: &TileResolution) {
    println!("order:          {}", tile.order);
    println!("depth:          {}", tile.hierarchy_depth);
    println!("coarse pixel:   {}", tile.coarse_pixel);
    println!("relative index: {}", tile.relative_index);
    println!("tile line:      {}", tile.tile_line());
}

fn print_entry(entry: &CatalogEntry, id_column: &str) {
    println!("{} row {}", entry.csv_url, entry.csv_idx);
    if let Some(id) = entry.get(id_column) {
        println!("{:>16}: {}", id_column, id);
    }
    for (column, value) in &entry.fields {
        if column != id_column {
            println!("{:>16}: {}", column, value);
        }
    }
}
