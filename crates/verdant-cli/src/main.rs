use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use verdant_cli::{determine_output_path, expand_inputs};
use verdant_core::models::{FillHolesMethod, ProcessOptions, SegmentationOptions};
use verdant_core::{decoders, exporters, pipeline, segmentation};

#[derive(Parser)]
#[command(name = "verdant")]
#[command(version, about = "Vegetation extraction for RGB images", long_about = None)]
struct Cli {
    /// Input image files or directories
    #[arg(value_name = "INPUTS", required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    output_dir: PathBuf,

    /// Fill small holes in the detected vegetation mask
    #[arg(long)]
    fill_holes: bool,

    /// Hole filling method: "morphology" or "contour"
    #[arg(long, value_name = "METHOD", default_value = "morphology")]
    fill_holes_method: String,

    /// Maximum hole area, in pixels, filled by the contour method
    #[arg(long, value_name = "PIXELS", default_value = "25")]
    max_hole_area: f64,

    /// Render non-vegetation areas as blurred grayscale instead of flat white
    #[arg(long)]
    pretty_result: bool,

    /// Skip histogram equalization of the HSV value channel
    #[arg(long)]
    no_normalize_illumination: bool,

    /// Threshold in HSV directly instead of equalizing LAB lightness first
    #[arg(long)]
    no_lab_color_space: bool,

    /// Scan input directories recursively
    #[arg(long)]
    recursive: bool,

    /// Number of parallel worker threads
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    // Reject a bad method name before decoding anything.
    let fill_holes_method =
        FillHolesMethod::from_str(&cli.fill_holes_method).map_err(|e| e.to_string())?;

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
    }

    std::fs::create_dir_all(&cli.output_dir).map_err(|e| {
        format!(
            "Failed to create output directory {}: {}",
            cli.output_dir.display(),
            e
        )
    })?;

    let inputs = expand_inputs(&cli.inputs, cli.recursive)?;
    if inputs.is_empty() {
        return Err("No input images found".to_string());
    }

    let segmentation_options = SegmentationOptions {
        normalize_illumination: !cli.no_normalize_illumination,
        use_lab_color_space: !cli.no_lab_color_space,
    };
    let process_options = ProcessOptions {
        fill_holes: cli.fill_holes,
        fill_holes_method,
        pretty_result: cli.pretty_result,
        max_hole_area: cli.max_hole_area,
    };

    println!("Processing {} image(s)...", inputs.len());

    let failures = AtomicUsize::new(0);
    inputs.par_iter().for_each(|input| {
        match process_one(
            input,
            &cli.output_dir,
            &segmentation_options,
            &process_options,
        ) {
            Ok((output, coverage)) => println!(
                "  {} ({:.1}% vegetation) -> {}",
                input.display(),
                coverage * 100.0,
                output.display()
            ),
            Err(e) => {
                eprintln!("  {}: {}", input.display(), e);
                failures.fetch_add(1, Ordering::SeqCst);
            }
        }
    });

    let failed = failures.load(Ordering::SeqCst);
    if failed > 0 {
        return Err(format!("{} of {} image(s) failed", failed, inputs.len()));
    }
    println!("Done.");
    Ok(())
}

/// Run the full decode -> classify -> composite -> encode chain for one image.
fn process_one(
    input: &Path,
    output_dir: &Path,
    segmentation_options: &SegmentationOptions,
    process_options: &ProcessOptions,
) -> Result<(PathBuf, f64), String> {
    let image = decoders::decode_image(input).map_err(|e| e.to_string())?;
    let mask = segmentation::detect_vegetation(&image, segmentation_options);
    let result = pipeline::process_image(&image, &mask, process_options).map_err(|e| e.to_string())?;

    let output_path = determine_output_path(input, output_dir)?;
    exporters::export_png(&result, &output_path).map_err(|e| e.to_string())?;
    Ok((output_path, mask.coverage()))
}
