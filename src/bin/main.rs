//! digitsvm Command Line Interface
//!
//! Classify handwritten digit images with one-vs-rest RBF SVM models
//! loaded from flat numeric text files.

use clap::{Args, Parser, Subcommand};
use digitsvm::api::{DigitClassifier, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use digitsvm::core::{ClassifierError, Result, NUM_CLASSES};
use digitsvm::preprocess;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "digitsvm")]
#[command(about = "A Rust handwritten digit classifier using RBF SVMs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "digitsvm contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a digit image
    Predict(PredictArgs),
    /// Display model information
    Info(InfoArgs),
    /// Dump the preprocessed feature vector for an image
    Features(FeaturesArgs),
}

#[derive(Args)]
struct PredictArgs {
    /// Image file to classify (PNG, JPEG, BMP, or GIF)
    #[arg(long)]
    image: PathBuf,

    /// Directory holding the per-class model files
    #[arg(short, long)]
    model_dir: PathBuf,

    /// Classification width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Classification height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Emit the prediction as JSON (digit plus all ten scores)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Directory holding the per-class model files
    #[arg(short, long)]
    model_dir: PathBuf,

    /// Classification width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Classification height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
}

#[derive(Args)]
struct FeaturesArgs {
    /// Image file to preprocess
    #[arg(long)]
    image: PathBuf,

    /// Classification width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Classification height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Predict(args) => predict_command(args),
        Commands::Info(args) => info_command(args),
        Commands::Features(args) => features_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn predict_command(args: PredictArgs) -> Result<()> {
    info!("Loading models from {:?}", args.model_dir);
    let classifier = DigitClassifier::from_model_dir_with_resolution(
        &args.model_dir,
        args.width,
        args.height,
    )?;
    info!(
        "Loaded {} class models, {} features each",
        NUM_CLASSES,
        classifier.model().dimension()
    );

    let prediction = classifier.classify_path(&args.image)?;
    info!("Margin over runner-up: {:.6}", prediction.margin());
    for (digit, score) in prediction.scores.iter().enumerate() {
        info!("  class {digit}: {score:.6}");
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&prediction)
            .map_err(|e| ClassifierError::SerializationError(e.to_string()))?;
        println!("{rendered}");
    } else {
        println!("{}", prediction.digit);
    }

    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    let classifier = DigitClassifier::from_model_dir_with_resolution(
        &args.model_dir,
        args.width,
        args.height,
    )?;
    let model = classifier.model();

    println!("=== Digit Model Summary ===");
    println!("Resolution: {}x{}", classifier.width(), classifier.height());
    println!("Feature dimensionality: {}", model.dimension());
    for digit in 0..NUM_CLASSES {
        let class = model.class_model(digit as u8);
        println!(
            "class {}: {} support vectors, bias {:.6}, gamma {}",
            digit,
            class.n_support_vectors(),
            class.bias(),
            class.kernel().gamma()
        );
    }

    Ok(())
}

fn features_command(args: FeaturesArgs) -> Result<()> {
    let decoded = preprocess::decode_file(&args.image)?;
    let gray = preprocess::resize_to_intensity(&decoded, args.width, args.height)?;
    let threshold = preprocess::otsu_threshold(&gray);
    info!("Otsu threshold: {threshold}");

    let binary = preprocess::binarize(&gray, threshold);
    let features = preprocess::flatten(&binary);

    let rendered: Vec<String> = features.iter().map(|v| format!("{}", *v as u8)).collect();
    println!("{}", rendered.join(" "));

    Ok(())
}
