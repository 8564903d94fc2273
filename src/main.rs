use anchormap::{
    AnchorMap, AnchorPipeline, AnchorPipelineBuilder, InputFormat, PipelineError, RenderedDocument,
    read_anchor_map,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Assigns reference ids to rendered lesson documents and resolves
/// `[ref:ID]` citations against their anchor maps.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON configuration file (labels, math detection, slug style)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug mode (dumps each tree after the anchor pass)
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the anchor map of one or more documents (.html/.xhtml or hast .json)
    Extract {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write `<stem>.anchors.json` files here instead of printing
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Also write the tree with ids assigned, as `<stem>.anchored.<ext>`
        #[arg(long, requires = "out_dir", default_value_t = false)]
        tree: bool,
    },
    /// Rewrite `[ref:ID]` tokens into markdown links
    Resolve {
        /// Anchor list, or a metadata object carrying `astro.frontmatter.anchorMap`
        #[arg(long)]
        anchors: PathBuf,

        /// Text to rewrite; read from stdin when omitted
        text_file: Option<PathBuf>,
    },
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("anchormap=info")).init();

    let args = Args::parse();

    let mut builder = AnchorPipelineBuilder::new().with_debug(args.debug);
    if let Some(config_path) = &args.config {
        info!("Loading configuration from {}", config_path.display());
        builder = builder.with_config_file(config_path)?;
    }
    let pipeline = builder.build()?;

    match args.command {
        Command::Extract {
            inputs,
            out_dir,
            tree,
        } => extract(&pipeline, &inputs, out_dir.as_deref(), tree),
        Command::Resolve { anchors, text_file } => {
            resolve(&pipeline, &anchors, text_file.as_deref())
        }
    }
}

fn extract(
    pipeline: &AnchorPipeline,
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
    write_tree: bool,
) -> Result<(), PipelineError> {
    if let Some(dir) = out_dir {
        check_output_names(inputs)?;
        fs::create_dir_all(dir)?;
    }

    let results = pipeline.process_batch(inputs);
    let mut first_error = None;
    let mut printed = Vec::new();

    for (input, result) in inputs.iter().zip(results) {
        let document = match result {
            Ok(document) => document,
            Err(e) => {
                error!("{}: {}", input.display(), e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
                continue;
            }
        };
        match out_dir {
            Some(dir) => write_outputs(dir, input, &document, write_tree)?,
            None => {
                let anchors = serde_json::to_value(&document.anchors)?;
                printed.push(json!({
                    "input": input.display().to_string(),
                    "anchors": anchors,
                }));
            }
        }
    }

    if out_dir.is_none() {
        // A single input prints its bare anchor list; several print
        // `{input, anchors}` entries in input order.
        let output = if inputs.len() == 1 {
            printed.pop().map(|mut entry| entry["anchors"].take())
        } else {
            Some(Value::Array(printed))
        };
        if let Some(output) = output {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &output)?;
            writeln!(stdout)?;
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Output files are named after the input's file stem, so two inputs sharing
/// a stem would overwrite each other's results.
fn check_output_names(inputs: &[PathBuf]) -> Result<(), PipelineError> {
    let mut seen: HashMap<&OsStr, &Path> = HashMap::new();
    for input in inputs {
        let Some(stem) = input.file_stem() else {
            continue;
        };
        if let Some(previous) = seen.insert(stem, input) {
            return Err(PipelineError::Config(format!(
                "'{}' and '{}' would both write {}.anchors.json; process them into separate output directories",
                previous.display(),
                input.display(),
                stem.to_string_lossy()
            )));
        }
    }
    Ok(())
}

fn write_outputs(
    dir: &Path,
    input: &Path,
    document: &RenderedDocument,
    write_tree: bool,
) -> Result<(), PipelineError> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| PipelineError::Config(format!("No file name in '{}'", input.display())))?;

    let anchors_path = dir.join(format!("{}.anchors.json", stem));
    fs::write(&anchors_path, document.anchors_to_json()?)?;
    info!("Wrote {}", anchors_path.display());

    if write_tree {
        let format = InputFormat::from_path(input)?;
        let tree_path = dir.join(format!("{}.anchored.{}", stem, format.extension()));
        fs::write(&tree_path, document.tree_to_string(format)?)?;
        info!("Wrote {}", tree_path.display());
    }
    Ok(())
}

fn resolve(
    pipeline: &AnchorPipeline,
    anchors_path: &Path,
    text_file: Option<&Path>,
) -> Result<(), PipelineError> {
    let anchors = load_anchors(anchors_path)?;
    let text = match text_file {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };
    let mut stdout = io::stdout().lock();
    stdout.write_all(pipeline.rewrite_refs(&text, &anchors).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn load_anchors(path: &Path) -> Result<AnchorMap, PipelineError> {
    let value: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    read_anchor_map(&value).ok_or_else(|| {
        PipelineError::Config(format!(
            "'{}' holds neither an anchor list nor astro.frontmatter.anchorMap",
            path.display()
        ))
    })
}
