use clap::{Parser, ValueEnum};
use processflow::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// CLI-side mirror of `MergeStrategy` for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MergeCli {
    SinglePass,
    FixedPoint,
}

/// Resolve a ProcessFlow workflow snapshot and walk through it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow snapshot JSON file
    snapshot_path: String,

    /// Workflow to load from the snapshot (defaults to the snapshot's own workflow)
    #[arg(short, long)]
    workflow: Option<u64>,

    /// JSON file with build options
    #[arg(long)]
    options: Option<String>,

    /// How MERGE blocks are inlined (overrides the options file)
    #[arg(short, long, value_enum)]
    merge_strategy: Option<MergeCli>,

    /// Write the resolved graph as a binary artifact to this path
    #[arg(long)]
    save: Option<String>,

    /// Print the resolved graph as JSON instead of an outline
    #[arg(long)]
    json: bool,

    /// Walk through the workflow interactively after resolving it
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    /// Log filter, e.g. `processflow=debug` (falls back to RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let player = resolve(&cli);
    if cli.human {
        run_interactive(player);
    }
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("processflow=info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_options(cli: &Cli) -> BuildOptions {
    let mut options: BuildOptions = match &cli.options {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read options file '{}': {}", path, e))
            });
            serde_json::from_str(&json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse options file '{}': {}", path, e))
            })
        }
        None => BuildOptions::default(),
    };
    if let Some(strategy) = cli.merge_strategy {
        options.merge_strategy = match strategy {
            MergeCli::SinglePass => MergeStrategy::SinglePass,
            MergeCli::FixedPoint => MergeStrategy::FixedPoint,
        };
    }
    options
}

fn resolve(cli: &Cli) -> Player {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let snapshot = WorkflowSnapshot::from_file(&cli.snapshot_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load snapshot '{}': {}",
            cli.snapshot_path, e
        ))
    });
    let workflow_id = match cli.workflow {
        Some(id) => id,
        None => snapshot
            .workflow_id()
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid snapshot: {}", e))),
    };
    let definition = load_definition(&snapshot, workflow_id)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load workflow: {}", e)));
    let options = load_options(cli);

    // --- 2. Resolution ---
    let resolve_start = Instant::now();
    let input_paths = definition.paths.len();
    let input_lines = definition.stroke_lines.len();
    let output = GraphBuilder::builder(definition)
        .with_options(options)
        .build()
        .resolve();
    let resolve_duration = resolve_start.elapsed();

    // --- 3. Output ---
    if cli.json {
        let json = serde_json::to_string_pretty(&output.graph)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));
        println!("{}", json);
    } else {
        println!("{}", GraphFormatter::format_graph(&output.graph));
    }

    if let Some(path) = &cli.save {
        output
            .clone()
            .into_artifact()
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        println!("  -> Wrote resolved graph to '{}'", path);
    }

    let diagnostics = &output.diagnostics;
    println!("\n--- Resolution Summary ---");
    println!("Workflow:             {}", workflow_id);
    println!("Input paths:          {}", input_paths);
    println!("Stroke lines:         {}", input_lines);
    println!("Resolved paths:       {}", output.graph.len());
    println!("Resolved blocks:      {}", output.graph.block_count());
    println!("Skipped stroke lines: {}", diagnostics.skipped_stroke_lines.len());
    println!("Dangling merges:      {}", diagnostics.dangling_merges.len());
    println!("Unresolved merges:    {}", diagnostics.unresolved_merges.len());
    println!("Resolution time:      {:?}", resolve_duration);
    println!("Total time:           {:?}", total_start.elapsed());

    Player::from_output(output)
        .unwrap_or_else(|e| exit_with_error(&format!("Cannot play workflow: {}", e)))
}

/// Walks the resolved workflow step by step with prompts.
fn run_interactive(mut player: Player) {
    println!("\n--- ProcessFlow Player ---");
    println!("Commands: [n]ext, [p]rev, [s]elect <number>, [e]xpand, [o]utline, [r]estart, [q]uit");

    loop {
        print_position(&player);
        let command = prompt_for_input("Command", Some("n"));
        let mut parts = command.split_whitespace();

        match parts.next().unwrap_or("n") {
            "n" | "next" => match player.next_step() {
                StepMove::Blocked { .. } => println!("Pick an option first (s <number>)."),
                StepMove::AtBoundary => println!("Process already completed."),
                StepMove::Moved(_) => {}
            },
            "p" | "prev" => {
                if player.previous_step() == StepMove::AtBoundary {
                    println!("Already at the start.");
                }
            }
            "s" | "select" => {
                let Some(block_id) = player.current_step().map(|b| b.id) else {
                    println!("No step selected.");
                    continue;
                };
                let options = player.options_for(block_id);
                let choice = parts
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| options.get(i));
                match choice {
                    Some(option) => {
                        if let SelectionOutcome::Skipped(reason) =
                            player.select_option(option.path_id, block_id)
                        {
                            println!("Selection ignored: {:?}", reason);
                        }
                    }
                    None => println!("Invalid option number."),
                }
            }
            "e" | "expand" => {
                if let Some(block_id) = player.current_step().map(|b| b.id) {
                    if player.toggle_card(block_id) == CardEffect::None
                        && player.card_state(block_id) == CardState::Collapsed
                    {
                        println!("Nothing to expand.");
                    }
                }
            }
            "o" | "outline" => {
                println!("{}", GraphFormatter::format_sequence(player.paths_to_display()))
            }
            "r" | "restart" => player.restart(),
            "q" | "quit" => break,
            other => println!("Unknown command '{}'.", other),
        }
    }
}

fn print_position(player: &Player) {
    let steps = player.steps();
    match player.cursor() {
        StepCursor::NotStarted => println!("\nNot started ({} steps).", steps.len()),
        StepCursor::Completed => println!("\nProcess complete."),
        StepCursor::At(i) => {
            let block = steps[i];
            println!(
                "\nStep {}/{}: [{}] {}",
                i + 1,
                steps.len(),
                block.block_type,
                block.display_title().unwrap_or("(untitled)")
            );
            if let Some(description) = &block.description {
                println!("  {}", description);
            }
            if player.card_state(block.id) == CardState::Expanded {
                if let Some(image) = &block.image {
                    println!("  image: {}", image);
                }
            }
            for (n, option) in player.options_for(block.id).iter().enumerate() {
                let marker = if option.selected { "x" } else { " " };
                println!("  [{}] {}. {}", marker, n + 1, option.name);
            }
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if io::stdout().flush().is_err() {
        exit_with_error("Failed to write to the terminal");
    }
    match io::stdin().read_line(&mut line) {
        Ok(0) => std::process::exit(0), // stdin closed
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read from the terminal: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
