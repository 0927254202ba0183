use clap::Parser;
use processflow::api::{ApiBlock, ApiLink, ApiPath, ApiStrokeLine, WorkflowMeta};
use processflow::data::WorkflowSnapshot;
use processflow::model::BlockType;
use rand::{Rng, rngs::ThreadRng};
use std::fs;

/// A CLI tool to generate sample workflow snapshots for ProcessFlow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Id of the generated workflow
    #[arg(long, default_value_t = 1)]
    workflow: i64,

    /// How many levels of branching to generate below the root path
    #[arg(long, default_value_t = 2)]
    depth: usize,

    /// The maximum number of options under each branching block
    #[arg(long, default_value_t = 3)]
    max_options: usize,

    /// The maximum number of plain steps per path
    #[arg(long, default_value_t = 4)]
    max_steps: usize,

    /// How many stroke lines to draw between existing blocks
    #[arg(long, default_value_t = 2)]
    stroke_lines: usize,
}

/// Hands out ascending ids shared by paths and blocks.
struct Ids(i64);

impl Ids {
    fn next(&mut self) -> i64 {
        self.0 += 1;
        self.0
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.max_options < 2 {
        eprintln!("Error: --max-options ({}) must be at least 2", cli.max_options);
        std::process::exit(1);
    }

    println!(
        "Generating workflow {} (depth {}, up to {} options, up to {} steps per path)...",
        cli.workflow, cli.depth, cli.max_options, cli.max_steps
    );

    let mut ids = Ids(0);
    let mut paths = Vec::new();

    // A shared tail that MERGE blocks point at.
    let shared = generate_path(&mut rng, &mut ids, &cli, "Shared wrap-up", None, BlockType::End);
    let shared_id = shared.id;
    paths.push(shared);

    let root_id = ids.next();
    generate_tree(&mut rng, &mut ids, &cli, &mut paths, root_id, "Main", None, cli.depth, shared_id);
    // Root first, the way the paths endpoint returns it.
    paths.sort_by_key(|p| if p.parent_blocks.is_empty() && p.id != shared_id { 0 } else { 1 });
    attach_merge_parents(&mut paths, shared_id);
    println!("-> Generated {} path(s).", paths.len());

    let stroke_lines = generate_stroke_lines(&mut rng, &paths, cli.stroke_lines, cli.workflow);
    println!("-> Generated {} stroke line(s).", stroke_lines.len());

    let snapshot = WorkflowSnapshot {
        workflow: WorkflowMeta {
            id: cli.workflow,
            name: format!("Generated workflow {}", cli.workflow),
            icon: None,
            description: Some("Randomly generated sample process".to_string()),
            folder: None,
            workspace_id: 1,
            is_public: false,
            public_access_id: None,
            author: None,
        },
        paths,
        stroke_lines,
    };

    let json_output = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow snapshot to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates `path_id` and, below its branching block, one subtree per option.
#[allow(clippy::too_many_arguments)]
fn generate_tree(
    rng: &mut ThreadRng,
    ids: &mut Ids,
    cli: &Cli,
    paths: &mut Vec<ApiPath>,
    path_id: i64,
    name: &str,
    parent: Option<ApiLink>,
    depth: usize,
    shared_id: i64,
) {
    let last = if parent.is_none() {
        BlockType::Last
    } else {
        BlockType::End
    };
    let mut path = generate_path_with_id(rng, ids, cli, path_id, name, parent, last);

    if depth == 0 {
        // Leaves either end on their own or merge into the shared tail.
        if rng.random_bool(0.5) {
            let merge_id = ids.next();
            let merge = ApiBlock {
                child_paths: vec![ApiLink {
                    path_id: shared_id,
                    block_id: merge_id,
                }],
                ..block(merge_id, BlockType::Merge, path.id, 0, None)
            };
            path.blocks.insert(path.blocks.len() - 1, merge);
            renumber(&mut path.blocks);
        }
        paths.push(path);
        return;
    }

    let option_count = rng.random_range(2..=cli.max_options);
    let branch_id = ids.next();
    let option_ids: Vec<i64> = (0..option_count).map(|_| ids.next()).collect();
    let branch = ApiBlock {
        child_paths: option_ids
            .iter()
            .map(|&id| ApiLink {
                path_id: id,
                block_id: branch_id,
            })
            .collect(),
        ..block(branch_id, BlockType::Path, path.id, 0, Some(format!("Decision {}", branch_id)))
    };
    path.blocks.insert(path.blocks.len() - 1, branch);
    renumber(&mut path.blocks);
    paths.push(path);

    for (n, option_id) in option_ids.into_iter().enumerate() {
        let link = ApiLink {
            path_id: option_id,
            block_id: branch_id,
        };
        generate_tree(
            rng,
            ids,
            cli,
            paths,
            option_id,
            &format!("Option {}", n + 1),
            Some(link),
            depth - 1,
            shared_id,
        );
    }
}

fn generate_path(
    rng: &mut ThreadRng,
    ids: &mut Ids,
    cli: &Cli,
    name: &str,
    parent: Option<ApiLink>,
    last: BlockType,
) -> ApiPath {
    let id = ids.next();
    generate_path_with_id(rng, ids, cli, id, name, parent, last)
}

/// `BEGIN`, a run of steps (some of them delays), then `last`.
fn generate_path_with_id(
    rng: &mut ThreadRng,
    ids: &mut Ids,
    cli: &Cli,
    id: i64,
    name: &str,
    parent: Option<ApiLink>,
    last: BlockType,
) -> ApiPath {
    let mut blocks = vec![block(ids.next(), BlockType::Begin, id, 0, None)];
    for _ in 0..rng.random_range(1..=cli.max_steps.max(1)) {
        let block_id = ids.next();
        let next = if rng.random_bool(0.2) {
            generate_delay(rng, block_id, id)
        } else {
            ApiBlock {
                description: Some(format!("Details for step {}", block_id)),
                image: rng
                    .random_bool(0.3)
                    .then(|| format!("https://cdn.example.com/steps/{}.png", block_id)),
                ..block(block_id, BlockType::Step, id, 0, Some(format!("Step {}", block_id)))
            }
        };
        blocks.push(next);
    }
    blocks.push(block(ids.next(), last, id, 0, None));
    renumber(&mut blocks);

    ApiPath {
        id,
        name: name.to_string(),
        workflow_id: None,
        blocks,
        parent_blocks: parent.map(|p| vec![p]).unwrap_or_default(),
    }
}

fn generate_delay(rng: &mut ThreadRng, id: i64, path_id: i64) -> ApiBlock {
    use processflow::model::DelayType;
    let base = block(id, BlockType::Delay, path_id, 0, None);
    if rng.random_bool(0.5) {
        ApiBlock {
            delay_type: Some(DelayType::FixedDuration),
            delay_seconds: Some(rng.random_range(60..=86_400)),
            ..base
        }
    } else {
        ApiBlock {
            delay_type: Some(DelayType::EventBased),
            delay_event: Some("Customer replied".to_string()),
            ..base
        }
    }
}

fn block(id: i64, block_type: BlockType, path_id: i64, position: i32, title: Option<String>) -> ApiBlock {
    ApiBlock {
        id,
        block_type,
        path_id,
        position,
        title,
        description: None,
        image: None,
        icon: None,
        delay_type: None,
        delay_seconds: None,
        delay_event: None,
        child_paths: Vec::new(),
        original_id: None,
    }
}

fn renumber(blocks: &mut [ApiBlock]) {
    for (position, block) in blocks.iter_mut().enumerate() {
        block.position = position as i32;
    }
}

/// Records every MERGE block as a parent of the shared tail.
fn attach_merge_parents(paths: &mut [ApiPath], shared_id: i64) {
    let merges: Vec<ApiLink> = paths
        .iter()
        .flat_map(|p| p.blocks.iter())
        .filter(|b| b.block_type == BlockType::Merge)
        .map(|b| ApiLink {
            path_id: shared_id,
            block_id: b.id,
        })
        .collect();
    if let Some(shared) = paths.iter_mut().find(|p| p.id == shared_id) {
        shared.parent_blocks = merges;
    }
}

/// Draws lines from a STEP block to a STEP block of a different path.
fn generate_stroke_lines(
    rng: &mut ThreadRng,
    paths: &[ApiPath],
    count: usize,
    workflow_id: i64,
) -> Vec<ApiStrokeLine> {
    let steps: Vec<(i64, i64)> = paths
        .iter()
        .flat_map(|p| p.blocks.iter())
        .filter(|b| b.block_type == BlockType::Step)
        .map(|b| (b.path_id, b.id))
        .collect();
    if steps.len() < 2 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for n in 0..count * 4 {
        if lines.len() == count {
            break;
        }
        let (source_path, source) = steps[rng.random_range(0..steps.len())];
        let (target_path, target) = steps[rng.random_range(0..steps.len())];
        if source_path == target_path {
            continue;
        }
        lines.push(ApiStrokeLine {
            source_block_id: source,
            target_block_id: target,
            workflow_id,
            label: Some(format!("Jump {}", n + 1)),
        });
    }
    lines
}
