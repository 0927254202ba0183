use crate::model::{Block, Path, PathGraph};
use itertools::Itertools;

/// Renders paths as an indented, human-readable outline.
pub struct GraphFormatter;

impl GraphFormatter {
    /// Every path of a graph, root first marked with `*`.
    pub fn format_graph(graph: &PathGraph) -> String {
        graph
            .paths
            .iter()
            .map(|path| Self::format_path(path, graph))
            .join("\n")
    }

    /// A displayed sequence, one path after the other, as the viewer sees it.
    pub fn format_sequence(paths: &[Path]) -> String {
        let graph = PathGraph::new(paths.to_vec());
        paths
            .iter()
            .map(|path| Self::format_path(path, &graph))
            .join("\n")
    }

    fn format_path(path: &Path, graph: &PathGraph) -> String {
        let marker = if path.is_root() { "*" } else { " " };
        let parents = path
            .parent_blocks
            .iter()
            .map(|p| format!("#{}", p.block_id))
            .join(", ");
        let mut out = if parents.is_empty() {
            format!("{} path {} \"{}\"\n", marker, path.id, path.name)
        } else {
            format!(
                "{} path {} \"{}\" <- {}\n",
                marker, path.id, path.name, parents
            )
        };
        for block in &path.blocks {
            out.push_str(&Self::format_block(block, graph));
            out.push('\n');
        }
        out
    }

    fn format_block(block: &Block, graph: &PathGraph) -> String {
        let mut line = format!("    [{}] #{}", block.block_type, block.id);
        if let Some(title) = block.display_title() {
            line.push(' ');
            line.push_str(title);
        }
        if let Some(delay) = &block.delay {
            if let Some(seconds) = delay.seconds {
                line.push_str(&format!(" (wait {}s)", seconds));
            } else if let Some(event) = &delay.event {
                line.push_str(&format!(" (wait for {})", event));
            }
        }
        if block.has_children() {
            let options = block
                .child_paths
                .iter()
                .map(|c| match graph.path(c.path_id) {
                    Some(p) => format!("{} \"{}\"", c.path_id, p.name),
                    None => format!("{} (missing)", c.path_id),
                })
                .join(" | ");
            line.push_str(&format!(" -> {}", options));
        }
        line
    }
}
