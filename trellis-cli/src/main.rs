//! Trellis CLI
//!
//! Builds a component from JSON configuration files and prints the result,
//! for testing and debugging configurations without a host surface.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::{Value, json};

use trellis_component::{Component, RenderedNode, build_component, load_config};

#[derive(Parser)]
#[command(name = "trellis", about = "Build a component tree from JSON configuration")]
struct Args {
    /// Path to the default configuration file
    default_config: PathBuf,

    /// Path to a user override configuration file
    #[arg(long)]
    user: Option<PathBuf>,

    /// Dump the merged tree as JSON instead of the tree view
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_config = load_config(&args.default_config)?;
    let user_config = match &args.user {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    let component = build_component(default_config, user_config, None, Vec::new());

    if args.json {
        let nodes: Vec<Value> = component
            .final_config
            .iter()
            .map(|node| dump_node(&component, node))
            .collect();
        println!("{}", serde_json::to_string_pretty(&Value::Array(nodes))?);
    } else {
        println!("=== Component Tree ===");
        for node in &component.final_config {
            print_node(&component, node, 0);
        }
        println!();
        println!("{} elements", component.tree.len());
    }

    Ok(())
}

/// Print one node and its subtree, indented by depth.
fn print_node(component: &Component, node: &RenderedNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let tag = component
        .tree
        .get(node.element)
        .map_or("?", |element| element.tag_name.as_str());

    println!(
        "{indent}{} {}",
        format!("<{tag}>").green(),
        node.name.cyan()
    );

    if let Some(text) = component.tree.text(node.element)
        && !text.is_empty()
    {
        println!("{indent}  {} {text}", "text:".dimmed());
    }
    let style = node.style_text(&component.tree);
    if !style.is_empty() {
        println!("{indent}  {} {style}", "style:".dimmed());
    }
    if let Some(event) = &node.event_listener.event {
        println!("{indent}  {} {event}", "listens:".dimmed());
    }

    for child in &node.children {
        print_node(component, child, depth + 1);
    }
}

/// Render one node and its subtree as a JSON value.
fn dump_node(component: &Component, node: &RenderedNode) -> Value {
    let children: Vec<Value> = node
        .children
        .iter()
        .map(|child| dump_node(component, child))
        .collect();

    json!({
        "name": node.name,
        "tag": component.tree.get(node.element).map(|element| element.tag_name.clone()),
        "content": component.tree.text(node.element),
        "style": node.style_text(&component.tree),
        "eventlistener": { "event": node.event_listener.event },
        "child": children,
    })
}
