//! Binary that reads a grid with blocked cells and a source from standard
//! input (or a file), enumerates the important separators up to the given
//! budget and prints the one enclosing the largest region around the source.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::fmt::SubscriberBuilder;

use enclose::cuts::{important_separators, source_component};
use enclose::grid::GridInstance;
use enclose::visualization;

#[derive(Parser)]
#[command(name = "enclose")]
#[command(about = "Enclose a grid source cell with an important vertex separator")]
struct Cmd {
    /// Maximum separator size
    #[arg(short, long, default_value_t = 3)]
    k: usize,

    /// Read the grid from a file instead of standard input
    #[arg(long)]
    input: Option<PathBuf>,

    /// Open an interactive view of the result
    #[arg(long)]
    visualize: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let instance = match &cmd.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            GridInstance::read(BufReader::new(file))?
        }
        None => GridInstance::read(io::stdin().lock())?,
    };
    println!("k = {}", cmd.k);

    let separators =
        important_separators(instance.graph(), instance.source(), instance.sink(), cmd.k)?;
    if separators.is_empty() {
        println!("No important separators of size <= {}", cmd.k);
        return Ok(());
    }

    let (best, component) = separators
        .iter()
        .map(|separator| {
            let component = source_component(instance.graph(), instance.source(), separator);
            (separator, component)
        })
        .max_by_key(|(_, component)| component.len())
        .expect("the family was checked to be non-empty");

    println!("important separators: {}", separators.len());
    println!("optimal size: {}", component.len());
    println!(
        "Best separator S = {{{}}}",
        best.iter().map(|cell| instance.cell_label(cell)).join(", ")
    );
    print!("{}", instance.render(best));

    if cmd.visualize {
        visualization::draw_grid(&instance, best, &component)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    }
    Ok(())
}
