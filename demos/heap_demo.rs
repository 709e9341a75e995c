use clap::Parser;
use dirheap::collections::{Direction, IntHeap};
use env_logger::Env;
use log::*;
use std::error::Error;

#[derive(Parser, Debug)]
struct Cli {
    /// Build a max-heap rather than a min-heap
    #[arg(long)]
    max: bool,

    /// Also print the heap as a tree once filled
    #[arg(short, long)]
    tree: bool,

    /// Values to push, in order
    #[arg(default_values_t = [5, 2, 8, 1, 9, 3, 7, 4, 6], allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn fill(h: &mut IntHeap, values: &[i64]) {
    println!("Adding numbers: {:?}", values);
    for &x in values {
        h.push(x);
        println!("Pushed {}, heap size: {}, peek: {}", x, h.size(), h.peek_or_default());
    }
}

fn drain(h: &mut IntHeap) {
    println!("\nPopping all elements ({} order):", h.direction());
    while let Some(x) = h.pop() {
        println!("Popped: {}, remaining size: {}", x, h.len());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    debug!("Args {:?}", cli);

    let direction = if cli.max { Direction::Max } else { Direction::Min };
    let mut h = IntHeap::new(direction);
    info!("-> filling {} with {} values", direction, cli.values.len());
    fill(&mut h, &cli.values);

    println!("\n=== Heap Operations ===");
    println!("Heap size: {}", h.size());
    println!("Is empty: {}", h.is_empty());
    match h.peek() {
        Some(x) => println!("Peek: {}", x),
        None => println!("Peek: nothing"),
    }
    println!("{}", h.array());
    if cli.tree { print!("{}", h.tree()) }

    drain(&mut h);
    println!("Final heap size: {}", h.size());
    println!("Is empty: {}", h.is_empty());

    info!("-> extracting from the drained heap");
    match h.extract_top() {
        Ok(x) => println!("Extracted: {}", x),
        Err(e) => println!("Extract failed: {}", e),
    }
    Ok(())
}
