use std::error::Error;

use avl::{AvlTree, Key};
use log::info;
use rand::Rng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const DEFAULT_CHURN: usize = 1000;

fn print_pre_order(tree: &AvlTree) {
    let keys: Vec<String> = tree.pre_order().map(|k| k.to_string()).collect();
    println!("{}", keys.join(" "));
}

fn walkthrough() {
    let mut tree = AvlTree::new();
    for key in [10, 20, 30, 40, 50, 25] {
        tree.insert(key);
    }

    println!("\nPre-order after inserts:");
    print_pre_order(&tree);

    println!("\nStructure:");
    print!("{tree}");

    println!("\nSearch 30: {}", tree.contains(30));
    println!("Search 60: {}", tree.contains(60));

    tree.remove(40);

    println!("\nPre-order after removing 40:");
    print_pre_order(&tree);

    println!("\nStructure after removal:");
    print!("{tree}");

    println!("\nRotations performed: {}", tree.rotation_count());
}

/// Random inserts and removes over a key space twice the size of the run.
fn churn(size: usize) -> Result<(), Box<dyn Error>> {
    let mut rng = rand::thread_rng();
    let span = Key::try_from(size.saturating_mul(2)).unwrap_or(Key::MAX).max(1);
    let mut tree = AvlTree::new();

    for _ in 0..size {
        let key = rng.gen_range(0..span);
        if rng.gen_bool(0.6) {
            tree.insert(key);
        } else {
            tree.remove(key);
        }
    }
    tree.validate()?;

    info!(
        "churn of {size} ops: {} keys, height {}, {} rotations",
        tree.len(),
        tree.height(),
        tree.rotation_count()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut level = LevelFilter::Info;
    let mut size = DEFAULT_CHURN;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" => level = LevelFilter::Debug,
            "-vv" => level = LevelFilter::Trace,
            n => size = n.parse()?,
        }
    }

    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    walkthrough();
    churn(size)
}
