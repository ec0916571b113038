use elastic_length::Y;
use rayon::prelude::*;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  growth-report [max-depth]    Segment counts of nested layouts, raw vs simplified");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "growth-report" => {
            let max_depth = match args.get(2).map(|d| d.parse::<usize>()) {
                None => 8,
                Some(Ok(d)) => d,
                Some(Err(e)) => {
                    eprintln!("Invalid depth {:?}: {}", args[2], e);
                    std::process::exit(1);
                }
            };
            growth_report(max_depth)
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

/// One row of the report.
struct Row {
    depth: usize,
    raw: usize,
    simplified: usize,
    at_zero: f64,
    at_reference: f64,
}

/// A block of `depth` stacked rows, each row at least as tall as its tallest
/// cell and separated by an elastic gap. The raw form never simplifies;
/// the other one simplifies after every row, the way layout code should.
fn stacked_block(depth: usize, simplify: bool) -> Y {
    let mut height = Y::default();
    for row in 0..depth {
        let cell = Y::constant(10.0 + row as f64).max(&Y::elastic(4.0 + (row % 3) as f64));
        let gap = Y::constant(2.0) + Y::elastic(1.5);
        height = height + cell + gap;
        if simplify {
            height = height.simplify();
        }
    }
    height
}

fn growth_report(max_depth: usize) {
    // Each depth is independent; Y is plain data, so build them in parallel.
    let rows: Vec<Row> = (1..=max_depth)
        .into_par_iter()
        .map(|depth| {
            let raw = stacked_block(depth, false);
            let simplified = stacked_block(depth, true);
            Row {
                depth,
                raw: raw.segments().len(),
                simplified: simplified.segments().len(),
                at_zero: simplified.resolve(0.0).unwrap_or(f64::NAN),
                at_reference: simplified.resolve_reference(),
            }
        })
        .collect();

    println!("{:>5} {:>10} {:>10} {:>10} {:>10}", "depth", "raw", "simplified", "s=0", "s=1");
    for row in &rows {
        println!(
            "{:>5} {:>10} {:>10} {:>10.2} {:>10.2}",
            row.depth, row.raw, row.simplified, row.at_zero, row.at_reference
        );
    }
}
