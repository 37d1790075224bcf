use clap::Parser;

use arrocco::movegen::{perft, perft_divide};
use arrocco::{Board, START_FEN};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,
    #[arg(short, long, default_value_t = 4)]
    depth: u32,
    /// Print per-root-move node counts
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() {
    arrocco::init();
    let args = Args::parse();

    let mut board = match Board::from_fen(&args.fen) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("perft '{}' depth {}", args.fen, args.depth);

    if args.divide {
        let mut total = 0u64;
        for (m, nodes) in perft_divide(&mut board, args.depth) {
            println!("{}: {}", m.to_uci(), nodes);
            total += nodes;
        }
        println!("total: {total}");
        return;
    }

    let start = std::time::Instant::now();
    let nodes = perft(&mut board, args.depth);
    let elapsed = start.elapsed();
    println!(
        "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        nodes,
        elapsed.as_millis(),
        nodes as f64 / elapsed.as_micros().max(1) as f64
    );
}
