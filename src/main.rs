use std::io::{self, BufRead};

use clap::{Parser, Subcommand};
use depthbook::{
    book::{btree_book::BTreeBook, Book},
    update::{BookTickerUpdate, DepthUpdate, Update},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEMO_DEPTH: &str = r#"{
    "lastUpdateId": 160,
    "bids": [
        ["25.00", "5"],
        ["24.50", "2"]
    ],
    "asks": [
        ["25.50", "3"],
        ["26.00", "7"]
    ]
}"#;

const DEMO_TICKER: &str = r#"{
    "u":400900217,
    "s":"BNBUSDT",
    "b":"24.60",
    "B":"4",
    "a":"25.40",
    "A":"6"
}"#;

#[derive(Debug, Parser)]
#[command(version, about = "Local order book from depth and book ticker updates")]
struct Cli {
    /// Symbol the book tracks; ticker updates for other symbols are rejected
    #[arg(short, long, env = "DEPTHBOOK_SYMBOL", default_value = "BNBUSDT")]
    symbol: String,

    /// Print the book levels as JSON instead of the depth table
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply a sample depth snapshot and ticker update, then print the book
    Demo,
    /// Read newline-delimited JSON updates from stdin until EOF or `exit`
    Stream,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut book = BTreeBook::new(cli.symbol.as_str());
    info!(symbol = %cli.symbol, "tracking order book");

    match cli.command.unwrap_or(Command::Stream) {
        Command::Demo => demo(&mut book, cli.json),
        Command::Stream => stream(&mut book, cli.json),
    }
}

fn demo(book: &mut BTreeBook, json: bool) -> eyre::Result<()> {
    book.update_depth(&DepthUpdate::from_json(DEMO_DEPTH)?);
    book.update_book_ticker(&BookTickerUpdate::from_json(DEMO_TICKER)?)?;

    println!("=== Order Book ===");
    print_book(book, json)?;

    match book.best_bid_ask() {
        Some(best) => {
            println!();
            println!("Best Bid: {} Qty: {}", best.bid.price, best.bid.quantity);
            println!("Best Ask: {} Qty: {}", best.ask.price, best.ask.quantity);
        }
        None => println!("\nOrder book is empty or invalid."),
    }

    Ok(())
}

fn stream(book: &mut BTreeBook, json: bool) -> eyre::Result<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        if line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match Update::from_json(line).and_then(|update| update.apply(&mut *book)) {
            Ok(()) => print_book(book, json)?,
            Err(e) => error!(kind = ?e.kind(), "{e}"),
        }
    }

    Ok(())
}

fn print_book(book: &BTreeBook, json: bool) -> eyre::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&book.levels())?);
    } else {
        print!("{book}");
    }
    Ok(())
}
