use clap::Parser;
use extidy::cli::{Args, run_cli};
use extidy::console::StdConsole;

fn main() {
    let args = Args::parse();
    let mut console = StdConsole::new();

    if let Err(e) = run_cli(args, &mut console) {
        eprintln!("Error: {}", e);
    }
}
