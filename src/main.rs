use std::io;
use std::process;

use cl::{cli, input, render};

fn main() {
    let args = cli::parse_args();

    let mut inp = input::Input::new(&args.files);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = render::colorize_stream(&mut inp, &mut out) {
        eprintln!("cl: {}", e);
        process::exit(1);
    }
}
