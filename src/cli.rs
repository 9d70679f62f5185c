use std::env;
use std::process;

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    /// Inputs in order; empty means stdin.
    pub files: Vec<String>,
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(Args),
    Help,
    Version,
}

pub fn parse_args() -> Args {
    let args: Vec<String> = env::args().skip(1).collect();

    match parse_from(&args) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            print_usage();
            process::exit(0);
        }
        Ok(Command::Version) => {
            println!("cl {}", env!("CARGO_PKG_VERSION"));
            process::exit(0);
        }
        Err(msg) => {
            eprintln!("cl: {}", msg);
            eprintln!("Try 'cl --help' for usage.");
            process::exit(1);
        }
    }
}

pub fn parse_from(args: &[String]) -> Result<Command, String> {
    let mut files: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            // Everything after -- is a file operand
            files.extend(args[i + 1..].iter().cloned());
            break;
        }

        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg == "--version" {
            return Ok(Command::Version);
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(format!("unknown option: {}", arg));
        } else {
            files.push(arg.clone());
        }

        i += 1;
    }

    Ok(Command::Run(Args { files }))
}

fn print_usage() {
    eprintln!(
        "cl {} — color log streams, one stable color per token",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!("Usage: cl [file ...]");
    eprintln!("       tail -f app.log | cl");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help       Show this help");
    eprintln!("  --version        Show version");
    eprintln!();
    eprintln!("  Reads stdin when no files are given; '-' also means stdin.");
    eprintln!("  .gz/.zst/.bz2/.xz/.lz4 files are decompressed on the fly.");
}
