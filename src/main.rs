//! splotr command line tool
//!
//! Loads an MPEG audio file and prints what its leading frame header says.

#[cfg(feature = "json")]
use splotr::OutputFormat;
use splotr::{render, Mp3File, ReportOptions};
use std::env;
use std::process;

/// Command line arguments structure
struct Args {
    path: String,
    quiet: bool,
    verbose: bool,
    json: bool,
}

impl Args {
    /// Parse command line arguments
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().collect();

        let mut quiet = false;
        let mut verbose = false;
        let mut json = false;

        let mut i = 1;

        // Parse options (flags starting with -)
        while i < args.len() && args[i].starts_with('-') && args[i].len() > 1 {
            match args[i].as_str() {
                "-q" => quiet = true,
                "-v" => verbose = true,
                "-j" => json = true,
                "-h" => return Err(String::new()), // Empty error triggers usage display
                other => return Err(format!("Unknown option: {}", other)),
            }
            i += 1;
        }

        let path = match args.get(i) {
            Some(path) => path.clone(),
            None => return Err("too few arguments!".to_string()),
        };

        if i + 1 < args.len() {
            return Err(format!("Unexpected argument: {}", args[i + 1]));
        }

        Ok(Args {
            path,
            quiet,
            verbose,
            json,
        })
    }

    fn report_options(&self) -> Result<ReportOptions, String> {
        let options = ReportOptions::new().verbose(self.verbose);
        if !self.json {
            return Ok(options);
        }

        #[cfg(feature = "json")]
        {
            Ok(options.format(OutputFormat::Json))
        }
        #[cfg(not(feature = "json"))]
        {
            Err("JSON output requires the `json` feature".to_string())
        }
    }
}

/// Print usage information
fn print_usage() {
    println!("Usage: splotr [options] <file>");
    println!();
    println!("Options:");
    println!(" -h            this help message");
    println!(" -q            do not print the banner");
    println!(" -v            list every header field");
    println!(" -j            print the header as JSON");
}

/// Prints the banner for when the program starts
fn banner() {
    println!("Splotr v1.0 - sound plotter");
    println!("Written by Ian M. Moffett");
}

fn run(args: &Args, options: &ReportOptions) -> splotr::error::Result<()> {
    let file = Mp3File::load(&args.path).map_err(|err| {
        println!("Could not find {}", args.path);
        err
    })?;

    let header = file.header()?;
    print!("{}", render(&header, options));
    Ok(())
}

fn main() {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(err) => {
            // -q is unknown here, so the banner always comes first
            banner();
            if err.is_empty() {
                print_usage();
            } else {
                eprintln!("Error: {}", err);
                print_usage();
            }
            process::exit(1);
        }
    };

    // Only errors by default, -v adds debug output; RUST_LOG still wins
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let options = match args.report_options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    if !args.quiet {
        banner();
    }

    if let Err(err) = run(&args, &options) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
