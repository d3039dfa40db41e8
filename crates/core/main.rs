#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{error, process};

mod app;
mod commands;
mod file;
mod handoff;
mod interact;

use commands::Commands;

use bookworm::Config;

use clap::{Args, Parser};
use log::trace;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<(), Box<dyn error::Error>> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                interact,
                verbosity,
                quiet,
                proxy,
                quote_page,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    // prompts write to the terminal so they are never shown in quiet mode
    let interact = interact && !quiet;

    if interact {
        trace!("Interact mode enabled");
    }

    let mut config = Config::default();
    if let Some(proxy) = proxy {
        config = config.with_proxy(proxy);
    }
    if let Some(quote_page) = quote_page {
        config = config.with_quote_page(quote_page);
    }

    let message = command.execute(&config, interact)?;

    if !quiet {
        println!("{message}");
    }
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<(), Box<dyn error::Error>> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 1 } else { verbosity + 2 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookworm")]
#[clap(about = "Write book review newsletter emails in the terminal")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Enables interactive mode, which allows for filling in the review with prompts.
    #[clap(short, long, global = true)]
    interact: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Prevents the program from writing to stdout, errors will still be printed to stderr.
    #[clap(short, long, global = true)]
    quiet: bool,

    /// Proxy used to fetch the quote page, the encoded page url is appended to it.
    #[clap(long, global = true)]
    proxy: Option<String>,

    /// Page to extract quotes from.
    #[clap(long, global = true)]
    quote_page: Option<String>,
}
