use balanced_sets::{Dictionary, Engine, Error, Result};
use log::{error, info};
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;
use std::time::Instant;

const USAGE: &str = "usage: balanced-sets <height-balanced|color-balanced> <insert-file> [delete-file]";

fn open(path: &str) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

fn run(args: &[String]) -> Result<()> {
    let engine: Engine = args[0].parse()?;
    let mut dictionary = Dictionary::new(engine);

    let start = Instant::now();
    let report = dictionary.batch_insert(open(&args[1])?)?;
    info!(
        "inserted {} of {} lines in {:?}",
        report.succeeded,
        report.total(),
        start.elapsed(),
    );

    if let Some(path) = args.get(2) {
        let start = Instant::now();
        let report = dictionary.batch_delete(open(path)?)?;
        info!(
            "deleted {} of {} lines in {:?}",
            report.succeeded,
            report.total(),
            start.elapsed(),
        );
    }

    println!("engine: {}", dictionary.engine());
    println!("size: {}", dictionary.size());
    println!("height: {}", dictionary.height());
    Ok(())
}

fn main() {
    if SimpleLogger::init(LevelFilter::Info, Config::default()).is_err() {
        eprintln!("warning: a logger was already installed");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }

    if let Err(err) = run(&args) {
        error!("{}", err);
        if let Error::UnknownEngine(_) = err {
            eprintln!("{}", USAGE);
        }
        process::exit(1);
    }
}
