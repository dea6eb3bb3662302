#[macro_use]
extern crate log;

#[macro_use]
mod records;
mod hash_tree_root;
mod pretty_ssz;
mod schema;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process;
use types::{ChainSpec, Config};

fn fork_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("fork")
                .long("fork")
                .value_name("FORK")
                .action(ArgAction::Set)
                .value_parser(["phase0", "base", "altair", "bellatrix", "capella", "deneb"])
                .conflicts_with("slot")
                .help("Fork whose shape to use for fork-variant types. Defaults to the latest fork.")
                .display_order(0),
        )
        .arg(
            Arg::new("slot")
                .long("slot")
                .value_name("SLOT")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("Select the fork scheduled at this slot by the chain config.")
                .display_order(0),
        )
}

fn type_arg() -> Arg {
    Arg::new("type")
        .value_name("TYPE")
        .action(ArgAction::Set)
        .required(true)
        .help("Record to use, e.g. BeaconState or Checkpoint")
        .display_order(0)
}

fn ssz_file_arg() -> Arg {
    Arg::new("ssz-file")
        .value_name("FILE")
        .action(ArgAction::Set)
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Path to SSZ bytes, snappy-compressed if the name ends in ssz_snappy")
        .display_order(0)
}

fn cli_app() -> Command {
    Command::new("Lighthouse CLI Tool")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decodes, hashes and describes SSZ-encoded consensus records.")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Path to a YAML chain config. Defaults to mainnet.")
                .display_order(0),
        )
        .subcommand(fork_args(
            Command::new("pretty-ssz")
                .about("Parses SSZ-encoded data from a file")
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_name("FORMAT")
                        .action(ArgAction::Set)
                        .required(false)
                        .default_value("json")
                        .value_parser(["json", "yaml"])
                        .help("Output format to use")
                        .display_order(0),
                )
                .arg(type_arg())
                .arg(ssz_file_arg()),
        ))
        .subcommand(fork_args(
            Command::new("hash-tree-root")
                .about("Computes the hash tree root of SSZ-encoded data from a file")
                .arg(
                    Arg::new("domain")
                        .long("domain")
                        .value_name("HEX")
                        .action(ArgAction::Set)
                        .help("32-byte signature domain. If present, also prints the signing root.")
                        .display_order(0),
                )
                .arg(type_arg())
                .arg(ssz_file_arg()),
        ))
        .subcommand(fork_args(
            Command::new("schema")
                .about("Prints the type descriptor of a record")
                .arg(type_arg()),
        ))
}

fn main() {
    env_logger::init();

    let matches = cli_app().get_matches();

    match run(&matches) {
        Ok(()) => process::exit(0),
        Err(e) => {
            error!("{}", e);
            println!("Failed to run lcli: {}", e);
            process::exit(1)
        }
    }
}

fn load_chain_spec(matches: &ArgMatches) -> Result<ChainSpec, String> {
    let mainnet = ChainSpec::mainnet();

    let Some(path) = matches.get_one::<PathBuf>("config") else {
        info!("Using mainnet config");
        return Ok(mainnet);
    };

    let spec = Config::from_file(path)?.apply_to_chain_spec(&mainnet)?;
    info!(
        "Using {} config from {}",
        spec.config_name.as_deref().unwrap_or("unknown"),
        path.display()
    );
    Ok(spec)
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let spec = load_chain_spec(matches)?;

    match matches.subcommand() {
        Some(("pretty-ssz", matches)) => pretty_ssz::run(&spec, matches)
            .map_err(|e| format!("Failed to pretty print SSZ: {}", e)),
        Some(("hash-tree-root", matches)) => hash_tree_root::run(&spec, matches)
            .map_err(|e| format!("Failed to run hash-tree-root command: {}", e)),
        Some(("schema", matches)) => schema::run(&spec, matches)
            .map_err(|e| format!("Failed to run schema command: {}", e)),
        Some((other, _)) => Err(format!("Unknown subcommand {}. See --help.", other)),
        _ => Err("No subcommand provided. See --help.".to_string()),
    }
}
