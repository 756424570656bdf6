//! briefing-inspect: decode, replay and upgrade share-link data.
//!
//! Usage:
//!   briefing-inspect decode '#v5;New%20scenario;;0;0;1.00;;...'
//!   briefing-inspect frame '#v5;...' --time 90 --config board.json
//!   briefing-inspect upgrade '#v2;...'

use std::path::PathBuf;
use std::process;

use briefing_codec::{load_data, upgrade};
use briefing_core::scenario::Scenario;
use briefing_sim::{BoardConfig, BriefingBoard};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "decode" => cmd_decode(&args[2..]),
        "frame" => cmd_frame(&args[2..]),
        "upgrade" => cmd_upgrade(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "briefing-inspect: share-link inspection tool\n\
         \n\
         Commands:\n\
         \n\
         decode  <link>   Print the decoded scenario as JSON\n\
         \n\
         frame   <link>   Print the rendered board at one instant as JSON\n\
         \n\
           --time <secs>      Scenario time to evaluate (default: 0)\n\
           --config <path>    Board config JSON (optional)\n\
         \n\
         upgrade <link>   Re-encode any published version as the current one\n\
         \n\
         A link may be given with or without its leading '#', or as '-' to\n\
         read it from stdin.\n"
    );
}

fn link_arg(args: &[String]) -> String {
    let Some(link) = positional(args).into_iter().next() else {
        eprintln!("Error: <link> is required");
        process::exit(1);
    };
    if link != "-" {
        return link;
    }
    match std::io::read_to_string(std::io::stdin()) {
        Ok(data) => data.trim().to_string(),
        Err(e) => {
            eprintln!("Error reading stdin: {e}");
            process::exit(1);
        }
    }
}

fn parse_time(args: &[String]) -> f64 {
    for i in 0..args.len() {
        if args[i] == "--time" && i + 1 < args.len() {
            match args[i + 1].parse::<f64>() {
                Ok(t) if t.is_finite() => return t,
                _ => {
                    eprintln!("Error: --time expects seconds, got {}", args[i + 1]);
                    process::exit(1);
                }
            }
        }
    }
    0.0
}

fn parse_config_path(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn load_config(args: &[String]) -> BoardConfig {
    let Some(path) = parse_config_path(args) else {
        return BoardConfig::default();
    };
    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn load_scenario(args: &[String]) -> Scenario {
    match load_data(&link_arg(args)) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Error decoding link: {e}");
            process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            process::exit(1);
        }
    }
}

// --- Commands ---

fn cmd_decode(args: &[String]) {
    let scenario = load_scenario(args);
    eprintln!(
        "{:?}: {} objects, map {:?}",
        scenario.name,
        scenario.objects.len(),
        scenario.map
    );
    print_json(&scenario);
}

fn cmd_frame(args: &[String]) {
    let time = parse_time(args);
    let config = load_config(args);
    let scenario = load_scenario(args);

    let mut board = BriefingBoard::from_scenario(scenario, config);
    let snapshot = board.snapshot(time);
    eprintln!(
        "t={:.1}s of {:.1}s, {} rendered objects",
        snapshot.time,
        snapshot.final_stop_time,
        snapshot.objects.len()
    );
    print_json(&snapshot);
}

fn cmd_upgrade(args: &[String]) {
    match upgrade(&link_arg(args)) {
        Ok(data) => println!("#{data}"),
        Err(e) => {
            eprintln!("Error decoding link: {e}");
            process::exit(1);
        }
    }
}

/// Arguments that are neither a `--flag` nor a flag's value.
fn positional(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i].starts_with("--") {
            i += 2;
        } else {
            out.push(args[i].clone());
            i += 1;
        }
    }
    out
}
