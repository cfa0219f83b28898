//! An interactive session with the assistant, on the terminal.
//!
//! Usage: `simba [config.json]`. Set `RUST_LOG` to see what happens under the hood.

use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;

use simba::config::Config;
use simba::storage::FileStorage;
use simba::Assistant;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        None => Config::default(),
        Some(path) => match Config::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Invalid config file: {}. Using the default config", err);
                Config::default()
            }
        },
    };

    let storage = FileStorage::new(&config.storage_path);
    let mut assistant = Assistant::new(config, storage);
    print_reply(&assistant.greet());

    let stdin = stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("Unable to read input: {}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = assistant.respond(&line);
        print_reply(&reply.text);
        if reply.exit {
            break;
        }
    }
}

fn print_reply(text: &str) {
    let mut stdout = stdout();
    for line in text.lines() {
        let _ = writeln!(stdout, "\t{}", line);
    }
    let _ = stdout.flush();
}
