use anagram_solver::app::{solve_loop, solve_once};
use anagram_solver::cli::{CliInterface, parse_cli};
use anagram_solver::dictionary::{load_dictionary_from_file, resolve_dictionary_path};
use anagram_solver::logging::{default_log_path, init_logging};
use anagram_solver::tui::TuiInterface;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    let log_path = if cli.tui { default_log_path() } else { None };
    init_logging(cli.debug, log_path.as_deref());

    let path = resolve_dictionary_path(cli.dictionary_path.clone());
    let dictionary = match load_dictionary_from_file(&path) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "Loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    let config = cli.app_config();

    if let Some(word) = &cli.word {
        let mut interface = CliInterface::batch(io::stdout().lock());
        let result = solve_once(&dictionary, &config, word, &mut interface);
        let finished = interface.finish();
        return match result.and(finished.map(|_| 0)) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    if cli.tui {
        let mut interface = match TuiInterface::new(config.mode) {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        solve_loop(&dictionary, &config, &mut interface);
        return ExitCode::SUCCESS;
    }

    println!("Loaded {} words.", dictionary.len());
    let mut interface = CliInterface::new(io::stdin().lock(), io::stdout().lock());
    solve_loop(&dictionary, &config, &mut interface);
    match interface.finish() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
