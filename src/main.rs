//MIT License
use log::{LevelFilter, info};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;
use symcalc::calculator::command::Command;
use symcalc::calculator::dispatch::Calculator;
use symcalc::utils::config::PlotSettings;

const CONFIG_FILE: &str = "symcalc.toml";

fn main() {
    let log_option = match std::env::var("SYMCALC_LOG").as_deref() {
        Ok("debug") => LevelFilter::Debug,
        Ok("info") => LevelFilter::Info,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };
    let _ = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    let settings = if Path::new(CONFIG_FILE).exists() {
        match PlotSettings::from_file(Path::new(CONFIG_FILE)) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("{}, falling back to defaults", e);
                PlotSettings::default()
            }
        }
    } else {
        PlotSettings::default()
    };
    info!("program started with loglevel {}", log_option);

    let mut calculator = Calculator::with_settings(settings);
    println!("symcalc");
    println!("type button labels separated by spaces, e.g.  5 + 3 * 2 =");
    println!("  set <text>   put free text into the display");
    println!("  ask <query>  natural language, e.g.  ask what is 5% of 200");
    println!("  history      list the calculation log");
    println!("  quit         leave");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once(' ') {
            _ if line == "quit" || line == "exit" => break,
            _ if line == "history" => {
                for entry in calculator.history() {
                    println!("{}", entry);
                }
                continue;
            }
            Some(("set", text)) => calculator.set_buffer(text.trim()),
            Some(("ask", query)) => calculator.submit_query(query),
            _ => {
                let commands: Result<Vec<Command>, _> =
                    line.split_whitespace().map(Command::from_str).collect();
                match commands {
                    Ok(commands) => {
                        for command in commands {
                            calculator.press(command);
                        }
                    }
                    Err(_) => {
                        println!("unknown input, expected button labels or set/ask/history/quit");
                        continue;
                    }
                }
            }
        }
        println!("{}", calculator.buffer());
    }
}
