//! Line-oriented host for a skirmish session.
//!
//! Reads commands from stdin, forwards them to the session and prints every
//! new log line. Deferred enemy turns are waited out in real time.

use skirmish::combat::PlayerAction;
use skirmish::core::{GameConfig, GameError, GameSession, Screen};
use skirmish::world::GameData;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct Options {
    seed: Option<u64>,
    config_path: Option<String>,
    data_path: Option<String>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    let mut session = match build_session(&options) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start: {}", e);
            std::process::exit(2);
        }
    };

    println!("Skirmish. Type 'help' for commands.");
    let mut seen = 0;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}> ", prompt(&session));
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let rest: Vec<&str> = words.collect();

        let result = match command {
            "quit" | "exit" => break,
            "help" => {
                print_help();
                Ok(())
            }
            "start" => {
                session.start_game();
                Ok(())
            }
            "class" => match rest.first() {
                Some(id) => session.select_class(id),
                None => {
                    let ids: Vec<&str> =
                        session.data().classes.iter().map(|c| c.id.as_str()).collect();
                    println!("Classes: {}", ids.join(", "));
                    Ok(())
                }
            },
            "create" => {
                let name = rest.first().copied().unwrap_or("");
                session.create_character(name, rest.get(1).copied())
            }
            "go" => match rest.first() {
                Some(id) => session.go_to_location(id),
                None => {
                    for location in &session.data().locations {
                        println!("  {:<10} {}", location.id, location.name);
                    }
                    Ok(())
                }
            },
            "explore" => session.encounter_enemy(),
            "rest" => session.rest_at_inn(),
            "inventory" => session.open_inventory().map(|_| ()),
            "status" => {
                print_status(&session);
                Ok(())
            }
            other => match other.parse::<PlayerAction>() {
                Ok(action) => session.player_action(action),
                Err(e) => Err(e),
            },
        };

        match result {
            Ok(()) => {}
            Err(e) if e.is_silent() => debug!("{}", e),
            Err(e) => println!("! {}", e),
        }

        seen = flush_log(&session, seen);
        while let Some(wait) = session.next_resolution_in() {
            std::thread::sleep(wait);
            session.tick(wait);
            seen = flush_log(&session, seen);
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        seed: None,
        config_path: None,
        data_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    options.config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--data" => {
                if i + 1 < args.len() {
                    options.data_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-h" | "--help" => {
                println!("USAGE:");
                println!("    skirmish [--seed <N>] [--config <file.json>] [--data <file.json>]");
                println!();
                print_help();
                std::process::exit(0);
            }
            other => warn!("ignoring unknown argument {}", other),
        }
        i += 1;
    }

    options
}

fn build_session(options: &Options) -> Result<GameSession, Box<dyn std::error::Error>> {
    let config = match &options.config_path {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    let data = match &options.data_path {
        Some(path) => GameData::from_json(&std::fs::read_to_string(path)?)?,
        None => GameData::builtin(),
    };

    let session = GameSession::new(data, config)?;
    Ok(match options.seed {
        Some(seed) => session.with_seed(seed),
        None => session,
    })
}

fn prompt(session: &GameSession) -> String {
    match session.screen() {
        Screen::Menu => "menu".to_string(),
        Screen::CharacterCreation => "create".to_string(),
        Screen::Game if session.combat().is_active() => "combat".to_string(),
        Screen::Game => session.location().id.clone(),
    }
}

/// Prints log lines added since `seen` and returns the new watermark.
fn flush_log(session: &GameSession, seen: usize) -> usize {
    for line in session.log().since(seen) {
        println!("{}", line);
    }
    session.log().len()
}

fn print_status(session: &GameSession) {
    let snapshot = session.snapshot();
    println!("{} ({})", snapshot.location.name, snapshot.location.description);
    match &snapshot.player {
        Some(p) => {
            println!(
                "{} the {} - Level {} ({}/{} exp)",
                p.name, p.class_id, p.level, p.experience, p.exp_to_next_level
            );
            println!(
                "HP {}/{}  MP {}/{}  Gold {}",
                p.hp, p.max_hp, p.mp, p.max_mp, p.gold
            );
        }
        None => println!("{}", GameError::NoPlayer),
    }
    if let Some(player) = session.player() {
        println!("{}", player.attributes.summary());
        for (slot, item) in player.equipment.iter_equipped() {
            println!("  {:?}: {}", slot, item);
        }
    }
    if let Some(c) = &snapshot.combat {
        println!(
            "Fighting {} {} (Lv {}) - HP {}/{}",
            c.enemy_emoji, c.enemy_name, c.enemy_level, c.enemy_hp_shown, c.enemy_max_hp
        );
    }
}

fn print_help() {
    println!("COMMANDS:");
    println!("    start                    Leave the menu");
    println!("    class [id]               Select a class, or list them");
    println!("    create <name> [class]    Create your character");
    println!("    go [location]            Travel, or list locations");
    println!("    explore                  Look for a fight");
    println!("    attack | skill | defend | potion");
    println!("    rest                     Rest at the inn");
    println!("    inventory                List your items");
    println!("    status                   Show your character");
    println!("    quit");
}
