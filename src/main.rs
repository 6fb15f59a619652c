//! Doubling Season - token stack tracker for tabletop MTG play.
//!
//! Interactive CLI over the board model: create token stacks, adjust
//! counts and tap state, place counters, split stacks, and save/load
//! decks of token templates.
//!
//! ## Usage
//!
//! ```
//! doubling-season [OPTIONS]
//!
//! Options:
//!   --tokens <path>    Token catalog JSON (stat-line reference data)
//!   --counters <path>  Counter catalog JSON (counter name reference data)
//!   --decks <path>     Deck library JSON, loaded at start and written on save
//! ```
//!
//! Type `help` at the prompt for the command list.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

use doubling_season::{
    Board, ColorSet, CounterCatalog, Deck, Settings, StackId, TokenCatalog, TokenStack, WrathMode,
    parse_count,
};

struct Session {
    board: Board,
    settings: Settings,
    tokens: TokenCatalog,
    counters: CounterCatalog,
    decks: Vec<Deck>,
    deck_path: Option<String>,
}

fn main() {
    let mut tokens = TokenCatalog::default();
    let mut counters = CounterCatalog::default();
    let mut deck_path: Option<String> = None;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tokens" => {
                i += 1;
                match args.get(i) {
                    Some(path) => match TokenCatalog::from_path(path) {
                        Ok(catalog) => {
                            println!("Loaded {} token definitions", catalog.len());
                            tokens = catalog;
                        }
                        Err(err) => eprintln!("{err}"),
                    },
                    None => {
                        eprintln!("Error: --tokens requires a file path");
                        return;
                    }
                }
            }
            "--counters" => {
                i += 1;
                match args.get(i) {
                    Some(path) => match CounterCatalog::from_path(path) {
                        Ok(catalog) => {
                            println!("Loaded {} counter definitions", catalog.len());
                            counters = catalog;
                        }
                        Err(err) => eprintln!("{err}"),
                    },
                    None => {
                        eprintln!("Error: --counters requires a file path");
                        return;
                    }
                }
            }
            "--decks" => {
                i += 1;
                match args.get(i) {
                    Some(path) => deck_path = Some(path.clone()),
                    None => {
                        eprintln!("Error: --decks requires a file path");
                        return;
                    }
                }
            }
            other => {
                eprintln!("Unknown option: {other}");
                return;
            }
        }
        i += 1;
    }

    // A missing or corrupt deck library behaves as an empty one.
    let decks = deck_path
        .as_deref()
        .and_then(|path| fs::read_to_string(path).ok())
        .map(|json| serde_json::from_str(&json).unwrap_or_default())
        .unwrap_or_default();

    let mut session = Session {
        board: Board::new(),
        settings: Settings::new(),
        tokens,
        counters,
        decks,
        deck_path,
    };

    println!("Doubling Season - type 'help' for commands");
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Input error: {err}");
                break;
            }
        }
        if !run_command(&mut session, line.trim()) {
            break;
        }
    }
}

/// Executes one command line. Returns false when the session should end.
fn run_command(session: &mut Session, line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = words.first() else {
        return true;
    };
    let args = &words[1..];

    match command {
        "help" => print_help(),
        "list" | "ls" => render_board(session),
        "create" => create_stack(session, args, false),
        "create-tapped" => create_stack(session, args, true),
        "summon" => summon_from_catalog(session, args),
        "find" => find_in_catalog(session, args),
        "add" => with_stack(session, args, |stack, n, settings| {
            stack.add_tokens(count_arg(n, 1).saturating_mul(settings.multiplier()));
        }),
        "remove" => with_stack(session, args, |stack, n, _| match n {
            Some(_) => stack.remove_tokens(count_arg(n, 0)),
            None => stack.remove_one(),
        }),
        "tap" => with_stack(session, args, |stack, n, _| stack.tap(count_arg(n, 1))),
        "untap" => with_stack(session, args, |stack, n, _| stack.untap(count_arg(n, 1))),
        "double" => with_stack(session, args, |stack, _, _| stack.double()),
        "delete" => match parse_stack_id(args.first()) {
            Some(id) => {
                if session.board.remove(id).is_none() {
                    println!("No stack {id}");
                }
                render_board(session);
            }
            None => println!("Usage: delete <id>"),
        },
        "counter" => counter_command(session, args),
        "pt" => power_toughness_command(session, args),
        "split" => split_command(session, args),
        "wrath" => {
            session.board.wrath(WrathMode::ResetCounts);
            render_board(session);
        }
        "farewell" => {
            session.board.wrath(WrathMode::DestroyAll);
            println!("Board is empty.");
        }
        "untap-all" => {
            session.board.untap_all();
            render_board(session);
        }
        "heal" => {
            session.board.clear_summoning_sickness();
            render_board(session);
        }
        "x" => {
            session
                .settings
                .set_multiplier(parse_count(args.first().copied().unwrap_or("1")));
            println!("Multiplier: x{}", session.settings.multiplier());
        }
        "sick" => {
            session.settings.show_summoning_sickness = !session.settings.show_summoning_sickness;
            println!(
                "Summoning sickness display: {}",
                if session.settings.show_summoning_sickness {
                    "on"
                } else {
                    "off"
                }
            );
        }
        "save" => save_deck(session, &args.join(" ")),
        "load" => load_deck(session, &args.join(" ")),
        "decks" => {
            if session.decks.is_empty() {
                println!("No saved decks");
            }
            for deck in &session.decks {
                println!("  {} ({} tokens)", deck.name, deck.templates.len());
            }
        }
        "quit" | "exit" => return false,
        other => println!("Unknown command: {other} (try 'help')"),
    }
    true
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 list                          Show the board\n\
         \x20 create <n> <colors> <pt> <name...>   New stack ('-' for no colors/pt)\n\
         \x20 create-tapped <n> <colors> <pt> <name...>\n\
         \x20 summon <n> <query...>         New stack from the token catalog\n\
         \x20 find <query...>               Search the token catalog\n\
         \x20 add <id> [n]                  Add n tokens (times the multiplier)\n\
         \x20 remove <id> [n]               Remove n tokens (default: one)\n\
         \x20 tap <id> [n] / untap <id> [n]\n\
         \x20 double <id>                   Double the stack\n\
         \x20 delete <id>                   Remove the stack from the board\n\
         \x20 counter add <id> <n> <name...>\n\
         \x20 counter remove <id> <n> <name...>\n\
         \x20 pt <id> <delta>               Place +1/+1 (or -1/-1) counters\n\
         \x20 split <id> <n> [tapped]       Split n tokens off (tapped first if 'tapped')\n\
         \x20 wrath / farewell              Zero all counts / destroy all stacks\n\
         \x20 untap-all / heal              Untap everything / clear summoning sickness\n\
         \x20 x <n>                         Set the add multiplier (1-1024)\n\
         \x20 sick                          Toggle the summoning sickness display\n\
         \x20 save <name> / load <name> / decks\n\
         \x20 quit"
    );
}

fn render_board(session: &Session) {
    if session.board.is_empty() {
        println!("(empty board)");
        return;
    }
    for stack in session.board.iter() {
        let mut line = format!(
            "{} {} [{}]",
            stack.id(),
            stack.name,
            stack.colors.wubrg()
        );
        if !stack.power_toughness.is_empty() {
            line.push_str(&format!(" {}", stack.formatted_power_toughness()));
        }
        line.push_str(&format!(
            "  {} untapped / {} tapped",
            stack.untapped(),
            stack.tapped()
        ));
        if session.settings.show_summoning_sickness && stack.summoning_sick() > 0 {
            line.push_str(&format!(" ({} sick)", stack.summoning_sick()));
        }
        for entry in stack.counters().iter() {
            line.push_str(&format!("  [{} x{}]", entry.kind.label(), entry.amount));
        }
        println!("{line}");
    }
}

fn create_stack(session: &mut Session, args: &[&str], enter_tapped: bool) {
    if args.len() < 4 {
        println!("Usage: create <n> <colors> <pt> <name...>");
        return;
    }
    let amount = parse_count(args[0]).saturating_mul(session.settings.multiplier() as i64);
    let colors = if args[1] == "-" {
        ColorSet::COLORLESS
    } else {
        ColorSet::parse(args[1])
    };
    let power_toughness = if args[2] == "-" { "" } else { args[2] };
    let name = args[3..].join(" ");
    session.board.spawn(TokenStack::new(
        name,
        "",
        power_toughness,
        colors,
        amount,
        enter_tapped,
        true,
    ));
    render_board(session);
}

fn summon_from_catalog(session: &mut Session, args: &[&str]) {
    if args.len() < 2 {
        println!("Usage: summon <n> <query...>");
        return;
    }
    let amount = parse_count(args[0]).saturating_mul(session.settings.multiplier() as i64);
    let query = args[1..].join(" ");
    let Some(definition) = session.tokens.search(&query, None).first().copied() else {
        println!("No catalog match for '{query}'");
        return;
    };
    session.board.spawn(definition.to_stack(amount, false));
    render_board(session);
}

fn find_in_catalog(session: &Session, args: &[&str]) {
    let query = args.join(" ");
    let matches = session.tokens.search(&query, None);
    if matches.is_empty() {
        println!("No catalog match for '{query}'");
        return;
    }
    for definition in matches.iter().take(10) {
        let stat_line = if definition.power_toughness.is_empty() {
            String::new()
        } else {
            format!(" {}", definition.power_toughness)
        };
        println!(
            "  {} [{}]{} - {}",
            definition.name,
            definition.colors,
            stat_line,
            definition.clean_type()
        );
    }
    if matches.len() > 10 {
        println!("  ... and {} more", matches.len() - 10);
    }
}

fn counter_command(session: &mut Session, args: &[&str]) {
    let usage = "Usage: counter <add|remove> <id> <n> <name...>";
    if args.len() < 4 {
        println!("{usage}");
        return;
    }
    let Some(id) = parse_stack_id(args.get(1)) else {
        println!("{usage}");
        return;
    };
    let amount = parse_count(args[2]).clamp(0, u32::MAX as i64) as u32;
    let name = args[3..].join(" ");
    let Some(stack) = session.board.get_mut(id) else {
        println!("No stack {id}");
        return;
    };
    let ok = match args[0] {
        "add" => stack.add_counter(&name, amount),
        "remove" => stack.remove_counter(&name, amount),
        _ => {
            println!("{usage}");
            return;
        }
    };
    if !ok {
        // Known catalog names help diagnose typos.
        let suggestions = session.counters.search(&name);
        if suggestions.is_empty() {
            println!("Could not update '{name}' counters");
        } else {
            println!(
                "Could not update '{name}' counters (catalog knows: {})",
                suggestions
                    .iter()
                    .take(5)
                    .map(|counter| counter.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }
    render_board(session);
}

fn power_toughness_command(session: &mut Session, args: &[&str]) {
    let (Some(id), Some(&delta)) = (parse_stack_id(args.first()), args.get(1)) else {
        println!("Usage: pt <id> <delta>");
        return;
    };
    match session.board.get_mut(id) {
        Some(stack) => {
            stack.add_power_toughness_counters(parse_count(delta));
            render_board(session);
        }
        None => println!("No stack {id}"),
    }
}

fn split_command(session: &mut Session, args: &[&str]) {
    let (Some(id), Some(&take)) = (parse_stack_id(args.first()), args.get(1)) else {
        println!("Usage: split <id> <n> [tapped]");
        return;
    };
    let take = parse_count(take).clamp(0, u32::MAX as i64) as u32;
    let tapped_first = args.get(2) == Some(&"tapped");
    match session.board.split_stack(id, take, tapped_first) {
        Ok(_) => render_board(session),
        Err(err) => println!("{err}"),
    }
}

fn save_deck(session: &mut Session, name: &str) {
    let deck = session.board.save_deck(name);
    println!("Saved deck '{}' ({} tokens)", deck.name, deck.templates.len());
    session.decks.retain(|existing| existing.name != deck.name);
    session.decks.push(deck);
    write_deck_library(session);
}

fn load_deck(session: &mut Session, name: &str) {
    let Some(deck) = session.decks.iter().find(|deck| deck.name == name).cloned() else {
        println!("No saved deck named '{name}'");
        return;
    };
    session.board.load_deck(&deck);
    render_board(session);
}

fn write_deck_library(session: &Session) {
    let Some(path) = session.deck_path.as_deref() else {
        return;
    };
    match serde_json::to_string_pretty(&session.decks) {
        Ok(json) => {
            if let Err(err) = fs::write(path, json) {
                eprintln!("Failed to write deck library: {err}");
            }
        }
        Err(err) => eprintln!("Failed to encode deck library: {err}"),
    }
}

fn parse_stack_id(word: Option<&&str>) -> Option<StackId> {
    let word = word?.trim_start_matches('#');
    word.parse().ok().map(StackId::from_raw)
}

/// First optional numeric argument, clamped to u32; bad input falls back
/// to `default`.
fn count_arg(word: Option<&&str>, default: u32) -> u32 {
    match word {
        Some(&word) => parse_count(word).clamp(0, u32::MAX as i64) as u32,
        None => default,
    }
}

/// Adapter so simple per-stack commands share the id lookup and board
/// re-render.
fn with_stack(
    session: &mut Session,
    args: &[&str],
    op: impl FnOnce(&mut TokenStack, Option<&&str>, &Settings),
) {
    let Some(id) = parse_stack_id(args.first()) else {
        println!("Usage: <command> <id> [n]");
        return;
    };
    let settings = session.settings;
    match session.board.get_mut(id) {
        Some(stack) => {
            op(stack, args.get(1), &settings);
            render_board(session);
        }
        None => println!("No stack {id}"),
    }
}
