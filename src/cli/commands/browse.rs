use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::interaction_type::InteractionType;
use crate::ui::controller::{Action, FetchOutcome, FilterController, FilterEvent};
use crate::ui::messages::{error, info, prompt, warning};
use crate::ui::table::EntryTable;
use crate::utils::date;
use std::io::{self, BufRead};
use std::time::Instant;

/// Interactive filtered browser over the entry listing.
///
/// Line commands drive the same controller + renderer pipeline the
/// tests exercise; every fetch goes through the generation counter, so
/// a slow response can never clobber a newer one.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let mut controller = FilterController::new(cfg.per_page);
    let mut table = EntryTable::new();

    info("Interactive browser — type 'help' for commands, 'quit' to leave.");

    let action = controller.initial();
    run_action(action, &mut controller, &mut pool, cfg, &mut table);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            prompt("ledger>");
            continue;
        }

        let (cmd, rest) = match input.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (input, ""),
        };

        let event = match cmd {
            "quit" | "exit" | "q" => break,
            "help" => {
                print_help();
                prompt("ledger>");
                continue;
            }
            "find" => FilterEvent::Submit(rest.to_string()),
            "from" => match parse_date_arg(rest) {
                Ok(d) => FilterEvent::StartDate(d),
                Err(msg) => {
                    warning(msg);
                    prompt("ledger>");
                    continue;
                }
            },
            "to" => match parse_date_arg(rest) {
                Ok(d) => FilterEvent::EndDate(d),
                Err(msg) => {
                    warning(msg);
                    prompt("ledger>");
                    continue;
                }
            },
            "type" => {
                if rest == "-" || rest.is_empty() {
                    FilterEvent::Type(None)
                } else {
                    match InteractionType::from_db_str(rest) {
                        Some(ty) => FilterEvent::Type(Some(ty)),
                        None => {
                            warning(format!(
                                "Unknown type '{rest}'. Use email, video_call, in_person or phone_call."
                            ));
                            prompt("ledger>");
                            continue;
                        }
                    }
                }
            }
            "status" => {
                if rest == "-" || rest.is_empty() {
                    FilterEvent::Status(None)
                } else {
                    FilterEvent::Status(Some(rest.to_string()))
                }
            }
            "page" => match rest.parse::<u32>() {
                Ok(p) => FilterEvent::Page(p),
                Err(_) => {
                    warning(format!("Invalid page number '{rest}'."));
                    prompt("ledger>");
                    continue;
                }
            },
            "next" => FilterEvent::Page(controller.filter().page + 1),
            "prev" => FilterEvent::Page(controller.filter().page.saturating_sub(1).max(1)),
            "reset" => FilterEvent::Reset,
            other => {
                warning(format!("Unknown command '{other}'. Type 'help'."));
                prompt("ledger>");
                continue;
            }
        };

        let action = controller.apply(event, Instant::now());
        run_action(action, &mut controller, &mut pool, cfg, &mut table);
        prompt("ledger>");
    }

    Ok(())
}

fn parse_date_arg(raw: &str) -> Result<Option<chrono::NaiveDate>, String> {
    if raw == "-" || raw.is_empty() {
        return Ok(None);
    }
    date::parse_date(raw)
        .map(Some)
        .ok_or_else(|| format!("Invalid date '{raw}', expected YYYY-MM-DD."))
}

/// Execute a dispatched fetch and feed the outcome back. Stale
/// responses (generation mismatch) are dropped without touching the
/// screen.
fn run_action(
    action: Action,
    controller: &mut FilterController,
    pool: &mut DbPool,
    cfg: &Config,
    table: &mut EntryTable,
) {
    let Action::Fetch(ticket) = action else {
        return;
    };

    let fetched = match ticket.filter.clone().validated() {
        Ok(filter) => match ListLogic::list(pool, &filter) {
            Ok(page) => Some(page),
            Err(e) => {
                if cfg.debug {
                    let _ = audit_log(&pool.conn, "error", "browse", &e.to_string());
                }
                None
            }
        },
        Err(e) => {
            warning(e.to_string());
            None
        }
    };

    match fetched {
        Some(page) => {
            let accepted =
                controller.accept(ticket.generation, FetchOutcome::Items(page.items.len()));
            if accepted {
                println!("{}", table.render(&page.items));
                println!(
                    "Page {} of {} ({} entries)",
                    ticket.filter.page.max(1),
                    page.pages,
                    page.total
                );
            }
        }
        None => {
            if controller.accept(ticket.generation, FetchOutcome::Failed) {
                error("Could not load entries. Try again or adjust the filters.");
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  find <text>     search contact, company and notes");
    println!("  from <date|->   start of the date range (YYYY-MM-DD, '-' clears)");
    println!("  to <date|->     end of the date range (YYYY-MM-DD, '-' clears)");
    println!("  type <slug|->   email, video_call, in_person, phone_call ('-' clears)");
    println!("  status <slug|-> lead status slug ('-' clears)");
    println!("  page <n> | next | prev");
    println!("  reset           clear every filter");
    println!("  quit            leave the browser");
}
