//! Domain Scout - business name analysis and domain suggestions
//!
//! Enter a business name to get domain ideas across common TLDs, a quick name
//! analysis, and alternative names. Run without arguments for interactive mode.

use anyhow::Context;
use domain_scout::{
    config::ScoutConfig,
    domain::DomainChecker,
    finance::{self, DEFAULT_TAX_RATE},
    logging,
    random::{AnyRandom, RandomSource},
    types::{CheckConfig, DomainView, SearchOutcome},
    DomainSession, ScoutError,
};
use indicatif::ProgressBar;
use inquire::{InquireError, Select, Text};
use std::env;
use std::process;
use std::time::Duration;

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Interactive,
    Search { name: String, view: DomainView, json: bool },
    Roi { investment: String, revenue: String, expenses: String },
    Tax { revenue: String, rate: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    command: Command,
    seed: Option<u64>,
    verify: bool,
}

#[tokio::main]
async fn main() {
    let mut config = match domain_scout::init() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(2);
        }
    };

    logging::init_logging(&config.log_filter);

    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.verify |= cli.verify;

    if let Err(e) = run(cli.command, &config).await {
        match e.downcast_ref::<ScoutError>() {
            Some(scout_error) => eprintln!("{}", scout_error.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

/// Parse command line arguments (without the program name)
fn parse_args(args: &[String]) -> domain_scout::Result<CliArgs> {
    let mut seed = None;
    let mut verify = false;
    let mut json = false;
    let mut view = DomainView::All;
    let mut words: Vec<String> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(CliArgs {
                    command: Command::Help,
                    seed,
                    verify,
                })
            }
            "--verify" => verify = true,
            "--json" => json = true,
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ScoutError::cli("--seed needs a value"))?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| ScoutError::cli(format!("--seed must be a non-negative integer, got '{}'", value)))?,
                );
            }
            "--view" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ScoutError::cli("--view needs a value"))?;
                view = value.parse().map_err(|e: ScoutError| ScoutError::cli(e.to_string()))?;
            }
            flag if flag.starts_with("--") => {
                return Err(ScoutError::cli(format!("unknown option '{}'", flag)));
            }
            _ => words.push(arg.clone()),
        }
    }

    let command = match words.first().map(String::as_str) {
        None => Command::Interactive,
        Some("roi") => match &words[1..] {
            [investment, revenue, expenses] => Command::Roi {
                investment: investment.clone(),
                revenue: revenue.clone(),
                expenses: expenses.clone(),
            },
            _ => return Err(ScoutError::cli("usage: domain-scout roi <investment> <revenue> <expenses>")),
        },
        Some("tax") => match &words[1..] {
            [revenue] => Command::Tax {
                revenue: revenue.clone(),
                rate: None,
            },
            [revenue, rate] => Command::Tax {
                revenue: revenue.clone(),
                rate: Some(rate.clone()),
            },
            _ => return Err(ScoutError::cli("usage: domain-scout tax <revenue> [rate]")),
        },
        Some(_) => Command::Search {
            name: words.join(" "),
            view,
            json,
        },
    };

    Ok(CliArgs {
        command,
        seed,
        verify,
    })
}

async fn run(command: Command, config: &ScoutConfig) -> anyhow::Result<()> {
    match command {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Search { name, view, json } => run_search(&name, view, json, config).await,
        Command::Interactive => run_interactive(config).await,
        Command::Roi {
            investment,
            revenue,
            expenses,
        } => {
            let result = finance::roi(
                finance::parse_amount("investment", &investment)?,
                finance::parse_amount("revenue", &revenue)?,
                finance::parse_amount("expenses", &expenses)?,
            )?;
            println!("📈 {}", result);
            Ok(())
        }
        Command::Tax { revenue, rate } => {
            let rate = match rate {
                Some(rate) => finance::parse_amount("tax rate", &rate)?,
                None => DEFAULT_TAX_RATE,
            };
            let result = finance::tax_estimate(finance::parse_amount("annual revenue", &revenue)?, rate)?;
            println!("🧾 {} (at {}%)", result, rate);
            Ok(())
        }
    }
}

/// One-shot search from the command line
async fn run_search(name: &str, view: DomainView, json: bool, config: &ScoutConfig) -> anyhow::Result<()> {
    let mut session = DomainSession::with_random(AnyRandom::from_seed(config.seed));

    if session.search(name).is_none() {
        println!("ℹ️  Enter a business name to search for domains.");
        return Ok(());
    }

    if config.verify {
        verify_with_registries(&mut session, &config.check).await;
    }

    let outcome = session.outcome().context("search produced no results")?;
    if json {
        let rendered = serde_json::to_string_pretty(outcome).context("failed to render results as JSON")?;
        println!("{}", rendered);
    } else {
        display_outcome(outcome, &session.view(view), view);
    }

    Ok(())
}

/// Prompt-driven loop mirroring the search screen
async fn run_interactive(config: &ScoutConfig) -> anyhow::Result<()> {
    println!("🌐 Domain Scout - find your perfect domain");
    println!("══════════════════════════════════════════");
    println!();

    let mut session = DomainSession::with_random(AnyRandom::from_seed(config.seed));
    let mut pending: Option<String> = None;

    loop {
        let name = match pending.take() {
            Some(name) => name,
            None => match prompt(Text::new("Business name:").with_help_message("Esc to quit").prompt())? {
                Some(name) => name,
                None => break,
            },
        };

        if session.search(&name).is_none() {
            println!("ℹ️  Enter a business name to search for domains.");
            continue;
        }

        if config.verify {
            verify_with_registries(&mut session, &config.check).await;
        }

        if let Some(outcome) = session.outcome() {
            display_outcome(outcome, &session.view(DomainView::All), DomainView::All);
        }

        loop {
            let actions = vec![
                "Show available domains",
                "Show popular TLDs",
                "Select a domain",
                "Try an alternative name",
                "Search another name",
                "Show search history",
                "Quit",
            ];
            let Some(action) = prompt(Select::new("What next?", actions).prompt())? else {
                return Ok(());
            };

            match action {
                "Show available domains" => print_suggestions(&session.view(DomainView::Available), DomainView::Available),
                "Show popular TLDs" => print_suggestions(&session.view(DomainView::Popular), DomainView::Popular),
                "Select a domain" => {
                    let available: Vec<String> = session
                        .view(DomainView::Available)
                        .iter()
                        .map(|s| s.domain.clone())
                        .collect();
                    if available.is_empty() {
                        println!("😔 None of these domains are available. Try an alternative name!");
                        continue;
                    }
                    if let Some(domain) = prompt(Select::new("Pick a domain:", available).prompt())? {
                        let selected = session.select(&domain)?;
                        println!();
                        println!("🎯 Selected Domain: {} - ${}/year", selected.domain, selected.price);
                        println!("   Proceed to register it with your registrar of choice.");
                        println!();
                    }
                }
                "Try an alternative name" => {
                    let alternatives = session
                        .outcome()
                        .map(|o| o.alternatives.clone())
                        .unwrap_or_default();
                    if let Some(name) = prompt(Select::new("Alternative names:", alternatives).prompt())? {
                        pending = Some(name);
                        break;
                    }
                }
                "Search another name" => break,
                "Show search history" => {
                    println!("🕘 Search history:");
                    for (i, name) in session.history().iter().enumerate() {
                        println!("   {}. {}", i + 1, name);
                    }
                    println!();
                }
                _ => return Ok(()),
            }
        }
    }

    Ok(())
}

/// Map a cancelled prompt to `None`
fn prompt<T>(result: Result<T, InquireError>) -> domain_scout::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(ScoutError::cli(e.to_string())),
    }
}

/// Replace simulated availability with registry answers
async fn verify_with_registries<R: RandomSource>(session: &mut DomainSession<R>, check: &CheckConfig) {
    let domains: Vec<String> = session
        .view(DomainView::All)
        .iter()
        .map(|s| s.domain.clone())
        .collect();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Checking {} domains with registries...", domains.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let checker = DomainChecker::with_config(check.clone());
    let results = checker.check_domains(&domains).await;
    spinner.finish_and_clear();

    session.apply_registry_results(&results);

    let metrics = checker.metrics_snapshot();
    eprintln!(
        "🔍 {} registry answers, {:.0}ms average",
        metrics.domains_checked,
        metrics.avg_check_time_ms()
    );
    if metrics.errors_encountered > 0 {
        eprintln!(
            "⚠️  {} of {} registry checks failed; those domains keep simulated availability",
            metrics.errors_encountered,
            domains.len()
        );
    }
}

fn display_outcome(outcome: &SearchOutcome, suggestions: &[&domain_scout::DomainSuggestion], view: DomainView) {
    println!();
    println!("🔎 Results for \"{}\" ({})", outcome.business_name, outcome.normalized);
    println!("═══════════════════════════════════════════");
    print_suggestions(suggestions, view);

    let score = &outcome.name_score;
    println!("📊 Name Analysis");
    println!("─────────────────");
    println!("   Score:         {}/100", score.score);
    println!("   Length:        {} characters", score.length);
    println!("   Memorability:  {}", score.memorable);
    println!("   Pronunciation: {}", score.pronunciation);
    println!("   Uniqueness:    {}", score.uniqueness);
    println!();

    println!("💡 Alternative Names");
    println!("─────────────────────");
    for (i, name) in outcome.alternatives.iter().enumerate() {
        println!("   {}. {}", i + 1, name);
    }
    println!();
}

fn print_suggestions(suggestions: &[&domain_scout::DomainSuggestion], view: DomainView) {
    println!();
    println!("🌐 {} ({}):", view, suggestions.len());
    for suggestion in suggestions {
        let mark = if suggestion.available { "✅" } else { "❌" };
        print!("{} {:<24} ${}/year", mark, suggestion.domain, suggestion.price);
        if suggestion.popular {
            print!("  ⭐ Popular");
        }
        if let Some(status) = suggestion.registry_status {
            print!("  (registry: {})", status);
        }
        println!();
    }
    println!();
}

/// Print help information
fn print_help() {
    println!("🌐 Domain Scout - business name analysis and domain suggestions");
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-scout [OPTIONS] <BUSINESS NAME...>");
    println!("    domain-scout                              # Interactive mode");
    println!("    domain-scout roi <investment> <revenue> <expenses>");
    println!("    domain-scout tax <revenue> [rate]");
    println!();
    println!("OPTIONS:");
    println!("    --seed <N>        Reproducible availability, prices and scores");
    println!("    --verify          Confirm availability with RDAP registries");
    println!("    --view <VIEW>     all (default), available or popular");
    println!("    --json            Print the full result as JSON");
    println!("    -h, --help        Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    domain-scout \"Bright Ideas\"");
    println!("    domain-scout --view available --seed 7 Acme Robotics");
    println!("    domain-scout roi 10000 18000 4000");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    DOMAIN_SCOUT_SEED           Default seed");
    println!("    DOMAIN_SCOUT_VERIFY         Always verify with registries (true/false)");
    println!("    DOMAIN_SCOUT_CONCURRENCY    Concurrent registry checks (default: 10)");
    println!("    DOMAIN_SCOUT_TIMEOUT_SECS   Registry timeout in seconds (default: 10)");
    println!("    DOMAIN_SCOUT_RDAP_URL       RDAP base URL used for every TLD");
    println!("    DOMAIN_SCOUT_LOG            Log filter (default: warn; RUST_LOG wins)");
    println!();
    println!("Availability, prices and scores are simulated unless --verify is given.");
}
