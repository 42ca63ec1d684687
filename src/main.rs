use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_diary_rs::cli::{Cli, Command, MealArgs};
use meal_diary_rs::error::{DiaryError, Result};
use meal_diary_rs::interface::{
    navigate, parse_date, parse_time, prompt_date, prompt_description, prompt_is_healthy,
    prompt_name, prompt_time, prompt_yes_no, Route,
};
use meal_diary_rs::models::{MealRecord, NewMeal};
use meal_diary_rs::state::{Alert, HomeState, MealStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meal_diary_rs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        match &e {
            DiaryError::FetchFailed { .. } => eprintln!("{}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = MealStore::open(&cli.file);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Home => cmd_home(&store),
        Command::Stats { json } => cmd_stats(&store, json),
        Command::Show { id } => cmd_show(&store, &id),
        Command::Add(args) => cmd_add(&store, args),
        Command::Edit { id, meal } => cmd_edit(&store, &id, meal),
        Command::Remove { id, yes } => cmd_remove(&store, &id, yes),
    }
}

/// Fetch meals into fresh home state, turning failures into an alert.
fn load_home(store: &MealStore) -> Result<HomeState> {
    let home = HomeState::new();
    home.refresh(store)
        .map_err(|e| DiaryError::from(Alert::from_error(&e)))?;
    Ok(home)
}

/// List meals by day with the adherence headline.
fn cmd_home(store: &MealStore) -> Result<()> {
    let home = load_home(store)?;
    navigate(&Route::Home, &home.meals(), &home.stats());
    Ok(())
}

/// Show the statistics view for the current diary.
fn cmd_stats(store: &MealStore, json: bool) -> Result<()> {
    let home = load_home(store)?;
    let stats = home.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    navigate(&Route::Statistics(stats), &home.meals(), &stats);
    Ok(())
}

/// Show one meal.
fn cmd_show(store: &MealStore, id: &str) -> Result<()> {
    let (date, meal) = store.get_meal(id)?;
    navigate(&Route::Meal { date, meal }, &[], &Default::default());
    Ok(())
}

/// Log a new meal.
fn cmd_add(store: &MealStore, args: MealArgs) -> Result<()> {
    navigate(&Route::NewMeal, &[], &Default::default());
    let (date, meal) = collect_meal(args, None)?;
    let record = store.add_meal(date, meal)?;
    println!("Logged '{}' as {}.", record.name, record.id);
    Ok(())
}

/// Edit a logged meal.
fn cmd_edit(store: &MealStore, id: &str, args: MealArgs) -> Result<()> {
    let current = store.get_meal(id)?;
    let (date, meal) = collect_meal(args, Some(&current))?;
    let record = store.update_meal(id, date, meal)?;
    println!("Updated '{}' ({}).", record.name, record.id);
    Ok(())
}

/// Delete a logged meal after confirmation.
fn cmd_remove(store: &MealStore, id: &str, yes: bool) -> Result<()> {
    let (_, meal) = store.get_meal(id)?;

    if !yes && !prompt_yes_no(&format!("Delete '{}'?", meal.name), false)? {
        println!("Nothing deleted.");
        return Ok(());
    }

    store.remove_meal(id)?;
    println!("Deleted '{}'.", meal.name);
    Ok(())
}

/// Build meal fields from flags, prompting for anything missing.
fn collect_meal(
    args: MealArgs,
    current: Option<&(NaiveDate, MealRecord)>,
) -> Result<(NaiveDate, NewMeal)> {
    let existing = current.map(|(_, m)| m);
    let is_healthy = args.is_healthy();

    let name = match args.name {
        Some(name) => name,
        None => prompt_name(existing.map(|m| m.name.as_str()))?,
    };

    let description = match args.description {
        Some(description) => description,
        None => prompt_description(existing.map(|m| m.description.as_str()))?,
    };

    let date = match args.date {
        Some(date) => parse_date(&date)?,
        None => prompt_date(current.map(|(d, _)| *d))?,
    };

    let time = match args.time {
        Some(time) => parse_time(&time)?,
        None => prompt_time(existing.map(|m| m.time))?,
    };

    let is_healthy = match is_healthy {
        Some(flag) => flag,
        None => prompt_is_healthy(existing.map(|m| m.is_healthy))?,
    };

    Ok((
        date,
        NewMeal {
            name,
            description,
            time,
            is_healthy,
        },
    ))
}
