//! SpendSense CLI
//!
//! Command-line front end for the spending tracker, savings simulator and lessons

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

use spendsense::aggregate::chart_ceiling;
use spendsense::learn::{personalized_deck, questions_for, Onboarding, QuizQuestion, QuizSession};
use spendsense::projection::{
    future_value, spent_vs_saved, InvestmentOption, ProjectionConfig, ProjectionEngine,
};
use spendsense::{Config, PlanKind, PurchaseCategory, SavingsPlan, Store, Transaction};

/// Width of the longest bar in the tracker chart
const BAR_WIDTH: f64 = 40.0;

#[derive(Parser)]
#[command(name = "spendsense", version, about = "Track spending, simulate savings and learn")]
struct Cli {
    /// Directory holding the JSON data files (overrides SPENDSENSE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Monthly spending and the debt-to-income ratio
    Tracker {
        #[arg(long)]
        months: Option<u32>,
    },
    /// Log a new purchase
    LogPurchase {
        #[arg(long)]
        amount: f64,
        /// impulse, monthly, necessary or misc
        #[arg(long, default_value = "impulse")]
        category: PurchaseCategory,
        /// Where the purchase was prompted, e.g. Instagram
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        note: Option<String>,
        /// Mark as impulsive even if the category is not
        #[arg(long)]
        impulsive: bool,
        /// Purchase date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Manage monthly income
    Income {
        #[command(subcommand)]
        action: IncomeAction,
    },
    /// Manage and project savings plans
    Plans {
        #[command(subcommand)]
        action: PlanAction,
    },
    /// Compare spending an amount today with investing it
    SpentVsSaved {
        #[arg(long)]
        amount: f64,
        /// roth-ira, index-fund or savings
        #[arg(long, default_value = "roth-ira")]
        option: InvestmentOption,
        #[arg(long, default_value_t = 5.0)]
        years: f64,
    },
    /// List lessons or complete a lesson step
    Lessons {
        #[command(subcommand)]
        action: LessonAction,
    },
    /// Answer the onboarding questionnaire and regenerate lessons
    Personalize {
        /// You or your immediate family are immigrants
        #[arg(long)]
        immigrant: bool,
        /// Experience level, 1 (low) to 4 (high)
        #[arg(long)]
        level: u8,
    },
    /// Take a quiz for a lesson module or the personalized deck
    Quiz {
        /// Lesson module title, e.g. "Tax Basics"
        #[arg(long, conflicts_with = "deck", required_unless_present = "deck")]
        module: Option<String>,
        /// Use the deck tailored to your onboarding answers
        #[arg(long)]
        deck: bool,
        /// Comma-separated choice indices, one per question
        #[arg(long, value_delimiter = ',')]
        answers: Vec<usize>,
    },
    /// Show onboarding answers
    Profile,
    /// Delete all data and reload the demo data
    Reset,
}

#[derive(Subcommand)]
enum IncomeAction {
    List,
    Add {
        #[arg(long)]
        amount: f64,
    },
    Remove {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum PlanAction {
    List {
        #[arg(long)]
        years: Option<f64>,
    },
    Add {
        #[arg(long)]
        name: String,
        /// savings, roth-ira, index-fund or other
        #[arg(long, default_value = "savings")]
        kind: PlanKind,
        #[arg(long)]
        monthly: f64,
        /// Expected annual return, e.g. 0.07
        #[arg(long)]
        rate: f64,
    },
    Update {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        monthly: Option<f64>,
        #[arg(long)]
        rate: Option<f64>,
    },
    Project {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        years: Option<f64>,
    },
    Remove {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum LessonAction {
    List,
    Step {
        #[arg(long)]
        id: Uuid,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let today = Local::now().date_naive();
    let mut store = Store::open_at(&config.data_dir, today)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?;

    match cli.command {
        Command::Tracker { months } => {
            print_tracker(&store, months.unwrap_or(config.months_back), today);
        }
        Command::LogPurchase { amount, category, platform, note, impulsive, date } => {
            let timestamp = match date {
                Some(d) => d.and_time(NaiveTime::MIN),
                None => Local::now().naive_local(),
            };
            let mut purchase = Transaction::new(timestamp, amount, category);
            purchase.platform = platform.filter(|p| !p.is_empty());
            purchase.note = note.filter(|n| !n.is_empty());
            purchase.impulsive |= impulsive;

            let id = store.state_mut().log_purchase(purchase)?;
            store.save()?;
            println!("Logged ${:.2} ({}) as {}", amount, category, id);
        }
        Command::Income { action } => run_income(&mut store, action, today)?,
        Command::Plans { action } => run_plans(&mut store, action, &config, today)?,
        Command::SpentVsSaved { amount, option, years } => {
            let result = spent_vs_saved(amount, option.annual_rate(), years);
            println!("Option: {}  Horizon: {} years", option.label(), years);
            println!("  Spent Today: ${:.2}", result.spent);
            println!("  If Invested: ${:.2}", result.would_be);
            println!("  Growth Forgone: ${:.2}", result.forgone());
            println!("\n{}", result.suggestion());
        }
        Command::Lessons { action } => match action {
            LessonAction::List => {
                for lesson in &store.state().lessons {
                    println!(
                        "{} {:<26} {:>4.0}%  {}",
                        lesson.id,
                        lesson.title,
                        lesson.progress * 100.0,
                        lesson.description
                    );
                }
            }
            LessonAction::Step { id } => {
                let progress = store.state_mut().advance_lesson(id)?;
                store.save()?;
                println!("Progress: {:.0}%", progress * 100.0);
            }
        },
        Command::Personalize { immigrant, level } => {
            store.state_mut().personalize(Onboarding::new(immigrant, level)?);
            store.save()?;
            println!("Lessons tailored to your answers:");
            for lesson in &store.state().lessons {
                println!("  {}: {}", lesson.title, lesson.description);
            }
        }
        Command::Quiz { module, deck, answers } => {
            let profile = &store.state().profile;
            let (title, questions) = if deck {
                let level = profile.experience_level.unwrap_or(1);
                let immigrant = profile.is_immigrant_family == Some(true);
                ("Personalized Deck".to_string(), personalized_deck(immigrant, level))
            } else {
                let title = module.unwrap_or_default();
                let questions = questions_for(profile, &title);
                (title, questions)
            };
            if questions.is_empty() {
                bail!("No quiz questions for {:?}", title);
            }
            run_quiz(&title, questions, &answers);
        }
        Command::Profile => {
            let profile = &store.state().profile;
            let immigrant = if profile.is_immigrant_family == Some(true) { "Yes" } else { "No/Not set" };
            println!("Immigrant family: {}", immigrant);
            println!("Experience Level: {}", profile.experience_level.unwrap_or(0));
            println!("Personalized: {}", profile.is_personalized());
            println!("Data directory: {}", store.dir().display());
        }
        Command::Reset => {
            store.state_mut().reset(today);
            store.save()?;
            println!("Demo data restored");
        }
    }

    Ok(())
}

fn print_tracker(store: &Store, months: u32, today: NaiveDate) {
    let buckets = store.state().spending_buckets(months, today);
    let ceiling = chart_ceiling(&buckets);

    println!("{} Spending Tracker", today.year());
    println!("{:>5} {:>12} {:>12}  {}", "Month", "Total", "Impulse", "");
    println!("{}", "-".repeat(75));
    for bucket in &buckets {
        let bar = "#".repeat((bucket.total / ceiling * BAR_WIDTH).round() as usize);
        println!("{:>5} {:>12.2} {:>12.2}  {}", bucket.label, bucket.total, bucket.subset, bar);
    }
    println!("\nCurrent Debt:Income Ratio: {:.2}", store.state().debt_to_income_ratio());
}

fn run_income(store: &mut Store, action: IncomeAction, today: NaiveDate) -> Result<()> {
    match action {
        IncomeAction::List => {
            for income in &store.state().incomes {
                println!(
                    "{} ${:>10.2}  from {}",
                    income.id,
                    income.amount,
                    income.effective_month.format("%b %Y")
                );
            }
        }
        IncomeAction::Add { amount } => {
            let id = store.state_mut().add_income(amount, today)?;
            store.save()?;
            println!("Added income {}", id);
        }
        IncomeAction::Remove { id } => {
            let removed = store.state_mut().remove_income(id)?;
            store.save()?;
            println!("Removed ${:.2} income", removed.amount);
        }
    }
    Ok(())
}

fn run_plans(store: &mut Store, action: PlanAction, config: &Config, today: NaiveDate) -> Result<()> {
    match action {
        PlanAction::List { years } => {
            let years = years.unwrap_or(config.horizon_years);
            println!(
                "{:<36} {:<20} {:<14} {:>9} {:>7} {:>14}",
                "Id",
                "Name",
                "Kind",
                "Monthly",
                "Rate",
                format!("FV {}y", years)
            );
            for plan in &store.state().plans {
                println!(
                    "{:<36} {:<20} {:<14} {:>9.2} {:>6.2}% {:>14.2}",
                    plan.id,
                    plan.name,
                    plan.kind,
                    plan.monthly_contribution,
                    plan.expected_annual_return * 100.0,
                    future_value(plan.monthly_contribution, plan.expected_annual_return, years),
                );
            }
        }
        PlanAction::Add { name, kind, monthly, rate } => {
            let plan = SavingsPlan::new(name, kind, monthly, rate, today.year());
            let id = store.state_mut().add_plan(plan)?;
            store.save()?;
            println!("Added plan {}", id);
        }
        PlanAction::Update { id, name, monthly, rate } => {
            let Some(mut plan) = store.state().plan(id).cloned() else {
                bail!("No plan with id {}", id);
            };
            if let Some(name) = name {
                plan.name = name;
            }
            if let Some(monthly) = monthly {
                plan.monthly_contribution = monthly;
            }
            if let Some(rate) = rate {
                plan.expected_annual_return = rate;
            }
            store.state_mut().update_plan(plan)?;
            store.save()?;
            println!("Saved changes");
        }
        PlanAction::Project { id, years } => {
            let Some(plan) = store.state().plan(id) else {
                bail!("No plan with id {}", id);
            };
            let engine = ProjectionEngine::new(ProjectionConfig::with_horizon(
                years.unwrap_or(config.horizon_years),
            ));
            let result = engine.project_plan(plan);

            println!("{} ({}) projection:", plan.name, plan.kind);
            println!("{:>5} {:>14} {:>14} {:>14}", "Month", "Contributed", "Interest", "Balance");
            println!("{}", "-".repeat(50));
            for row in result.rows.iter().filter(|r| r.month % 12 == 0) {
                println!(
                    "{:>5} {:>14.2} {:>14.2} {:>14.2}",
                    row.month, row.contributions_to_date, row.interest_to_date, row.balance
                );
            }

            let summary = result.summary();
            println!("\nSummary:");
            println!("  Total Months: {}", summary.total_months);
            println!("  Total Contributed: ${:.2}", summary.total_contributions);
            println!("  Total Interest: ${:.2}", summary.total_interest);
            println!("  Final Balance: ${:.2}", summary.final_balance);
        }
        PlanAction::Remove { id } => {
            let removed = store.state_mut().remove_plan(id)?;
            store.save()?;
            println!("Removed plan {}", removed.name);
        }
    }
    Ok(())
}

fn run_quiz(title: &str, questions: Vec<QuizQuestion>, answers: &[usize]) {
    let mut session = QuizSession::new(questions);
    let total = session.len();
    println!("{}\n", title);

    let mut answers = answers.iter();
    while let Some(question) = session.current().cloned() {
        println!("Question {} of {}", session.position() + 1, total);
        println!("{}", question.prompt);
        for (i, choice) in question.choices.iter().enumerate() {
            println!("  [{}] {}", i, choice);
        }

        let Some(&choice) = answers.next() else {
            println!("\n(no answer given; stopping here)");
            break;
        };
        if let Some(outcome) = session.answer(choice) {
            println!("{}", if outcome.correct { "Great job!" } else { "Keep going!" });
            println!("{}\n", question.explanation);
        }
        session.advance();
    }

    if session.is_finished() {
        println!("Quiz complete!");
        println!("Revisit any lessons if a question felt tricky. Consistency compounds.");
    }
    println!("Score: {} / {}", session.score(), total);
}
