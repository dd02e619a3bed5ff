//! Interactive dashboard shell: one fixed menu per page of the original app.

pub mod forms;
pub mod output;

use dialoguer::{theme::ColorfulTheme, Select};

use crate::errors::CliError;
use crate::ledger::{ExpenseDraft, ExpenseLedger};
use crate::profile::{account_stats, Profile, ProfileDraft};
use crate::report::{
    budget_status, category_breakdown, insight_cards, monthly_comparison, overview,
    top_spending_days, weekly_series, InsightKind, Trend,
};
use crate::storage::{JsonStorage, StorageBackend};

/// Runs the dashboard shell until the user quits.
pub fn run() -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    let storage = match JsonStorage::new_default() {
        Ok(backend) => Some(backend),
        Err(err) => {
            tracing::warn!(%err, "persistence slot unavailable");
            output::warning(format!("persistence unavailable: {err}"));
            None
        }
    };
    // Always seed from the mock list; the slot is write-only.
    let mut ledger = ExpenseLedger::with_mock_data();
    let mut profile = Profile::default();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Personal Finance Dashboard")
            .items(&["Overview", "Expenses", "Insights", "Profile", "Quit"])
            .default(0)
            .interact()?;
        match choice {
            0 => render_overview(&ledger, &profile),
            1 => expenses_menu(&theme, &mut ledger, storage.as_ref())?,
            2 => render_insights(&profile),
            3 => profile_menu(&theme, &mut profile)?,
            _ => break,
        }
    }
    Ok(())
}

fn persist(storage: Option<&JsonStorage>, ledger: &ExpenseLedger) {
    let Some(backend) = storage else { return };
    if let Err(err) = backend.save(ledger.expenses()) {
        tracing::warn!(%err, "failed to persist expenses");
        output::warning(format!("could not persist expenses: {err}"));
    }
}

fn expenses_menu(
    theme: &ColorfulTheme,
    ledger: &mut ExpenseLedger,
    storage: Option<&JsonStorage>,
) -> Result<(), CliError> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Expenses")
            .items(&[
                "List expenses",
                "Add expense",
                "Edit expense",
                "Delete expense",
                "Back",
            ])
            .default(0)
            .interact()?;
        match choice {
            0 => render_expense_table(ledger),
            1 => add_expense(theme, ledger, storage)?,
            2 => edit_expense(theme, ledger, storage)?,
            3 => delete_expense(theme, ledger, storage)?,
            _ => return Ok(()),
        }
    }
}

fn add_expense(
    theme: &ColorfulTheme,
    ledger: &mut ExpenseLedger,
    storage: Option<&JsonStorage>,
) -> Result<(), CliError> {
    let mut draft = ExpenseDraft::new();
    forms::expense_form(theme, &mut draft)?;
    match ledger.add(&draft) {
        Ok(_) => {
            output::success("Expense added successfully");
            persist(storage, ledger);
        }
        Err(err) => output::error(err),
    }
    Ok(())
}

fn edit_expense(
    theme: &ColorfulTheme,
    ledger: &mut ExpenseLedger,
    storage: Option<&JsonStorage>,
) -> Result<(), CliError> {
    let Some(id) = select_expense(theme, ledger, "Edit which expense?")? else {
        return Ok(());
    };
    let mut draft = match ledger.begin_edit(&id) {
        Ok(draft) => draft,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };
    forms::expense_form(theme, &mut draft)?;
    match ledger.commit_edit(&draft) {
        Ok(()) => {
            output::success("Expense updated successfully");
            persist(storage, ledger);
        }
        Err(err) => {
            ledger.cancel_edit();
            output::error(err);
        }
    }
    Ok(())
}

fn delete_expense(
    theme: &ColorfulTheme,
    ledger: &mut ExpenseLedger,
    storage: Option<&JsonStorage>,
) -> Result<(), CliError> {
    let Some(id) = select_expense(theme, ledger, "Delete which expense?")? else {
        return Ok(());
    };
    if ledger.delete(&id) {
        output::success("Expense deleted successfully");
        persist(storage, ledger);
    }
    Ok(())
}

/// Row picker shared by the edit and delete actions. Returns `None` when the
/// ledger is empty or the user backs out.
fn select_expense(
    theme: &ColorfulTheme,
    ledger: &ExpenseLedger,
    prompt: &str,
) -> Result<Option<String>, CliError> {
    if ledger.is_empty() {
        output::info("No expenses recorded yet");
        return Ok(None);
    }
    let mut labels: Vec<String> = ledger
        .expenses()
        .iter()
        .map(|expense| {
            format!(
                "{} | ${:.2} | {} | {}",
                expense.title, expense.amount, expense.category, expense.date
            )
        })
        .collect();
    labels.push("Cancel".to_string());
    let chosen = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    if chosen == ledger.len() {
        return Ok(None);
    }
    Ok(Some(ledger.expenses()[chosen].id.clone()))
}

fn render_expense_table(ledger: &ExpenseLedger) {
    output::section("Recent Expenses");
    if ledger.is_empty() {
        output::info("No expenses recorded yet");
        return;
    }
    println!(
        "{:<24} {:<16} {:<12} {:>10}",
        "Title", "Category", "Date", "Amount"
    );
    for expense in ledger.expenses() {
        println!(
            "{:<24} {:<16} {:<12} {:>10}",
            expense.title,
            expense.category,
            expense.date.to_string(),
            format!("${:.2}", expense.amount)
        );
    }
    println!(
        "Total: ${:.2} across {} transactions",
        ledger.total(),
        ledger.len()
    );
}

fn render_overview(ledger: &ExpenseLedger, profile: &Profile) {
    let report = overview(ledger, profile.monthly_budget);
    output::section(format!("Welcome back, {}!", profile.name));
    println!("Total budget:      ${:.2}", report.monthly_budget);
    println!("Total expenses:    ${:.2}", report.total_expenses);
    println!(
        "Budget remaining:  ${:.2} ({:.0}% of monthly budget)",
        report.budget_remaining, report.budget_remaining_percent
    );
    println!("Weekly average:    ${:.0}", report.weekly_average);
    if let Some(largest) = &report.largest_category {
        println!(
            "Largest category:  {} (${:.2} this month)",
            largest.category, largest.total
        );
    }

    output::section("Expenses by Category");
    for slice in category_breakdown(ledger) {
        println!(
            "{:<16} ${:>8.2}  {:>5.1}%",
            slice.category.to_string(),
            slice.total,
            slice.percent
        );
    }

    output::section("Weekly Expenses");
    for week in weekly_series() {
        println!("{:<8} ${:.0}", week.week, week.amount);
    }
}

fn render_insights(profile: &Profile) {
    output::section("AI-Generated Insights");
    for insight in insight_cards() {
        let tone = match insight.kind {
            InsightKind::Positive => "+",
            InsightKind::Warning => "!",
            InsightKind::Neutral => "=",
        };
        let trend = match insight.trend {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        };
        println!("[{tone}] {} ({}, {trend})", insight.title, insight.amount);
        println!("    {}", insight.description);
    }

    output::section("Month-over-Month Comparison");
    for row in monthly_comparison() {
        println!(
            "{:<16} this month ${:<7.0} last month ${:<7.0} {:+.1}%",
            row.category.to_string(),
            row.this_month,
            row.last_month,
            row.change_percent()
        );
    }

    output::section("Top Spending Days");
    for day in top_spending_days() {
        println!("{:<10} ${:.0} avg", day.day, day.average);
    }

    output::section("Budget Status");
    let status = budget_status(profile.monthly_budget);
    println!("Monthly budget:  ${:.2}", status.monthly_budget);
    println!("Spent so far:    ${:.2}", status.spent);
    println!("Remaining:       ${:.2}", status.remaining());
    println!("{:.1}% of budget used", status.used_percent());
}

fn render_profile(profile: &Profile) {
    output::section("Profile");
    println!("[{}] {}", profile.initials(), profile.name);
    println!("Email:           {}", profile.email);
    println!("Monthly budget:  ${:.2}", profile.monthly_budget);
    println!("Currency:        {}", profile.currency);
    println!("Member since:    {}", profile.join_date);

    output::section("Account Statistics");
    for stat in account_stats() {
        println!("{:<18} {:<10} {}", stat.label, stat.value, stat.period);
    }
}

fn profile_menu(theme: &ColorfulTheme, profile: &mut Profile) -> Result<(), CliError> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Profile")
            .items(&["View profile", "Edit profile", "Back"])
            .default(0)
            .interact()?;
        match choice {
            0 => render_profile(profile),
            1 => {
                let mut draft = ProfileDraft::from_profile(profile);
                forms::profile_form(theme, &mut draft)?;
                match profile.apply(&draft) {
                    Ok(()) => output::success("Your profile has been successfully updated"),
                    Err(err) => output::error(err),
                }
            }
            _ => return Ok(()),
        }
    }
}
