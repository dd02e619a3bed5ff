//! Dialoguer prompts filling the add/edit form buffers.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::errors::CliError;
use crate::ledger::{Category, ExpenseDraft};
use crate::profile::ProfileDraft;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prompts for every expense field, seeding each prompt from the draft so the
/// same form serves both the add and edit dialogs.
pub fn expense_form(theme: &ColorfulTheme, draft: &mut ExpenseDraft) -> Result<(), CliError> {
    draft.title = Input::with_theme(theme)
        .with_prompt("Title")
        .allow_empty(true)
        .with_initial_text(draft.title.clone())
        .interact_text()?;
    draft.amount = Input::with_theme(theme)
        .with_prompt("Amount")
        .allow_empty(true)
        .with_initial_text(draft.amount.clone())
        .interact_text()?;
    let names: Vec<&str> = Category::ALL.iter().map(|category| category.name()).collect();
    let current = names
        .iter()
        .position(|name| name.eq_ignore_ascii_case(draft.category.trim()))
        .unwrap_or(0);
    let chosen = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&names)
        .default(current)
        .interact()?;
    draft.category = names[chosen].to_string();
    let date_text: String = Input::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .with_initial_text(draft.date.format(DATE_FORMAT).to_string())
        .validate_with(|input: &String| match NaiveDate::parse_from_str(input, DATE_FORMAT) {
            Ok(_) => Ok(()),
            Err(_) => Err("enter a date as YYYY-MM-DD"),
        })
        .interact_text()?;
    draft.date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
        .map_err(|err| CliError::Prompt(err.to_string()))?;
    Ok(())
}

pub fn profile_form(theme: &ColorfulTheme, draft: &mut ProfileDraft) -> Result<(), CliError> {
    draft.name = Input::with_theme(theme)
        .with_prompt("Full Name")
        .allow_empty(true)
        .with_initial_text(draft.name.clone())
        .interact_text()?;
    draft.email = Input::with_theme(theme)
        .with_prompt("Email Address")
        .allow_empty(true)
        .with_initial_text(draft.email.clone())
        .interact_text()?;
    draft.monthly_budget = Input::with_theme(theme)
        .with_prompt("Monthly Budget")
        .allow_empty(true)
        .with_initial_text(draft.monthly_budget.clone())
        .interact_text()?;
    draft.currency = Input::with_theme(theme)
        .with_prompt("Currency")
        .allow_empty(true)
        .with_initial_text(draft.currency.clone())
        .interact_text()?;
    Ok(())
}
