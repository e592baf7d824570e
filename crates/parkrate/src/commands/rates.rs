//! Validate a rates document and list the expanded rule table.

use tabled::Tabled;

use parkrate_core::{DayName, RateRule};

use crate::cli::{GlobalOpts, RatesArgs};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "From")]
    start: String,
    #[tabled(rename = "Until")]
    end: String,
    #[tabled(rename = "Timezone")]
    tz: String,
    #[tabled(rename = "Price")]
    price: u64,
}

impl From<&RateRule> for RuleRow {
    fn from(rule: &RateRule) -> Self {
        Self {
            day: DayName::from(rule.weekday()).to_string(),
            start: rule.start_time().format("%H:%M").to_string(),
            end: rule.end_time().format("%H:%M").to_string(),
            tz: rule.tz().name().to_owned(),
            price: rule.price(),
        }
    }
}

fn rule_line(rule: &RateRule) -> String {
    format!(
        "{} {}-{} {} {}",
        DayName::from(rule.weekday()),
        rule.start_time().format("%H%M"),
        rule.end_time().format("%H%M"),
        rule.tz().name(),
        rule.price()
    )
}

pub fn handle(args: &RatesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = super::load(global)?;
    let rules = super::load_rules(args.rates.as_deref(), &cfg)?;
    tracing::info!(rules = rules.len(), "rates document is valid");

    let out = output::render_list(global.output, &rules, |r| RuleRow::from(r), rule_line)?;
    output::print_output(&out);
    Ok(())
}
