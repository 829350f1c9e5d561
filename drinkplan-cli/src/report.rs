use colored::Colorize;
use std::io::{self, Write};

use drinkplan_engine::{DrinkCategory, ResultSet, Severity, TravelerKind};

pub fn write_console_report(
    out: &mut dyn Write,
    result: &ResultSet,
    verbose: bool,
) -> io::Result<()> {
    let input = &result.input;
    writeln!(out, "{}", "🍹 Drinkplan Package Comparison".bright_cyan().bold())?;
    writeln!(out, "{}", "===============================".cyan())?;
    writeln!(
        out,
        "Trip: {} days ({} at sea, {} in port)",
        input.trip.days,
        input.trip.sea_days,
        input.trip.port_days()
    )?;
    writeln!(
        out,
        "Party: {} adult(s), {} minor(s)",
        input.party.adult_count, input.party.minor_count
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<20} {:>10} {:>12} {:>12} {:>10}",
        "Strategy", "Daily", "Trip total", "Per person", "Per day"
    )?;
    for cost in result.costs.iter() {
        let row = format!(
            "{:<20} {:>10} {:>12} {:>12} {:>10}",
            cost.strategy.label(),
            money(cost.daily_rate),
            money(cost.trip_total),
            money(cost.per_person_total),
            money(cost.per_day_total)
        );
        if cost.strategy == result.winner {
            writeln!(out, "{} ★", row.green().bold())?;
        } else {
            writeln!(out, "{row}")?;
        }
    }
    writeln!(out)?;

    writeln!(
        out,
        "Best value: {} (saves {} over {})",
        result.winner.label().green().bold(),
        money(result.savings),
        result.compared_to.label().to_lowercase()
    )?;
    if result.voucher_value > 0.0 {
        writeln!(
            out,
            "Voucher value over the trip: {}",
            money(result.voucher_value)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "👥 Per traveler".bright_yellow().bold())?;
    for line in &result.travelers.lines {
        let kind = match line.kind {
            TravelerKind::Adult => "Adult",
            TravelerKind::Minor => "Minor",
        };
        let entry = format!(
            "  {kind} {}: {} at {}/day, {} total",
            line.ordinal,
            line.strategy.label(),
            money(line.daily_rate),
            money(line.trip_total)
        );
        if line.forced {
            writeln!(out, "{} {}", entry, "(required)".yellow())?;
            if let Some(reason) = &line.reason {
                writeln!(out, "     {}", reason.dimmed())?;
            }
        } else {
            writeln!(out, "{entry}")?;
        }
    }

    if verbose {
        write_details(out, result)?;
    }

    if !result.advisories.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "💡 Advisories".bright_magenta().bold())?;
        for advisory in &result.advisories {
            let marker = match advisory.severity {
                Severity::Info => "•".blue(),
                Severity::Caution => "!".yellow(),
                Severity::Warning => "⚠".red(),
            };
            writeln!(out, "  {marker} {}", advisory.message)?;
        }
    }
    Ok(())
}

fn write_details(out: &mut dyn Write, result: &ResultSet) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "🧾 Menu spend by category".bright_yellow().bold())?;
    for category in DrinkCategory::ALL {
        let amount = result.categories.amount(category);
        if amount > 0.0 {
            writeln!(
                out,
                "  {:<14} {:>10} ({:.0}%)",
                category.label(),
                money(amount),
                result.categories.share(category) * 100.0
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "🌊 Typical day".bright_yellow().bold())?;
    writeln!(
        out,
        "  Sea day: {}  Port day: {}",
        money(result.day_profile.sea_day_spend),
        money(result.day_profile.port_day_spend)
    )?;

    writeln!(out)?;
    writeln!(out, "{}", "⚖ Break-even menu spend per adult".bright_yellow().bold())?;
    for point in &result.break_even {
        writeln!(
            out,
            "  {:<8} {}/day",
            point.tier.id(),
            money(point.daily_spend_per_adult)
        )?;
    }
    Ok(())
}

pub fn write_json_report(out: &mut dyn Write, result: &ResultSet) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}
