use crate::core::capability::{Calendar, StatusView};
use crate::core::error::MetaError;
use crate::models::{Sentiment, Spectrum, StatusMeta};
use crate::utils::format::{
    capitalize, format_date, format_money, format_percent, format_temperature, format_time,
};
use crate::utils::html;

pub fn status(view: &StatusView) -> String {
    let meta = view.meta();
    format!(
        "{}{}{}{}",
        html::heading("Status"),
        html::paragraph(&format!(
            "{} {}",
            format_date(&meta.date),
            format_time(&meta.date.time)
        )),
        html::paragraph(&meta.description),
        html::list("", status_lines(meta))
    )
}

fn status_lines(meta: &StatusMeta) -> Vec<String> {
    let line = |label: &str, value: String| format!("{}: {}", html::bold(label), value);
    let finances = &meta.finances;
    let accounts = match finances.accounts.len() {
        1 => "1 account".to_string(),
        n => format!("{} accounts", n),
    };
    let sentiment = match meta.economics.sentiment {
        Sentiment::Hot => "hot",
        Sentiment::Cold => "cold",
    };
    let spectrum = match meta.politics.spectrum {
        Spectrum::Liberal => "liberal",
        Spectrum::Conservative => "conservative",
    };

    vec![
        line(
            "Location",
            format!(
                "{}, {}, {}",
                meta.location.city, meta.location.country, meta.location.continent
            ),
        ),
        line(
            "Weather",
            format!(
                "{}, {}",
                meta.weather.season.as_str(),
                format_temperature(&meta.weather.temperature)
            ),
        ),
        line(
            "Work",
            format!(
                "{} earning {} a month",
                finances.occupation.title,
                format_money(finances.occupation.salary)
            ),
        ),
        line(
            "Money",
            format!(
                "{} across {}, {} of monthly expenses",
                format_money(finances.balance()),
                accounts,
                format_money(finances.monthly_expenses())
            ),
        ),
        line(
            "Economy",
            format!(
                "inflation at {}, the market feels {}",
                format_percent(meta.economics.inflation),
                sentiment
            ),
        ),
        line("Politics", spectrum.to_string()),
        line(
            "Mood",
            format!(
                "{}, energy {}/100",
                capitalize(meta.personal.mood.as_str()),
                meta.personal.energy
            ),
        ),
    ]
}

/// Let a day pass and report the new date.
pub fn skip(mut calendar: Calendar<'_>) -> Result<String, MetaError> {
    let new_month = calendar.advance_day();
    let date = format_date(calendar.today());
    let mut out = format!(
        "{}{}",
        html::heading("A Day Goes By"),
        html::paragraph(&format!("Nothing much happened today. It is now {}.", date))
    );
    if new_month {
        out.push_str(&html::paragraph(&format!(
            "Payday. After the bills I have {} left.",
            format_money(calendar.meta().finances.balance())
        )));
    }
    calendar.commit()?;
    Ok(out)
}
