//! Typed payload of the `status` entity.
//!
//! The session keeps entity metadata as free-form JSON; these types give the
//! status handlers a checked view of it.

use serde::{Deserialize, Serialize};

pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StatusMeta {
    pub date: GameDate,
    pub finances: Finances,
    pub weather: Weather,
    pub location: Location,
    pub politics: Politics,
    pub economics: Economics,
    pub personal: Personal,
    pub description: String,
}

// =============================================================================
// Date
// =============================================================================

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GameDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub dow: String,
    pub time: TimeOfDay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl GameDate {
    /// Month in `1..=12` and day within that month.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && (1..=days_in_month(self.month, self.year)).contains(&self.day)
    }

    /// Move to the next calendar day. Returns `true` when the month changed.
    pub fn advance(&mut self) -> bool {
        self.dow = next_day_of_week(&self.dow);
        if self.day < days_in_month(self.month, self.year) {
            self.day += 1;
            return false;
        }

        self.day = 1;
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
        true
    }
}

fn next_day_of_week(dow: &str) -> String {
    let next = DAYS_OF_WEEK
        .iter()
        .position(|d| d.eq_ignore_ascii_case(dow))
        .map(|i| (i + 1) % DAYS_OF_WEEK.len())
        .unwrap_or(0);
    DAYS_OF_WEEK[next].to_string()
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// =============================================================================
// Finances
// =============================================================================

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Finances {
    pub occupation: Occupation,
    pub accounts: Vec<Account>,
    /// Monthly expenses
    pub expenses: Vec<Expense>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Occupation {
    pub title: String,
    /// Monthly salary
    pub salary: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Account {
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub name: String,
    pub amount: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
}

impl Finances {
    pub fn monthly_expenses(&self) -> i64 {
        self.expenses
            .iter()
            .fold(0, |total: i64, e| total.saturating_add(e.amount))
    }

    pub fn balance(&self) -> i64 {
        self.accounts
            .iter()
            .fold(0, |total: i64, a| total.saturating_add(a.amount))
    }

    /// Pay the salary into, and the expenses out of, the first checking
    /// account (or the first account of any kind).
    pub fn settle_month(&mut self) {
        let net = self.occupation.salary.saturating_sub(self.monthly_expenses());
        let target = self
            .accounts
            .iter()
            .position(|a| a.kind == AccountType::Checking)
            .or(if self.accounts.is_empty() { None } else { Some(0) });
        if let Some(i) = target {
            let account = &mut self.accounts[i];
            account.amount = account.amount.saturating_add(net);
        }
    }
}

// =============================================================================
// Surroundings
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn for_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Temperature {
    pub degrees: i32,
    #[serde(rename = "type")]
    pub scale: TemperatureScale,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Weather {
    pub season: Season,
    pub temperature: Temperature,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub continent: String,
    pub country: String,
    pub city: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spectrum {
    Liberal,
    Conservative,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Politics {
    pub spectrum: Spectrum,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Hot,
    Cold,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Economics {
    /// Yearly inflation, percent
    pub inflation: f64,
    pub sentiment: Sentiment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Angry,
    Sad,
    Hopeful,
    Happy,
    Anxious,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Angry => "angry",
            Self::Sad => "sad",
            Self::Hopeful => "hopeful",
            Self::Happy => "happy",
            Self::Anxious => "anxious",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Personal {
    pub mood: Mood,
    /// 0..=100
    pub energy: u8,
}
