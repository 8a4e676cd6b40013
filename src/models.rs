//! Core data models for the Gullak assistant

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classifier::VoiceCommand;
use crate::error::AssistantError;

//
// ================= Locale =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Mr,
    Es,
    De,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Mr => "mr",
            Locale::Es => "es",
            Locale::De => "de",
        }
    }

    /// Resolve a language tag such as `hi-IN` or `DE`, falling back to English.
    pub fn from_tag(tag: &str) -> Locale {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match primary.as_str() {
            "en" => Ok(Locale::En),
            "hi" => Ok(Locale::Hi),
            "mr" => Ok(Locale::Mr),
            "es" => Ok(Locale::Es),
            "de" => Ok(Locale::De),
            _ => Err(AssistantError::InvalidLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

//
// ================= Navigation =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Payment,
    Settings,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Payment => "/payment",
            Route::Settings => "/settings",
        }
    }
}

impl FromStr for Route {
    type Err = AssistantError;

    /// Accepts a page name (`dashboard`) or its path (`/dashboard`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "login" | "/" => Ok(Route::Login),
            "register" | "/register" => Ok(Route::Register),
            "dashboard" | "/dashboard" => Ok(Route::Dashboard),
            "payment" | "/payment" => Ok(Route::Payment),
            "settings" | "/settings" => Ok(Route::Settings),
            _ => Err(AssistantError::InvalidPage(s.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

//
// ================= Savings =================
//

/// Fields missing from client input take their defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target: u64,
    pub current: u64,
    pub deadline: NaiveDate,
    pub category: GoalCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Emergency,
    Vacation,
    Gadget,
    Education,
    #[default]
    Other,
}

impl GoalCategory {
    /// Translation key of the category label
    pub fn label_key(&self) -> &'static str {
        match self {
            GoalCategory::Emergency => "goals.categories.emergency",
            GoalCategory::Vacation => "goals.categories.vacation",
            GoalCategory::Gadget => "goals.categories.gadget",
            GoalCategory::Education => "goals.categories.education",
            GoalCategory::Other => "goals.categories.other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsSummary {
    pub total_savings: u64,
    pub weekly_growth: f64,
    pub monthly_growth: f64,
    pub yearly_growth: f64,
    pub reward_points: u32,
    pub saving_streak: u32,
}

/// Read-only account state interpolated into chatbot responses.
/// Missing values read as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccountSnapshot {
    pub savings: u64,
    pub goals: Vec<SavingsGoal>,
    pub total_saved: u64,
}

//
// ================= Payments =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Upi,
    Bank,
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Bank => "Bank Transfer",
            PaymentMethod::Card => "Credit/Debit Card",
        };
        write!(f, "{}", s)
    }
}

//
// ================= Voice Outcome =================
//

/// Side effect requested by a voice command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Navigate { route: Route },
    Login,
    Logout,
    SetAmount { amount: u64 },
    SelectMethod { method: PaymentMethod },
    SubmitPayment,
}

/// Result of dispatching one transcript on a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceOutcome {
    pub command: VoiceCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl VoiceOutcome {
    pub fn speak(command: VoiceCommand, speech: String) -> Self {
        Self {
            command,
            speech: Some(speech),
            action: None,
        }
    }

    pub fn act(command: VoiceCommand, action: Action) -> Self {
        Self {
            command,
            speech: None,
            action: Some(action),
        }
    }

    pub fn speak_and_act(command: VoiceCommand, speech: String, action: Action) -> Self {
        Self {
            command,
            speech: Some(speech),
            action: Some(action),
        }
    }
}
