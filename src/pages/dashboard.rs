//! Savings dashboard with mock data

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::{not_understood, VoicePage};
use crate::classifier::VoiceCommand;
use crate::i18n::Translator;
use crate::models::{
    AccountSnapshot, Action, GoalCategory, Route, SavingsGoal, SavingsSummary, VoiceOutcome,
};

/// Rupee amount with thousands separators, e.g. `₹15,750`
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("₹{}", grouped)
}

/// Completion percentage, capped at 100
pub fn goal_progress(goal: &SavingsGoal) -> f64 {
    if goal.target == 0 {
        return 100.0;
    }
    (goal.current as f64 / goal.target as f64 * 100.0).min(100.0)
}

/// Whole days until the deadline, never negative
pub fn days_left(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days().max(0)
}

/// Goal as shown on a dashboard card
#[derive(Debug, Clone, Serialize)]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: SavingsGoal,
    pub category_label: String,
    pub progress: f64,
    pub days_left: i64,
}

#[derive(Debug, Clone)]
pub struct DashboardPage {
    summary: SavingsSummary,
    goals: Vec<SavingsGoal>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self {
            summary: SavingsSummary {
                total_savings: 15750,
                weekly_growth: 8.5,
                monthly_growth: 12.3,
                yearly_growth: 34.7,
                reward_points: 2340,
                saving_streak: 23,
            },
            goals: vec![
                SavingsGoal {
                    id: "1".into(),
                    name: "Emergency Fund".into(),
                    target: 50000,
                    current: 15750,
                    deadline: date(2024, 12, 31),
                    category: GoalCategory::Emergency,
                },
                SavingsGoal {
                    id: "2".into(),
                    name: "Vacation to Goa".into(),
                    target: 25000,
                    current: 8500,
                    deadline: date(2024, 10, 15),
                    category: GoalCategory::Vacation,
                },
                SavingsGoal {
                    id: "3".into(),
                    name: "New Laptop".into(),
                    target: 75000,
                    current: 22000,
                    deadline: date(2024, 11, 30),
                    category: GoalCategory::Gadget,
                },
            ],
        }
    }
}

impl DashboardPage {
    pub fn new(summary: SavingsSummary, goals: Vec<SavingsGoal>) -> Self {
        Self { summary, goals }
    }

    pub fn summary(&self) -> &SavingsSummary {
        &self.summary
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    pub fn goal_views(&self, tr: &Translator, today: NaiveDate) -> Vec<GoalView> {
        self.goals
            .iter()
            .map(|goal| GoalView {
                goal: goal.clone(),
                category_label: tr.t(goal.category.label_key()),
                progress: goal_progress(goal),
                days_left: days_left(goal.deadline, today),
            })
            .collect()
    }

    /// Account state handed to the chatbot once signed in
    pub fn account_snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            savings: self.summary.total_savings,
            goals: self.goals.clone(),
            total_saved: self.goals.iter().map(|g| g.current).sum(),
        }
    }
}

impl VoicePage for DashboardPage {
    fn route(&self) -> Route {
        Route::Dashboard
    }

    fn guide_key(&self) -> &'static str {
        "audio.dashboardGuide"
    }

    fn handle_voice_command(
        &mut self,
        command: VoiceCommand,
        transcript: &str,
        tr: &Translator,
    ) -> VoiceOutcome {
        match command {
            VoiceCommand::AddMoney => {
                VoiceOutcome::act(command, Action::Navigate { route: Route::Payment })
            }
            VoiceCommand::CreateGoal => {
                VoiceOutcome::speak(command, tr.t("voice.responses.goalComingSoon"))
            }
            VoiceCommand::CheckBalance => VoiceOutcome::speak(
                command,
                tr.t_with(
                    "voice.responses.balance",
                    &[("amount", format_currency(self.summary.total_savings))],
                ),
            ),
            VoiceCommand::ShowRewards => VoiceOutcome::speak(
                command,
                tr.t_with(
                    "voice.responses.rewards",
                    &[("points", self.summary.reward_points.to_string())],
                ),
            ),
            VoiceCommand::OpenSettings => {
                VoiceOutcome::act(command, Action::Navigate { route: Route::Settings })
            }
            VoiceCommand::Logout => VoiceOutcome::speak_and_act(
                command,
                tr.t("voice.responses.loggingOut"),
                Action::Logout,
            ),
            VoiceCommand::ShowHelp => {
                VoiceOutcome::speak(command, tr.t("voice.responses.dashboardHelp"))
            }
            _ => not_understood(command, transcript, tr),
        }
    }
}

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
