//! Page controllers
//!
//! Each page owns the state its screen holds and maps voice commands to
//! speech and navigation. Dispatch is synchronous; delays and speaking are
//! left to the caller (see [`crate::agent::Assistant`]).

pub mod dashboard;
pub mod login;
pub mod payment;

pub use dashboard::DashboardPage;
pub use login::{Captcha, LoginPage};
pub use payment::{PaymentPage, PaymentReceipt};

use crate::classifier::VoiceCommand;
use crate::i18n::Translator;
use crate::models::{Action, Route, VoiceOutcome};

/// A screen that reacts to voice commands
pub trait VoicePage {
    fn route(&self) -> Route;

    /// Translation key of the audio guide spoken when the page opens
    fn guide_key(&self) -> &'static str;

    fn handle_voice_command(
        &mut self,
        command: VoiceCommand,
        transcript: &str,
        tr: &Translator,
    ) -> VoiceOutcome;
}

/// Reply for a command the page has no handler for
pub fn not_understood(command: VoiceCommand, transcript: &str, tr: &Translator) -> VoiceOutcome {
    VoiceOutcome::speak(
        command,
        tr.t_with(
            "voice.responses.notUnderstood",
            &[("transcript", transcript.to_string())],
        ),
    )
}

/// Screens without their own command set (registration, settings)
#[derive(Debug, Clone, Copy)]
pub struct StaticPage {
    route: Route,
}

impl StaticPage {
    pub fn new(route: Route) -> Self {
        Self { route }
    }
}

impl VoicePage for StaticPage {
    fn route(&self) -> Route {
        self.route
    }

    fn guide_key(&self) -> &'static str {
        match self.route {
            Route::Settings => "audio.settingsGuide",
            Route::Payment => "audio.paymentGuide",
            Route::Dashboard => "audio.dashboardGuide",
            Route::Login | Route::Register => "audio.loginGuide",
        }
    }

    fn handle_voice_command(
        &mut self,
        command: VoiceCommand,
        transcript: &str,
        tr: &Translator,
    ) -> VoiceOutcome {
        let back = if self.route == Route::Register {
            Route::Login
        } else {
            Route::Dashboard
        };

        match command {
            VoiceCommand::GoBack => VoiceOutcome::act(command, Action::Navigate { route: back }),
            VoiceCommand::GoDashboard if self.route != Route::Register => {
                VoiceOutcome::act(command, Action::Navigate { route: Route::Dashboard })
            }
            VoiceCommand::Login if self.route == Route::Register => {
                VoiceOutcome::act(command, Action::Navigate { route: Route::Login })
            }
            VoiceCommand::ShowHelp => VoiceOutcome::speak(command, tr.t(self.guide_key())),
            _ => not_understood(command, transcript, tr),
        }
    }
}
