//! Login screen: captcha gate and mock sign-in
//!
//! There is no credential check. A correct captcha is the only requirement.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{not_understood, VoicePage};
use crate::classifier::VoiceCommand;
use crate::i18n::Translator;
use crate::models::{Action, Route, VoiceOutcome};

const CAPTCHA_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CAPTCHA_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captcha {
    code: String,
}

impl Captcha {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..CAPTCHA_LEN)
            .map(|_| CAPTCHA_CHARS[rng.gen_range(0..CAPTCHA_CHARS.len())] as char)
            .collect();
        Self { code }
    }

    /// Fixed code, for replaying a captcha shown elsewhere
    pub fn from_code(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Case-insensitive comparison with the displayed code
    pub fn verify(&self, input: &str) -> bool {
        input.to_uppercase() == self.code
    }
}

#[derive(Debug, Clone)]
pub struct LoginPage {
    captcha: Captcha,
    captcha_input: String,
    captcha_valid: bool,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginPage {
    pub fn new() -> Self {
        Self::with_captcha(Captcha::generate())
    }

    pub fn with_captcha(captcha: Captcha) -> Self {
        Self {
            captcha,
            captcha_input: String::new(),
            captcha_valid: false,
        }
    }

    pub fn captcha(&self) -> &Captcha {
        &self.captcha
    }

    /// Replace the captcha and clear whatever was typed
    pub fn refresh_captcha(&mut self) {
        self.captcha = Captcha::generate();
        self.captcha_input.clear();
        self.captcha_valid = false;
    }

    pub fn enter_captcha(&mut self, input: &str) -> bool {
        self.captcha_input = input.to_string();
        self.captcha_valid = self.captcha.verify(input);
        debug!(valid = self.captcha_valid, "Captcha entered");
        self.captcha_valid
    }

    pub fn captcha_input(&self) -> &str {
        &self.captcha_input
    }

    pub fn is_captcha_valid(&self) -> bool {
        self.captcha_valid
    }

    /// Trust a captcha check that was done by the client
    pub fn set_captcha_valid(&mut self, valid: bool) {
        self.captcha_valid = valid;
    }

    pub fn login(&self, command: VoiceCommand, tr: &Translator) -> VoiceOutcome {
        if !self.captcha_valid {
            return VoiceOutcome::speak(command, tr.t("voice.responses.captchaRequired"));
        }

        info!("Mock login accepted");
        VoiceOutcome::speak_and_act(command, tr.t("voice.responses.loggingIn"), Action::Login)
    }

    /// Google sign-in skips the captcha
    pub fn login_with_google(&self, tr: &Translator) -> VoiceOutcome {
        info!("Mock Google login accepted");
        VoiceOutcome::speak_and_act(
            VoiceCommand::Login,
            tr.t("voice.responses.googleLogin"),
            Action::Login,
        )
    }
}

impl VoicePage for LoginPage {
    fn route(&self) -> Route {
        Route::Login
    }

    fn guide_key(&self) -> &'static str {
        "audio.welcomeMessage"
    }

    fn handle_voice_command(
        &mut self,
        command: VoiceCommand,
        transcript: &str,
        tr: &Translator,
    ) -> VoiceOutcome {
        match command {
            VoiceCommand::Login | VoiceCommand::GoDashboard => self.login(command, tr),
            VoiceCommand::Register => {
                VoiceOutcome::act(command, Action::Navigate { route: Route::Register })
            }
            VoiceCommand::ShowHelp => VoiceOutcome::speak(command, tr.t("audio.loginGuide")),
            _ => not_understood(command, transcript, tr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_captcha_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let captcha = Captcha::generate_with(&mut rng);
            assert_eq!(captcha.code().len(), CAPTCHA_LEN);
            assert!(captcha
                .code()
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_captcha_is_case_insensitive() {
        let captcha = Captcha::from_code("AB12Z");
        assert!(captcha.verify("ab12z"));
        assert!(captcha.verify("AB12Z"));
        assert!(!captcha.verify("AB12"));
        assert!(!captcha.verify(""));
    }

    #[test]
    fn test_login_requires_captcha() {
        let tr = Translator::default();
        let mut page = LoginPage::with_captcha(Captcha::from_code("QWE12"));

        let outcome = page.handle_voice_command(VoiceCommand::Login, "log in", &tr);
        assert_eq!(
            outcome.speech.as_deref(),
            Some("Please enter the correct captcha first.")
        );
        assert!(outcome.action.is_none());

        assert!(page.enter_captcha("qwe12"));
        let outcome = page.handle_voice_command(VoiceCommand::GoDashboard, "dashboard", &tr);
        assert_eq!(outcome.speech.as_deref(), Some("Logging you in..."));
        assert_eq!(outcome.action, Some(Action::Login));
    }

    #[test]
    fn test_refresh_clears_input() {
        let mut page = LoginPage::with_captcha(Captcha::from_code("AAAAA"));
        page.enter_captcha("aaaaa");
        assert!(page.is_captcha_valid());

        page.refresh_captcha();
        assert!(!page.is_captcha_valid());
        assert!(page.captcha_input().is_empty());
    }

    #[test]
    fn test_register_help_and_unknown() {
        let tr = Translator::default();
        let mut page = LoginPage::new();

        let outcome = page.handle_voice_command(VoiceCommand::Register, "sign up", &tr);
        assert_eq!(outcome.action, Some(Action::Navigate { route: Route::Register }));

        let outcome = page.handle_voice_command(VoiceCommand::ShowHelp, "help", &tr);
        assert_eq!(outcome.speech, Some(tr.t("audio.loginGuide")));

        let outcome = page.handle_voice_command(VoiceCommand::ShowRewards, "rewards", &tr);
        assert_eq!(
            outcome.speech.as_deref(),
            Some("Sorry, I didn't understand: rewards")
        );
    }

    #[test]
    fn test_google_login_skips_captcha() {
        let page = LoginPage::new();
        let outcome = page.login_with_google(&Translator::default());
        assert_eq!(outcome.action, Some(Action::Login));
    }
}
