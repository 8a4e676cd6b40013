//! Assistant - ties the pages, the chatbot and the voice adapter together
//!
//! TRANSCRIPT → CLASSIFY → PAGE DISPATCH → SPEAK → SIDE EFFECT
//!
//! Side effects are UI transitions: route changes, sign-in/out, and the
//! simulated payment. They are fire-and-forget; nothing is retried.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::classifier::IntentClassifier;
use crate::config::AssistantConfig;
use crate::conversational::{BotReply, ChatSession};
use crate::i18n::Translator;
use crate::memory::ConversationMessage;
use crate::models::{AccountSnapshot, Action, Locale, Route, VoiceOutcome};
use crate::pages::{DashboardPage, LoginPage, PaymentPage, PaymentReceipt, StaticPage, VoicePage};
use crate::voice::Speaker;
use crate::Result;

pub struct Assistant {
    config: AssistantConfig,
    translator: Translator,
    speaker: Arc<dyn Speaker>,
    route: Route,
    authenticated: bool,
    login: LoginPage,
    dashboard: DashboardPage,
    payment: PaymentPage,
    chat: ChatSession,
    last_receipt: Option<PaymentReceipt>,
}

impl Assistant {
    pub fn new(config: AssistantConfig, speaker: Arc<dyn Speaker>) -> Self {
        let translator = Translator::new(config.default_locale);
        let chat = Self::visitor_chat(&config, speaker.clone());

        Self {
            config,
            translator,
            speaker,
            route: Route::Login,
            authenticated: false,
            login: LoginPage::new(),
            dashboard: DashboardPage::default(),
            payment: PaymentPage::new(),
            chat,
            last_receipt: None,
        }
    }

    fn visitor_chat(config: &AssistantConfig, speaker: Arc<dyn Speaker>) -> ChatSession {
        ChatSession::new(speaker)
            .with_locale(config.default_locale)
            .with_thinking_delay(config.thinking_delay)
    }

    // =============================
    // Accessors
    // =============================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn login_page_mut(&mut self) -> &mut LoginPage {
        &mut self.login
    }

    pub fn dashboard(&self) -> &DashboardPage {
        &self.dashboard
    }

    pub fn payment_page_mut(&mut self) -> &mut PaymentPage {
        &mut self.payment
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn last_receipt(&self) -> Option<&PaymentReceipt> {
        self.last_receipt.as_ref()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        info!(%locale, "Switching locale");
        self.translator = Translator::new(locale);
        self.chat.set_locale(locale);
    }

    /// Mock sign-in without the captcha, as Google sign-in does
    pub async fn sign_in(&mut self) -> Result<()> {
        self.apply(&Action::Login).await
    }

    pub async fn sign_out(&mut self) -> Result<()> {
        self.apply(&Action::Logout).await
    }

    // =============================
    // Chat
    // =============================

    pub async fn open_chat(&mut self) -> Option<String> {
        self.chat.open().await.map(|m| m.text.clone())
    }

    pub async fn chat_message(&mut self, text: &str) -> Option<BotReply> {
        self.chat.send_message(text).await
    }

    pub fn chat_history(&self) -> impl Iterator<Item = &ConversationMessage> {
        self.chat.log().messages()
    }

    // =============================
    // Voice
    // =============================

    /// Speak the guide of the current page
    pub async fn announce_page(&self) {
        let key = match self.route {
            Route::Login => self.login.guide_key(),
            Route::Dashboard => self.dashboard.guide_key(),
            Route::Payment => self.payment.guide_key(),
            Route::Register | Route::Settings => StaticPage::new(self.route).guide_key(),
        };
        self.speaker.speak(&self.translator.t(key)).await;
    }

    /// Handle one voice transcript on the current page
    pub async fn handle_transcript(&mut self, transcript: &str) -> Result<VoiceOutcome> {
        let command = IntentClassifier::classify_voice(transcript);
        let tr = self.translator;

        let outcome = match self.route {
            Route::Login => self.login.handle_voice_command(command, transcript, &tr),
            Route::Dashboard => self.dashboard.handle_voice_command(command, transcript, &tr),
            Route::Payment => self.payment.handle_voice_command(command, transcript, &tr),
            Route::Register | Route::Settings => {
                StaticPage::new(self.route).handle_voice_command(command, transcript, &tr)
            }
        };

        debug!(
            route = %self.route,
            ?command,
            action = ?outcome.action,
            "Voice command dispatched"
        );

        if let Some(speech) = &outcome.speech {
            self.speaker.speak(speech).await;
        }

        if let Some(action) = &outcome.action {
            self.apply(action).await?;
        }

        Ok(outcome)
    }

    async fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Navigate { route } => self.navigate(*route).await,
            Action::Login => {
                self.authenticated = true;
                self.chat = Self::visitor_chat(&self.config, self.speaker.clone())
                    .with_locale(self.locale())
                    .signed_in(Some(self.dashboard.account_snapshot()));
                self.navigate(Route::Dashboard).await;
            }
            Action::Logout => {
                self.authenticated = false;
                self.chat = Self::visitor_chat(&self.config, self.speaker.clone())
                    .with_locale(self.locale());
                self.login.refresh_captcha();
                self.navigate(Route::Login).await;
            }
            // Already applied by the page
            Action::SetAmount { .. } | Action::SelectMethod { .. } => {}
            Action::SubmitPayment => {
                let receipt = self
                    .payment
                    .process(self.speaker.as_ref(), &self.translator, self.config.payment_delay)
                    .await?;
                self.last_receipt = Some(receipt);
                self.navigate(Route::Dashboard).await;
            }
        }
        Ok(())
    }

    async fn navigate(&mut self, route: Route) {
        if matches!(route, Route::Dashboard | Route::Payment | Route::Settings) && !self.authenticated
        {
            warn!(%route, "Navigation blocked, not signed in");
            return;
        }

        if !self.config.navigation_delay.is_zero() {
            tokio::time::sleep(self.config.navigation_delay).await;
        }

        info!(from = %self.route, to = %route, "Navigating");
        self.route = route;
        if self.authenticated {
            let account = self.page_account();
            self.chat.set_context(true, Some(account));
        }
        self.announce_page().await;
    }

    /// Account state the chatbot quotes on the current page
    fn page_account(&self) -> AccountSnapshot {
        match self.route {
            Route::Payment => PaymentPage::chat_account_snapshot(),
            _ => self.dashboard.account_snapshot(),
        }
    }
}
