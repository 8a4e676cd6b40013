//! Chatbot
//!
//! Rule-based replies: classify the message, then fill the intent's response
//! template from the account snapshot. Each message is handled on its own;
//! the conversation log only records what was said.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::classifier::{ChatIntent, IntentClassifier};
use crate::i18n::Translator;
use crate::memory::{ConversationLog, ConversationMessage};
use crate::models::{AccountSnapshot, Locale};
use crate::voice::Speaker;

/// Who is chatting, and what the bot may quote back to them
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatContext<'a> {
    pub authenticated: bool,
    pub account: Option<&'a AccountSnapshot>,
}

impl<'a> ChatContext<'a> {
    pub fn visitor() -> Self {
        Self::default()
    }

    pub fn signed_in(account: Option<&'a AccountSnapshot>) -> Self {
        Self {
            authenticated: true,
            account,
        }
    }
}

/// Response for a chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotReply {
    pub intent: ChatIntent,
    pub text: String,
}

/// Fill the response template of `intent`. Missing account values read as 0.
pub fn render_response(
    intent: ChatIntent,
    account: Option<&AccountSnapshot>,
    tr: &Translator,
) -> String {
    let key = intent.response_key();

    match intent {
        ChatIntent::InvestmentAdvice => tr.t_with(
            key,
            &[("savings", account.map_or(0, |a| a.savings).to_string())],
        ),
        ChatIntent::GoalAdvice => tr.t_with(
            key,
            &[("count", account.map_or(0, |a| a.goals.len()).to_string())],
        ),
        ChatIntent::SavingsAdvice => tr.t_with(
            key,
            &[("total", account.map_or(0, |a| a.total_saved).to_string())],
        ),
        _ => tr.t(key),
    }
}

/// Classify `message` and build the bot's answer
pub fn get_bot_response(message: &str, ctx: ChatContext<'_>, tr: &Translator) -> BotReply {
    let intent = IntentClassifier::classify_chat(message, ctx.authenticated);
    let text = render_response(intent, ctx.account, tr);

    info!(
        ?intent,
        authenticated = ctx.authenticated,
        fallback = intent.is_fallback(),
        "Chatbot reply selected"
    );

    BotReply { intent, text }
}

/// Opening line of the chat window
pub fn greeting(authenticated: bool, tr: &Translator) -> String {
    if authenticated {
        tr.t("chatbot.loggedInGreeting")
    } else {
        tr.t("chatbot.welcomeGreeting")
    }
}

/// One chat window: its log, its context and how it talks back
pub struct ChatSession {
    id: Uuid,
    log: ConversationLog,
    translator: Translator,
    authenticated: bool,
    account: Option<AccountSnapshot>,
    thinking_delay: Duration,
    speaker: Arc<dyn Speaker>,
}

impl ChatSession {
    pub fn new(speaker: Arc<dyn Speaker>) -> Self {
        Self {
            id: Uuid::new_v4(),
            log: ConversationLog::new(),
            translator: Translator::default(),
            authenticated: false,
            account: None,
            thinking_delay: Duration::ZERO,
            speaker,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.translator = Translator::new(locale);
        self
    }

    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    /// Answer as a signed-in user, quoting from `account`
    pub fn signed_in(mut self, account: Option<AccountSnapshot>) -> Self {
        self.authenticated = true;
        self.account = account;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.translator = Translator::new(locale);
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    /// Switch between visitor and signed-in replies for later messages
    pub fn set_context(&mut self, authenticated: bool, account: Option<AccountSnapshot>) {
        self.authenticated = authenticated;
        self.account = if authenticated { account } else { None };
    }

    /// Greet once, when the window opens on an empty log
    pub async fn open(&mut self) -> Option<&ConversationMessage> {
        if !self.log.is_empty() {
            return None;
        }

        let text = greeting(self.authenticated, &self.translator);
        self.speaker.speak(&text).await;
        Some(self.log.push_bot(text))
    }

    /// Record the user's message, wait the thinking delay, then reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub async fn send_message(&mut self, text: &str) -> Option<BotReply> {
        if text.trim().is_empty() {
            debug!(session = %self.id, "Ignoring blank chat message");
            return None;
        }

        self.log.push_user(text);

        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }

        let ctx = ChatContext {
            authenticated: self.authenticated,
            account: self.account.as_ref(),
        };
        let reply = get_bot_response(text, ctx, &self.translator);

        self.log.push_bot(reply.text.clone());
        self.speaker.speak(&reply.text).await;

        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::RecordingSpeaker;

    fn account(savings: u64) -> AccountSnapshot {
        AccountSnapshot {
            savings,
            goals: vec![],
            total_saved: 45000,
        }
    }

    #[test]
    fn test_hindi_investment_question_quotes_savings() {
        let snapshot = account(5000);
        let reply = get_bot_response(
            "निवेश",
            ChatContext::signed_in(Some(&snapshot)),
            &Translator::default(),
        );
        assert_eq!(reply.intent, ChatIntent::InvestmentAdvice);
        assert!(reply.text.contains("5000"));
    }

    #[test]
    fn test_savings_question() {
        let tr = Translator::default();
        let snapshot = account(15000);

        let reply = get_bot_response("I want to check my savings", ChatContext::visitor(), &tr);
        assert_eq!(reply.intent, ChatIntent::SavingsInfo);
        assert_eq!(reply.text, tr.t("chatbot.savingsInfo"));

        let reply = get_bot_response(
            "I want to check my savings",
            ChatContext::signed_in(Some(&snapshot)),
            &tr,
        );
        assert_eq!(reply.intent, ChatIntent::SavingsAdvice);
        assert!(reply.text.contains("45000"));
    }

    #[test]
    fn test_gibberish_gets_fallback() {
        let tr = Translator::default();

        let reply = get_bot_response("xyz gibberish", ChatContext::visitor(), &tr);
        assert_eq!(reply.intent, ChatIntent::GeneralResponse);
        assert_eq!(reply.text, tr.t("chatbot.generalResponse"));

        let reply = get_bot_response("xyz gibberish", ChatContext::signed_in(None), &tr);
        assert_eq!(reply.intent, ChatIntent::PersonalizedResponse);
    }

    #[test]
    fn test_missing_account_reads_as_zero() {
        let tr = Translator::default();
        let text = render_response(ChatIntent::GoalAdvice, None, &tr);
        assert!(text.contains("You have 0 active goals"));

        let text = render_response(ChatIntent::InvestmentAdvice, None, &tr);
        assert!(text.contains("₹0"));
        assert!(!text.contains("{{"));
    }

    #[tokio::test]
    async fn test_session_greets_once() {
        let speaker = Arc::new(RecordingSpeaker::new());
        let mut session = ChatSession::new(speaker.clone());

        let greeting_text = session.open().await.map(|m| m.text.clone());
        assert_eq!(greeting_text, Some(Translator::default().t("chatbot.welcomeGreeting")));
        assert!(session.open().await.is_none());
        assert_eq!(session.log().len(), 1);
        assert_eq!(speaker.spoken().await.len(), 1);
    }

    #[tokio::test]
    async fn test_session_records_both_sides() {
        let speaker = Arc::new(RecordingSpeaker::new());
        let mut session = ChatSession::new(speaker.clone()).signed_in(Some(account(5000)));

        assert!(session.send_message("   ").await.is_none());
        assert!(session.log().is_empty());

        let reply = session
            .send_message("how should I invest?")
            .await
            .expect("reply for non-blank input");
        assert_eq!(reply.intent, ChatIntent::InvestmentAdvice);

        let log: Vec<_> = session.log().messages().map(|m| (m.is_bot, m.text.clone())).collect();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], (false, "how should I invest?".to_string()));
        assert_eq!(log[1], (true, reply.text.clone()));
        assert_eq!(speaker.last().await, Some(reply.text));
    }

    #[tokio::test]
    async fn test_session_goal_count() {
        let speaker = Arc::new(RecordingSpeaker::new());
        let snapshot = crate::pages::DashboardPage::default().account_snapshot();
        let mut session = ChatSession::new(speaker).signed_in(Some(snapshot));

        let reply = session.send_message("My GOALS?").await.expect("reply");
        assert_eq!(reply.intent, ChatIntent::GoalAdvice);
        assert!(reply.text.contains("3 active goals"));
    }
}
