//! Add-money flow: amount, method, simulated processing

use std::time::Duration;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use super::dashboard::format_currency;
use super::{not_understood, VoicePage};
use crate::classifier::VoiceCommand;
use crate::error::PaymentError;
use crate::i18n::Translator;
use crate::models::{AccountSnapshot, Action, PaymentMethod, Route, VoiceOutcome};
use crate::voice::Speaker;
use crate::Result;

lazy_static! {
    static ref AMOUNT_PATTERN: Regex = Regex::new(r"[0-9]+").expect("valid amount pattern");
}

/// First run of ASCII digits in a transcript, e.g. "add 1000" -> 1000
pub fn extract_amount(transcript: &str) -> Option<u64> {
    AMOUNT_PATTERN
        .find(transcript)
        .and_then(|m| m.as_str().parse().ok())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub transaction_id: Uuid,
    pub amount: u64,
    pub method: PaymentMethod,
    /// Short SHA-256 digest shown to the user as the payment reference
    pub reference: String,
    pub completed_at: DateTime<Utc>,
}

impl PaymentReceipt {
    fn new(amount: u64, method: PaymentMethod) -> Self {
        let transaction_id = Uuid::new_v4();
        let completed_at = Utc::now();

        let mut hasher = Sha256::new();
        hasher.update(transaction_id.as_bytes());
        hasher.update(amount.to_be_bytes());
        hasher.update(method.to_string().as_bytes());
        hasher.update(completed_at.to_rfc3339().as_bytes());
        let reference = hex::encode(&hasher.finalize()[..8]).to_uppercase();

        Self {
            transaction_id,
            amount,
            method,
            reference,
            completed_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentPage {
    amount: Option<u64>,
    method: Option<PaymentMethod>,
}

impl PaymentPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> Option<u64> {
        self.amount
    }

    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    pub fn set_amount(&mut self, amount: u64) {
        self.amount = Some(amount);
    }

    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    /// Amount and method, if the form can be submitted
    pub fn validate(&self) -> std::result::Result<(u64, PaymentMethod), PaymentError> {
        let amount = self.amount.ok_or(PaymentError::MissingAmount)?;
        if amount == 0 {
            return Err(PaymentError::InvalidAmount);
        }
        let method = self.method.ok_or(PaymentError::MissingMethod)?;
        Ok((amount, method))
    }

    /// Account state the payment screen hands to its chatbot
    pub fn chat_account_snapshot() -> AccountSnapshot {
        AccountSnapshot {
            savings: 15000,
            goals: vec![],
            total_saved: 45000,
        }
    }

    /// Run the simulated payment: announce, wait, confirm.
    ///
    /// The form is cleared once the payment completes.
    pub async fn process(
        &mut self,
        speaker: &dyn Speaker,
        tr: &Translator,
        delay: Duration,
    ) -> Result<PaymentReceipt> {
        let (amount, method) = match self.validate() {
            Ok(valid) => valid,
            Err(e) => {
                speaker
                    .speak(&tr.t("voice.responses.paymentIncomplete"))
                    .await;
                return Err(e.into());
            }
        };

        let shown = format_currency(amount);
        speaker
            .speak(&tr.t_with(
                "voice.responses.paymentProcessing",
                &[("amount", shown.clone())],
            ))
            .await;

        tokio::time::sleep(delay).await;

        let receipt = PaymentReceipt::new(amount, method);
        info!(
            transaction_id = %receipt.transaction_id,
            amount,
            method = %method,
            reference = %receipt.reference,
            "Simulated payment completed"
        );

        speaker
            .speak(&tr.t_with("voice.responses.paymentSuccess", &[("amount", shown)]))
            .await;

        *self = Self::default();
        Ok(receipt)
    }
}

impl VoicePage for PaymentPage {
    fn route(&self) -> Route {
        Route::Payment
    }

    fn guide_key(&self) -> &'static str {
        "audio.paymentGuide"
    }

    fn handle_voice_command(
        &mut self,
        command: VoiceCommand,
        transcript: &str,
        tr: &Translator,
    ) -> VoiceOutcome {
        if command == VoiceCommand::AddMoney {
            if let Some(amount) = extract_amount(transcript) {
                self.set_amount(amount);
                return VoiceOutcome::speak_and_act(
                    command,
                    tr.t_with("voice.responses.amountSet", &[("amount", amount.to_string())]),
                    Action::SetAmount { amount },
                );
            }
        }

        let select = |page: &mut Self, method: PaymentMethod, key: &str| {
            page.select_method(method);
            VoiceOutcome::speak_and_act(command, tr.t(key), Action::SelectMethod { method })
        };

        match command {
            VoiceCommand::AddMoney => match self.validate() {
                Ok(_) => VoiceOutcome::act(command, Action::SubmitPayment),
                Err(_) => VoiceOutcome::speak(command, tr.t("voice.responses.paymentIncomplete")),
            },
            VoiceCommand::Upi => select(self, PaymentMethod::Upi, "voice.responses.upiSelected"),
            VoiceCommand::BankTransfer => {
                select(self, PaymentMethod::Bank, "voice.responses.bankSelected")
            }
            VoiceCommand::Card => select(self, PaymentMethod::Card, "voice.responses.cardSelected"),
            VoiceCommand::GoBack | VoiceCommand::GoDashboard => {
                VoiceOutcome::act(command, Action::Navigate { route: Route::Dashboard })
            }
            VoiceCommand::ShowHelp => {
                VoiceOutcome::speak(command, tr.t("voice.responses.paymentHelp"))
            }
            _ => not_understood(command, transcript, tr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssistantError;
    use crate::voice::RecordingSpeaker;

    #[test]
    fn test_extract_amount() {
        assert_eq!(extract_amount("add 1000"), Some(1000));
        assert_eq!(extract_amount("add 250 then 300"), Some(250));
        assert_eq!(extract_amount("add money"), None);
        assert_eq!(extract_amount("add 99999999999999999999999"), None);
        // Devanagari digits are not amounts
        assert_eq!(extract_amount("जमा ५ और 300"), Some(300));
        assert_eq!(extract_amount("जमा ५००"), None);
    }

    #[test]
    fn test_amount_in_transcript_sets_amount() {
        let tr = Translator::default();
        let mut page = PaymentPage::new();

        let outcome = page.handle_voice_command(VoiceCommand::AddMoney, "Add 1000", &tr);
        assert_eq!(page.amount(), Some(1000));
        assert_eq!(outcome.action, Some(Action::SetAmount { amount: 1000 }));
        assert_eq!(
            outcome.speech.as_deref(),
            Some("Amount set to 1000 rupees. Please select a payment method.")
        );
    }

    #[test]
    fn test_add_money_without_form_prompts() {
        let tr = Translator::default();
        let mut page = PaymentPage::new();

        let outcome = page.handle_voice_command(VoiceCommand::AddMoney, "add money", &tr);
        assert_eq!(
            outcome.speech.as_deref(),
            Some("Please enter amount and select payment method first.")
        );
        assert!(outcome.action.is_none());
    }

    #[test]
    fn test_method_selection_then_submit() {
        let tr = Translator::default();
        let mut page = PaymentPage::new();
        page.handle_voice_command(VoiceCommand::AddMoney, "add 500", &tr);

        let outcome = page.handle_voice_command(VoiceCommand::Upi, "upi", &tr);
        assert_eq!(page.method(), Some(PaymentMethod::Upi));
        assert_eq!(
            outcome.speech.as_deref(),
            Some("UPI payment method selected. Please enter your UPI ID.")
        );

        page.handle_voice_command(VoiceCommand::Card, "card", &tr);
        assert_eq!(page.method(), Some(PaymentMethod::Card));

        let outcome = page.handle_voice_command(VoiceCommand::AddMoney, "add money", &tr);
        assert_eq!(outcome.action, Some(Action::SubmitPayment));
    }

    #[test]
    fn test_navigation_and_unknown() {
        let tr = Translator::default();
        let mut page = PaymentPage::new();

        let outcome = page.handle_voice_command(VoiceCommand::GoBack, "go back", &tr);
        assert_eq!(outcome.action, Some(Action::Navigate { route: Route::Dashboard }));

        let outcome = page.handle_voice_command(VoiceCommand::ShowRewards, "rewards", &tr);
        assert!(outcome.speech.unwrap_or_default().starts_with("Sorry"));
    }

    #[test]
    fn test_validation_errors() {
        let mut page = PaymentPage::new();
        assert_eq!(page.validate(), Err(PaymentError::MissingAmount));

        page.set_amount(0);
        assert_eq!(page.validate(), Err(PaymentError::InvalidAmount));

        page.set_amount(100);
        assert_eq!(page.validate(), Err(PaymentError::MissingMethod));

        page.select_method(PaymentMethod::Bank);
        assert_eq!(page.validate(), Ok((100, PaymentMethod::Bank)));
    }

    #[tokio::test]
    async fn test_process_payment() {
        let tr = Translator::default();
        let speaker = RecordingSpeaker::new();
        let mut page = PaymentPage::new();
        page.set_amount(2500);
        page.select_method(PaymentMethod::Upi);

        let receipt = page
            .process(&speaker, &tr, Duration::ZERO)
            .await
            .expect("payment should complete");

        assert_eq!(receipt.amount, 2500);
        assert_eq!(receipt.method, PaymentMethod::Upi);
        assert_eq!(receipt.reference.len(), 16);
        assert_eq!(
            speaker.spoken().await,
            vec![
                "Processing payment of ₹2,500...",
                "Successfully added ₹2,500 to your savings!",
            ]
        );
        assert_eq!(page.amount(), None);
        assert_eq!(page.method(), None);
    }

    #[tokio::test]
    async fn test_process_incomplete_form() {
        let speaker = RecordingSpeaker::new();
        let mut page = PaymentPage::new();
        page.set_amount(100);

        let err = page
            .process(&speaker, &Translator::default(), Duration::ZERO)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AssistantError::Payment(PaymentError::MissingMethod)
        ));
        assert_eq!(speaker.spoken().await.len(), 1);
    }
}
