//! Intent Classifier
//!
//! Maps free text (typed chat messages or voice transcripts) to a discrete intent:
//! - Chat intents: advice topics for signed-in users, help topics for visitors
//! - Voice commands: navigation and form actions on the current page
//!
//! Matching is lowercase substring search against per-locale keyword lists,
//! tested in a fixed priority order. The first matching rule wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatIntent {
    // Signed-in
    InvestmentAdvice,
    GoalAdvice,
    SavingsAdvice,
    BudgetAdvice,
    EmergencyFundAdvice,
    RiskAdvice,
    PersonalizedResponse,
    // Visitor
    AccountHelp,
    LoginHelp,
    SavingsInfo,
    SecurityInfo,
    FeeInfo,
    HelpInfo,
    GeneralResponse,
}

impl ChatIntent {
    /// Translation key of the canned response
    pub fn response_key(&self) -> &'static str {
        match self {
            ChatIntent::InvestmentAdvice => "chatbot.investmentAdvice",
            ChatIntent::GoalAdvice => "chatbot.goalAdvice",
            ChatIntent::SavingsAdvice => "chatbot.savingsAdvice",
            ChatIntent::BudgetAdvice => "chatbot.budgetAdvice",
            ChatIntent::EmergencyFundAdvice => "chatbot.emergencyFundAdvice",
            ChatIntent::RiskAdvice => "chatbot.riskAdvice",
            ChatIntent::PersonalizedResponse => "chatbot.personalizedResponse",
            ChatIntent::AccountHelp => "chatbot.accountHelp",
            ChatIntent::LoginHelp => "chatbot.loginHelp",
            ChatIntent::SavingsInfo => "chatbot.savingsInfo",
            ChatIntent::SecurityInfo => "chatbot.securityInfo",
            ChatIntent::FeeInfo => "chatbot.feeInfo",
            ChatIntent::HelpInfo => "chatbot.helpInfo",
            ChatIntent::GeneralResponse => "chatbot.generalResponse",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            ChatIntent::PersonalizedResponse | ChatIntent::GeneralResponse
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceCommand {
    Logout,
    Register,
    Login,
    CreateGoal,
    AddMoney,
    CheckBalance,
    ShowRewards,
    OpenSettings,
    Upi,
    BankTransfer,
    Card,
    GoDashboard,
    GoBack,
    ShowHelp,
    Unknown,
}

/// Keywords for one intent, grouped by locale
#[derive(Debug)]
pub struct KeywordRule<I: 'static> {
    pub intent: I,
    pub keywords: &'static [(Locale, &'static [&'static str])],
}

/// Outcome of a classification, with the keyword that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntentMatch<I> {
    pub intent: I,
    pub keyword: Option<&'static str>,
    pub locale: Option<Locale>,
}

impl<I> IntentMatch<I> {
    pub fn is_match(&self) -> bool {
        self.keyword.is_some()
    }
}

//
// ================= Keyword Tables =================
//
// Static tables, no allocation. Every keyword is stored lowercase.
//

const SAVINGS_KEYWORDS: &[(Locale, &[&str])] = &[
    (Locale::En, &["savings", "save"]),
    (Locale::Hi, &["बचत"]),
    (Locale::Mr, &["बचत"]),
    (Locale::Es, &["ahorros"]),
    (Locale::De, &["sparen"]),
];

/// Signed-in users: personalized banking and investment guidance
pub const AUTHENTICATED_RULES: &[KeywordRule<ChatIntent>] = &[
    KeywordRule {
        intent: ChatIntent::InvestmentAdvice,
        keywords: &[
            (Locale::En, &["investment", "invest"]),
            (Locale::Hi, &["निवेश"]),
            (Locale::Mr, &["गुंतवणूक"]),
            (Locale::Es, &["inversión"]),
            (Locale::De, &["investition"]),
        ],
    },
    KeywordRule {
        intent: ChatIntent::GoalAdvice,
        keywords: &[
            (Locale::En, &["goal", "target"]),
            (Locale::Hi, &["लक्ष्य"]),
            (Locale::Mr, &["ध्येय"]),
            (Locale::Es, &["objetivo"]),
            (Locale::De, &["ziel"]),
        ],
    },
    KeywordRule {
        intent: ChatIntent::SavingsAdvice,
        keywords: SAVINGS_KEYWORDS,
    },
    KeywordRule {
        intent: ChatIntent::BudgetAdvice,
        keywords: &[
            (Locale::En, &["budget", "expense"]),
            (Locale::Hi, &["बजट"]),
            (Locale::Mr, &["खर्च"]),
            (Locale::Es, &["presupuesto"]),
            (Locale::De, &["ausgaben"]),
        ],
    },
    KeywordRule {
        intent: ChatIntent::EmergencyFundAdvice,
        keywords: &[
            (Locale::En, &["emergency", "fund"]),
            (Locale::Hi, &["आपातकाल"]),
            (Locale::Mr, &["आपत्कालीन"]),
            (Locale::Es, &["emergencia"]),
            (Locale::De, &["notfall"]),
        ],
    },
    KeywordRule {
        intent: ChatIntent::RiskAdvice,
        keywords: &[
            (Locale::En, &["risk", "portfolio"]),
            (Locale::Hi, &["जोखिम"]),
            (Locale::Mr, &["जोखीम", "पोर्टफोलिओ"]),
            (Locale::Es, &["riesgo"]),
            (Locale::De, &["risiko"]),
        ],
    },
];

/// Visitors on the login/registration pages: general banking guidance
pub const VISITOR_RULES: &[KeywordRule<ChatIntent>] = &[
    KeywordRule {
        intent: ChatIntent::AccountHelp,
        keywords: &[
            (Locale::En, &["account", "register"]),
            (Locale::Hi, &["खाता"]),
            (Locale::Mr, &["खाते", "नोंदणी"]),
            (Locale::Es, &["cuenta"]),
            (Locale::De, &["konto"]),
        ],
    },
    KeywordRule {
        intent: ChatIntent::LoginHelp,
        keywords: &[
            (Locale::En, &["login", "sign in"]),
            (Locale::Hi, &["लॉगिन"]),
            (Locale::Mr, &["प्रवेश"]),
            (Locale::Es, &["iniciar"]),
            (Locale::De, &["anmelden"]),
        ],
    },
    KeywordRule {
        intent: ChatIntent::SavingsInfo,
        keywords: SAVINGS_KEYWORDS,
    },
    KeywordRule {
        intent: ChatIntent::SecurityInfo,
        keywords: &[
            (Locale::En, &["security", "safe"]),
            (Locale::Hi, &["सुरक्षा"]),
            (Locale::Mr, &["सुरक्षित"]),
            (Locale::Es, &["seguridad"]),
            (Locale::De, &["sicherheit"]),
        ],
    },
    KeywordRule {
        intent: ChatIntent::FeeInfo,
        keywords: &[
            (Locale::En, &["fee", "charge"]),
            (Locale::Hi, &["शुल्क"]),
            (Locale::Mr, &["फी"]),
            (Locale::Es, &["tarifa"]),
            (Locale::De, &["gebühr"]),
        ],
    },
    KeywordRule {
        intent: ChatIntent::HelpInfo,
        keywords: &[
            (Locale::En, &["help", "support"]),
            (Locale::Hi, &["सहायता"]),
            (Locale::Mr, &["मदत"]),
            (Locale::Es, &["ayuda"]),
            (Locale::De, &["hilfe"]),
        ],
    },
];

/// Voice commands, shared by every page
pub const VOICE_RULES: &[KeywordRule<VoiceCommand>] = &[
    KeywordRule {
        intent: VoiceCommand::Logout,
        keywords: &[
            (Locale::En, &["logout", "log out", "sign out"]),
            (Locale::Hi, &["लॉगआउट"]),
            (Locale::Mr, &["बाहेर पडा"]),
            (Locale::Es, &["cerrar sesión"]),
            (Locale::De, &["abmelden"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::Register,
        keywords: &[
            (Locale::En, &["register", "sign up", "create account"]),
            (Locale::Hi, &["रजिस्टर"]),
            (Locale::Mr, &["नोंदणी"]),
            (Locale::Es, &["registrar"]),
            (Locale::De, &["registrieren"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::Login,
        keywords: &[
            (Locale::En, &["login", "log in", "sign in"]),
            (Locale::Hi, &["लॉगिन"]),
            (Locale::Mr, &["प्रवेश"]),
            (Locale::Es, &["iniciar sesión"]),
            (Locale::De, &["anmelden"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::CreateGoal,
        keywords: &[
            (Locale::En, &["create goal", "new goal", "set goal", "goal"]),
            (Locale::Hi, &["लक्ष्य"]),
            (Locale::Mr, &["ध्येय"]),
            (Locale::Es, &["objetivo"]),
            (Locale::De, &["ziel"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::AddMoney,
        keywords: &[
            (Locale::En, &["add money", "add", "deposit"]),
            (Locale::Hi, &["पैसे जोड़", "जमा"]),
            (Locale::Mr, &["पैसे जोडा"]),
            (Locale::Es, &["agregar", "añadir", "depositar"]),
            (Locale::De, &["einzahlen"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::CheckBalance,
        keywords: &[
            (Locale::En, &["balance", "how much", "savings"]),
            (Locale::Hi, &["बैलेंस", "बचत"]),
            (Locale::Mr, &["शिल्लक"]),
            (Locale::Es, &["saldo"]),
            (Locale::De, &["kontostand", "guthaben"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::ShowRewards,
        keywords: &[
            (Locale::En, &["reward", "points"]),
            (Locale::Hi, &["इनाम", "पॉइंट"]),
            (Locale::Mr, &["बक्षीस"]),
            (Locale::Es, &["recompensa", "puntos"]),
            (Locale::De, &["belohnung", "punkte"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::OpenSettings,
        keywords: &[
            (Locale::En, &["setting"]),
            (Locale::Hi, &["सेटिंग"]),
            (Locale::Mr, &["सेटिंग्ज"]),
            (Locale::Es, &["configuración", "ajustes"]),
            (Locale::De, &["einstellung"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::Upi,
        keywords: &[
            (Locale::En, &["upi"]),
            (Locale::Hi, &["यूपीआई"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::BankTransfer,
        keywords: &[
            (Locale::En, &["bank transfer", "bank"]),
            (Locale::Hi, &["बैंक"]),
            (Locale::Es, &["transferencia", "banco"]),
            (Locale::De, &["überweisung"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::Card,
        keywords: &[
            (Locale::En, &["card"]),
            (Locale::Hi, &["कार्ड"]),
            (Locale::Es, &["tarjeta"]),
            (Locale::De, &["karte"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::GoDashboard,
        keywords: &[
            (Locale::En, &["dashboard", "home"]),
            (Locale::Hi, &["डैशबोर्ड"]),
            (Locale::Mr, &["मुख्यपृष्ठ"]),
            (Locale::Es, &["panel", "inicio"]),
            (Locale::De, &["startseite"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::GoBack,
        keywords: &[
            (Locale::En, &["go back", "back"]),
            (Locale::Hi, &["वापस"]),
            (Locale::Mr, &["मागे"]),
            (Locale::Es, &["atrás", "volver"]),
            (Locale::De, &["zurück"]),
        ],
    },
    KeywordRule {
        intent: VoiceCommand::ShowHelp,
        keywords: &[
            (Locale::En, &["help", "what can i say"]),
            (Locale::Hi, &["मदद", "सहायता"]),
            (Locale::Mr, &["मदत"]),
            (Locale::Es, &["ayuda"]),
            (Locale::De, &["hilfe"]),
        ],
    },
];

/// Intent classifier
pub struct IntentClassifier;

impl IntentClassifier {
    /// Classify a chat message. The rule set depends on whether the user is signed in.
    pub fn classify_chat(text: &str, authenticated: bool) -> ChatIntent {
        Self::match_chat(text, authenticated).intent
    }

    pub fn match_chat(text: &str, authenticated: bool) -> IntentMatch<ChatIntent> {
        let (rules, default) = if authenticated {
            (AUTHENTICATED_RULES, ChatIntent::PersonalizedResponse)
        } else {
            (VISITOR_RULES, ChatIntent::GeneralResponse)
        };

        let matched = first_match(text, rules, default);
        debug!(
            intent = ?matched.intent,
            keyword = ?matched.keyword,
            authenticated,
            "Classified chat message"
        );
        matched
    }

    /// Classify a voice transcript into a command
    pub fn classify_voice(transcript: &str) -> VoiceCommand {
        Self::match_voice(transcript).intent
    }

    pub fn match_voice(transcript: &str) -> IntentMatch<VoiceCommand> {
        let matched = first_match(transcript, VOICE_RULES, VoiceCommand::Unknown);
        debug!(
            command = ?matched.intent,
            keyword = ?matched.keyword,
            "Classified voice transcript"
        );
        matched
    }
}

/// First-match-wins scan over the rules in priority order
pub fn first_match<I: Copy>(text: &str, rules: &[KeywordRule<I>], default: I) -> IntentMatch<I> {
    let normalized = text.to_lowercase();

    for rule in rules {
        for (locale, keywords) in rule.keywords {
            if let Some(keyword) = keywords.iter().find(|kw| normalized.contains(**kw)) {
                return IntentMatch {
                    intent: rule.intent,
                    keyword: Some(*keyword),
                    locale: Some(*locale),
                };
            }
        }
    }

    IntentMatch {
        intent: default,
        keyword: None,
        locale: None,
    }
}
