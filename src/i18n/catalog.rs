//! Translation tables
//!
//! English is the fallback locale and carries every key the assistant uses.
//! The other locales only override what has been translated.

pub const EN: &[(&str, &str)] = &[
    // Common
    ("common.welcome", "Welcome to Gullak"),
    ("common.loading", "Loading..."),
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.continue", "Continue"),
    ("common.back", "Back"),
    ("common.next", "Next"),
    ("common.submit", "Submit"),
    ("common.close", "Close"),
    // Navigation
    ("nav.dashboard", "Dashboard"),
    ("nav.goals", "Goals"),
    ("nav.payments", "Payments"),
    ("nav.rewards", "Rewards"),
    ("nav.settings", "Settings"),
    ("nav.logout", "Logout"),
    // Authentication
    ("auth.login", "Login"),
    ("auth.register", "Register"),
    ("auth.loginWithGoogle", "Login with Google"),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.confirmPassword", "Confirm Password"),
    ("auth.name", "Full Name"),
    ("auth.upiId", "UPI ID (Optional)"),
    ("auth.welcomeBack", "Welcome back!"),
    ("auth.createAccount", "Create your account"),
    ("auth.alreadyHaveAccount", "Already have an account? Login"),
    ("auth.dontHaveAccount", "Don't have an account? Register"),
    // Dashboard
    ("dashboard.totalSavings", "Total Savings"),
    ("dashboard.thisWeek", "This Week"),
    ("dashboard.thisMonth", "This Month"),
    ("dashboard.thisYear", "This Year"),
    ("dashboard.activeGoals", "Active Goals"),
    ("dashboard.rewardPoints", "Reward Points"),
    ("dashboard.savingStreak", "Saving Streak"),
    ("dashboard.quickActions", "Quick Actions"),
    ("dashboard.addMoney", "Add Money"),
    ("dashboard.setGoal", "Set Goal"),
    ("dashboard.viewRewards", "View Rewards"),
    // Goals
    ("goals.createGoal", "Create Savings Goal"),
    ("goals.goalName", "Goal Name"),
    ("goals.targetAmount", "Target Amount"),
    ("goals.deadline", "Deadline"),
    ("goals.category", "Category"),
    ("goals.description", "Description"),
    ("goals.progress", "Progress"),
    ("goals.daysLeft", "days left"),
    ("goals.categories.emergency", "Emergency Fund"),
    ("goals.categories.vacation", "Vacation"),
    ("goals.categories.gadget", "Gadget"),
    ("goals.categories.education", "Education"),
    ("goals.categories.other", "Other"),
    // Payments
    ("payments.addMoney", "Add Money"),
    ("payments.selectMethod", "Select Payment Method"),
    ("payments.upi", "UPI"),
    ("payments.bankTransfer", "Bank Transfer"),
    ("payments.card", "Credit/Debit Card"),
    ("payments.amount", "Amount"),
    ("payments.enterAmount", "Enter amount to add"),
    // Voice
    ("voice.listening", "Listening..."),
    ("voice.processing", "Processing..."),
    ("voice.tapToSpeak", "Tap to speak"),
    ("voice.sayCommand", "Say a command"),
    ("voice.commands.addMoney", "Add money"),
    ("voice.commands.createGoal", "Create goal"),
    ("voice.commands.checkBalance", "Check balance"),
    ("voice.commands.showRewards", "Show rewards"),
    ("voice.commands.openSettings", "Open settings"),
    // Voice command responses
    ("voice.responses.notUnderstood", "Sorry, I didn't understand: {{transcript}}"),
    ("voice.responses.captchaRequired", "Please enter the correct captcha first."),
    ("voice.responses.loggingIn", "Logging you in..."),
    ("voice.responses.googleLogin", "Connecting with Google..."),
    ("voice.responses.loggingOut", "Signing you out..."),
    ("voice.responses.goalComingSoon", "Goal creation feature coming soon!"),
    ("voice.responses.balance", "Your total savings is {{amount}}"),
    ("voice.responses.rewards", "You have {{points}} reward points!"),
    ("voice.responses.dashboardHelp", "You can say: Add money, Create goal, Check balance, Show rewards, or Open settings"),
    ("voice.responses.amountSet", "Amount set to {{amount}} rupees. Please select a payment method."),
    ("voice.responses.paymentIncomplete", "Please enter amount and select payment method first."),
    ("voice.responses.upiSelected", "UPI payment method selected. Please enter your UPI ID."),
    ("voice.responses.bankSelected", "Bank transfer selected. Please enter your bank details."),
    ("voice.responses.cardSelected", "Card payment selected. Please enter your card details."),
    ("voice.responses.paymentHelp", "Enter amount, select UPI, Bank transfer, or Card payment, then say \"add money\" to proceed."),
    ("voice.responses.paymentProcessing", "Processing payment of {{amount}}..."),
    ("voice.responses.paymentSuccess", "Successfully added {{amount}} to your savings!"),
    // Chatbot
    ("chatbot.assistantName", "Gullak Assistant"),
    ("chatbot.typePlaceholder", "Type your message..."),
    ("chatbot.toggleChat", "Toggle chat assistant"),
    ("chatbot.welcomeGreeting", "Namaste! I'm your Gullak assistant. Ask me about opening an account, logging in, savings, security or fees."),
    ("chatbot.loggedInGreeting", "Welcome back! I can help with investments, goals, savings, budgeting, emergency funds and risk."),
    ("chatbot.investmentAdvice", "With ₹{{savings}} in savings, consider splitting it between a recurring deposit and a low-cost index fund. Keep three months of expenses liquid before investing more."),
    ("chatbot.goalAdvice", "You have {{count}} active goals. Focus on the one with the nearest deadline and set up a weekly auto-save for it."),
    ("chatbot.savingsAdvice", "You have saved ₹{{total}} so far. Saving a fixed amount right after payday is the easiest way to keep your streak going."),
    ("chatbot.budgetAdvice", "Try the 50/30/20 rule: 50% for needs, 30% for wants and 20% for savings. Review your expenses every week."),
    ("chatbot.emergencyFundAdvice", "An emergency fund should cover 3 to 6 months of expenses. Keep it in a separate goal so you are not tempted to spend it."),
    ("chatbot.riskAdvice", "Match risk to your timeline: short-term goals belong in safe deposits, long-term goals can take more market exposure."),
    ("chatbot.personalizedResponse", "I can help with investments, goals, savings, budgeting, emergency funds or risk. What would you like to know?"),
    ("chatbot.accountHelp", "Creating an account takes a minute: tap Register, enter your name, email and password. A UPI ID is optional."),
    ("chatbot.loginHelp", "You can log in with Google or with your email and password. Remember to enter the captcha shown on screen."),
    ("chatbot.savingsInfo", "Gullak helps you save small amounts regularly towards goals you choose, and rewards you with points for every streak."),
    ("chatbot.securityInfo", "Your data is protected with encryption and every login is verified with a captcha. We never ask for your PIN."),
    ("chatbot.feeInfo", "Opening an account and saving with Gullak is free. There are no hidden charges on deposits."),
    ("chatbot.helpInfo", "I can answer questions about accounts, login, savings, security and fees. You can also speak to me using the microphone."),
    ("chatbot.generalResponse", "I'm here to help with your savings journey. Ask me about accounts, login, savings, security or fees."),
    // Audio guides
    ("audio.welcomeMessage", "Welcome to Gullak, your voice-enabled savings companion. You can navigate using voice commands or touch. Say \"help\" to learn voice commands."),
    ("audio.loginGuide", "This is the login screen. You can sign in with Google or create a new account."),
    ("audio.dashboardGuide", "This is your savings dashboard. Here you can see your total savings, active goals, and reward points."),
    ("audio.goalGuide", "This is the goals section where you can create and manage your savings goals."),
    ("audio.paymentGuide", "This is the payment section where you can add money to your savings."),
    ("audio.settingsGuide", "This is the settings section where you can manage your preferences and voice commands."),
];

pub const ES: &[(&str, &str)] = &[
    ("common.welcome", "Bienvenido a Gullak"),
    ("common.loading", "Cargando..."),
    ("common.save", "Guardar"),
    ("common.cancel", "Cancelar"),
    ("common.continue", "Continuar"),
    ("common.back", "Atrás"),
    ("common.next", "Siguiente"),
    ("common.submit", "Enviar"),
    ("common.close", "Cerrar"),
    ("nav.dashboard", "Panel"),
    ("nav.goals", "Objetivos"),
    ("nav.payments", "Pagos"),
    ("nav.rewards", "Recompensas"),
    ("nav.settings", "Configuración"),
    ("nav.logout", "Cerrar sesión"),
    ("auth.login", "Iniciar sesión"),
    ("auth.register", "Registrarse"),
    ("auth.loginWithGoogle", "Iniciar sesión con Google"),
    ("auth.email", "Correo electrónico"),
    ("auth.password", "Contraseña"),
    ("auth.confirmPassword", "Confirmar contraseña"),
    ("auth.name", "Nombre completo"),
    ("auth.upiId", "ID UPI (Opcional)"),
    ("auth.welcomeBack", "¡Bienvenido de nuevo!"),
    ("auth.createAccount", "Crea tu cuenta"),
    ("auth.alreadyHaveAccount", "¿Ya tienes cuenta? Inicia sesión"),
    ("auth.dontHaveAccount", "¿No tienes cuenta? Regístrate"),
    ("dashboard.totalSavings", "Ahorros Totales"),
    ("dashboard.thisWeek", "Esta Semana"),
    ("dashboard.thisMonth", "Este Mes"),
    ("dashboard.thisYear", "Este Año"),
    ("dashboard.activeGoals", "Objetivos Activos"),
    ("dashboard.rewardPoints", "Puntos de Recompensa"),
    ("dashboard.savingStreak", "Racha de Ahorro"),
    ("dashboard.quickActions", "Acciones Rápidas"),
    ("dashboard.addMoney", "Agregar Dinero"),
    ("dashboard.setGoal", "Establecer Objetivo"),
    ("dashboard.viewRewards", "Ver Recompensas"),
    ("voice.listening", "Escuchando..."),
    ("voice.processing", "Procesando..."),
    ("voice.tapToSpeak", "Toca para hablar"),
    ("voice.sayCommand", "Di un comando"),
    ("audio.welcomeMessage", "Bienvenido a Gullak, tu compañero de ahorros habilitado por voz. Puedes navegar usando comandos de voz o toque. Di \"ayuda\" para aprender comandos de voz."),
    ("audio.loginGuide", "Esta es la pantalla de inicio de sesión. Puedes iniciar sesión con Google o crear una nueva cuenta."),
    ("audio.dashboardGuide", "Este es tu panel de ahorros. Aquí puedes ver tus ahorros totales, objetivos activos y puntos de recompensa."),
];

pub const DE: &[(&str, &str)] = &[
    ("common.welcome", "Willkommen bei Gullak"),
    ("common.loading", "Laden..."),
    ("common.save", "Speichern"),
    ("common.cancel", "Abbrechen"),
    ("common.continue", "Weiter"),
    ("common.back", "Zurück"),
    ("common.next", "Weiter"),
    ("common.submit", "Senden"),
    ("common.close", "Schließen"),
    ("auth.login", "Anmelden"),
    ("auth.register", "Registrieren"),
    ("auth.loginWithGoogle", "Mit Google anmelden"),
    ("auth.welcomeBack", "Willkommen zurück!"),
    ("auth.createAccount", "Konto erstellen"),
    ("dashboard.totalSavings", "Gesamtersparnisse"),
    ("dashboard.thisWeek", "Diese Woche"),
    ("dashboard.thisMonth", "Diesen Monat"),
    ("dashboard.thisYear", "Dieses Jahr"),
    ("voice.listening", "Höre zu..."),
    ("voice.processing", "Verarbeitung..."),
    ("voice.tapToSpeak", "Zum Sprechen tippen"),
    ("audio.welcomeMessage", "Willkommen bei Gullak, Ihrem sprachgesteuerten Spar-Begleiter. Sie können mit Sprachbefehlen oder Berührung navigieren. Sagen Sie \"Hilfe\" für Sprachbefehle."),
];

pub const MR: &[(&str, &str)] = &[
    ("common.welcome", "गुल्लकमध्ये आपले स्वागत"),
    ("common.loading", "लोड होत आहे..."),
    ("common.save", "सेव्ह करा"),
    ("common.cancel", "रद्द करा"),
    ("common.continue", "पुढे चला"),
    ("common.back", "मागे"),
    ("common.next", "पुढील"),
    ("common.submit", "सबमिट करा"),
    ("common.close", "बंद करा"),
    ("auth.login", "लॉगिन"),
    ("auth.register", "नोंदणी करा"),
    ("auth.loginWithGoogle", "Google सह लॉगिन करा"),
    ("auth.welcomeBack", "परत आपले स्वागत!"),
    ("auth.createAccount", "आपले खाते तयार करा"),
    ("dashboard.totalSavings", "एकूण बचत"),
    ("dashboard.thisWeek", "या आठवड्यात"),
    ("dashboard.thisMonth", "या महिन्यात"),
    ("dashboard.thisYear", "या वर्षी"),
    ("voice.listening", "ऐकत आहे..."),
    ("voice.processing", "प्रक्रिया करत आहे..."),
    ("voice.tapToSpeak", "बोलण्यासाठी टॅप करा"),
    ("audio.welcomeMessage", "गुल्लकमध्ये आपले स्वागत, आपला आवाज-सक्षम बचत साथीदार. आपण आवाज आदेश किंवा स्पर्शाचा वापर करून नेव्हिगेट करू शकता."),
];

pub const HI: &[(&str, &str)] = &[
    ("common.welcome", "गुल्लक में आपका स्वागत है"),
    ("common.loading", "लोड हो रहा है..."),
    ("common.save", "सेव करें"),
    ("common.cancel", "रद्द करें"),
    ("common.continue", "जारी रखें"),
    ("common.back", "वापस"),
    ("common.next", "अगला"),
    ("common.submit", "सबमिट करें"),
    ("common.close", "बंद करें"),
    ("auth.login", "लॉगिन"),
    ("auth.register", "रजिस्टर करें"),
    ("auth.loginWithGoogle", "Google से लॉगिन करें"),
    ("auth.welcomeBack", "वापस आपका स्वागत है!"),
    ("auth.createAccount", "अपना खाता बनाएं"),
    ("dashboard.totalSavings", "कुल बचत"),
    ("dashboard.thisWeek", "इस सप्ताह"),
    ("dashboard.thisMonth", "इस महीने"),
    ("dashboard.thisYear", "इस साल"),
    ("voice.listening", "सुन रहा है..."),
    ("voice.processing", "प्रोसेसिंग..."),
    ("voice.tapToSpeak", "बोलने के लिए टैप करें"),
    ("audio.welcomeMessage", "गुल्लक में आपका स्वागत है, आपका आवाज-सक्षम बचत साथी। आप आवाज कमांड या स्पर्श का उपयोग करके नेविगेट कर सकते हैं।"),
];
