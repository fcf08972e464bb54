//! UI Builder module for creating keyboards and formatting prompts

use reqwest::Url;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    KeyboardRemove, ReplyMarkup,
};

use crate::dialogue::{Session, Step};
use crate::errors::InputError;
use crate::localization::t;
use crate::measurement_types::{ActivityLevel, Module};

/// Text to send plus the keyboard to attach, if any
#[derive(Debug, Clone)]
pub struct Prompt {
    pub text: String,
    pub markup: Option<ReplyMarkup>,
}

impl Prompt {
    fn plain(text: String) -> Self {
        Self { text, markup: None }
    }

    fn with_markup(text: String, markup: impl Into<ReplyMarkup>) -> Self {
        Self {
            text,
            markup: Some(markup.into()),
        }
    }
}

/// Welcome text explaining both metrics
pub fn welcome_message() -> String {
    [
        t("welcome-title"),
        t("welcome-description"),
        t("welcome-bmi"),
        t("welcome-body-fat"),
        t("welcome-choose"),
    ]
    .join("\n\n")
}

pub fn help_message() -> String {
    [
        t("help-title"),
        t("help-start"),
        t("help-cancel"),
        t("help-help"),
    ]
    .join("\n")
}

pub fn create_module_keyboard() -> InlineKeyboardMarkup {
    let buttons = Module::ALL
        .into_iter()
        .map(|module| InlineKeyboardButton::callback(t(module.label_key()), module.token()))
        .collect::<Vec<_>>();

    InlineKeyboardMarkup::new(vec![buttons])
}

pub fn create_gender_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(t("gender-male-button")),
        KeyboardButton::new(t("gender-female-button")),
    ]])
    .one_time_keyboard()
    .resize_keyboard()
}

/// One activity level per row, in coefficient order
pub fn create_activity_keyboard() -> InlineKeyboardMarkup {
    let rows = ActivityLevel::ALL
        .into_iter()
        .map(|level| vec![InlineKeyboardButton::callback(t(level.label_key()), level.token())])
        .collect::<Vec<_>>();

    InlineKeyboardMarkup::new(rows)
}

pub fn create_consultation_keyboard(url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
        t("consultation-button"),
        url.clone(),
    )]])
}

/// Question to ask for the session's current step
pub fn prompt_for(session: &Session) -> Prompt {
    match session.step() {
        Step::SelectModule => Prompt::with_markup(welcome_message(), create_module_keyboard()),
        Step::Weight => {
            let chosen = match session.answers().module() {
                Some(Module::BodyFat) => t("module-body-fat-chosen"),
                _ => t("module-bmi-chosen"),
            };
            Prompt::plain(format!("{}\n\n{}", chosen, t("prompt-weight")))
        }
        Step::Height => Prompt::plain(t("prompt-height")),
        Step::Age => Prompt::plain(t("prompt-age")),
        Step::Gender => Prompt::with_markup(t("prompt-gender"), create_gender_keyboard()),
        Step::Neck => Prompt::with_markup(t("prompt-neck"), KeyboardRemove::new()),
        Step::Waist => Prompt::plain(t("prompt-waist")),
        Step::Hip => Prompt::plain(t("prompt-hip")),
        Step::Activity => Prompt::with_markup(t("prompt-activity"), create_activity_keyboard()),
    }
}

/// Corrective message for a rejected answer; selection steps get their keyboard back
pub fn retry_prompt(session: &Session, error: &InputError) -> Prompt {
    let text = t(error.message_key());
    match session.step() {
        Step::SelectModule => Prompt::with_markup(text, create_module_keyboard()),
        Step::Gender => Prompt::with_markup(text, create_gender_keyboard()),
        Step::Activity => Prompt::with_markup(text, create_activity_keyboard()),
        _ => Prompt::plain(text),
    }
}
