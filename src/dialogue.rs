//! Questionnaire dialogue module: the per-chat state machine deciding which
//! question is asked next.
//!
//! Steps only move forward. An accepted answer is recorded and the session
//! moves to the next step along the guarded edges below; a rejected answer
//! leaves both the step and the recorded answers untouched. Module and
//! activity are chosen with inline buttons only; typed text at those steps
//! is rejected.
//!
//! ```text
//! SelectModule -> Weight -> Height -> Age -+-(BMI)------------------------------+-> Activity -> done
//!                                          +-(body fat)-> Gender -> Neck -> Waist -+-(male)-----^
//!                                                                                  +-(female)-> Hip
//! ```

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::errors::{IncompleteAnswers, InputError};
use crate::input_parser::{parse_activity, parse_age, parse_gender, parse_measurement, parse_module};
use crate::measurement_types::{ActivityLevel, Field, Gender, Girths, Module, Questionnaire};

/// Question currently awaiting an answer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    SelectModule,
    Weight,
    Height,
    Age,
    Gender,
    Neck,
    Waist,
    Hip,
    Activity,
}

impl Step {
    /// Steps answered by pressing an inline button
    pub fn expects_selection(self) -> bool {
        matches!(self, Step::SelectModule | Step::Activity)
    }
}

/// Validated answers collected so far; fields are only ever filled in
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Answers {
    module: Option<Module>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    gender: Option<Gender>,
    neck_cm: Option<f64>,
    waist_cm: Option<f64>,
    hip_cm: Option<f64>,
    activity: Option<ActivityLevel>,
}

impl Answers {
    pub fn module(&self) -> Option<Module> {
        self.module
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn neck_cm(&self) -> Option<f64> {
        self.neck_cm
    }

    pub fn waist_cm(&self) -> Option<f64> {
        self.waist_cm
    }

    pub fn hip_cm(&self) -> Option<f64> {
        self.hip_cm
    }

    pub fn activity(&self) -> Option<ActivityLevel> {
        self.activity
    }

    fn into_questionnaire(self) -> Result<Questionnaire, IncompleteAnswers> {
        let module = require(self.module, "module")?;
        let weight_kg = require(self.weight_kg, "weight")?;
        let height_cm = require(self.height_cm, "height")?;
        let age = require(self.age, "age")?;
        let activity = require(self.activity, "activity")?;

        match module {
            Module::Bmi => Ok(Questionnaire::Bmi {
                weight_kg,
                height_cm,
                age,
                activity,
            }),
            Module::BodyFat => {
                let neck_cm = require(self.neck_cm, "neck")?;
                let waist_cm = require(self.waist_cm, "waist")?;
                let girths = match require(self.gender, "gender")? {
                    Gender::Male => Girths::Male { neck_cm, waist_cm },
                    Gender::Female => Girths::Female {
                        neck_cm,
                        waist_cm,
                        hip_cm: require(self.hip_cm, "hip")?,
                    },
                };
                Ok(Questionnaire::BodyFat {
                    weight_kg,
                    height_cm,
                    age,
                    girths,
                    activity,
                })
            }
        }
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, IncompleteAnswers> {
    value.ok_or(IncompleteAnswers { field })
}

/// One event delivered to a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// Typed text
    Answer(&'a str),
    /// Callback data of a pressed inline button
    Selection(&'a str),
    Cancel,
}

/// Outcome of feeding one input to a session
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// Answer accepted; ask the question for the session's new step
    Next(Session),
    /// Answer rejected; ask the same question again
    Retry { session: Session, error: InputError },
    /// Button pressed for a step that takes typed text; nothing changes
    Ignored(Session),
    /// Last answer accepted; the questionnaire is ready for computation
    Completed(Questionnaire),
    Cancelled,
    Aborted(IncompleteAnswers),
}

/// One questionnaire in progress
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    step: Step,
    answers: Answers,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            step: Step::SelectModule,
            answers: Answers::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Feed one input and move along the question graph
    pub fn advance(mut self, input: Input<'_>) -> Transition {
        let raw = match (input, self.step.expects_selection()) {
            (Input::Cancel, _) => return Transition::Cancelled,
            (Input::Answer(raw), false) | (Input::Selection(raw), true) => raw,
            // Selection steps only take their buttons
            (Input::Answer(_), true) => {
                let error = match self.step {
                    Step::SelectModule => InputError::InvalidModule,
                    _ => InputError::InvalidActivity,
                };
                return Transition::Retry {
                    session: self,
                    error,
                };
            }
            (Input::Selection(_), false) => return Transition::Ignored(self),
        };

        match self.accept(raw) {
            Ok(Some(next)) => {
                self.step = next;
                Transition::Next(self)
            }
            Ok(None) => match self.answers.into_questionnaire() {
                Ok(questionnaire) => Transition::Completed(questionnaire),
                Err(missing) => Transition::Aborted(missing),
            },
            Err(error) => Transition::Retry {
                session: self,
                error,
            },
        }
    }

    /// Record the answer for the current step and pick the following step.
    /// `None` means the last question has been answered.
    fn accept(&mut self, raw: &str) -> Result<Option<Step>, InputError> {
        let answers = &mut self.answers;
        let next = match self.step {
            Step::SelectModule => {
                answers.module = Some(parse_module(raw)?);
                Step::Weight
            }
            Step::Weight => {
                answers.weight_kg = Some(parse_measurement(Field::Weight, raw)?);
                Step::Height
            }
            Step::Height => {
                answers.height_cm = Some(parse_measurement(Field::Height, raw)?);
                Step::Age
            }
            Step::Age => {
                answers.age = Some(parse_age(raw)?);
                match answers.module {
                    Some(Module::BodyFat) => Step::Gender,
                    _ => Step::Activity,
                }
            }
            Step::Gender => {
                answers.gender = Some(parse_gender(raw)?);
                Step::Neck
            }
            Step::Neck => {
                answers.neck_cm = Some(parse_measurement(Field::Neck, raw)?);
                Step::Waist
            }
            Step::Waist => {
                answers.waist_cm = Some(parse_measurement(Field::Waist, raw)?);
                match answers.gender {
                    Some(Gender::Female) => Step::Hip,
                    _ => Step::Activity,
                }
            }
            Step::Hip => {
                answers.hip_cm = Some(parse_measurement(Field::Hip, raw)?);
                Step::Activity
            }
            Step::Activity => {
                answers.activity = Some(parse_activity(raw)?);
                return Ok(None);
            }
        };
        Ok(Some(next))
    }
}

/// Conversation state stored per chat
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum QuestionnaireState {
    #[default]
    Idle,
    InProgress(Session),
}

/// Type alias for our questionnaire dialogue
pub type QuestionnaireDialogue = Dialogue<QuestionnaireState, InMemStorage<QuestionnaireState>>;
