use std::collections::BTreeSet;

use chrono::Weekday;
use derive_more::{AsRef, Deref, Display, Into};

use crate::{CreateError, ExerciseList};

#[allow(async_fn_in_trait)]
pub trait ProgramRepository {
    async fn create_program(&self, program: Program) -> Result<SavedProgram, CreateError>;
}

/// A program as it is persisted: a snapshot of the exercise list plus schedule and notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: Name,
    pub exercises: ExerciseList,
    pub schedule: Schedule,
    pub therapist_notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedProgram {
    pub id: ProgramID,
    pub name: String,
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramID(String);

impl From<&str> for ProgramID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProgramID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The form fields of a program besides its exercises.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramDraft {
    pub name: String,
    pub schedule: Schedule,
    pub therapist_notes: String,
}

impl ProgramDraft {
    /// Combines the draft with the current exercise list.
    ///
    /// Only the name is validated, all other fields are taken as they are. The list is shared
    /// with the caller, not copied.
    pub fn assemble(&self, exercises: &ExerciseList) -> Result<Program, ProgramError> {
        Ok(Program {
            name: Name::new(&self.name)?,
            exercises: exercises.clone(),
            schedule: self.schedule.clone(),
            therapist_notes: self.therapist_notes.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProgramError {
    #[error(transparent)]
    InvalidName(#[from] NameError),
}

/// Program name, stored exactly as entered.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Name(name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Please enter a program name")]
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub days: BTreeSet<Day>,
    pub frequency: Frequency,
    pub break_interval: BreakInterval,
}

impl Schedule {
    pub fn toggle_day(&mut self, day: Day) {
        if !self.days.remove(&day) {
            self.days.insert(day);
        }
    }
}

/// Day of the week, ordered from Sunday to Saturday.
#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day(Weekday);

impl Day {
    pub const ALL: [Day; 7] = [
        Day(Weekday::Sun),
        Day(Weekday::Mon),
        Day(Weekday::Tue),
        Day(Weekday::Wed),
        Day(Weekday::Thu),
        Day(Weekday::Fri),
        Day(Weekday::Sat),
    ];
}

impl From<Weekday> for Day {
    fn from(value: Weekday) -> Self {
        Self(value)
    }
}

impl PartialOrd for Day {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Day {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .num_days_from_sunday()
            .cmp(&other.0.num_days_from_sunday())
    }
}

/// Number of times per day the program is performed.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frequency(u32);

impl Frequency {
    pub fn new(value: u32) -> Result<Self, FrequencyError> {
        if value == 0 {
            return Err(FrequencyError::Zero);
        }

        Ok(Self(value))
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<&str> for Frequency {
    type Error = FrequencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Frequency::new(parsed_value),
            Err(_) => Err(FrequencyError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FrequencyError {
    #[error("Frequency must be at least 1")]
    Zero,
    #[error("Frequency must be an integer")]
    ParseError,
}

/// Rest between two sessions of the same day in seconds.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct BreakInterval(u32);

impl BreakInterval {
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self(seconds)
    }
}

impl Default for BreakInterval {
    fn default() -> Self {
        Self(30)
    }
}

impl TryFrom<&str> for BreakInterval {
    type Error = BreakIntervalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| BreakIntervalError::ParseError)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BreakIntervalError {
    #[error("Break interval must be a non-negative integer")]
    ParseError,
}
