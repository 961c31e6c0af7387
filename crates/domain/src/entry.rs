use std::slice::Iter;

use derive_more::{AsRef, Display, Into};
use uuid::Uuid;

use crate::ExerciseTemplate;

/// One configured exercise within a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub id: EntryID,
    pub name: String,
    pub sets: Quantity,
    pub reps: Quantity,
    pub hold_time: Quantity,
    pub weight: Quantity,
    pub side: Side,
    pub stage: Stage,
    pub equipment: Equipment,
}

impl ExerciseEntry {
    /// Creates an empty entry as added by hand, before the user has named it.
    #[must_use]
    pub fn blank(id: EntryID) -> Self {
        Self {
            id,
            name: String::new(),
            sets: Quantity::ZERO,
            reps: Quantity::ZERO,
            hold_time: Quantity::ZERO,
            weight: Quantity::ZERO,
            side: Side::default(),
            stage: Stage::default(),
            equipment: Equipment::default(),
        }
    }

    #[must_use]
    pub fn from_template(template: &ExerciseTemplate) -> Self {
        Self::from_template_with_id(template, EntryID::generate())
    }

    /// Negative template defaults are clamped to zero.
    #[must_use]
    pub fn from_template_with_id(template: &ExerciseTemplate, id: EntryID) -> Self {
        Self {
            id,
            name: template.name.clone(),
            sets: Quantity::clamped(template.default_sets),
            reps: Quantity::clamped(template.default_reps),
            hold_time: Quantity::clamped(template.default_hold_time),
            weight: Quantity::ZERO,
            side: Side::Both,
            stage: Stage::default(),
            equipment: Equipment::default(),
        }
    }

    #[must_use]
    pub fn quantity(&self, field: QuantityField) -> Quantity {
        match field {
            QuantityField::Sets => self.sets,
            QuantityField::Reps => self.reps,
            QuantityField::HoldTime => self.hold_time,
            QuantityField::Weight => self.weight,
        }
    }

    fn quantity_mut(&mut self, field: QuantityField) -> &mut Quantity {
        match field {
            QuantityField::Sets => &mut self.sets,
            QuantityField::Reps => &mut self.reps,
            QuantityField::HoldTime => &mut self.hold_time,
            QuantityField::Weight => &mut self.weight,
        }
    }

    /// Applies a single field update.
    ///
    /// Returns `false` and leaves the entry untouched if a numeric value is negative or too
    /// large.
    pub fn apply(&mut self, update: EntryUpdate) -> bool {
        match update {
            EntryUpdate::Name(name) => self.name = name,
            EntryUpdate::Sets(value) => return self.set_quantity(QuantityField::Sets, value),
            EntryUpdate::Reps(value) => return self.set_quantity(QuantityField::Reps, value),
            EntryUpdate::HoldTime(value) => {
                return self.set_quantity(QuantityField::HoldTime, value);
            }
            EntryUpdate::Weight(value) => return self.set_quantity(QuantityField::Weight, value),
            EntryUpdate::Side(side) => self.side = side,
            EntryUpdate::Stage(stage) => self.stage = stage,
            EntryUpdate::Equipment(equipment) => self.equipment = equipment,
        }
        true
    }

    fn set_quantity(&mut self, field: QuantityField, value: i64) -> bool {
        match Quantity::new(value) {
            Ok(quantity) => {
                *self.quantity_mut(field) = quantity;
                true
            }
            Err(_) => false,
        }
    }

    pub fn increment(&mut self, field: QuantityField) {
        let quantity = self.quantity_mut(field);
        *quantity = quantity.increment();
    }

    pub fn decrement(&mut self, field: QuantityField) {
        let quantity = self.quantity_mut(field);
        *quantity = quantity.decrement();
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryID(String);

impl EntryID {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Derives the id of a copy of this entry.
    #[must_use]
    pub fn derive(&self, suffix: usize) -> Self {
        Self(format!("{}-{suffix}", self.0))
    }
}

impl From<Uuid> for EntryID {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl From<u128> for EntryID {
    fn from(value: u128) -> Self {
        Self::from(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl From<&str> for EntryID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A non-negative amount such as sets, repetitions, seconds or kilograms.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(value: i64) -> Result<Self, QuantityError> {
        if value < 0 {
            return Err(QuantityError::Negative(value));
        }

        u32::try_from(value)
            .map(Self)
            .map_err(|_| QuantityError::TooLarge(value))
    }

    #[must_use]
    pub fn clamped(value: i64) -> Self {
        match Self::new(value) {
            Ok(quantity) => quantity,
            Err(QuantityError::Negative(_) | QuantityError::ParseError) => Self::ZERO,
            Err(QuantityError::TooLarge(_)) => Self(u32::MAX),
        }
    }

    #[must_use]
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        i64::from(value.0)
    }
}

impl TryFrom<&str> for Quantity {
    type Error = QuantityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<i64>() {
            Ok(parsed_value) => Quantity::new(parsed_value),
            Err(_) => Err(QuantityError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum QuantityError {
    #[error("Value must not be negative ({0} < 0)")]
    Negative(i64),
    #[error("Value must be 4294967295 or less ({0} > 4294967295)")]
    TooLarge(i64),
    #[error("Value must be an integer")]
    ParseError,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuantityField {
    Sets,
    Reps,
    HoldTime,
    Weight,
}

impl Property for QuantityField {
    fn iter() -> Iter<'static, QuantityField> {
        static FIELDS: [QuantityField; 4] = [
            QuantityField::Sets,
            QuantityField::Reps,
            QuantityField::HoldTime,
            QuantityField::Weight,
        ];
        FIELDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            QuantityField::Sets => "Sets",
            QuantityField::Reps => "Reps",
            QuantityField::HoldTime => "Hold Time",
            QuantityField::Weight => "Weight",
        }
    }
}

/// A new value for exactly one field of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryUpdate {
    Name(String),
    Sets(i64),
    Reps(i64),
    HoldTime(i64),
    Weight(i64),
    Side(Side),
    Stage(Stage),
    Equipment(Equipment),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    #[default]
    Both,
}

impl Side {
    /// The side a duplicated unilateral exercise is performed on.
    #[must_use]
    pub fn opposite(self) -> Option<Side> {
        match self {
            Side::Left => Some(Side::Right),
            Side::Right => Some(Side::Left),
            Side::Both => None,
        }
    }
}

impl Property for Side {
    fn iter() -> Iter<'static, Side> {
        static SIDE: [Side; 3] = [Side::Left, Side::Right, Side::Both];
        SIDE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
            Side::Both => "Both",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    #[default]
    One = 1,
    Two = 2,
    Three = 3,
}

impl Property for Stage {
    fn iter() -> Iter<'static, Stage> {
        static STAGE: [Stage; 3] = [Stage::One, Stage::Two, Stage::Three];
        STAGE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Stage::One => "Stage 1",
            Stage::Two => "Stage 2",
            Stage::Three => "Stage 3",
        }
    }
}

impl TryFrom<&str> for Stage {
    type Error = StageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Stage::iter()
            .find(|stage| stage.name() == value)
            .copied()
            .ok_or(StageError::Invalid)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StageError {
    #[error("Invalid stage")]
    Invalid,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Equipment {
    Dumbbell,
    #[default]
    Bodyweight,
    Machine,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 3] = [
            Equipment::Dumbbell,
            Equipment::Bodyweight,
            Equipment::Machine,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Machine => "Machine",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
