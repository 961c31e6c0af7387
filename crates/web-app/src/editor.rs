//! Program editor
//!
//! State of the program form together with the messages that change it. The host UI renders
//! the fields of [`Editor`], turns user input into [`Msg`] values and passes them to
//! [`Editor::update`]. A returned [`Command`] is run by [`execute`], whose resulting message is
//! fed back into `update`.

use log::debug;
use rehab_domain::{
    BreakInterval, CatalogService, Category, CategoryID, Day, EntryUpdate, ExerciseList,
    ExerciseTemplate, Frequency, Program, ProgramDraft, ProgramService, QuantityField,
    SavedProgram, Schedule, TemplateID,
};

use crate::{Notification, Settings};

const PROGRAM_SAVED: &str = "Program saved successfully";
const SAVE_FAILED: &str = "Failed to save program. Please try again.";
const CATEGORIES_FAILED: &str = "Failed to load categories. Please try again.";
const TEMPLATES_FAILED: &str = "Failed to load exercises. Please try again.";

pub struct Editor {
    pub categories: Vec<Category>,
    pub loading_categories: bool,
    pub category: Option<CategoryID>,
    pub templates: Vec<ExerciseTemplate>,
    pub loading_templates: bool,
    pub exercises: ExerciseList,
    pub draft: ProgramDraft,
    pub saving: bool,
    pub notifications: Vec<Notification>,
    default_schedule: Schedule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    LoadCategories,
    CategoriesLoaded(Result<Vec<Category>, String>),
    SelectCategory(Option<CategoryID>),
    TemplatesLoaded(CategoryID, Result<Vec<ExerciseTemplate>, String>),

    AddTemplate(TemplateID),
    AddBlankExercise,
    UpdateExercise(usize, EntryUpdate),
    QuantityChanged(usize, QuantityField, String),
    IncrementQuantity(usize, QuantityField),
    DecrementQuantity(usize, QuantityField),
    DuplicateExercise(usize),
    RemoveExercise(usize),
    Reorder { from: usize, to: usize },

    NameChanged(String),
    ToggleDay(Day),
    FrequencyChanged(String),
    BreakIntervalChanged(String),
    NotesChanged(String),

    ClearAll,
    SaveProgram,
    ProgramSaved(Result<SavedProgram, String>),

    DismissNotification(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchCategories,
    FetchTemplates(CategoryID),
    SaveProgram(Program),
}

impl Editor {
    /// Creates an empty editor and the command that loads the catalog.
    #[must_use]
    pub fn new(settings: &Settings) -> (Self, Command) {
        let default_schedule = settings.default_schedule();
        let editor = Self {
            categories: vec![],
            loading_categories: true,
            category: None,
            templates: vec![],
            loading_templates: false,
            exercises: ExerciseList::new(),
            draft: ProgramDraft {
                schedule: default_schedule.clone(),
                ..ProgramDraft::default()
            },
            saving: false,
            notifications: vec![],
            default_schedule,
        };
        (editor, Command::FetchCategories)
    }

    pub fn update(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::LoadCategories => {
                self.loading_categories = true;
                return Some(Command::FetchCategories);
            }
            Msg::CategoriesLoaded(Ok(categories)) => {
                self.categories = categories;
                self.loading_categories = false;
            }
            Msg::CategoriesLoaded(Err(_)) => {
                self.loading_categories = false;
                self.notifications.push(Notification::error(CATEGORIES_FAILED));
            }
            Msg::SelectCategory(category) => {
                self.templates.clear();
                self.category.clone_from(&category);
                self.loading_templates = category.is_some();
                return category.map(Command::FetchTemplates);
            }
            Msg::TemplatesLoaded(category, result) => {
                if self.category.as_ref() != Some(&category) {
                    debug!("ignored exercise templates of unselected category {category}");
                    return None;
                }
                self.loading_templates = false;
                match result {
                    Ok(templates) => self.templates = templates,
                    Err(_) => self.notifications.push(Notification::error(TEMPLATES_FAILED)),
                }
            }

            Msg::AddTemplate(template_id) => {
                match self.templates.iter().find(|t| t.id == template_id) {
                    Some(template) => self.exercises = self.exercises.append(template.to_entry()),
                    None => debug!("ignored unknown exercise template {template_id}"),
                }
            }
            Msg::AddBlankExercise => {
                self.exercises = self.exercises.add_blank();
            }
            Msg::UpdateExercise(index, update) => {
                self.exercises = self.exercises.update_field(index, update);
            }
            Msg::QuantityChanged(index, field, value) => {
                let update = quantity_update(field, leading_integer(&value));
                self.exercises = self.exercises.update_field(index, update);
            }
            Msg::IncrementQuantity(index, field) => {
                self.exercises = self.exercises.increment(index, field);
            }
            Msg::DecrementQuantity(index, field) => {
                self.exercises = self.exercises.decrement(index, field);
            }
            Msg::DuplicateExercise(index) => {
                self.exercises = self.exercises.duplicate_for_opposite_side(index);
            }
            Msg::RemoveExercise(index) => {
                self.exercises = self.exercises.remove(index);
            }
            Msg::Reorder { from, to } => {
                self.exercises = self.exercises.reorder(from, to);
            }

            Msg::NameChanged(name) => {
                self.draft.name = name;
            }
            Msg::ToggleDay(day) => {
                self.draft.schedule.toggle_day(day);
            }
            Msg::FrequencyChanged(value) => {
                self.draft.schedule.frequency = Frequency::try_from(value.as_str())
                    .unwrap_or(self.default_schedule.frequency);
            }
            Msg::BreakIntervalChanged(value) => {
                self.draft.schedule.break_interval = BreakInterval::try_from(value.as_str())
                    .unwrap_or(self.default_schedule.break_interval);
            }
            Msg::NotesChanged(notes) => {
                self.draft.therapist_notes = notes;
            }

            Msg::ClearAll => {
                self.clear_all();
            }
            Msg::SaveProgram => {
                if self.saving {
                    debug!("ignored save request while saving");
                    return None;
                }
                match self.draft.assemble(&self.exercises) {
                    Ok(program) => {
                        self.saving = true;
                        return Some(Command::SaveProgram(program));
                    }
                    Err(err) => self.notifications.push(Notification::error(err.to_string())),
                }
            }
            Msg::ProgramSaved(Ok(_)) => {
                self.saving = false;
                self.notifications.push(Notification::success(PROGRAM_SAVED));
                self.clear_all();
            }
            Msg::ProgramSaved(Err(_)) => {
                self.saving = false;
                self.notifications.push(Notification::error(SAVE_FAILED));
            }

            Msg::DismissNotification(index) => {
                if index < self.notifications.len() {
                    self.notifications.remove(index);
                }
            }
        }
        None
    }

    fn clear_all(&mut self) {
        self.exercises = self.exercises.clear();
        self.draft.clear();
        self.draft.schedule = self.default_schedule.clone();
        self.category = None;
        self.templates.clear();
        self.loading_templates = false;
    }
}

/// Runs a command and returns the message carrying its result.
pub async fn execute<S: CatalogService + ProgramService>(service: &S, command: Command) -> Msg {
    match command {
        Command::FetchCategories => Msg::CategoriesLoaded(
            service
                .get_categories()
                .await
                .map_err(|err| err.to_string()),
        ),
        Command::FetchTemplates(category_id) => {
            let result = service
                .get_templates(&category_id)
                .await
                .map_err(|err| err.to_string());
            Msg::TemplatesLoaded(category_id, result)
        }
        Command::SaveProgram(program) => Msg::ProgramSaved(
            service
                .save_program(program)
                .await
                .map_err(|err| err.to_string()),
        ),
    }
}

/// Integer at the start of a form input, ignoring trailing characters. Input without leading
/// digits yields `0`, too many digits saturate.
fn leading_integer(value: &str) -> i64 {
    let value = value.trim_start();
    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..end].parse::<i64>() {
        Ok(n) => sign * n,
        Err(_) if end > 0 => sign * i64::MAX,
        Err(_) => 0,
    }
}

fn quantity_update(field: QuantityField, value: i64) -> EntryUpdate {
    match field {
        QuantityField::Sets => EntryUpdate::Sets(value),
        QuantityField::Reps => EntryUpdate::Reps(value),
        QuantityField::HoldTime => EntryUpdate::HoldTime(value),
        QuantityField::Weight => EntryUpdate::Weight(value),
    }
}
