//! REST
//!
//! Access to the catalog and program endpoints of the HTTP API. The types in this module define
//! the JSON wire format and convert from and into the domain types.

use std::str::FromStr;

use anyhow::anyhow;
use chrono::Weekday;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use rehab_domain as domain;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub base_url: String,
    pub sender: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            sender: GlooNetSendRequest,
        }
    }
}

impl<S: SendRequest> REST<S> {
    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    async fn fetch<T>(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, domain::StorageError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = request.map_err(|err| domain::StorageError::Other(Box::new(err)))?;
        let Ok(response) = self.sender.send_request(request).await else {
            return Err(domain::StorageError::NoConnection);
        };
        if !response.ok() {
            return Err(domain::StorageError::Other(
                anyhow!("{} {}", response.status(), response.status_text()).into(),
            ));
        }
        response.json::<T>().await.map_err(|err| {
            domain::StorageError::Other(anyhow!("deserialization failed: {err}").into())
        })
    }
}

impl<S: SendRequest> domain::CatalogRepository for REST<S> {
    async fn read_categories(&self) -> Result<Vec<domain::Category>, domain::ReadError> {
        let request = Request::get(&self.url("categories")).build();
        Ok(self
            .fetch::<Vec<Category>>(request)
            .await?
            .into_iter()
            .map(domain::Category::from)
            .collect())
    }

    async fn read_templates(
        &self,
        category_id: &domain::CategoryID,
    ) -> Result<Vec<domain::ExerciseTemplate>, domain::ReadError> {
        let request =
            Request::get(&self.url(&format!("categories/{category_id}/exercises"))).build();
        Ok(self
            .fetch::<Vec<ExerciseTemplate>>(request)
            .await?
            .into_iter()
            .map(domain::ExerciseTemplate::from)
            .collect())
    }
}

impl<S: SendRequest> domain::ProgramRepository for REST<S> {
    async fn create_program(
        &self,
        program: domain::Program,
    ) -> Result<domain::SavedProgram, domain::CreateError> {
        let request = Request::post(&self.url("combos")).json(&Program::from(&program));
        Ok(self.fetch::<SavedProgram>(request).await?.into())
    }
}

/// Identifier that the API delivers either as string or as number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ID {
    Text(String),
    Number(i64),
}

impl From<ID> for String {
    fn from(value: ID) -> Self {
        match value {
            ID::Text(text) => text,
            ID::Number(number) => number.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: ID,
    pub name: String,
}

impl From<Category> for domain::Category {
    fn from(value: Category) -> Self {
        domain::Category {
            id: String::from(value.id).into(),
            name: value.name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTemplate {
    pub id: ID,
    pub name: String,
    #[serde(default)]
    pub default_sets: i64,
    #[serde(default)]
    pub default_reps: i64,
    #[serde(default)]
    pub default_hold_time: i64,
}

impl From<ExerciseTemplate> for domain::ExerciseTemplate {
    fn from(value: ExerciseTemplate) -> Self {
        domain::ExerciseTemplate {
            id: String::from(value.id).into(),
            name: value.name,
            default_sets: value.default_sets,
            default_reps: value.default_reps,
            default_hold_time: value.default_hold_time,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub frequency: u32,
    pub break_interval: u32,
    pub selected_days: Vec<String>,
    pub therapist_notes: String,
}

impl From<&domain::Program> for Program {
    fn from(value: &domain::Program) -> Self {
        Program {
            name: value.name.to_string(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
            frequency: value.schedule.frequency.into(),
            break_interval: value.schedule.break_interval.into(),
            selected_days: value
                .schedule
                .days
                .iter()
                .map(|day| DayCode::from(**day).as_ref().to_string())
                .collect(),
            therapist_notes: value.therapist_notes.clone(),
        }
    }
}

impl TryFrom<Program> for domain::Program {
    type Error = ProgramWireError;

    fn try_from(value: Program) -> Result<Self, Self::Error> {
        let exercises = value
            .exercises
            .into_iter()
            .map(domain::ExerciseEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let days = value
            .selected_days
            .iter()
            .map(|code| {
                DayCode::from_str(code)
                    .map(|code| domain::Day::from(Weekday::from(code)))
                    .map_err(|_| ProgramWireError::InvalidDay(code.clone()))
            })
            .collect::<Result<_, _>>()?;
        Ok(domain::Program {
            name: domain::Name::new(&value.name)?,
            exercises: domain::ExerciseList::from_entries(exercises),
            schedule: domain::Schedule {
                days,
                frequency: domain::Frequency::new(value.frequency)?,
                break_interval: domain::BreakInterval::new(value.break_interval),
            },
            therapist_notes: value.therapist_notes,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProgramWireError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidFrequency(#[from] domain::FrequencyError),
    #[error("invalid {field}: {error}")]
    InvalidQuantity {
        field: &'static str,
        error: domain::QuantityError,
    },
    #[error(transparent)]
    InvalidStage(#[from] domain::StageError),
    #[error("invalid day: {0}")]
    InvalidDay(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub hold_time: i64,
    pub weight: i64,
    pub side: Side,
    pub stage: String,
    pub equipment: Equipment,
}

impl From<&domain::ExerciseEntry> for Exercise {
    fn from(value: &domain::ExerciseEntry) -> Self {
        Exercise {
            id: value.id.to_string(),
            name: value.name.clone(),
            sets: value.sets.into(),
            reps: value.reps.into(),
            hold_time: value.hold_time.into(),
            weight: value.weight.into(),
            side: value.side.into(),
            stage: domain::Property::name(value.stage).to_string(),
            equipment: value.equipment.into(),
        }
    }
}

impl TryFrom<Exercise> for domain::ExerciseEntry {
    type Error = ProgramWireError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let quantity = |field: &'static str, value: i64| {
            domain::Quantity::new(value)
                .map_err(|error| ProgramWireError::InvalidQuantity { field, error })
        };
        Ok(domain::ExerciseEntry {
            id: value.id.into(),
            name: value.name,
            sets: quantity("sets", value.sets)?,
            reps: quantity("reps", value.reps)?,
            hold_time: quantity("holdTime", value.hold_time)?,
            weight: quantity("weight", value.weight)?,
            side: value.side.into(),
            stage: domain::Stage::try_from(value.stage.as_str())?,
            equipment: value.equipment.into(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Both,
}

impl From<domain::Side> for Side {
    fn from(value: domain::Side) -> Self {
        match value {
            domain::Side::Left => Side::Left,
            domain::Side::Right => Side::Right,
            domain::Side::Both => Side::Both,
        }
    }
}

impl From<Side> for domain::Side {
    fn from(value: Side) -> Self {
        match value {
            Side::Left => domain::Side::Left,
            Side::Right => domain::Side::Right,
            Side::Both => domain::Side::Both,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    Dumbbell,
    Bodyweight,
    Machine,
}

impl From<domain::Equipment> for Equipment {
    fn from(value: domain::Equipment) -> Self {
        match value {
            domain::Equipment::Dumbbell => Equipment::Dumbbell,
            domain::Equipment::Bodyweight => Equipment::Bodyweight,
            domain::Equipment::Machine => Equipment::Machine,
        }
    }
}

impl From<Equipment> for domain::Equipment {
    fn from(value: Equipment) -> Self {
        match value {
            Equipment::Dumbbell => domain::Equipment::Dumbbell,
            Equipment::Bodyweight => domain::Equipment::Bodyweight,
            Equipment::Machine => domain::Equipment::Machine,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
enum DayCode {
    #[strum(serialize = "S")]
    Sunday,
    #[strum(serialize = "M")]
    Monday,
    #[strum(serialize = "T")]
    Tuesday,
    #[strum(serialize = "W")]
    Wednesday,
    #[strum(serialize = "TH")]
    Thursday,
    #[strum(serialize = "F")]
    Friday,
    #[strum(serialize = "Sa")]
    Saturday,
}

impl From<Weekday> for DayCode {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Sun => DayCode::Sunday,
            Weekday::Mon => DayCode::Monday,
            Weekday::Tue => DayCode::Tuesday,
            Weekday::Wed => DayCode::Wednesday,
            Weekday::Thu => DayCode::Thursday,
            Weekday::Fri => DayCode::Friday,
            Weekday::Sat => DayCode::Saturday,
        }
    }
}

impl From<DayCode> for Weekday {
    fn from(value: DayCode) -> Self {
        match value {
            DayCode::Sunday => Weekday::Sun,
            DayCode::Monday => Weekday::Mon,
            DayCode::Tuesday => Weekday::Tue,
            DayCode::Wednesday => Weekday::Wed,
            DayCode::Thursday => Weekday::Thu,
            DayCode::Friday => Weekday::Fri,
            DayCode::Saturday => Weekday::Sat,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SavedProgram {
    pub id: ID,
    pub name: String,
}

impl From<SavedProgram> for domain::SavedProgram {
    fn from(value: SavedProgram) -> Self {
        domain::SavedProgram {
            id: String::from(value.id).into(),
            name: value.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{PROGRAM, PROGRAM_JSON};

    use super::*;

    #[test]
    fn test_program_serialization() {
        assert_eq!(
            serde_json::to_value(Program::from(&*PROGRAM)).unwrap(),
            *PROGRAM_JSON
        );
    }

    #[test]
    fn test_program_deserialization() {
        let program: Program = serde_json::from_value(PROGRAM_JSON.clone()).unwrap();

        assert_eq!(domain::Program::try_from(program).unwrap(), *PROGRAM);
    }

    #[test]
    fn test_program_preserves_exercise_order() {
        let json = serde_json::to_string(&Program::from(&*PROGRAM)).unwrap();
        let program =
            domain::Program::try_from(serde_json::from_str::<Program>(&json).unwrap()).unwrap();

        assert_eq!(program.exercises.ids(), PROGRAM.exercises.ids());
        assert_eq!(program.exercises, PROGRAM.exercises);
    }

    #[test]
    fn test_selected_days_order() {
        let mut program = PROGRAM.clone();
        program.schedule.days = [Weekday::Sat, Weekday::Thu, Weekday::Sun]
            .into_iter()
            .map(domain::Day::from)
            .collect();

        assert_eq!(Program::from(&program).selected_days, vec!["S", "TH", "Sa"]);
    }

    #[rstest]
    #[case::empty_name(
        json!({ "name": "" }),
        ProgramWireError::InvalidName(domain::NameError::Empty)
    )]
    #[case::zero_frequency(
        json!({ "frequency": 0 }),
        ProgramWireError::InvalidFrequency(domain::FrequencyError::Zero)
    )]
    #[case::unknown_day(
        json!({ "selectedDays": ["M", "X"] }),
        ProgramWireError::InvalidDay(String::from("X"))
    )]
    fn test_invalid_program(#[case] patch: serde_json::Value, #[case] expected: ProgramWireError) {
        let mut json = PROGRAM_JSON.clone();
        for (key, value) in patch.as_object().unwrap() {
            json[key] = value.clone();
        }
        let program: Program = serde_json::from_value(json).unwrap();

        assert_eq!(domain::Program::try_from(program), Err(expected));
    }

    #[rstest]
    #[case::negative_sets(
        "sets",
        json!(-1),
        ProgramWireError::InvalidQuantity {
            field: "sets",
            error: domain::QuantityError::Negative(-1)
        }
    )]
    #[case::unknown_stage(
        "stage",
        json!("Stage 4"),
        ProgramWireError::InvalidStage(domain::StageError::Invalid)
    )]
    fn test_invalid_exercise(
        #[case] field: &str,
        #[case] value: serde_json::Value,
        #[case] expected: ProgramWireError,
    ) {
        let mut json = PROGRAM_JSON.clone();
        json["exercises"][0][field] = value;
        let program: Program = serde_json::from_value(json).unwrap();

        assert_eq!(domain::Program::try_from(program), Err(expected));
    }

    #[test]
    fn test_invalid_side() {
        let mut json = PROGRAM_JSON.clone();
        json["exercises"][0]["side"] = json!("up");

        assert!(serde_json::from_value::<Program>(json).is_err());
    }

    #[test]
    fn test_catalog_deserialization() {
        let categories: Vec<Category> = serde_json::from_value(json!([
            { "id": 1, "name": "Knee" },
            { "id": "hip", "name": "Hip" }
        ]))
        .unwrap();
        let templates: Vec<ExerciseTemplate> = serde_json::from_value(json!([
            { "id": 7, "name": "Squat", "defaultSets": 3, "defaultReps": 10, "defaultHoldTime": 0 },
            { "id": 8, "name": "Plank", "defaultHoldTime": 30 }
        ]))
        .unwrap();

        assert_eq!(
            categories
                .into_iter()
                .map(domain::Category::from)
                .collect::<Vec<_>>(),
            vec![
                domain::Category {
                    id: "1".into(),
                    name: String::from("Knee"),
                },
                domain::Category {
                    id: "hip".into(),
                    name: String::from("Hip"),
                },
            ]
        );
        assert_eq!(
            templates
                .into_iter()
                .map(domain::ExerciseTemplate::from)
                .collect::<Vec<_>>(),
            vec![
                domain::ExerciseTemplate {
                    id: "7".into(),
                    name: String::from("Squat"),
                    default_sets: 3,
                    default_reps: 10,
                    default_hold_time: 0,
                },
                domain::ExerciseTemplate {
                    id: "8".into(),
                    name: String::from("Plank"),
                    default_sets: 0,
                    default_reps: 0,
                    default_hold_time: 30,
                },
            ]
        );
    }

    #[test]
    fn test_saved_program_deserialization() {
        let saved: SavedProgram = serde_json::from_value(json!({
            "id": 42,
            "name": "Knee rehab",
            "createdAt": "2026-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(
            domain::SavedProgram::from(saved),
            domain::SavedProgram {
                id: "42".into(),
                name: String::from("Knee rehab"),
            }
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use std::cell::RefCell;

        use pretty_assertions::assert_eq;
        use rehab_domain::{CatalogRepository, ProgramRepository, ReadError, StorageError};
        use wasm_bindgen_test::wasm_bindgen_test;

        use crate::tests::data::{CATEGORIES_JSON, PROGRAM, PROGRAM_JSON};

        use super::*;

        #[wasm_bindgen_test]
        async fn test_read_categories() {
            let rest = rest_with_response(Some(
                Response::builder().status(200).json(&*CATEGORIES_JSON),
            ));

            assert_eq!(
                rest.read_categories().await.unwrap(),
                vec![
                    domain::Category {
                        id: "1".into(),
                        name: String::from("Knee"),
                    },
                    domain::Category {
                        id: "2".into(),
                        name: String::from("Shoulder"),
                    },
                ]
            );
            assert_eq!(
                rest.sender.request.borrow().as_ref().unwrap().url(),
                "http://localhost:3001/api/categories"
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_categories_no_connection() {
            assert!(matches!(
                rest_with_response(None).read_categories().await,
                Err(ReadError::Storage(StorageError::NoConnection))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_read_templates_error_status() {
            let result = rest_with_response(Some(
                Response::builder()
                    .status(500)
                    .status_text("Internal Server Error")
                    .body::<Option<&str>>(None),
            ))
            .read_templates(&"1".into())
            .await;

            assert!(matches!(
                result,
                Err(ReadError::Storage(StorageError::Other(ref err)))
                    if err.to_string() == "500 Internal Server Error"
            ));
        }

        #[wasm_bindgen_test]
        async fn test_read_templates_invalid_body() {
            let rest = rest_with_response(Some(
                Response::builder().status(200).json(&json!({ "foo": 1 })),
            ));

            let result = rest.read_templates(&"1".into()).await;

            assert!(matches!(
                result,
                Err(ReadError::Storage(StorageError::Other(ref err)))
                    if err.to_string().starts_with("deserialization failed")
            ));
            assert_eq!(
                rest.sender.request.borrow().as_ref().unwrap().url(),
                "http://localhost:3001/api/categories/1/exercises"
            );
        }

        #[wasm_bindgen_test]
        async fn test_create_program() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(201)
                    .json(&json!({ "id": 3, "name": "Knee rehab" })),
            ));

            assert_eq!(
                rest.create_program(PROGRAM.clone()).await.unwrap(),
                domain::SavedProgram {
                    id: "3".into(),
                    name: String::from("Knee rehab"),
                }
            );
            let request = rest.sender.request.borrow_mut().take().unwrap();
            assert_eq!(request.url(), "http://localhost:3001/api/combos");
            assert_eq!(
                request.json::<serde_json::Value>().await.unwrap(),
                *PROGRAM_JSON
            );
        }

        fn rest_with_response(
            response: Option<Result<Response, gloo_net::Error>>,
        ) -> REST<MockSendRequest> {
            REST {
                base_url: String::from("http://localhost:3001/api/"),
                sender: MockSendRequest {
                    request: RefCell::new(None),
                    response: RefCell::new(response),
                },
            }
        }

        struct MockSendRequest {
            request: RefCell<Option<Request>>,
            response: RefCell<Option<Result<Response, gloo_net::Error>>>,
        }

        impl SendRequest for MockSendRequest {
            async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
                *self.request.borrow_mut() = Some(request);
                (*self.response.borrow_mut())
                    .take()
                    .unwrap_or(Err(gloo_net::Error::GlooError("no response".to_string())))
            }
        }
    }
}
