use std::sync::LazyLock;

use chrono::Weekday;
use rehab_domain as domain;
use serde_json::{Value, json};

pub static CATEGORIES_JSON: LazyLock<Value> = LazyLock::new(|| {
    json!([
        { "id": 1, "name": "Knee" },
        { "id": 2, "name": "Shoulder" }
    ])
});

pub static PROGRAM: LazyLock<domain::Program> = LazyLock::new(|| domain::Program {
    name: domain::Name::new("Knee rehab").unwrap(),
    exercises: domain::ExerciseList::from_entries(vec![
        SQUAT_LEFT.clone(),
        domain::ExerciseEntry {
            id: "a-1".into(),
            side: domain::Side::Right,
            ..SQUAT_LEFT.clone()
        },
        PLANK.clone(),
    ]),
    schedule: domain::Schedule {
        days: [Weekday::Fri, Weekday::Mon]
            .into_iter()
            .map(domain::Day::from)
            .collect(),
        frequency: domain::Frequency::new(2).unwrap(),
        break_interval: domain::BreakInterval::new(45),
    },
    therapist_notes: String::from("Keep the knee aligned"),
});

pub static SQUAT_LEFT: LazyLock<domain::ExerciseEntry> = LazyLock::new(|| domain::ExerciseEntry {
    id: "a".into(),
    name: String::from("Squat"),
    sets: domain::Quantity::new(3).unwrap(),
    reps: domain::Quantity::new(10).unwrap(),
    hold_time: domain::Quantity::ZERO,
    weight: domain::Quantity::ZERO,
    side: domain::Side::Left,
    stage: domain::Stage::One,
    equipment: domain::Equipment::Bodyweight,
});

pub static PLANK: LazyLock<domain::ExerciseEntry> = LazyLock::new(|| domain::ExerciseEntry {
    id: "b".into(),
    name: String::from("Plank"),
    sets: domain::Quantity::new(2).unwrap(),
    reps: domain::Quantity::new(1).unwrap(),
    hold_time: domain::Quantity::new(30).unwrap(),
    weight: domain::Quantity::new(5).unwrap(),
    side: domain::Side::Both,
    stage: domain::Stage::Two,
    equipment: domain::Equipment::Machine,
});

pub static PROGRAM_JSON: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "name": "Knee rehab",
        "exercises": [
            {
                "id": "a",
                "name": "Squat",
                "sets": 3,
                "reps": 10,
                "holdTime": 0,
                "weight": 0,
                "side": "left",
                "stage": "Stage 1",
                "equipment": "bodyweight"
            },
            {
                "id": "a-1",
                "name": "Squat",
                "sets": 3,
                "reps": 10,
                "holdTime": 0,
                "weight": 0,
                "side": "right",
                "stage": "Stage 1",
                "equipment": "bodyweight"
            },
            {
                "id": "b",
                "name": "Plank",
                "sets": 2,
                "reps": 1,
                "holdTime": 30,
                "weight": 5,
                "side": "both",
                "stage": "Stage 2",
                "equipment": "machine"
            }
        ],
        "frequency": 2,
        "breakInterval": 45,
        "selectedDays": ["M", "F"],
        "therapistNotes": "Keep the knee aligned"
    })
});
