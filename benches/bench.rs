// Criterion benchmarks for the trialmatch compatibility engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use trialmatch::core::{codes_match, fuzzy_matches, Ranker};
use trialmatch::models::{PatientProfile, Trial, TrialStatus};

fn create_patient() -> PatientProfile {
    PatientProfile {
        patient_id: "patient-1".to_string(),
        primary_condition: Some("Diabetes tipo 2".to_string()),
        condition_description: Some("diabetes con complicaciones renales".to_string()),
        pathologies: vec!["hipertensión".to_string(), "obesidad".to_string()],
        diagnostic_codes: vec!["E11.9".to_string(), "I10".to_string()],
        created_at: None,
    }
}

fn create_trial(id: usize) -> Trial {
    let criteria = match id % 4 {
        0 => json!({
            "requiredCodes": ["E11"],
            "conditions": ["diabetes", "hipertensión"],
        }),
        1 => json!({ "diagnosis": "insuficiencia cardiaca", "excludedCodes": ["E11"] }),
        2 => json!({ "diseases": ["obesidad"], "medicalConditions": ["dislipidemia"] }),
        _ => json!({}),
    };

    Trial {
        trial_id: id.to_string(),
        title: format!("Trial {}", id),
        status: TrialStatus::Recruiting,
        max_participants: (id % 50) as i32,
        criteria: Some(criteria),
    }
}

fn bench_codes_match(c: &mut Criterion) {
    c.bench_function("codes_match", |b| {
        b.iter(|| codes_match(black_box("E11.9"), black_box("E11")));
    });
}

fn bench_fuzzy_matches(c: &mut Criterion) {
    c.bench_function("fuzzy_matches_substring", |b| {
        b.iter(|| fuzzy_matches(black_box("Diabetes tipo 2"), black_box("diabetes")));
    });

    c.bench_function("fuzzy_matches_token_overlap", |b| {
        b.iter(|| {
            fuzzy_matches(
                black_box("insuficiencia cardiaca congestiva aguda"),
                black_box("paciente con insuficiencia cardiaca"),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let patient = create_patient();

    let mut group = c.benchmark_group("ranking");

    for trial_count in [10, 50, 100, 500, 1000].iter() {
        let trials: Vec<Trial> = (0..*trial_count).map(create_trial).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", trial_count),
            trial_count,
            |b, _| {
                b.iter(|| ranker.rank(black_box(&patient), black_box(trials.clone())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_codes_match, bench_fuzzy_matches, bench_ranking);

criterion_main!(benches);
