// Criterion benchmarks for shortlist

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shortlist::core::{extract_skills, partial_ratio, Ranker, SkillMatchStrategy};
use shortlist::models::CandidateProfile;

fn vocabulary() -> Vec<String> {
    [
        "python", "java", "sql", "javascript", "html", "css",
        "machine learning", "deep learning", "ai", "ml",
        "data analysis", "communication", "django", "flask",
        "react", "node", "cloud", "aws", "apis",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn job_description() -> String {
    "Looking for a senior Python developer with 5+ years of cloud and AWS experience. \
     Familiarity with SQL, Django and React is a plus; machine learning exposure welcome."
        .to_string()
}

fn create_candidate(id: usize) -> CandidateProfile {
    let skill_pool = ["python", "cloud", "aws", "sql", "react", "django"];
    let skills: Vec<String> = skill_pool
        .iter()
        .take(1 + id % skill_pool.len())
        .map(|s| s.to_string())
        .collect();

    CandidateProfile {
        name: format!("Candidate {}", id),
        text: format!(
            "Candidate {}\nEngineer with {} years of experience in {}",
            id,
            id % 15,
            skills.join(", ")
        ),
        skills,
        years_experience: (id % 15) as u32,
        source_file: format!("candidate_{}.pdf", id),
    }
}

fn bench_partial_ratio(c: &mut Criterion) {
    let jd = job_description().to_lowercase();
    let resume = create_candidate(3).text.to_lowercase();

    c.bench_function("partial_ratio_term_vs_text", |b| {
        b.iter(|| partial_ratio(black_box("machine learning"), black_box(&jd)));
    });

    c.bench_function("partial_ratio_text_vs_text", |b| {
        b.iter(|| partial_ratio(black_box(&jd), black_box(&resume)));
    });
}

fn bench_extract_skills(c: &mut Criterion) {
    let vocabulary = vocabulary();
    let jd = job_description();

    c.bench_function("extract_skills_fuzzy", |b| {
        b.iter(|| {
            extract_skills(
                black_box(&jd),
                black_box(&vocabulary),
                SkillMatchStrategy::Fuzzy { threshold: 70 },
            )
        });
    });

    c.bench_function("extract_skills_exact", |b| {
        b.iter(|| {
            extract_skills(
                black_box(&jd),
                black_box(&vocabulary),
                SkillMatchStrategy::ExactContains,
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights(vocabulary());
    let jd = ranker.parse_job_description(&job_description()).unwrap();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500].iter() {
        let candidates: Vec<CandidateProfile> =
            (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    ranker
                        .rank(black_box(&jd), black_box(candidates.clone()))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_partial_ratio, bench_extract_skills, bench_ranking);
criterion_main!(benches);
