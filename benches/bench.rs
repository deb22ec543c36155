// Criterion benchmarks for TennisConnect

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tennis_connect::core::filters::{matches_filter_set, FilterSet};
use tennis_connect::core::{average_skill, PartnerSearch};
use tennis_connect::models::{
    Availability, Location, PartnerPreferences, PlayingStyle, SkillBreakdown, SkillLevel, Surface,
    TennisProfile, UserProfile,
};

const CITIES: [&str; 4] = ["Rotterdam", "Utrecht", "Amsterdam", "Den Haag"];

fn create_candidate(id: usize) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        first_name: format!("Player{}", id),
        last_name: "Bench".to_string(),
        email: format!("player{}@example.com", id),
        phone: None,
        date_of_birth: None,
        profile_image: None,
        location: Location {
            city: CITIES[id % CITIES.len()].to_string(),
            postal_code: "3011 AA".to_string(),
            country: "Netherlands".to_string(),
        },
        tennis_profile: TennisProfile {
            skill_level: SkillLevel::ALL[id % SkillLevel::ALL.len()],
            playing_style: PlayingStyle::ALL[id % PlayingStyle::ALL.len()],
            preferred_surface: Surface::Hard,
            availability: Availability {
                weekdays: id % 2 == 0,
                weekends: id % 3 == 0,
                evenings: id % 5 != 0,
                mornings: id % 7 == 0,
            },
            skill_breakdown: SkillBreakdown::default(),
            experience: (id % 20) as u8,
            tournaments: id % 4 == 0,
            coaching: false,
            about_me: Some("Looking for regular hitting partners".to_string()),
        },
        preferences: PartnerPreferences::default(),
        created_at: None,
        updated_at: None,
    }
}

fn busy_filters() -> FilterSet {
    FilterSet {
        query: Some("player1".to_string()),
        skill_level: Some(SkillLevel::Advanced),
        city: Some("Rotterdam".to_string()),
        playing_style: None,
        availability: Availability {
            evenings: true,
            ..Default::default()
        },
    }
}

fn bench_filter_set(c: &mut Criterion) {
    let candidate = create_candidate(12);
    let filters = busy_filters();

    c.bench_function("matches_filter_set", |b| {
        b.iter(|| matches_filter_set(black_box(&candidate), black_box(&filters)))
    });

    c.bench_function("average_skill", |b| {
        b.iter(|| average_skill(black_box(&candidate.tennis_profile.skill_breakdown)))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("partner_search");
    let search = PartnerSearch::default();
    let filters = busy_filters();

    for size in [100, 1000, 10000].iter() {
        let pool: Vec<UserProfile> = (0..*size).map(create_candidate).collect();

        group.bench_with_input(BenchmarkId::new("filtered", size), &pool, |b, pool| {
            b.iter(|| search.apply(black_box(pool.clone()), black_box(&filters)))
        });

        group.bench_with_input(BenchmarkId::new("unfiltered", size), &pool, |b, pool| {
            b.iter(|| search.apply(black_box(pool.clone()), black_box(&FilterSet::default())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_set, bench_search);
criterion_main!(benches);
