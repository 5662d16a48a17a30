// benches/decode.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bracket_scrape::bracket::RosterEntry;
use bracket_scrape::core::html::tokenize;
use bracket_scrape::scrape::matches;

// Synthetic first round of a 64-draw: 32 completed matches.
fn sample_fragment() -> String {
    let mut out = String::new();
    for m in 0..32 {
        let a = m * 2;
        let b = m * 2 + 1;
        out.push_str(&format!(
            r#"R1: <a href="p{a}.html">Player {a}</a> d. <a href="p{b}.html">Player {b}</a> 7-6(4), 3-6, 6-2<br/>"#
        ));
    }
    out
}

fn sample_roster() -> Vec<Option<RosterEntry>> {
    (0..64)
        .map(|i| {
            Some(RosterEntry {
                player_id: i,
                player_name: format!("Player {i}"),
            })
        })
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let fragment = sample_fragment();
    let roster = sample_roster();
    let nodes = tokenize(&fragment);

    c.bench_function("tokenize_round", |b| {
        b.iter(|| black_box(tokenize(black_box(&fragment))).len())
    });

    c.bench_function("decode_round", |b| {
        b.iter(|| {
            let out = matches::decode_nodes(black_box(&nodes), black_box(&roster)).unwrap();
            black_box(out.len())
        })
    });

    c.bench_function("score_codec", |b| {
        b.iter(|| {
            let combined = matches::filter_score(black_box("7-6(4), 3-6, 6-2"));
            let w = matches::player_score(&combined, 1);
            let l = matches::player_score(&combined, 2);
            black_box((w, l))
        })
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
