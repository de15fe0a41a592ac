use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pattern_classification::provider::Channel;
use pattern_classification::{classify_all, PatternClassifier};

fn noisy_sine(n: usize, period: f64) -> Vec<f64> {
    // Deterministic pseudo-noise so runs are comparable.
    (0..n)
        .map(|t| {
            let phase = 2.0 * std::f64::consts::PI * t as f64 / period;
            phase.sin() + 0.1 * ((t * 2654435761 % 1000) as f64 / 1000.0 - 0.5)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let classifier = PatternClassifier::default();
    let values = noisy_sine(10_000, 24.0);
    let temperature: Vec<f64> = values.iter().map(|v| v * 2.0 + 15.0).collect();

    c.bench_function("classify_10k_with_temperature", |b| {
        b.iter(|| {
            classifier
                .classify(black_box(&values), black_box(Some(&temperature)))
                .unwrap()
        })
    });

    let channels: Vec<Channel> = ["X", "Y", "Z"]
        .iter()
        .enumerate()
        .map(|(i, name)| Channel::new(*name, noisy_sine(10_000, 24.0 + i as f64)))
        .collect();

    c.bench_function("classify_all_3x10k", |b| {
        b.iter(|| classify_all(&classifier, black_box(&channels), Some(&temperature)).unwrap())
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
