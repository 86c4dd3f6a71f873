//! benches/kdf.rs
//! PBKDF2-HMAC-SHA256 cost across iteration counts
use archcrypt_rs::aliases::{password_from_str, Aes256Key32};
use archcrypt_rs::derive_secure_pbkdf2_key;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");
    // Faster runs for slow high-iter benches
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    let pw = password_from_str("benchmark-password");
    let salt = [0x42u8; 16];

    for &iters in &[100_000, 300_000, 600_000, 1_000_000] {
        let id = BenchmarkId::new("pbkdf2_iterations", iters);
        group.bench_with_input(id, &iters, |b, &iters| {
            b.iter(|| {
                let mut key = Aes256Key32::new([0u8; 32]);
                derive_secure_pbkdf2_key(black_box(&pw), black_box(&salt), iters, &mut key)
                    .unwrap();
                black_box(key);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
