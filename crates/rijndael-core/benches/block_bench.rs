use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rijndael_core::{decrypt_block, encrypt, encrypt_block, KeySchedule, KeySize};

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");
    for size in KeySize::ALL {
        let key = vec![0x2bu8; size.key_len()];
        group.bench_with_input(BenchmarkId::from_parameter(size), &key, |b, key| {
            b.iter(|| KeySchedule::new(key, size).expect("expand"));
        });
    }
    group.finish();
}

fn bench_blocks(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);

    let mut group = c.benchmark_group("block");
    for size in KeySize::ALL {
        let mut key = vec![0u8; size.key_len()];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);
        let schedule = KeySchedule::new(&key, size).expect("expand");

        group.bench_function(BenchmarkId::new("encrypt_block", size), |b| {
            b.iter(|| encrypt_block(&block, &schedule));
        });
        group.bench_function(BenchmarkId::new("decrypt_block", size), |b| {
            b.iter(|| decrypt_block(&block, &schedule));
        });
        group.bench_function(BenchmarkId::new("encrypt_with_expansion", size), |b| {
            let mut out = [0u8; 16];
            b.iter(|| encrypt(&block, &mut out, &key, size.key_len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_blocks);
criterion_main!(benches);
