//! Cryptographic algorithm benchmarks.
//!
//! Run with: cargo bench -p gmsm-crypto

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ---------------------------------------------------------------------------
// SM3 benchmarks
// ---------------------------------------------------------------------------

fn bench_sm3(c: &mut Criterion) {
    use gmsm_crypto::sm3;

    let mut group = c.benchmark_group("sm3");

    for size in [64usize, 1024, 16 * 1024, 256 * 1024] {
        let data = vec![0xABu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("digest", size), &data, |b, data| {
            b.iter(|| sm3::digest(data).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// SM4 benchmarks
// ---------------------------------------------------------------------------

fn bench_sm4(c: &mut Criterion) {
    use gmsm_crypto::modes::ecb::{ecb_decrypt, ecb_encrypt};
    use gmsm_crypto::sm4::Sm4Key;

    let mut group = c.benchmark_group("sm4");

    let key: Vec<u8> = (0..16).collect();
    let cipher = Sm4Key::new(&key).unwrap();

    let mut block = [0u8; 16];
    group.bench_function("encrypt_block", |b| {
        b.iter(|| cipher.encrypt_block(&mut block).unwrap());
    });

    let mut block = [0u8; 16];
    group.bench_function("decrypt_block", |b| {
        b.iter(|| cipher.decrypt_block(&mut block).unwrap());
    });

    for size in [1024usize, 16 * 1024] {
        let data = vec![0xCDu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("ecb_encrypt", size), &data, |b, data| {
            b.iter(|| ecb_encrypt(&cipher, data).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("ecb_decrypt", size), &data, |b, data| {
            b.iter(|| ecb_decrypt(&cipher, data).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sm3, bench_sm4);
criterion_main!(benches);
