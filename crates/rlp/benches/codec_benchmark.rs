use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rlp::{
    decode_value, encode_value, Address, Bytes, FieldCodec, FieldDef, FieldValue, RecordSchema,
    RlpValue,
};

static TRANSFER: RecordSchema = RecordSchema::new(
    "Transfer",
    &[
        FieldDef::new("nonce", FieldCodec::Uint),
        FieldDef::new("amount", FieldCodec::Uint),
        FieldDef::new("fee", FieldCodec::Uint),
        FieldDef::new("expiry", FieldCodec::Uint),
        FieldDef::new("sender", FieldCodec::Address),
        FieldDef::new("recipient", FieldCodec::Address),
        FieldDef::new("memo", FieldCodec::Binary),
    ],
);

fn sample_transfer() -> Vec<FieldValue> {
    vec![
        FieldValue::Uint(42),
        FieldValue::Uint(1_000_000_000_000_000_000),
        FieldValue::Uint(21_000),
        FieldValue::Uint(1_700_000_000),
        FieldValue::Address(Address::from_bytes([0xa0; 20])),
        FieldValue::Address(Address::from_bytes([0xb1; 20])),
        FieldValue::Binary(Bytes::from_slice(b"benchmark payload")),
    ]
}

fn nested_tree(width: usize) -> RlpValue {
    let leaf = RlpValue::Bytes(Bytes::from_slice(&[0x5a; 24]));
    let inner = RlpValue::List(vec![leaf; width]);
    RlpValue::List(vec![inner; width])
}

/// Benchmark record encoding and decoding
fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");

    let values = sample_transfer();
    let encoded = TRANSFER.encode(&values).unwrap();
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| TRANSFER.encode(black_box(&values)).unwrap());
    });

    group.bench_function("decode", |b| {
        b.iter(|| TRANSFER.decode(black_box(&encoded)).unwrap());
    });

    group.finish();
}

/// Benchmark value-tree encoding and decoding at different fanouts
fn bench_value_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_tree");

    for width in &[4usize, 16, 64] {
        let tree = nested_tree(*width);
        let encoded = encode_value(&tree);
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", width), &tree, |b, tree| {
            b.iter(|| encode_value(black_box(tree)));
        });

        group.bench_with_input(
            BenchmarkId::new("decode", width),
            &encoded,
            |b, encoded| {
                b.iter(|| decode_value(black_box(encoded)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark long byte strings
fn bench_byte_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_strings");

    for size in &[32usize, 1024, 65_536] {
        let data = vec![0x61u8; *size];
        let encoded = rlp::encode(&data);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("encode", size),
            &data,
            |b, data| {
                b.iter(|| rlp::encode(black_box(data)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("decode", size),
            &encoded,
            |b, encoded| {
                b.iter(|| rlp::decode::<Vec<u8>>(black_box(encoded)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_record, bench_value_tree, bench_byte_strings);
criterion_main!(benches);
