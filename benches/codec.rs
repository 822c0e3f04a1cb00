use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dsv_codec::{parse, serialize, DsvOptions, Record, RecordMap, Value};

fn sample_lines(rows: usize) -> Vec<String> {
    let mut lines = vec!["id,name,email,active".to_string()];
    for i in 0..rows {
        lines.push(format!("{i},user{i},user{i}@example.com,true"));
    }
    lines
}

fn quoted_lines(rows: usize) -> Vec<String> {
    let mut lines = vec!["id,comment".to_string()];
    for i in 0..rows {
        lines.push(format!("{i},\"said \"\"hi\"\", then left\""));
    }
    lines
}

fn sample_records(rows: usize) -> Vec<Record> {
    (0..rows)
        .map(|i| {
            let mut map = RecordMap::new();
            map.insert("id".to_string(), Value::from(i as i64));
            map.insert("name".to_string(), Value::from(format!("user{i}")));
            map.insert(
                "email".to_string(),
                Value::from(format!("user{i}@example.com")),
            );
            map.insert("active".to_string(), Value::Bool(i % 2 == 0));
            Record::Object(map)
        })
        .collect()
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let options = DsvOptions::csv();

    for size in [10, 100, 1000].iter() {
        let lines = sample_lines(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| parse(black_box(lines), &options))
        });
    }
    group.finish();
}

fn benchmark_parse_quoted(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_quoted");
    let options = DsvOptions::csv();

    for size in [10, 100, 1000].iter() {
        let lines = quoted_lines(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| parse(black_box(lines), &options))
        });
    }
    group.finish();
}

fn benchmark_parse_list_mode(c: &mut Criterion) {
    let options = DsvOptions::csv().with_skip_header(true);
    let lines = sample_lines(100);

    c.bench_function("parse_list_mode_100", |b| {
        b.iter(|| parse(black_box(&lines), &options))
    });
}

fn benchmark_parse_with_pipeline(c: &mut Criterion) {
    let options = DsvOptions::csv()
        .with_trim_whitespaces(true)
        .with_empty_as_null(true)
        .with_missing_as_null(true);
    let lines = sample_lines(100);

    c.bench_function("parse_with_pipeline_100", |b| {
        b.iter(|| parse(black_box(&lines), &options))
    });
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let options = DsvOptions::csv();

    for size in [10, 100, 1000].iter() {
        let records = sample_records(*size);

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| b.iter(|| serialize(black_box(records), &options)),
        );
    }
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let options = DsvOptions::csv();
    let lines = sample_lines(100);

    c.bench_function("roundtrip_100", |b| {
        b.iter(|| {
            let parsed = parse(black_box(&lines), &options);
            serialize(black_box(&parsed.records), &options)
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_parse_quoted,
    benchmark_parse_list_mode,
    benchmark_parse_with_pipeline,
    benchmark_serialize,
    benchmark_roundtrip
);
criterion_main!(benches);
