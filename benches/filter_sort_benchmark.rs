use amictl::ami::{doc_entries, filter_and_sort, AmiRecord};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const FILTER: &str = "sbx-cdi 2022-09-07T22-23-09.989Z";

fn create_test_records(count: usize) -> Vec<AmiRecord> {
    let regions = ["us-east-1", "us-west-2", "eu-west-1", "ap-south-1"];

    (0..count)
        .map(|i| {
            let name = if i % 3 == 0 {
                format!("{} build-{}", FILTER, i)
            } else {
                format!("unrelated-image-{}", i)
            };

            AmiRecord {
                region: regions[i % regions.len()].to_string(),
                ami: name,
                ami_id: format!("ami-{:012x}", i),
            }
        })
        .collect()
}

fn benchmark_filter_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_sort");

    for record_count in [100, 1_000, 10_000].iter() {
        let records = create_test_records(*record_count);

        group.bench_with_input(
            format!("{}_records", record_count),
            &records,
            |b, records| b.iter(|| filter_and_sort(black_box(records), black_box(FILTER))),
        );
    }

    group.finish();
}

fn benchmark_doc_entries(c: &mut Criterion) {
    let records = filter_and_sort(&create_test_records(10_000), FILTER);

    c.bench_function("doc_entries_from_matched", |b| {
        b.iter(|| doc_entries(black_box(&records)))
    });
}

criterion_group!(benches, benchmark_filter_and_sort, benchmark_doc_entries);
criterion_main!(benches);
