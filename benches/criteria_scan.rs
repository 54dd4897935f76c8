use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seqops::list;
use seqops::types::{Mapping, Value};
use seqops::Criteria;

fn records(n: usize) -> Vec<Mapping> {
    (0..n)
        .map(|i| {
            Mapping::from_iter(vec![
                ("id".into(), i.into()),
                ("group".into(), (i % 16).into()),
                ("name".into(), format!("record-{i}").into()),
            ])
        })
        .collect()
}

fn bench(c: &mut Criterion) {
    let r = records(10_000);

    c.bench_function("find_index_by_criteria shape, last element", |b| {
        let crit = Criteria::from_yaml("{id: 9999, group: 15}").unwrap();
        b.iter(|| black_box(list::find_index_by_criteria(&r, &crit)))
    });

    c.bench_function("find_index_by_criteria predicate, last element", |b| {
        let id = Value::from(9999);
        let crit = Criteria::predicate(|m: &Mapping| m.get(&"id".into()) == Some(&id));
        b.iter(|| black_box(list::find_index_by_criteria(&r, &crit)))
    });
}

criterion_group!(
name = criteria_scan;
config = Criterion::default().sample_size(200);
targets = bench
);
criterion_main!(criteria_scan);
