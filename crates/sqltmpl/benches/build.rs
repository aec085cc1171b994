use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqltmpl::{Value, build, skip};

/// SELECT ?# FROM t WHERE c0 = ?d{ AND f0 = ?d} AND c1 = ?d{ AND f1 = ?d} ...
fn template(n: usize) -> String {
    let mut sql = String::from("SELECT ?# FROM t WHERE 1=1");
    for i in 0..n {
        sql.push_str(&format!(" AND c{i} = ?d{{ AND f{i} = ?d}}"));
    }
    sql
}

fn args(n: usize) -> Vec<Value> {
    let mut args = vec![Value::from(vec!["a", "b", "c"])];
    for i in 0..n {
        args.push(Value::Int(i as i64));
        if i % 2 == 0 {
            args.push(skip().into());
        } else {
            args.push(Value::Int(0));
        }
    }
    args
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqltmpl/build");

    for n in [1, 5, 10, 50, 100] {
        let sql = template(n);
        let values = args(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(build(&sql, values.clone()).unwrap()));
        });
    }

    group.finish();
}

fn bench_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqltmpl/array");

    for n in [5, 20, 100, 500] {
        let entries = Value::array((0..n).map(|i| (format!("col{i}"), i as i64)));
        group.bench_with_input(BenchmarkId::from_parameter(n), &entries, |b, entries| {
            b.iter(|| {
                black_box(build("UPDATE t SET ?a WHERE id = ?d", vec![entries.clone(), Value::Int(1)]).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_fast_path(c: &mut Criterion) {
    let sql = template(50);
    c.bench_function("sqltmpl/no_args", |b| {
        b.iter(|| black_box(build(&sql, Vec::new()).unwrap()));
    });
}

criterion_group!(benches, bench_build, bench_array, bench_fast_path);
criterion_main!(benches);
