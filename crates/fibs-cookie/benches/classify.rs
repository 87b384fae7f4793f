//! Benchmarks for table construction and line classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fibs_cookie::{CookieMonster, PatternTable, Recipe};

/// Rawboard, the first alpha entry
const BOARD: &str = "board:You:marv:3:0:0:0:-2:0:0:0:0:5:0:3:0:0:0:-5:5:0:0:0:-3:0:-5:0:0:0:0:2:0:1:6:2:0:0:1:1:1:0:1:-1:0:25:0:0:0:0:2:0:0:0";

/// CLIP shout, late in the numeric batch
const SHOUT: &str = "13 jfk Anybody for a 5 point match?";

/// Server notice, early in the stars batch
const NOTICE: &str = "** You gag marv.";

/// Whois line, near the end of the alpha batch
const LAST_LOGIN: &str = "  Last login:  Sat Dec 28 06:34 2002 from host.example.com";

/// Matches nothing, so every alpha entry is tried
const UNKNOWN: &str = "zzz this line matches no pattern at all";

fn in_session() -> CookieMonster {
    let mut monster = CookieMonster::new();
    for line in ["login:", "3", "4"] {
        monster.classify(line).unwrap();
    }
    monster
}

fn benchmark_build(c: &mut Criterion) {
    c.bench_function("table_build", |b| {
        b.iter(|| {
            let table = PatternTable::build(black_box(&Recipe::FIBS)).unwrap();
            black_box(table)
        })
    });
}

fn benchmark_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("Session Classification");
    let mut monster = in_session();

    for (name, line) in [
        ("board", BOARD),
        ("shout", SHOUT),
        ("notice", NOTICE),
        ("last_login", LAST_LOGIN),
        ("unknown", UNKNOWN),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), line, |b, line| {
            b.iter(|| black_box(monster.classify(black_box(line)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_classify);
criterion_main!(benches);
