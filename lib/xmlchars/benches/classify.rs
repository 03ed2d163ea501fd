use codspeed_criterion_compat::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use xmlchars::{Production, xml_1_0};

const NAMES: [&str; 8] = [
    "foo",
    "xsl:stylesheet",
    "rdf:Description",
    "_private-name.v2",
    "\u{6211}\u{7684}\u{540D}\u{5B57}",
    "\u{0391}\u{03BB}\u{03C6}\u{03B1}",
    "1bar",
    "\u{1F4A9}emoji",
];

fn predicates(c: &mut Criterion) {
    let code_points = (0..=0x10_FFFF).step_by(13).collect::<Vec<u32>>();
    let mut group = c.benchmark_group("predicates");
    group.throughput(Throughput::Elements(code_points.len() as u64));
    for edition in xml_1_0::EDITIONS {
        group.bench_function(format!("{} is_name_char", edition.kind()), |b| {
            b.iter(|| {
                code_points
                    .iter()
                    .filter(|c| edition.is_name_char(**c))
                    .count()
            })
        });
        group.bench_function(format!("{} is_char", edition.kind()), |b| {
            b.iter(|| code_points.iter().filter(|c| edition.is_char(**c)).count())
        });
    }
    group.finish();
}

fn matchers(c: &mut Criterion) {
    let mut group = c.benchmark_group("matchers");
    group.throughput(Throughput::Bytes(
        NAMES.iter().map(|name| name.len() as u64).sum(),
    ));
    for edition in xml_1_0::EDITIONS {
        for production in [Production::Name, Production::Nmtoken] {
            let Some(matcher) = edition.matcher(production) else {
                continue;
            };
            group.bench_function(format!("{} {production}", edition.kind()), |b| {
                b.iter(|| {
                    for name in NAMES {
                        black_box(matcher.is_match(black_box(name)));
                    }
                })
            });
        }
    }
    group.finish();
}

criterion_group!(classify, predicates, matchers);
criterion_main!(classify);
