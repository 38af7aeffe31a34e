#[macro_use]
extern crate criterion;

mod bench {
    use nomen::{capitalize, normalize, NameRecord, OrderHint, ParseConfig, Parser};
    use std::fs::File;
    use std::io::prelude::*;
    use std::io::BufReader;

    use criterion::{black_box, criterion_group, Criterion};

    fn parsing_first_last(c: &mut Criterion) {
        let parser = Parser::default();
        c.bench_function("first last", |b| {
            b.iter(|| {
                let parsed = parser.parse("Juan Garcia", OrderHint::default());
                black_box(parsed.is_none())
            })
        });
    }

    fn parsing_sort_order(c: &mut Criterion) {
        let parser = Parser::default();
        c.bench_function("last, first", |b| {
            b.iter(|| {
                let parsed = parser.parse("Snepscheut, Jan L. A. van de", OrderHint::default());
                black_box(parsed.is_none())
            })
        });
    }

    fn parsing_unparseable(c: &mut Criterion) {
        let parser = Parser::default();
        c.bench_function("unparseable", |b| {
            b.iter(|| {
                let parsed = parser.parse("Garcia, Juan, Q, X", OrderHint::default());
                black_box(parsed.is_none())
            })
        });
    }

    fn parsing_complex(c: &mut Criterion) {
        let parser = Parser::default();
        let name = "Lt. Col. Juan Q. “Don Juan” de la Vega y Garcia Ph.D.";
        c.bench_function("complex", |b| {
            b.iter(|| {
                let parsed = parser.parse(name, OrderHint::default());
                black_box(parsed.is_none())
            })
        });
    }

    criterion_group!(
        e2e_parsing,
        parsing_first_last,
        parsing_sort_order,
        parsing_unparseable,
        parsing_complex
    );

    fn normalize_unchanged(c: &mut Criterion) {
        let config = ParseConfig::default();
        c.bench_function("normalize unchanged", |b| {
            b.iter(|| black_box(normalize("Joe \"Spud\" O'Smith", &config).len()))
        });
    }

    fn normalize_quotes(c: &mut Criterion) {
        let config = ParseConfig::default();
        c.bench_function("normalize quotes", |b| {
            b.iter(|| black_box(normalize("Joe «Spud» O’Smith", &config).len()))
        });
    }

    criterion_group!(normalization, normalize_unchanged, normalize_quotes);

    fn capitalize_plain(c: &mut Criterion) {
        c.bench_function("capitalize plain", |b| {
            b.iter(|| black_box(capitalize("garcia")))
        });
    }

    fn capitalize_compound(c: &mut Criterion) {
        c.bench_function("capitalize compound", |b| {
            b.iter(|| black_box(capitalize("van 't hooft-macdonald o'reilly")))
        });
    }

    criterion_group!(capitalization, capitalize_plain, capitalize_compound);

    fn parsing_many(c: &mut Criterion) {
        let f = File::open("tests/parseable-names.txt").ok().unwrap();
        let reader = BufReader::new(f);
        let names: Vec<String> = reader
            .lines()
            .map(|l| l.ok().unwrap())
            .filter(|l| !l.starts_with('#') && l.contains('|'))
            .map(|l| l.split('|').next().unwrap().to_string())
            .collect();

        c.bench_function(&format!("parse {} names", names.len()), |b| {
            b.iter(|| {
                let mut valid = 0;
                let mut invalid = 0;

                for name in names.iter() {
                    let parsed = NameRecord::parse(name);
                    if parsed.is_none() {
                        invalid += 1;
                    } else {
                        valid += 1;
                    }
                }

                black_box(valid);
                black_box(invalid);
            })
        });
    }

    criterion_group!(realistic, parsing_many);
}

criterion_main!(
    bench::realistic,
    bench::e2e_parsing,
    bench::normalization,
    bench::capitalization
);
