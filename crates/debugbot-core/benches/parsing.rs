//! Benchmark for the log and code pre-processing pipeline
//! Run: cargo bench -p debugbot-core --bench parsing

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use debugbot_core::parser::{LogParser, ParserRegistry, PlainTextParser};
use debugbot_core::{CodeRefactorer, CodeStructureAnalyzer, ErrorExtractor, LogAnalyzer};
use std::hint::black_box;

// Sample inputs for benchmarking
const LOG_LINE: &str = "2026-02-10 14:30:45 ERROR 500 Error: Failed to connect to database: connection refused";
const TRACEBACK: &str = "Traceback (most recent call last):\n  File \"app.py\", line 10, in <module>\n    main()\nValueError: bad input";
const PYTHON_SOURCE: &str = "import os\nimport sys\nfrom typing import List\n\nclass Repo:\n    def __init__(self, path):\n        self.path = path\n\n    def files(self) -> List[str]:\n        return os.listdir(self.path)\n\ndef main(argv):\n    print(Repo(argv[1]).files())\n";

fn bench_plain_text_parser(c: &mut Criterion) {
    let parser = PlainTextParser::new();

    c.bench_function("plain_text_parser_single", |b| {
        b.iter(|| parser.parse(black_box(LOG_LINE)))
    });
}

fn bench_parser_registry(c: &mut Criterion) {
    let registry = ParserRegistry::with_defaults();

    c.bench_function("text_via_registry", |b| {
        b.iter(|| registry.parse("text", black_box(LOG_LINE)))
    });
}

fn bench_error_extraction(c: &mut Criterion) {
    let extractor = ErrorExtractor::new();
    let logs = format!("{}\n{}\nTypeError: x is undefined\n", LOG_LINE, TRACEBACK);

    c.bench_function("extract_errors_mixed", |b| {
        b.iter(|| extractor.extract(black_box(&logs)))
    });
}

fn bench_batch_analysis(c: &mut Criterion) {
    let analyzer = LogAnalyzer::new();

    // Generate batch of logs
    let batch_sizes = [10, 100, 1000, 10000];

    let mut group = c.benchmark_group("batch_analysis");

    for size in batch_sizes {
        let logs: String = (0..size)
            .map(|i| match i % 3 {
                0 => format!("2026-02-10 14:{:02}:{:02} INFO request {} ok\n", (i / 60) % 60, i % 60, i),
                1 => format!("2026-02-10 14:{:02}:{:02} WARNING slow request {}\n", (i / 60) % 60, i % 60, i),
                _ => format!("{}\n", LOG_LINE),
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("text", size), &logs, |b, logs| {
            b.iter(|| analyzer.analyze("text", logs))
        });
    }

    group.finish();
}

fn bench_code_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("code");

    group.bench_function("analyze_structure", |b| {
        b.iter(|| CodeStructureAnalyzer::analyze(black_box(PYTHON_SOURCE)))
    });

    group.bench_function("optimize_imports", |b| {
        b.iter(|| CodeRefactorer::optimize_imports(black_box(PYTHON_SOURCE)))
    });

    group.bench_function("format", |b| {
        b.iter(|| CodeRefactorer::format(black_box(PYTHON_SOURCE)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_plain_text_parser,
    bench_parser_registry,
    bench_error_extraction,
    bench_batch_analysis,
    bench_code_analysis,
);

criterion_main!(benches);
