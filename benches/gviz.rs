// benches/gviz.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dairyscan::{core::gviz, report};

fn sample_body(rows: usize) -> String {
    let mut row_json = String::new();
    for i in 0..rows {
        if i > 0 {
            row_json.push(',');
        }
        row_json.push_str(&format!(
            r#"{{"c":[{{"v":"t"}},{{"v":"0{} Feb 2026"}},{{"v":"6.2%"}},{{"v":"8.8%"}},
                {{"v":"PASS"}},{{"v":"APPROVED"}},
                {{"v":"https://drive.google.com/file/d/1aBcDeFgHiJkLmNoPqRsTuVwXyZ012345/view"}},
                {{"v":"report.pdf"}}]}}"#,
            i % 9 + 1
        ));
    }
    format!(
        r#"/*O_o*/
google.visualization.Query.setResponse({{"version":"0.6","status":"ok","table":{{
"cols":[{{"label":"Timestamp"}},{{"label":"Date"}},{{"label":"Fat"}},{{"label":"SNF"}},
{{"label":"Status"}},{{"label":"FSSAI"}},{{"label":"File URL"}},{{"label":"File Name"}}],
"rows":[{row_json}]}}}});"#
    )
}

fn bench_gviz(c: &mut Criterion) {
    let body = sample_body(365); // a year of daily rows

    c.bench_function("gviz_decode", |b| {
        b.iter(|| {
            let table = gviz::decode(black_box(&body)).unwrap();
            black_box(table.rows.len())
        })
    });

    c.bench_function("gviz_decode_and_parse", |b| {
        b.iter(|| {
            let table = gviz::decode(black_box(&body)).unwrap();
            let reports = report::parse_table(&table);
            black_box(reports.len())
        })
    });
}

criterion_group!(benches, bench_gviz);
criterion_main!(benches);
