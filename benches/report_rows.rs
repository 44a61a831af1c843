// benches/report_rows.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ambi_scrape::model::{Category, Contact};
use ambi_scrape::scrape::extract_record;
use ambi_scrape::specs::report;

/// A report page about the size of a busy account: a few hundred labelled rows,
/// the tracked contact near the end.
fn synthetic_page(rows: usize) -> String {
    let mut doc = String::from("<html><body><table class=\"result\"><tr><th>担当</th></tr>");
    for i in 0..rows {
        doc.push_str(&format!(
            r#"<tr><td class="data"><div class="jobName">担当者{i}</div></td><td class="data">{i}</td><td class="data">{}</td><td class="data">50.0%</td><td class="data">0</td><td class="data">1</td><td class="data">2.0%</td><td class="data">1.0%</td><td class="data">0</td><td class="data">---</td></tr>"#,
            i / 2
        ));
    }
    doc.push_str(r#"<tr><td class="data"><div class="jobName">橘萌生</div></td><td class="data">1,204</td><td class="data">300</td><td class="data">24.9%</td><td class="data">3</td><td class="data">12</td><td class="data">4.0%</td><td class="data">1.0%</td><td class="data">2</td><td class="data">0.2%</td></tr>"#);
    doc.push_str("</table></body></html>");
    doc
}

fn bench_report_rows(c: &mut Criterion) {
    let doc = synthetic_page(400);
    let contact = Contact::new("橘萌生");

    c.bench_function("find_contact_row", |b| {
        b.iter(|| {
            let cells = report::find_contact_row(black_box(&doc), "橘萌生");
            black_box(cells.map(|c| c.len()))
        })
    });

    c.bench_function("extract_record", |b| {
        b.iter(|| {
            let rec = extract_record(black_box(&doc), Category::Regular, &contact);
            black_box(rec.is_ok())
        })
    });

    c.bench_function("list_labels", |b| {
        b.iter(|| black_box(report::list_labels(black_box(&doc)).len()))
    });
}

criterion_group!(benches, bench_report_rows);
criterion_main!(benches);
