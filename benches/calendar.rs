use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use moments_core::{build_month, CalendarAction, DateBounds, DateField, DatePickerController};

fn bench_build_month(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let bounds = DateBounds {
        min: NaiveDate::from_ymd_opt(1950, 3, 10),
        max: None,
    };

    c.bench_function("build_month_single", |b| {
        b.iter(|| build_month(black_box(2024), black_box(2), today, Some(today), &bounds))
    });

    c.bench_function("build_month_century", |b| {
        b.iter(|| {
            let mut cells = 0;
            for year in 1925..2025 {
                for month in 1..=12 {
                    cells += build_month(year, month, today, None, &bounds).cells.len();
                }
            }
            black_box(cells)
        })
    });
}

fn bench_picker_navigation(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    c.bench_function("picker_walk_back_ten_years", |b| {
        b.iter(|| {
            let mut picker = DatePickerController::new(today);
            picker.open(DateField::Passing, "", "01/01/1940", today);
            for _ in 0..120 {
                picker.navigate(CalendarAction::PrevMonth);
                black_box(picker.calendar(today));
            }
        })
    });
}

criterion_group!(benches, bench_build_month, bench_picker_navigation);
criterion_main!(benches);
