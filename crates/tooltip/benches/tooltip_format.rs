//! Benchmarks for tooltip content building and positioning

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dashchart_shared::{
    AxisGroup, AxisValue, BoxSize, SeriesPoint, SeriesValue, TooltipGeometry, TooltipInput,
    TooltipSettings,
};
use dashchart_tooltip::{compute_position, Formatters, TooltipFormatter};

/// Create an axis group with `num_series` series at one timestamp
fn create_group(num_series: usize) -> TooltipInput {
    let timestamp = 1_625_097_600_000.0;
    let points = (0..num_series)
        .map(|i| {
            SeriesPoint::series(
                &format!("series-{i}"),
                SeriesValue::Number(timestamp),
                Some(SeriesValue::Number(i as f64 * 1234.5)),
            )
            .with_axis_value(AxisValue::Number(timestamp))
            .with_marker("<span class=\"marker\"></span>")
        })
        .collect();
    TooltipInput::Axis(AxisGroup::new(points))
}

fn bench_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("tooltip_content");
    let formatter = TooltipFormatter::new(
        TooltipSettings {
            is_grouped_by_date: true,
            show_time_in_tooltip: true,
            utc: true,
            bucket_size: Some(3_600_000),
            ..Default::default()
        },
        Formatters::new(),
    );

    for num_series in [1, 10, 50] {
        let input = create_group(num_series);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_series),
            &input,
            |b, input| b.iter(|| formatter.format(black_box(input))),
        );
    }
    group.finish();
}

fn bench_position(c: &mut Criterion) {
    let geometry = TooltipGeometry {
        cursor_x: 990.0,
        cursor_y: 300.0,
        box_size: BoxSize {
            width: 200.0,
            height: 80.0,
        },
        container_left: 0.0,
        viewport_width: 1000.0,
    };

    c.bench_function("tooltip_position", |b| {
        b.iter(|| compute_position(black_box(&geometry)))
    });
}

criterion_group!(benches, bench_content, bench_position);
criterion_main!(benches);
