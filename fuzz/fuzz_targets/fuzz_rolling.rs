#![no_main]

use libfuzzer_sys::fuzz_target;

use smoothplot_core::rolling::{centered_mean, Window};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks an odd window, the rest become values (0 = missing)
    let window = Window::new(usize::from(data[0] % 16) * 2 + 1).unwrap();
    let values: Vec<Option<f64>> = data[1..]
        .iter()
        .map(|&b| if b == 0 { None } else { Some(f64::from(b)) })
        .collect();

    let smoothed = centered_mean(&values, window);
    assert_eq!(smoothed.len(), values.len());

    // Every computed mean lies within the input range
    for v in smoothed.into_iter().flatten() {
        assert!((1.0..=255.0).contains(&v));
    }
});
