#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use smoothplot_core::io::{read_table_from, write_table_to};
use smoothplot_core::{PlotSeries, Smoother};

fuzz_target!(|data: &[u8]| {
    let origin = Path::new("<fuzz>");

    // Arbitrary bytes must produce a table or an error, never a panic
    if let Ok(mut table) = read_table_from(data, origin) {
        let rows = table.len();
        if Smoother::default().smooth_table(&mut table, origin).is_ok() {
            assert_eq!(table.len(), rows);
            let mut out = Vec::new();
            write_table_to(&mut out, &table, origin).unwrap();
            let _ = PlotSeries::from_reader(out.as_slice(), origin);
        }
    }

    let _ = PlotSeries::from_reader(data, origin);
});
