//! Sky path rendition
use std::path::Path;

use itertools::{Itertools, MinMaxResult};

use plotly::{
    color::NamedColor,
    common::{Font, HoverInfo, Marker, MarkerSymbol, Mode, Title},
    layout::{Annotation, Axis},
    Layout, Plot as Plotly, Scatter,
};
use skypath::prelude::{annotation_indices, NormalizedRecord};

const TITLE: &str = "Simulated Apparent Orbit (RA/Dec Path)";

/// Path of one body in equatorial coordinates.
/// RA grows to the left, like the sky seen from the ground.
pub struct SkyPlot {
    plotly: Plotly,
}

impl SkyPlot {
    /// Builds the sky path of `records`, annotated with a subset
    /// of their dates.
    pub fn new(records: &[NormalizedRecord]) -> Self {
        let ra = records.iter().map(|r| r.ra_deg).collect::<Vec<_>>();
        let dec = records.iter().map(|r| r.dec_deg).collect::<Vec<_>>();
        let dates = records.iter().map(|r| r.date.clone()).collect::<Vec<_>>();

        let trace = Scatter::new(ra, dec)
            .mode(Mode::LinesMarkers)
            .name("Object Path")
            .hover_text_array(dates)
            .hover_info(HoverInfo::All)
            .marker(
                Marker::new()
                    .symbol(MarkerSymbol::Circle)
                    .size(5)
                    .color(NamedColor::DeepSkyBlue),
            );

        let (hi, lo) = ra_range(records);
        let mut layout = Layout::new()
            .title(Title::with_text(TITLE))
            .x_axis(
                Axis::new()
                    .title(Title::with_text("Right Ascension (degrees)"))
                    .range(vec![hi, lo])
                    .show_grid(true),
            )
            .y_axis(
                Axis::new()
                    .title(Title::with_text("Declination (degrees)"))
                    .show_grid(true)
                    .zero_line(true),
            )
            .show_legend(true);

        for index in annotation_indices(records.len()) {
            let record = &records[index];
            layout.add_annotation(
                Annotation::new()
                    .x(record.ra_deg)
                    .y(record.dec_deg)
                    .text(record.date.as_str())
                    .show_arrow(false)
                    .font(Font::new().size(8)),
            );
        }

        let mut plotly = Plotly::new();
        plotly.add_trace(trace);
        plotly.set_layout(layout);
        Self { plotly }
    }

    /// Renders Self as standalone HTML page
    pub fn to_html(&self) -> String {
        self.plotly.to_html()
    }

    /// Writes Self as standalone HTML page
    pub fn write<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.to_html())
    }
}

/// Returns (max, min) right ascension with a small margin:
/// the axis range is inverted.
fn ra_range(records: &[NormalizedRecord]) -> (f64, f64) {
    match records.iter().map(|r| r.ra_deg).minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => (360.0, 0.0),
        MinMaxResult::OneElement(ra) => (ra + 1.0, ra - 1.0),
        MinMaxResult::MinMax(min, max) => {
            let margin = ((max - min) * 0.05).max(1.0);
            (max + margin, min - margin)
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn inverted_ra_axis() {
        assert_eq!(ra_range(&[]), (360.0, 0.0));

        let records = vec![
            NormalizedRecord::from_hours("2024-01-01 00:00:00.000", 2.0, 10.0),
            NormalizedRecord::from_hours("2024-01-08 00:00:00.000", 4.0, 11.0),
            NormalizedRecord::from_hours("2024-01-15 00:00:00.000", 3.0, 12.0),
        ];
        let (hi, lo) = ra_range(&records);
        assert!(hi > lo);
        assert!(hi > 60.0);
        assert!(lo < 30.0);
    }
    #[test]
    fn annotated_path() {
        let records = (0..37)
            .map(|i| {
                NormalizedRecord::from_hours(
                    &format!("2024-01-{:02} 00:00:00.000", i % 28 + 1),
                    i as f64 / 10.0,
                    i as f64 / 5.0,
                )
            })
            .collect::<Vec<_>>();
        let html = SkyPlot::new(&records).to_html();
        assert!(html.contains("Object Path"));
        assert!(html.contains(TITLE));
        assert!(html.contains("Right Ascension (degrees)"));
        assert!(html.contains("Declination (degrees)"));
        // every 3rd record is annotated, record 36 last
        assert!(html.contains("\"text\":\"2024-01-09 00:00:00.000\""));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skypath.html");
        SkyPlot::new(&[]).write(&path).unwrap();
        assert!(path.exists());
    }
}
